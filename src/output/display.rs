//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, guesses_word};
use crate::commands::{AnalysisResult, Comparison, TestAllStatistics};
use crate::core::{Feedback, Word};
use crate::solver::{MAX_GUESSES, Solution, Strategy};
use colored::Colorize;

/// Print the guess log of one run
pub fn print_solution(solution: &Solution, secret: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}: {}",
        solution.strategy.bright_cyan().bold(),
        secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in solution.steps.iter().enumerate() {
        println!(
            "  {}. {} {} {}",
            i + 1,
            colored_guess(&step.guess, step.feedback),
            step.feedback,
            step.feedback.to_emoji()
        );
        if verbose {
            println!(
                "     Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let count = solution.guess_count();
    if solution.is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", guesses_word(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {count} {}", guesses_word(count))
                .red()
                .bold()
        );
    }
}

/// Print every strategy's run for one secret
pub fn print_comparison(comparison: &Comparison, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STRATEGY COMPARISON:".bright_cyan().bold(),
        comparison.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for run in &comparison.runs {
        match &run.result {
            Ok(solution) => print_solution(solution, &comparison.secret, verbose),
            Err(e) => println!(
                "\n{}: {}",
                run.strategy.name().bright_cyan().bold(),
                e.to_string().red()
            ),
        }
    }

    let ranking = comparison.ranking();
    if !ranking.is_empty() {
        println!("\n🏁 {}", "Ranking".bright_cyan().bold());
        for (place, (strategy, guesses)) in ranking.iter().enumerate() {
            println!(
                "  {}. {:<20} {guesses} {}",
                place + 1,
                strategy.name(),
                guesses_word(*guesses)
            );
        }
    }
}

/// Print the feedback for a single guess
pub fn print_feedback(secret: &Word, guess: &Word, feedback: Feedback) {
    println!(
        "{} {} {}",
        colored_guess(guess, feedback),
        feedback,
        feedback.to_emoji()
    );
    if feedback.is_solved() {
        println!("{}", format!("✅ {} is the secret", secret.text().to_uppercase()).green());
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} vocabulary words:", result.total_words);
    println!(
        "   Score:       {}",
        format!("{:.3}", result.score).bright_yellow()
    );
    println!("   Rank:        {} of {}", result.rank, result.total_words);
    if let Some((best, best_score)) = &result.best {
        println!("   Best word:   {} ({best_score:.3})", best.to_uppercase());
    }

    println!("\n🔤 {}", "Letter frequencies:".bright_cyan().bold());
    for (letter, frequency) in &result.letters {
        let bar = create_progress_bar(*frequency, 1.0, 30);
        println!(
            "   {}  [{}] {:5.1}%",
            letter.to_ascii_uppercase(),
            bar.green(),
            frequency * 100.0
        );
    }

    println!("\n🏆 {}", "Most common letters:".bright_cyan().bold());
    for (letter, frequency, used) in &result.top_letters {
        let mark = if *used { "✓".green() } else { "✗".red() };
        println!(
            "   {}  {:5.1}%  {mark}",
            letter.to_ascii_uppercase(),
            frequency * 100.0
        );
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results: {} ", stats.strategy.bright_cyan().bold());
    println!("{}", "═".repeat(70));

    let percent = |n: usize| {
        if stats.total_words > 0 {
            n as f64 / stats.total_words as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_words);
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved)).green()
    );
    if stats.exhausted > 0 {
        println!(
            "  Out of guesses:      {} {}",
            stats.exhausted,
            format!("({:.1}%)", percent(stats.exhausted)).red()
        );
    }
    if stats.errors > 0 {
        println!(
            "  Errors:              {} {}",
            stats.errors,
            format!("({:.1}%)", percent(stats.errors)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst solve:  {} / {}",
        stats.min_guesses, stats.max_guesses
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} {}: {} {count:4}", guesses_word(guesses), bar.green());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for word in stats.hardest_words.iter().take(10) {
            println!("  {}", word.to_uppercase().yellow());
        }
    }

    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    if !first_guesses.is_empty() {
        println!("\n🎯 First Guess Usage");
        for (word, count) in first_guesses.iter().take(5) {
            println!(
                "  {}: {count} times ({:.1}%)",
                word.to_uppercase(),
                percent(**count)
            );
        }
    }
}
