//! Display functions for command results

use super::formatters::{answer_marks, create_progress_bar};
use crate::commands::SolveResult;
use crate::core::{Answer, DigitSequence};
use crate::solver::{BatchReport, GuessRecord, StrategyComparison, universe_size};
use colored::Colorize;

/// Print one guess record as it happens
pub fn print_guess_record(record: &GuessRecord, length: usize) {
    println!(
        "#{:<3} {}  {}  {}",
        record.index,
        record.guess.to_string().bright_white().bold(),
        answer_marks(record.answer, length),
        record.answer
    );
}

/// Print the result of scoring a single guess
pub fn print_score(secret: &DigitSequence, guess: &DigitSequence, answer: Answer) {
    if answer.is_win(secret.len()) {
        println!(
            "{}",
            format!("#{guess} is found. Congratulations!").green().bold()
        );
    } else {
        println!(
            "#{}  {}  {}",
            guess.to_string().bright_white().bold(),
            answer_marks(answer, secret.len()),
            answer
        );
    }
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} strategy, {} candidates)",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy,
        universe_size(length)
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.guesses {
        print_guess_record(&step.record, length);

        if verbose {
            println!(
                "      Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Found {} in {} attempts!",
            result.secret, result.attempts
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(report: &BatchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} strategy, {} digits) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        report.strategy,
        report.length
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets solved:   {}", report.trials);
    println!(
        "   Average attempts: {} = {}/{}",
        format!("{:.4}", report.average_attempts)
            .bright_yellow()
            .bold(),
        report.total_attempts,
        report.trials
    );
    println!(
        "   Best case:        {}",
        format!("{}", report.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!(
        "   Solves/second:    {:.1}",
        report.trials as f64 / report.duration.as_secs_f64().max(f64::EPSILON)
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = report.distribution.values().copied().max().unwrap_or(1);
    for attempts in report.min_attempts..=report.max_attempts {
        if let Some(&count) = report.distribution.get(&attempts) {
            let pct = (count as f64 / report.trials as f64) * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {attempts:3}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print weak and strong side by side
pub fn print_comparison(comparison: &StrategyComparison) {
    print_benchmark_result(&comparison.weak);
    print_benchmark_result(&comparison.strong);

    let diff = comparison.improvement();
    let diff_str = format!("{diff:+.3} attempts");
    let colored_diff = if diff > 0.0 {
        diff_str.green()
    } else {
        diff_str.red()
    };

    println!("\n📐 {}", "Comparison".bright_cyan().bold());
    println!(
        "   Weak:   {:.3}   Strong: {:.3}",
        comparison.weak.average_attempts, comparison.strong.average_attempts
    );
    println!("   Strong saves {colored_diff} per secret on average");
}
