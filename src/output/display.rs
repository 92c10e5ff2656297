//! Display functions for command results

use super::formatters::{code_to_pegs, create_progress_bar, feedback_symbols, feedback_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", code_to_pegs(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nStep {}: {}  {}  {}",
            i + 1,
            code_to_pegs(&step.guess),
            feedback_to_pegs(step.feedback, length),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Guaranteed: {} eliminated (at most {} left)",
                step.worst_case_reduction,
                step.candidates_before - step.worst_case_reduction
            );
        }
    }

    println!();
    if result.success {
        let steps = result.steps.len();
        println!(
            "{}",
            format!("✅ Solved ! in {steps} {}", if steps == 1 { "step" } else { "steps" })
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Couldn't decide in {} steps, {} options remaining",
                result.steps.len(),
                result.remaining
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let length = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORST-CASE ANALYSIS:".bright_cyan().bold(),
        code_to_pegs(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    let eliminated = create_progress_bar(
        result.worst_case_reduction as f64,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Guaranteed:  [{}] {}",
        eliminated.green(),
        format!("{} eliminated", result.worst_case_reduction).bright_yellow()
    );
    println!("   Worst case:  {} candidates remain", result.largest_bucket());
    println!("   Outcomes:    {} distinct feedbacks", result.distribution.len());

    println!("\n📈 {}", "Feedback buckets:".bright_cyan().bold());
    let largest = result.largest_bucket() as f64;
    for &(feedback, count) in &result.distribution {
        let bar = create_progress_bar(count as f64, largest, 30);
        println!(
            "   {}  {:>2} {:>2}  {} {count:5}",
            feedback_symbols(feedback, length),
            feedback.exact(),
            feedback.partial(),
            bar.green()
        );
    }

    if let Some((best, reduction)) = &result.best {
        println!("\n✨ {}", "Best opening:".green().bold());
        println!("   {}  {reduction} eliminated", code_to_pegs(best));
        if *reduction == result.worst_case_reduction {
            println!("   {}", "This guess is as strong as the best opening.".green());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    if result.solved < result.total_games {
        println!(
            "   Unresolved:       {}",
            format!("{}", result.total_games - result.solved).red()
        );
    }
    println!(
        "   Average steps:    {}",
        format!("{:.3}", result.average_steps).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_steps).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_steps).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_games.max(1) as f64;
    for steps in result.min_steps..=result.max_steps {
        if let Some(&count) = result.distribution.get(&steps) {
            let pct = (count as f64 / total) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {steps:2}: {bar} {count:5} ({pct:5.1}%)");
        }
    }
}
