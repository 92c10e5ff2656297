//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use crate::core::Code;
use crate::output::formatters::code_to_pegs;
use crate::solver::{Solver, SolverError, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub steps: usize,
    pub success: bool,
    /// Candidates left when the game stopped
    pub remaining: usize,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub step_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_steps: f64,
    pub max_steps: usize,
    pub min_steps: usize,
    /// Solved secrets needing the most steps, hardest first
    pub hardest: Vec<(Code, usize)>,
    /// Secrets not solved within the round cap, with their residual candidate count
    pub unresolved: Vec<(Code, usize)>,
}

/// Run solver on every code in the space (or the first `limit` in enumeration order)
///
/// # Errors
///
/// Returns the first solver error; a well-formed run never produces one.
pub fn run_test_all<S: Strategy>(
    solver: &Solver<S>,
    limit: Option<usize>,
    max_rounds: usize,
) -> Result<TestAllStatistics, SolverError> {
    let codes = solver.space().codes();
    let secrets = &codes[..limit.unwrap_or(codes.len()).min(codes.len())];

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::with_capacity(secrets.len());
    let total_start = Instant::now();

    for (idx, secret) in secrets.iter().enumerate() {
        let outcome = solver.solve(secret, max_rounds)?;

        results.push(SecretTestResult {
            secret: secret.clone(),
            steps: outcome.steps(),
            success: outcome.solved,
            remaining: outcome.remaining,
        });

        if idx % 10 == 0 {
            let avg = results.iter().map(|r| r.steps).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let mut step_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *step_distribution.entry(result.steps).or_insert(0) += 1;
    }

    let total_steps: usize = solved.iter().map(|r| r.steps).sum();
    let average_steps = if solved.is_empty() {
        0.0
    } else {
        total_steps as f64 / solved.len() as f64
    };

    // Stable sort keeps enumeration order among equally hard secrets
    let mut hardest: Vec<(Code, usize)> =
        solved.iter().map(|r| (r.secret.clone(), r.steps)).collect();
    hardest.sort_by_key(|(_, steps)| std::cmp::Reverse(*steps));
    hardest.truncate(10);

    let unresolved = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| (r.secret.clone(), r.remaining))
        .collect();

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        step_distribution,
        total_time,
        average_steps,
        max_steps: solved.iter().map(|r| r.steps).max().unwrap_or(0),
        min_steps: solved.iter().map(|r| r.steps).min().unwrap_or(0),
        hardest,
        unresolved,
    }
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average steps:        {}",
        format!("{:.3}", stats.average_steps).bright_yellow().bold()
    );
    println!("  Worst case:           {} steps", stats.max_steps);
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Step Distribution".bright_cyan().bold());
    let max_count = *stats.step_distribution.values().max().unwrap_or(&1);
    for steps in stats.min_steps..=stats.max_steps {
        let count = stats.step_distribution.get(&steps).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {steps:2} steps: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, steps) in stats.hardest.iter().take(5) {
            println!("  {} ({steps} steps)", code_to_pegs(secret));
        }
    }

    if !stats.unresolved.is_empty() {
        println!("\n❌ {}", "Unresolved Secrets".red().bold());
        for (secret, remaining) in stats.unresolved.iter().take(5) {
            println!("  {} ({remaining} options remaining)", code_to_pegs(secret));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GuessSpace};
    use crate::solver::MinimaxStrategy;

    #[test]
    fn test_all_small_board() {
        let space = GuessSpace::new(GameConfig::new(3, 3).unwrap());
        let solver = Solver::new(MinimaxStrategy, &space);

        let stats = run_test_all(&solver, None, 10).unwrap();

        assert_eq!(stats.total_secrets, 27);
        assert_eq!(stats.solved, 27);
        assert_eq!(stats.failed, 0);
        assert!(stats.unresolved.is_empty());
        assert_eq!(stats.step_distribution.values().sum::<usize>(), 27);
        assert_eq!(stats.hardest[0].1, stats.max_steps);
    }

    #[test]
    fn test_all_respects_limit() {
        let space = GuessSpace::new(GameConfig::default());
        let solver = Solver::new(MinimaxStrategy, &space)
            .with_opening(Some(Code::new(&[0, 0, 1, 1])))
            .unwrap();

        let stats = run_test_all(&solver, Some(8), 10).unwrap();

        assert_eq!(stats.total_secrets, 8);
        assert_eq!(stats.solved, 8);
        assert!(stats.max_steps <= 5);
    }

    #[test]
    fn summarize_separates_unresolved() {
        let results = vec![
            SecretTestResult {
                secret: Code::new(&[0, 1]),
                steps: 2,
                success: true,
                remaining: 1,
            },
            SecretTestResult {
                secret: Code::new(&[1, 1]),
                steps: 3,
                success: true,
                remaining: 1,
            },
            SecretTestResult {
                secret: Code::new(&[2, 1]),
                steps: 1,
                success: false,
                remaining: 4,
            },
        ];

        let stats = summarize(&results, Duration::ZERO);

        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, 1);
        assert!((stats.average_steps - 2.5).abs() < f64::EPSILON);
        assert_eq!(stats.min_steps, 2);
        assert_eq!(stats.max_steps, 3);
        assert_eq!(stats.hardest[0], (Code::new(&[1, 1]), 3));
        assert_eq!(stats.unresolved, vec![(Code::new(&[2, 1]), 4)]);
    }
}
