//! Benchmark command
//!
//! Tests solver performance across multiple secrets.

use crate::core::{Code, GameConfig};
use crate::solver::{Solver, SolverError, Strategy};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_steps: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` secrets uniformly from the configuration's code space
pub fn random_secrets<R: Rng>(config: &GameConfig, count: usize, rng: &mut R) -> Vec<Code> {
    (0..count).map(|_| Code::random(config, rng)).collect()
}

/// Run benchmark on a set of secrets
///
/// Games that hit `max_rounds` count as unsolved and stay out of the step
/// statistics.
///
/// # Errors
///
/// Returns the first solver error; a well-formed run never produces one.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Code],
    max_rounds: usize,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_steps = 0;
    let mut min_steps = usize::MAX;
    let mut max_steps = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let outcome = solver.solve(secret, max_rounds)?;
        if !outcome.solved {
            continue;
        }

        let steps = outcome.steps();
        solved += 1;
        total_steps += steps;
        min_steps = min_steps.min(steps);
        max_steps = max_steps.max(steps);
        *distribution.entry(steps).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        solved,
        total_steps,
        average_steps: if solved > 0 {
            total_steps as f64 / solved as f64
        } else {
            0.0
        },
        min_steps: if solved > 0 { min_steps } else { 0 },
        max_steps,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
