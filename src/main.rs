//! Mastermind Solver - CLI
//!
//! Breaks Mastermind codes with worst-case (minimax) guess selection.

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        DEFAULT_MAX_ROUNDS, SolveConfig, analyze_guess, print_test_all_statistics, random_secrets,
        run_benchmark, run_play, run_test_all, solve_code,
    },
    core::{Code, GameConfig, GuessSpace},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Classical opening for 6 colors and 4 pegs
const CLASSICAL_OPENING: [u8; 4] = [0, 0, 1, 1];

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using worst-case (minimax) guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of peg colors
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_COLORS)]
    colors: usize,

    /// Number of pegs per code
    #[arg(short = 'p', long, global = true, default_value_t = GameConfig::DEFAULT_LENGTH)]
    length: usize,

    /// Guess selection strategy
    #[arg(
        short,
        long,
        global = true,
        default_value = "minimax",
        value_parser = PossibleValuesParser::new(StrategyType::NAMES)
    )]
    strategy: String,

    /// First guess (default: 0011 on the classical board, otherwise computed)
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Compute the first guess instead of using an opening
    #[arg(long, global = true, conflicts_with = "opening")]
    no_opening: bool,

    /// Show per-step details and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you keep the secret and score the guesses (default)
    Play,

    /// Solve a specific secret, or a random one
    Solve {
        /// The secret to solve, as color digits (e.g. 1320)
        secret: Option<String>,

        /// Seed for the random secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how a guess splits the full code space
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the random secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on EVERY possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = GameConfig::new(cli.colors, cli.length).context("Invalid game configuration")?;
    let opening = resolve_opening(&cli, &config)?;
    let space = GuessSpace::new(config);
    log::debug!("{:<24}{} codes", "enumerated space", space.len());

    let strategy = StrategyType::from_name(&cli.strategy);
    let solver = Solver::new(strategy, &space).with_opening(opening)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&solver),
        Commands::Solve { secret, seed } => {
            solve_command(secret.as_deref(), seed, cli.verbose, &solver)
        }
        Commands::Analyze { guess } => analyze_command(&guess, &space),
        Commands::Benchmark { count, seed } => benchmark_command(count, seed, &solver),
        Commands::TestAll { limit } => test_all_command(&cli.strategy, limit, &solver),
    }
}

/// Pick the opening guess from the flags
///
/// The classical opening only applies to the board it was computed for.
fn resolve_opening(cli: &Cli, config: &GameConfig) -> Result<Option<Code>> {
    if cli.no_opening {
        return Ok(None);
    }

    if let Some(text) = &cli.opening {
        let code = Code::parse_for(text, config)
            .with_context(|| format!("Invalid opening '{text}'"))?;
        return Ok(Some(code));
    }

    let classical = Code::new(&CLASSICAL_OPENING);
    Ok(classical.validate(config).is_ok().then_some(classical))
}

/// Seed from the flag, or a fresh one printed so the run can be repeated
fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Seed: {seed}");
    StdRng::seed_from_u64(seed)
}

fn solve_command<S: Strategy>(
    secret: Option<&str>,
    seed: Option<u64>,
    verbose: bool,
    solver: &Solver<S>,
) -> Result<()> {
    let secret = match secret {
        Some(text) => Code::parse_for(text, solver.config())
            .with_context(|| format!("Invalid secret '{text}'"))?,
        None => Code::random(solver.config(), &mut seeded_rng(seed)),
    };

    let result = solve_code(SolveConfig::new(secret), solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn analyze_command(guess: &str, space: &GuessSpace) -> Result<()> {
    let guess =
        Code::parse_for(guess, space.config()).with_context(|| format!("Invalid guess '{guess}'"))?;
    let result = analyze_guess(&guess, space)?;
    print_analysis_result(&result);
    Ok(())
}

fn benchmark_command<S: Strategy>(
    count: usize,
    seed: Option<u64>,
    solver: &Solver<S>,
) -> Result<()> {
    println!("Running benchmark on {count} random secrets ({})...", solver.config());

    let secrets = random_secrets(solver.config(), count, &mut seeded_rng(seed));
    let result = run_benchmark(solver, &secrets, DEFAULT_MAX_ROUNDS)?;
    print_benchmark_result(&result);
    Ok(())
}

fn test_all_command<S: Strategy>(
    strategy_name: &str,
    limit: Option<usize>,
    solver: &Solver<S>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets", solver.space().len());
    println!("Board: {}", solver.config());
    println!("Strategy: {strategy_name}");
    if let Some(opening) = solver.opening() {
        println!("Opening: {opening}");
    }
    println!();

    let stats = run_test_all(solver, limit, DEFAULT_MAX_ROUNDS)?;
    print_test_all_statistics(&stats);
    Ok(())
}
