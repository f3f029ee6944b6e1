//! Bulls and Cows Solver - CLI
//!
//! Play Bulls and Cows in a TUI or on the command line, or watch the solver
//! break a secret with the weak or strong elimination strategy.

use anyhow::{Context, Result, anyhow};
use bulls_cows::{
    commands::{
        SolveConfig, cancel_after, run_benchmark, run_comparison, run_simple, score_guess,
        solve_secret,
    },
    game::Game,
    output::{print_benchmark_result, print_comparison, print_score, print_solve_result},
    solver::StrategyType,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows game and solver using candidate-pool elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: strong (default) or weak
    #[arg(short, long, global = true, default_value = "strong")]
    strategy: String,

    /// Seed for the random source (default: from the OS)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default): guess a generated secret
    Play {
        /// Number of digits in the secret
        #[arg(short, long, default_value = "4")]
        length: usize,
    },

    /// Simple CLI mode (guess a generated secret without TUI)
    Simple {
        /// Number of digits in the secret
        #[arg(short, long, default_value = "4")]
        length: usize,
    },

    /// Let the solver break a specific secret
    Solve {
        /// The secret to find, e.g. 4271
        secret: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(long)]
        limit: Option<usize>,

        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Score one guess against a secret
    Score {
        secret: String,
        guess: String,
    },

    /// Average attempts over many random secrets
    Benchmark {
        /// Number of digits in each secret
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,
    },

    /// Run both strategies over the same random secrets
    Compare {
        /// Number of digits in each secret
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = StrategyType::from_name(&cli.strategy)
        .with_context(|| format!("unknown strategy '{}' (use weak or strong)", cli.strategy))?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { length: 4 });

    match command {
        Commands::Play { length } => run_play_command(rng, length, strategy),
        Commands::Simple { length } => {
            run_simple(&mut Game::new(rng), length).map_err(|e| anyhow!(e))
        }
        Commands::Solve {
            secret,
            verbose,
            limit,
            timeout,
        } => {
            let mut config = SolveConfig::new(secret, strategy);
            config.max_guesses = limit;
            config.cancel = timeout.map(|secs| cancel_after(Duration::from_secs(secs)));
            let result = solve_secret(&config, &mut rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Score { secret, guess } => {
            let scored = score_guess(&mut Game::new(rng), &secret, &guess)?;
            print_score(&scored.secret, &scored.guess, scored.answer);
            Ok(())
        }
        Commands::Benchmark { length, trials } => {
            let report = run_benchmark(strategy, length, trials, &mut rng)?;
            print_benchmark_result(&report);
            Ok(())
        }
        Commands::Compare { length, trials } => {
            let comparison = run_comparison(length, trials, &mut rng)?;
            print_comparison(&comparison);
            Ok(())
        }
    }
}

fn run_play_command(rng: StdRng, length: usize, strategy: StrategyType) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(Game::new(rng), length, strategy);
    run_tui(app)
}
