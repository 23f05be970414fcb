//! Mastermind Solver - CLI
//!
//! Knuth-style Mastermind codebreaker with TUI and CLI modes. Minimizes the
//! worst-case candidate count each round, with sampling to keep rounds fast.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, solve_code,
    },
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_round, print_solve_result},
    solver::{Solver, StrategyType, minimax::SampleCaps},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "mastermind_minimax",
    about = "Mastermind codebreaker using sampled worst-case minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: sampled (default), exhaustive, random
    #[arg(short, long, global = true, default_value = "sampled")]
    strategy: String,

    /// Guesses sampled per round in sampled mode
    #[arg(long, global = true, default_value = "50")]
    guess_cap: usize,

    /// Secrets each sampled guess is evaluated against
    #[arg(long, global = true, default_value = "80")]
    eval_cap: usize,

    /// Seed for the randomized strategies (reproducible runs)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Rounds before a game counts as lost
    #[arg(long, global = true, default_value = "10")]
    max_rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Crack a specific secret code
    Solve {
        /// Secret as four color initials (r y o p b g s k), random if omitted
        code: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Print each round as it is played
        #[arg(short, long)]
        watch: bool,

        /// Pause between rounds in watch mode
        #[arg(long, default_value = "1500")]
        delay_ms: u64,
    },

    /// Analyze how a guess splits the full code space
    Analyze {
        /// Guess as four color initials
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let caps = SampleCaps {
        guess_cap: cli.guess_cap,
        eval_cap: cli.eval_cap,
    };

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.strategy, caps, cli.seed, cli.max_rounds),
        Commands::Simple => run_simple_command(&cli.strategy, caps, cli.seed),
        Commands::Solve {
            code,
            verbose,
            watch,
            delay_ms,
        } => run_solve_command(&cli, caps, code.as_deref(), verbose, watch, delay_ms),
        Commands::Analyze { code } => run_analyze_command(&code),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, caps, cli.seed, count);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, caps, cli.seed, limit);
            Ok(())
        }
    }
}

fn build_strategy(name: &str, caps: SampleCaps, seed: Option<u64>) -> StrategyType {
    StrategyType::from_name(name, caps, seed)
}

fn run_solve_command(
    cli: &Cli,
    caps: SampleCaps,
    code: Option<&str>,
    verbose: bool,
    watch: bool,
    delay_ms: u64,
) -> Result<()> {
    let secret = match code {
        Some(s) => Code::parse(s)?,
        None => {
            let mut rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            Code::random(&mut rng)
        }
    };

    let strategy = build_strategy(&cli.strategy, caps, cli.seed);
    let mut solver = Solver::new(strategy);

    let mut config = SolveConfig::new(secret);
    config.max_rounds = cli.max_rounds;

    let delay = Duration::from_millis(delay_ms);
    let result = solve_code(&config, &mut solver, |record| {
        if watch {
            print_round(record);
            thread::sleep(delay);
        }
    })?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(code: &str) -> Result<()> {
    let guess = Code::parse(code)?;
    let space = Code::all();
    let result = analyze_code(guess, &space);
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, caps: SampleCaps, seed: Option<u64>, count: usize) {
    println!("Running benchmark on {count} random secrets...");

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secrets: Vec<Code> = (0..count).map(|_| Code::random(&mut rng)).collect();

    let strategy = build_strategy(strategy_name, caps, seed);
    let mut solver = Solver::new(strategy);

    let result = run_benchmark(&mut solver, &secrets);
    print_benchmark_result(&result);
}

fn run_test_all_command(
    strategy_name: &str,
    caps: SampleCaps,
    seed: Option<u64>,
    limit: Option<usize>,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets", Code::SPACE_SIZE);
    println!("Strategy: {strategy_name}");
    println!();

    let strategy = build_strategy(strategy_name, caps, seed);
    let mut solver = Solver::new(strategy);

    let stats = run_test_all(&mut solver, limit);
    print_test_all_statistics(&stats);
}

fn run_simple_command(strategy_name: &str, caps: SampleCaps, seed: Option<u64>) -> Result<()> {
    let strategy = build_strategy(strategy_name, caps, seed);
    let mut solver = Solver::new(strategy);
    run_simple(&mut solver).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(
    strategy_name: &str,
    caps: SampleCaps,
    seed: Option<u64>,
    max_rounds: usize,
) -> Result<()> {
    use mastermind_minimax::interactive::{App, run_tui};

    let strategy = build_strategy(strategy_name, caps, seed);
    let app = App::new(strategy, max_rounds);
    run_tui(app)
}
