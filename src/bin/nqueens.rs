//! Solve the `n` queens puzzle from the command line.
//!
//! Usage:
//!
//! ```bash
//! cargo run --release -- 8 --strategy genetic --seed 42
//! ```

use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use nqueens::{solve_with, Error, SolverConfig, Strategy};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The size of the board.
    n: usize,

    /// The algorithm used to place the queens: backtracking, csp, or genetic.
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// TOML file with solver configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the genetic search.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations before the genetic search gives up.
    #[arg(long)]
    max_generations: Option<usize>,

    /// Number of individuals in each generation of the genetic search.
    #[arg(long)]
    population_size: Option<usize>,

    /// Probability that a child in the genetic search is mutated.
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Run the backtracking solver if the genetic search gives up.
    #[arg(long)]
    fallback: bool,
}

impl Cli {
    fn config(&self) -> Result<SolverConfig, Error> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        if let Some(max_generations) = self.max_generations {
            config.genetic.max_generations = max_generations;
        }
        if let Some(population_size) = self.population_size {
            config.genetic.population_size = population_size;
        }
        if let Some(mutation_rate) = self.mutation_rate {
            config.genetic.mutation_rate = mutation_rate;
        }
        config.fallback_to_backtracking |= self.fallback;

        Ok(config)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config().with_context(|| match &cli.config {
        Some(path) => format!("failed to load [{}]", path.display()),
        None => "failed to build configuration".to_owned(),
    })?;

    if config.check_board_size(cli.n).is_err() {
        println!("Please enter a valid N (1-{}).", config.max_board_size);
        return Ok(ExitCode::FAILURE);
    }

    let strategy = config.strategy;
    log::info!("Solving [{}] queens with [{}].", cli.n, strategy);

    let start = Instant::now();
    let solution = solve_with(cli.n, strategy, &config)?;
    log::info!("Finished in [{:?}].", start.elapsed());

    match solution {
        Some(assignment) => {
            println!("Solution found.");
            println!("{assignment}");
        }
        None => println!("No solution found."),
    }

    Ok(ExitCode::SUCCESS)
}
