//! metasearch command line
//!
//! Usage:
//!   metasearch coloring <FILE> <STRATEGY> [ITERATIONS]
//!   metasearch continuous <FUNCTION> [--strategy genetic] [--representation binary|real]
//!   metasearch experiments [--runs 30]
//!
//! Strategies: aleatoria, escalada, iterada, genetico (or random, hill-climbing,
//! iterated, genetic). Functions: sphere, rastrigin, ackley, griewank, rosenbrock.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use metasearch::experiment::{run_experiments, DEFAULT_RUNS};
use metasearch::objective::{BenchmarkFunction, ContinuousProblem, Graph, GraphColoring};
use metasearch::representation::{BitString, Coloring, RealVector};
use metasearch::selection::SelectionMethod;
use metasearch::{
    EvolutionOptions, Objective, Phenotype, RandomNumberGenerator, Result, SearchDriver,
    SearchError, SearchOutcome, SearchStrategy,
};

/// Metaheuristic search for graph coloring and continuous benchmarks
#[derive(Parser)]
#[command(name = "metasearch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Color the vertices of a DIMACS-style graph
    Coloring {
        /// Graph file (`c`, `p edge V E` and `e i j` lines)
        file: PathBuf,

        /// aleatoria | escalada | iterada | genetico
        strategy: String,

        /// Iterations, or generations for the genetic strategy
        #[arg(default_value_t = 1000)]
        iterations: usize,

        /// Population size of the genetic strategy
        #[arg(short, long, default_value_t = 100)]
        population: usize,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the `<iteration> <best_cost>` progress log here
        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// Minimise one of the continuous benchmark functions
    Continuous {
        /// sphere | rastrigin | ackley | griewank | rosenbrock
        function: String,

        /// Search strategy
        #[arg(long, default_value = "genetic")]
        strategy: String,

        #[arg(short, long, default_value_t = 10)]
        dimension: usize,

        /// Bits per coordinate of the binary representation
        #[arg(short, long, default_value_t = 16)]
        bits: usize,

        /// Iterations, or generations for the genetic strategy
        #[arg(short, long, default_value_t = 100)]
        generations: usize,

        #[arg(short, long, default_value_t = 100)]
        population: usize,

        #[arg(short, long, value_enum, default_value_t = Representation::Binary)]
        representation: Representation,

        /// tournament | roulette
        #[arg(long, default_value = "tournament")]
        selection: String,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// Repeat the genetic algorithm on every benchmark and report best/worst/mean
    Experiments {
        #[arg(short, long, default_value_t = DEFAULT_RUNS)]
        runs: usize,

        #[arg(short, long, default_value_t = 10)]
        dimension: usize,

        #[arg(short, long, default_value_t = 16)]
        bits: usize,

        #[arg(short, long, default_value_t = 100)]
        generations: usize,

        #[arg(short, long, default_value_t = 100)]
        population: usize,

        /// tournament | roulette
        #[arg(long, default_value = "tournament")]
        selection: String,

        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Representation {
    #[default]
    Binary,
    Real,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            match err {
                SearchError::Configuration(_)
                | SearchError::UnknownStrategy(_)
                | SearchError::UnknownObjective(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn rng_for(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Coloring {
            file,
            strategy,
            iterations,
            population,
            seed,
            log,
        } => {
            let strategy: SearchStrategy = strategy.parse()?;
            let graph = Graph::from_file(&file)?;
            info!(
                file = %file.display(),
                vertices = graph.num_vertices(),
                edges = graph.edge_count(),
                "Graph loaded"
            );

            let options = EvolutionOptions::builder().population_size(population).build();
            let driver: SearchDriver<Coloring, _> =
                SearchDriver::new(GraphColoring::new(graph), strategy, iterations)?
                    .with_options(options);
            let outcome = driver.run(&mut rng_for(seed))?;

            println!("Best coloring: {}", outcome.best);
            finish(&outcome, log)
        }
        Commands::Continuous {
            function,
            strategy,
            dimension,
            bits,
            generations,
            population,
            representation,
            selection,
            seed,
            log,
        } => {
            let function: BenchmarkFunction = function.parse()?;
            let strategy: SearchStrategy = strategy.parse()?;
            let selection: SelectionMethod = selection.parse()?;
            let problem = ContinuousProblem::new(function, dimension, bits)?;
            let options = EvolutionOptions::builder().population_size(population).build();
            let mut rng = rng_for(seed);

            match representation {
                Representation::Binary => {
                    let driver: SearchDriver<BitString, _> =
                        driver_for(problem, strategy, generations, options, selection)?;
                    let outcome = driver.run(&mut rng)?;
                    println!("Best point: {:?}", problem.decode(&outcome.best)?);
                    finish(&outcome, log)
                }
                Representation::Real => {
                    let driver: SearchDriver<RealVector, _> =
                        driver_for(problem, strategy, generations, options, selection)?;
                    let outcome = driver.run(&mut rng)?;
                    println!("Best point: {:?}", outcome.best.values());
                    finish(&outcome, log)
                }
            }
        }
        Commands::Experiments {
            runs,
            dimension,
            bits,
            generations,
            population,
            selection,
            seed,
        } => {
            let selection: SelectionMethod = selection.parse()?;
            let options = EvolutionOptions::new(generations, population);
            let summaries = run_experiments(
                runs,
                dimension,
                bits,
                selection,
                &options,
                &mut rng_for(seed),
            )?;
            for summary in summaries {
                println!("{}", summary);
            }
            Ok(())
        }
    }
}

fn driver_for<P, O>(
    objective: O,
    strategy: SearchStrategy,
    iterations: usize,
    options: EvolutionOptions,
    selection: SelectionMethod,
) -> Result<SearchDriver<P, O>>
where
    P: Phenotype,
    O: Objective<P>,
{
    Ok(SearchDriver::new(objective, strategy, iterations)?
        .with_options(options)
        .with_selection(selection))
}

fn finish<P: Phenotype>(outcome: &SearchOutcome<P>, log: Option<PathBuf>) -> Result<()> {
    println!("Strategy: {}", outcome.strategy);
    println!("Best cost: {}", outcome.cost);
    if let Some(path) = log {
        outcome.trace.save(&path)?;
        info!(path = %path.display(), entries = outcome.trace.len(), "Progress log written");
    }
    Ok(())
}
