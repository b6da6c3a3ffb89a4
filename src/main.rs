//! Command-line driver: generate matrices, multiply them both ways, compare.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use parmatmul::stats::Summary;
use parmatmul::verify::first_mismatch;
use parmatmul::{Matrix, MultiplyConfig, Multiplier, RowParallel, Sequential, is_empty};

#[derive(Parser)]
#[command(name = "parmatmul")]
#[command(author, version, about = "Sequential vs. row-parallel integer matrix multiplication")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a random matrix to a file
    Generate {
        /// Number of rows
        #[arg(short, long)]
        rows: i64,

        /// Number of columns
        #[arg(short, long)]
        columns: i64,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Multiply two matrix files with both strategies
    Multiply {
        /// File holding the left operand
        first: PathBuf,

        /// File holding the right operand
        second: PathBuf,

        /// Where to write the sequential result
        #[arg(long, value_name = "PATH")]
        sequential_out: Option<PathBuf>,

        /// Where to write the parallel result
        #[arg(long, value_name = "PATH")]
        parallel_out: Option<PathBuf>,

        /// Worker threads (defaults to available parallelism)
        #[arg(short, long, env = "MATMUL_WORKERS")]
        workers: Option<usize>,

        /// Timed runs per strategy
        #[arg(short, long, default_value = "1")]
        iterations: usize,
    },

    /// Time both strategies on random square matrices
    Bench {
        /// Square sizes to run
        #[arg(short, long, value_delimiter = ',', default_value = "128,256,512")]
        sizes: Vec<usize>,

        /// Worker threads (defaults to available parallelism)
        #[arg(short, long, env = "MATMUL_WORKERS")]
        workers: Option<usize>,

        /// Timed runs per strategy
        #[arg(short, long, default_value = "3")]
        iterations: usize,

        /// Seed for the input matrices
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            rows,
            columns,
            output,
            seed,
        } => {
            let (rows, columns) = parmatmul::matrix::check_dimensions(rows, columns)?;
            let matrix = match seed {
                Some(seed) => {
                    Matrix::random_with_rng(rows, columns, &mut StdRng::seed_from_u64(seed))?
                }
                None => Matrix::random(rows, columns)?,
            };
            matrix.write_to_file(&output)?;
            println!("Wrote {}x{} matrix to {}", rows, columns, output.display());
        }
        Commands::Multiply {
            first,
            second,
            sequential_out,
            parallel_out,
            workers,
            iterations,
        } => {
            let first = Matrix::read_from_file(&first)?;
            let second = Matrix::read_from_file(&second)?;
            println!(
                "First matrix: {}x{}, Second matrix: {}x{}",
                first.rows(),
                first.columns(),
                second.rows(),
                second.columns()
            );

            if is_empty(Some(&first)) || is_empty(Some(&second)) {
                warn!("an input matrix is empty, skipping multiplication");
                return Ok(());
            }

            let parallel = RowParallel::new(config_for(workers)?);
            let (seq_result, par_result) = run_both(&first, &second, &parallel, iterations)?;

            if let Some(path) = sequential_out {
                seq_result.write_to_file(path)?;
            }
            if let Some(path) = parallel_out {
                par_result.write_to_file(path)?;
            }
        }
        Commands::Bench {
            sizes,
            workers,
            iterations,
            seed,
        } => {
            let parallel = RowParallel::new(config_for(workers)?);
            let mut rng = StdRng::seed_from_u64(seed);

            println!("=== Matrix Multiplication Benchmark ===\n");
            println!("Workers: {}\n", parallel.workers());

            for size in sizes {
                println!("Matrix: {}×{}", size, size);
                println!("{}", "-".repeat(50));
                let a = Matrix::random_with_rng(size, size, &mut rng)?;
                let b = Matrix::random_with_rng(size, size, &mut rng)?;
                run_both(&a, &b, &parallel, iterations)?;
                println!();
            }
        }
    }

    Ok(())
}

fn config_for(workers: Option<usize>) -> parmatmul::Result<MultiplyConfig> {
    match workers {
        Some(n) => MultiplyConfig::with_workers(n),
        None => Ok(MultiplyConfig::default()),
    }
}

/// Times both strategies, prints a report and the equivalence verdict.
fn run_both(
    first: &Matrix,
    second: &Matrix,
    parallel: &RowParallel,
    iterations: usize,
) -> parmatmul::Result<(Matrix, Matrix)> {
    let (seq_result, seq_stats) = timed(&Sequential, first, second, iterations)?;
    let (par_result, par_stats) = timed(parallel, first, second, iterations)?;

    for (name, stats) in [(Sequential.name(), seq_stats), (parallel.name(), par_stats)] {
        println!(
            "{:12} mean {:10.3} ms  variance {:10.3}  std-dev {:8.3}  ({} runs)",
            name,
            stats.mean,
            stats.variance,
            stats.std_dev(),
            stats.count
        );
    }
    println!("Speedup: {:.2}×", seq_stats.mean / par_stats.mean);

    match first_mismatch(&seq_result, &par_result) {
        None => println!("Results match"),
        Some(mismatch) => println!("Results DIFFER: {}", mismatch),
    }

    Ok((seq_result, par_result))
}

fn timed(
    strategy: &dyn Multiplier,
    first: &Matrix,
    second: &Matrix,
    iterations: usize,
) -> parmatmul::Result<(Matrix, Summary)> {
    let runs = iterations.max(1);
    let mut samples = Vec::with_capacity(runs);

    let start = Instant::now();
    let mut product = strategy.multiply(first, second)?;
    samples.push(start.elapsed());

    for _ in 1..runs {
        let start = Instant::now();
        product = strategy.multiply(first, second)?;
        samples.push(start.elapsed());
    }

    let summary = Summary::from_durations(&samples)?;
    info!(strategy = strategy.name(), mean_ms = summary.mean, "timed");
    Ok((product, summary))
}
