//! Container Sort Benchmark - CLI
//!
//! With no arguments, runs the default sweep and prints the timing table.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use container_sortbench::{
    BenchConfig, BenchResult, SeededIntGenerator, SweepReport, SweepRunner, SweepSummary,
    TableFormatter,
};

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(about = "Time insert-then-resort of random ints in a Vec vs a LinkedList", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the size sweep (default)
    Run(RunArgs),

    /// Show the effective configuration as TOML
    Config {
        /// TOML config file to start from
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the configuration to this file instead of printing it
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First problem size
    #[arg(long)]
    initial: Option<usize>,

    /// Exclusive upper bound on the problem size
    #[arg(long)]
    nmax: Option<usize>,

    /// Step between problem sizes
    #[arg(long)]
    interval: Option<usize>,

    /// Table column width
    #[arg(short, long)]
    width: Option<usize>,

    /// Seed for the value generator
    #[arg(long)]
    seed: Option<u64>,

    /// Smallest generated value
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i32>,

    /// Largest generated value
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i32>,

    /// Discarded fill rounds before the sweep
    #[arg(long)]
    warmup: Option<usize>,

    /// Check length and order of every sequence
    #[arg(long)]
    verify: bool,

    /// Print a JSON report instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout carries only the table)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run(args)?,

        Commands::Config { config, write } => {
            let config = match config {
                Some(path) => BenchConfig::load(&path)?,
                None => BenchConfig::default(),
            };
            config.validate()?;
            match write {
                Some(path) => {
                    config.save(&path)?;
                    info!("Wrote configuration to {}", path.display());
                }
                None => print!("{}", config.to_toml()?),
            }
        }
    }

    Ok(())
}

/// Defaults, then the config file, then command-line flags.
fn resolve_config(args: &RunArgs) -> BenchResult<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            BenchConfig::load(path)?
        }
        None => BenchConfig::default(),
    };

    if let Some(v) = args.initial {
        config.initial = v;
    }
    if let Some(v) = args.nmax {
        config.nmax = v;
    }
    if let Some(v) = args.interval {
        config.interval = v;
    }
    if let Some(v) = args.width {
        config.column_width = v;
    }
    if let Some(v) = args.seed {
        config.seed = v;
    }
    if let Some(v) = args.min {
        config.min_value = v;
    }
    if let Some(v) = args.max {
        config.max_value = v;
    }
    if let Some(v) = args.warmup {
        config.warmup = v;
    }
    if args.verify {
        config.verify = true;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: RunArgs) -> BenchResult<()> {
    let config = resolve_config(&args)?;
    let rng = SeededIntGenerator::new(config.seed);
    let mut runner = SweepRunner::new(config.clone(), rng)?;

    let measurements = if args.json {
        runner.run()?
    } else {
        let table = TableFormatter::new(config.column_width);
        println!("{}", table.title());
        println!("{}", table.header());
        runner.run_with(|m| println!("{}", table.row(m)))?
    };

    let summary = SweepSummary::from_measurements(&measurements);
    info!(
        sizes = summary.sizes_measured,
        total_vector_ms = summary.total_vector_ms,
        total_list_ms = summary.total_list_ms,
        list_wins = summary.list_wins,
        crossover = ?summary.crossover,
        "Sweep complete"
    );

    if args.json {
        println!("{}", SweepReport::new(config, measurements).to_json()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_without_arguments() {
        let cli = Cli::try_parse_from(["sortbench"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sortbench", "run", "--initial", "0", "--nmax", "100", "--interval", "25",
            "--min", "-5", "--max", "5", "--verify",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.initial, 0);
        assert_eq!(config.nmax, 100);
        assert_eq!(config.interval, 25);
        assert_eq!(config.min_value, -5);
        assert_eq!(config.max_value, 5);
        assert!(config.verify);
        assert_eq!(config.column_width, 10);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let args = RunArgs {
            interval: Some(0),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("sortbench-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "initial = 10\nnmax = 20\nseed = 1\n").unwrap();
        let args = RunArgs {
            config: Some(path.clone()),
            seed: Some(99),
            ..Default::default()
        };
        let config = resolve_config(&args);
        std::fs::remove_file(&path).ok();
        let config = config.unwrap();
        assert_eq!(config.initial, 10);
        assert_eq!(config.nmax, 20);
        assert_eq!(config.seed, 99);
    }
}
