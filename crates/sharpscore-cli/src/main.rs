mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sharpscore",
    about = "Tenengrad sharpness scoring and sharpening for still images"
)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score individual image files and rank them
    Score(commands::score::ScoreArgs),
    /// Score every image in two or more directories and write a CSV table
    Compare(commands::compare::CompareArgs),
    /// Sharpen every JPEG in a directory into another directory
    Sharpen(commands::sharpen::SharpenArgs),
    /// Print a default comparison config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Score(args) => commands::score::run(args),
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Sharpen(args) => commands::sharpen::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
