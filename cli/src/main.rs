//! Subtok CLI - Command-line interface for the character-level BPE tokenizer.
//!
//! This is the main entry point for the `subtok` command-line tool. Every
//! command trains a fresh tokenizer in memory from `--corpus` first.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{BenchmarkCommand, EncodeCommand, EncodeFileCommand, TrainCommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "subtok")]
#[command(about = "Character-level BPE vocabulary learner and segmenter", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn merges from a corpus and report the result
    Train(TrainCommand),
    /// Tokenize and encode a piece of text
    Encode(EncodeCommand),
    /// Encode every line of a file into bracketed id lines
    EncodeFile(EncodeFileCommand),
    /// Benchmark tokenization and encoding
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::EncodeFile(cmd) => commands::encode_file::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}

/// `RUST_LOG` applies unless a -v/-q flag asks for a specific level.
fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();

    let level = match (verbose, quiet) {
        (0, 0) => None,
        (_, 1) => Some(LevelFilter::Warn),
        (_, q) if q > 1 => Some(LevelFilter::Error),
        (1, _) => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
