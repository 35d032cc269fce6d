//! Encode-file command implementation.

use super::TrainArgs;
use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use std::path::PathBuf;
use subtok_tokenizer::encode_file;
use subtok_tokenizer::io::default_output_path;

/// Encode-file command arguments.
#[derive(Parser)]
pub struct EncodeFileCommand {
    #[command(flatten)]
    pub train: TrainArgs,

    /// File whose lines are encoded
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (defaults to tokenized_<input name> next to the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(cmd: EncodeFileCommand) -> AnyhowResult<()> {
    let (tokenizer, _) = cmd.train.train()?;

    let output = cmd
        .output
        .unwrap_or_else(|| default_output_path(&cmd.input));
    let written = encode_file(&tokenizer, &cmd.input, &output)
        .with_context(|| format!("failed to encode {}", cmd.input.display()))?;

    println!("Encoded {} lines to {}", written, output.display());
    Ok(())
}
