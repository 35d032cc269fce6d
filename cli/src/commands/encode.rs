//! Encode command implementation.

use super::TrainArgs;
use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use std::io::Read;
use subtok_tokenizer::format_ids;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub train: TrainArgs,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub text: String,
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let (tokenizer, _) = cmd.train.train()?;

    let text = if cmd.text == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        cmd.text
    };

    for line in text.lines() {
        let encoding = tokenizer.encode_text(line)?;
        let tokens: Vec<&str> = encoding.tokens.iter().map(|t| t.as_str()).collect();
        println!("{:?}", tokens);
        println!("{}", format_ids(&encoding.ids));
    }

    Ok(())
}
