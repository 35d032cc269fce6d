//! Train command implementation.

use super::TrainArgs;
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    #[command(flatten)]
    pub train: TrainArgs,

    /// Print every learned merge rule
    #[arg(long, default_value_t = false)]
    pub show_merges: bool,
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let (tokenizer, outcome) = cmd.train.train()?;

    println!("Training finished: {}", outcome.stop_reason);
    println!("  Distinct words: {}", outcome.word_count);
    println!("  Alphabet size: {}", outcome.alphabet_size);
    println!("  Merges learned: {}", outcome.merges.len());
    println!(
        "  Vocabulary size: {} / {}",
        tokenizer.vocab_size(),
        tokenizer.vocab().target_size()
    );
    if !outcome.reached_target {
        println!("  Target vocabulary size was not reached");
    }

    if cmd.show_merges {
        println!();
        for (rank, rule) in tokenizer.merges().iter().enumerate() {
            println!("{:>6}  {}", rank, rule);
        }
    }

    Ok(())
}
