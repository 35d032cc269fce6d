//! CLI commands for the subtok tokenizer.

pub mod benchmark;
pub mod encode;
pub mod encode_file;
pub mod train;

pub use benchmark::BenchmarkCommand;
pub use encode::EncodeCommand;
pub use encode_file::EncodeFileCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use subtok_tokenizer::{read_corpus, Tokenizer, TokenizerConfig, TrainingOutcome};

/// Corpus and configuration flags shared by every command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Training corpus, one text per line
    #[arg(short, long, value_name = "FILE")]
    pub corpus: PathBuf,

    /// JSON configuration file; flags below override its values
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Target vocabulary size
    #[arg(long, value_name = "SIZE")]
    pub vocab_size: Option<usize>,

    /// Unknown-character token
    #[arg(long, value_name = "TOKEN")]
    pub unk_token: Option<String>,

    /// End-of-text token
    #[arg(long, value_name = "TOKEN")]
    pub eof_token: Option<String>,

    /// Word separator token
    #[arg(long, value_name = "TOKEN")]
    pub pad_token: Option<String>,

    /// Extra reserved token (repeat flag); replaces the configured list
    #[arg(long = "extra-token", value_name = "TOKEN")]
    pub extra_tokens: Vec<String>,

    /// Stop after at most this many merges
    #[arg(long, value_name = "COUNT")]
    pub max_merges: Option<usize>,
}

impl TrainArgs {
    /// Configuration file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> AnyhowResult<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TokenizerConfig::default(),
        };

        if let Some(size) = self.vocab_size {
            config.vocab_size = size;
        }
        if let Some(token) = &self.unk_token {
            config.special_tokens.unk = token.clone();
        }
        if let Some(token) = &self.eof_token {
            config.special_tokens.eof = token.clone();
        }
        if let Some(token) = &self.pad_token {
            config.special_tokens.pad = token.clone();
        }
        if !self.extra_tokens.is_empty() {
            config.special_tokens.extra = self.extra_tokens.clone();
        }
        if self.max_merges.is_some() {
            config.max_merges = self.max_merges;
        }

        Ok(config)
    }

    /// Read the corpus and train a tokenizer on it.
    pub fn train(&self) -> AnyhowResult<(Tokenizer, TrainingOutcome)> {
        let config = self.resolve_config()?;
        let mut tokenizer = Tokenizer::new(config).context("invalid tokenizer configuration")?;

        let corpus = read_corpus(&self.corpus)
            .with_context(|| format!("failed to read corpus {}", self.corpus.display()))?;

        let start = Instant::now();
        let outcome = tokenizer.train(&corpus).context("training failed")?;
        log::info!("Training took {:.2}s", start.elapsed().as_secs_f64());

        Ok((tokenizer, outcome))
    }
}
