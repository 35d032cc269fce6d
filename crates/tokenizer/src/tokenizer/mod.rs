//! Main tokenizer implementation.
//!
//! A [`Tokenizer`] is one training session: it owns the vocabulary, the merge
//! rules learned on a corpus and the id codec, and lends them to the
//! [`Segmenter`] for tokenizing new text.

pub mod segmenter;

pub use segmenter::Segmenter;

use crate::utils::WordCache;
use compact_str::CompactString;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use subtok_core::{Codec, MergeRules, Result, SpecialTokensConfig, TokenizerError, Vocabulary};
use subtok_training::{BpeTrainer, TrainingConfig, TrainingOutcome};

/// Default target vocabulary size.
pub const DEFAULT_VOCAB_SIZE: usize = 200;

/// Configuration for building a tokenizer.
///
/// Deserializes from a flat JSON object; every field is optional:
///
/// ```json
/// { "vocab_size": 500, "unk_token": "[UNK]", "pad_token": "<PAD>", "max_merges": 300 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Special tokens configuration
    #[serde(flatten)]
    pub special_tokens: SpecialTokensConfig,
    /// Optional cap on merge iterations
    pub max_merges: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_VOCAB_SIZE,
            special_tokens: SpecialTokensConfig::default(),
            max_merges: None,
        }
    }
}

impl TokenizerConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
        Self::from_json_str(&json)
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set special tokens.
    pub fn with_special_tokens(mut self, tokens: SpecialTokensConfig) -> Self {
        self.config.special_tokens = tokens;
        self
    }

    pub fn unk_token(mut self, token: impl Into<String>) -> Self {
        self.config.special_tokens.unk = token.into();
        self
    }

    pub fn eof_token(mut self, token: impl Into<String>) -> Self {
        self.config.special_tokens.eof = token.into();
        self
    }

    pub fn pad_token(mut self, token: impl Into<String>) -> Self {
        self.config.special_tokens.pad = token.into();
        self
    }

    /// Replace the extra reserved tokens.
    pub fn extra_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.special_tokens.extra = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Stop training after at most `max` merges.
    pub fn max_merges(mut self, max: usize) -> Self {
        self.config.max_merges = Some(max);
        self
    }

    /// Build the tokenizer.
    ///
    /// Fails with [`TokenizerError::InvalidConfig`] before any training happens.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Configuration
    config: TokenizerConfig,
    /// Vocabulary, grown by training
    vocab: Vocabulary,
    /// Merge rules in learned order
    merges: MergeRules,
    /// Token <-> id mapping
    codec: Codec,
    trained: bool,
}

impl Tokenizer {
    /// Create an untrained tokenizer holding only the special tokens.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let vocab = Vocabulary::new(config.vocab_size, config.special_tokens.clone())?;
        let codec = Codec::from_vocabulary(&vocab);

        Ok(Self {
            config,
            vocab,
            merges: MergeRules::new(),
            codec,
            trained: false,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train the tokenizer on corpus lines.
    ///
    /// A tokenizer trains exactly once; a second call fails with
    /// [`TokenizerError::AlreadyTrained`].
    pub fn train<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<TrainingOutcome> {
        if self.trained {
            return Err(TokenizerError::AlreadyTrained);
        }

        let trainer = BpeTrainer::new(TrainingConfig {
            max_merges: self.config.max_merges,
        });
        let outcome = trainer.train(&mut self.vocab, corpus);

        self.merges = outcome.merges.clone();
        let numbered = self.codec.extend_from(&self.vocab);
        self.trained = true;

        info!(
            "Tokenizer ready: {} tokens ({} numbered by training), {} merges",
            self.codec.len(),
            numbered,
            self.merges.len()
        );

        Ok(outcome)
    }

    /// Whether [`train`](Self::train) has run.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// A segmenter over this tokenizer's vocabulary and merges.
    pub fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.vocab, &self.merges)
    }

    /// Segment text into vocabulary tokens.
    pub fn tokenize(&self, text: &str) -> Vec<CompactString> {
        self.segmenter().tokenize(text)
    }

    /// Segment text, memoizing word splits in `cache`.
    pub fn tokenize_with_cache(&self, text: &str, cache: &mut WordCache) -> Vec<CompactString> {
        self.segmenter().tokenize_with_cache(text, cache)
    }

    /// Map tokens to ids.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u32>> {
        self.codec.encode(tokens)
    }

    /// Map ids back to tokens.
    pub fn decode(&self, ids: &[u32]) -> Result<Vec<CompactString>> {
        self.codec.decode(ids)
    }

    /// Tokenize and encode in one go.
    pub fn encode_text(&self, text: &str) -> Result<Encoding> {
        let tokens = self.tokenize(text);
        let ids = self.encode(&tokens)?;
        Ok(Encoding { tokens, ids })
    }

    /// [`encode_text`](Self::encode_text) through a word cache.
    pub fn encode_text_with_cache(&self, text: &str, cache: &mut WordCache) -> Result<Encoding> {
        let tokens = self.tokenize_with_cache(text, cache);
        let ids = self.encode(&tokens)?;
        Ok(Encoding { tokens, ids })
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Learned merge rules.
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Segmented tokens
    pub tokens: Vec<CompactString>,
    /// Token IDs, one per token
    pub ids: Vec<u32>,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
