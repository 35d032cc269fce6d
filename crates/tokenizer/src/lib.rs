//! Subtok-tokenizer - High-level tokenizer API
//!
//! This crate ties the vocabulary, the merge learner and the codec together
//! into a single training session that can then segment and encode text.
//!
//! # Features
//!
//! - Simple builder pattern and JSON configuration
//! - Unknown-character substitution and pad/unk separated segmentation
//! - Word-level LRU cache for repeated text
//! - Corpus reading and bracketed id output
//!
//! # Example
//!
//! ```rust
//! use subtok_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().vocab_size(10).build()?;
//! tokenizer.train(&["ab ab ab", "ab cd"])?;
//!
//! let encoding = tokenizer.encode_text("ab cd")?;
//! assert_eq!(encoding.tokens, vec!["ab", "<PAD>", "c", "d"]);
//!
//! let tokens = tokenizer.decode(&encoding.ids)?;
//! assert_eq!(tokens, encoding.tokens);
//! # Ok::<(), subtok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subtok_core::{MergeRule, MergeRules, Result, SpecialTokensConfig, TokenizerError};
pub use subtok_training::{StopReason, TrainingOutcome};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Segmenter, Tokenizer, TokenizerBuilder, TokenizerConfig};

// File collaborators
pub mod io;
pub use io::{encode_file, format_ids, read_corpus, write_encoded_lines};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::split_unknown;

// Utilities
pub mod utils;
pub use utils::WordCache;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
