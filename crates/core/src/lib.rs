//! Subtok-core - Core data structures for character-level BPE
//!
//! This crate provides the vocabulary, merge rules and id codec shared by the
//! training and tokenizer crates.
//!
//! # Features
//!
//! - Insertion-ordered vocabulary with special tokens and a character alphabet
//! - Merge rules kept in learned order, applied with a single left-to-right pass
//! - Deterministic merge candidate ordering (count, then lexicographic pair)
//! - Checked token <-> id codec that never fabricates ids
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{Codec, MergeRule, SpecialTokensConfig, Vocabulary};
//!
//! let mut vocab = Vocabulary::new(16, SpecialTokensConfig::default())?;
//! vocab.add_char('h');
//! vocab.add_char('i');
//! let rule = MergeRule::new("h", "i");
//! vocab.insert(&rule.merged);
//!
//! let codec = Codec::from_vocabulary(&vocab);
//! assert_eq!(codec.encode(&["hi"])?, vec![6]);
//! # Ok::<(), subtok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use self::core::{
    char_token, select_best, split_chars, split_words, Codec, MergeCandidate,
    MergeRule, MergeRules, Pair, SpecialTokens, SpecialTokensConfig, Vocab, VocabR, Vocabulary,
    WORD_DELIMITER,
};
