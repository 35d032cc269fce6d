//! Core BPE data structures.
//!
//! Vocabulary, merge rules, candidate ordering, word splitting and the id codec.
//! Nothing in here performs I/O.

pub mod codec;
pub mod merges;
pub mod priority;
pub mod split;
pub mod vocab;

pub use codec::Codec;
pub use merges::{MergeRule, MergeRules, Pair};
pub use priority::{select_best, MergeCandidate};
pub use split::{char_token, split_chars, split_words, WORD_DELIMITER};
pub use vocab::{SpecialTokens, SpecialTokensConfig, Vocab, VocabR, Vocabulary};
