//! Subtok-training - BPE training infrastructure
//!
//! This crate learns BPE merge rules from corpus lines.
//!
//! # Features
//!
//! - Word frequencies over space-delimited words
//! - Pair frequencies weighted by word frequency, recounted every iteration
//! - Deterministic pair selection (highest count, then smallest pair)
//! - Early termination when no pair is left, reported in the outcome
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{SpecialTokensConfig, Vocabulary};
//! use subtok_training::{BpeTrainer, StopReason};
//!
//! let mut vocab = Vocabulary::new(10, SpecialTokensConfig::default())?;
//! let outcome = BpeTrainer::default().train(&mut vocab, &["ab ab ab", "ab cd"]);
//!
//! assert_eq!(outcome.merges.get(0).unwrap().merged, "ab");
//! assert_eq!(outcome.stop_reason, StopReason::TargetReached);
//! # Ok::<(), subtok_core::TokenizerError>(())
//! ```

pub use subtok_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    build_alphabet, BpeTrainer, MergeLearner, MergeStep, PairFrequencies, SplitState,
    StopReason, TrainingConfig, TrainingOutcome, WordFrequencies,
};
