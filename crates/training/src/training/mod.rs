//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the frequency model (alphabet, word and pair counts)
//! and the merge loop that learns BPE merge rules from text lines.

pub mod counter;
pub mod trainer;

pub use counter::{build_alphabet, PairFrequencies, SplitState, WordFrequencies};
pub use trainer::{
    BpeTrainer, MergeLearner, MergeStep, StopReason, TrainingConfig, TrainingOutcome,
};
