//! BPE trainer implementation.
//!
//! Every iteration recounts all adjacent pairs, merges the most frequent one in
//! every word and records the merge rule. Training stops when the vocabulary
//! reaches its target size, when no adjacent pair is left, or when the optional
//! merge limit is hit.

use super::counter::{build_alphabet, PairFrequencies, SplitState, WordFrequencies};
use log::{debug, info, warn};
use std::fmt;
use subtok_core::{MergeRule, MergeRules, Vocabulary};

/// Configuration for BPE training.
///
/// The target vocabulary size lives in the [`Vocabulary`] itself.
#[derive(Debug, Clone, Default)]
pub struct TrainingConfig {
    /// Stop after this many merges even if the target size was not reached
    pub max_merges: Option<usize>,
}

/// Why training stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The vocabulary reached its target size
    TargetReached,
    /// No adjacent pair was left to merge
    PairsExhausted,
    /// The configured merge limit was hit
    MergeLimit,
    /// Special tokens plus the corpus alphabet already exceed the target size
    AlphabetOverflow,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            StopReason::TargetReached => "target size reached",
            StopReason::PairsExhausted => "no pairs left to merge",
            StopReason::MergeLimit => "merge limit reached",
            StopReason::AlphabetOverflow => "alphabet exceeds target size",
        };
        f.write_str(reason)
    }
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// Merge rules in learned order
    pub merges: MergeRules,
    /// Whether the vocabulary ended at exactly its target size
    pub reached_target: bool,
    pub stop_reason: StopReason,
    /// Number of merge iterations performed
    pub iterations: usize,
    /// Alphabet size after reading the corpus
    pub alphabet_size: usize,
    /// Number of distinct words in the corpus
    pub word_count: usize,
}

/// One merge step of the learner.
#[derive(Debug, Clone)]
pub struct MergeStep {
    pub rule: MergeRule,
    /// Frequency-weighted count of the merged pair
    pub count: u64,
    /// Whether the merged token was new to the vocabulary
    pub inserted: bool,
}

/// The iterative merge loop over one corpus.
///
/// Owns the word splits for the duration of training; only the merge rules
/// survive it.
pub struct MergeLearner {
    word_freqs: WordFrequencies,
    splits: SplitState,
    merges: MergeRules,
}

impl MergeLearner {
    pub fn new(word_freqs: WordFrequencies) -> Self {
        let splits = word_freqs.make_splits();
        Self {
            word_freqs,
            splits,
            merges: MergeRules::new(),
        }
    }

    /// Perform one training iteration.
    ///
    /// Returns `None` when no adjacent pair is left.
    pub fn step(&mut self, vocab: &mut Vocabulary) -> Option<MergeStep> {
        let pairs = PairFrequencies::compute(&self.word_freqs, &self.splits);
        let best = pairs.most_frequent()?;

        let rule = MergeRule::new(best.pair.0, best.pair.1);
        self.splits.merge(&rule);
        let inserted = vocab.insert(&rule.merged);
        self.merges.push(rule.clone());

        Some(MergeStep {
            rule,
            count: best.count,
            inserted,
        })
    }

    pub fn splits(&self) -> &SplitState {
        &self.splits
    }

    pub fn word_freqs(&self) -> &WordFrequencies {
        &self.word_freqs
    }

    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    pub fn into_merges(self) -> MergeRules {
        self.merges
    }
}

/// BPE trainer.
///
/// Learns merge rules from a corpus of lines, growing the given vocabulary.
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a trainer that stops after at most `max_merges` merges.
    pub fn with_max_merges(max_merges: usize) -> Self {
        Self::new(TrainingConfig {
            max_merges: Some(max_merges),
        })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on the given corpus lines.
    ///
    /// Adds the corpus alphabet and every merged token to `vocab`.
    pub fn train<S: AsRef<str>>(&self, vocab: &mut Vocabulary, corpus: &[S]) -> TrainingOutcome {
        build_alphabet(vocab, corpus);
        let word_freqs = WordFrequencies::from_corpus(corpus);
        let word_count = word_freqs.len();

        info!(
            "Training on {} lines: {} distinct words, alphabet of {}, vocabulary {}/{}",
            corpus.len(),
            word_count,
            vocab.alphabet_len(),
            vocab.len(),
            vocab.target_size()
        );

        let mut learner = MergeLearner::new(word_freqs);
        let mut iterations = 0;

        let stop_reason = loop {
            if vocab.len() > vocab.target_size() {
                break StopReason::AlphabetOverflow;
            }
            if vocab.is_full() {
                break StopReason::TargetReached;
            }
            if self.config.max_merges.is_some_and(|max| iterations >= max) {
                break StopReason::MergeLimit;
            }

            let step = match learner.step(vocab) {
                Some(step) => step,
                None => break StopReason::PairsExhausted,
            };
            iterations += 1;

            debug!(
                "merge {}: {} (count {}, vocabulary {})",
                iterations,
                step.rule,
                step.count,
                vocab.len()
            );
            if !step.inserted {
                debug!("merged token {:?} was already in the vocabulary", step.rule.merged);
            }
        };

        let reached_target = vocab.len() == vocab.target_size();
        match stop_reason {
            StopReason::AlphabetOverflow => warn!(
                "Special tokens and alphabet already hold {} tokens, above target {}; no merges learned",
                vocab.len(),
                vocab.target_size()
            ),
            StopReason::PairsExhausted => warn!(
                "No pairs left to merge after {} merges; vocabulary {} is below target {}",
                iterations,
                vocab.len(),
                vocab.target_size()
            ),
            _ => info!(
                "Training finished ({}) after {} merges; vocabulary {}/{}",
                stop_reason,
                iterations,
                vocab.len(),
                vocab.target_size()
            ),
        }

        TrainingOutcome {
            merges: learner.into_merges(),
            reached_target,
            stop_reason,
            iterations,
            alphabet_size: vocab.alphabet_len(),
            word_count,
        }
    }
}
