//! Word and pair frequency counting for BPE training.
//!
//! Word counts are gathered once per corpus. Pair counts are derived from the
//! current word splits and rebuilt from scratch on every training iteration.

use ahash::AHashMap;
use compact_str::CompactString;
use std::collections::BTreeMap;
use subtok_core::{split_chars, split_words, MergeCandidate, MergeRule, Pair, Vocabulary};

/// Add every character of the corpus to the vocabulary's alphabet.
///
/// Characters are discovered top-to-bottom, left-to-right; that order fixes the
/// ids of the single-character tokens. Returns the number of new characters.
pub fn build_alphabet<S: AsRef<str>>(vocab: &mut Vocabulary, corpus: &[S]) -> usize {
    let mut added = 0;
    for line in corpus {
        for c in line.as_ref().chars() {
            if vocab.add_char(c) {
                added += 1;
            }
        }
    }
    added
}

/// Word -> occurrence count over a corpus, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    /// Distinct words
    words: Vec<CompactString>,
    /// Occurrence count of `words[i]`
    counts: Vec<u64>,
    /// Word -> position in `words`
    index: AHashMap<CompactString, usize>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the words of every corpus line.
    pub fn from_corpus<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut freqs = Self::new();
        for line in corpus {
            freqs.add_line(line.as_ref());
        }
        freqs
    }

    /// Count the space-delimited words of one line.
    pub fn add_line(&mut self, line: &str) {
        for word in split_words(line) {
            self.add_word(word);
        }
    }

    /// Count one occurrence of `word`.
    pub fn add_word(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.counts[pos] += 1;
            return;
        }

        let word = CompactString::new(word);
        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.counts.push(1);
    }

    /// Occurrence count of `word`.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&pos| self.counts[pos])
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of word occurrences.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Words with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words
            .iter()
            .zip(self.counts.iter())
            .map(|(word, &count)| (word.as_str(), count))
    }

    /// Split every distinct word into one token per character.
    pub fn make_splits(&self) -> SplitState {
        SplitState {
            words: self.words.clone(),
            splits: self.words.iter().map(|w| split_chars(w)).collect(),
            index: self.index.clone(),
        }
    }
}

/// Word -> current sequence of subword tokens.
///
/// Concatenating a word's split always yields the word itself.
#[derive(Debug, Clone, Default)]
pub struct SplitState {
    words: Vec<CompactString>,
    splits: Vec<Vec<CompactString>>,
    index: AHashMap<CompactString, usize>,
}

impl SplitState {
    /// Current split of `word`.
    pub fn get(&self, word: &str) -> Option<&[CompactString]> {
        self.index.get(word).map(|&pos| self.splits[pos].as_slice())
    }

    /// Merge the rule's pair in every word.
    ///
    /// Returns the number of merged occurrences across all words.
    pub fn merge(&mut self, rule: &MergeRule) -> usize {
        self.splits
            .iter_mut()
            .filter(|split| split.len() > 1)
            .map(|split| rule.apply(split))
            .sum()
    }

    /// Words with their current splits.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CompactString])> + '_ {
        self.words
            .iter()
            .zip(self.splits.iter())
            .map(|(word, split)| (word.as_str(), split.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Adjacent pair -> frequency-weighted count.
///
/// Ordered by pair so enumeration never depends on hashing.
#[derive(Debug, Clone, Default)]
pub struct PairFrequencies {
    counts: BTreeMap<Pair, u64>,
}

impl PairFrequencies {
    /// Count every adjacent pair of every split, weighted by the word's count.
    pub fn compute(word_freqs: &WordFrequencies, splits: &SplitState) -> Self {
        let mut counts: BTreeMap<Pair, u64> = BTreeMap::new();

        for (word, split) in splits.iter() {
            let freq = match word_freqs.get(word) {
                Some(freq) => freq,
                None => continue,
            };
            for window in split.windows(2) {
                let pair = (window[0].clone(), window[1].clone());
                *counts.entry(pair).or_insert(0) += freq;
            }
        }

        Self { counts }
    }

    /// Count of the pair `left` followed by `right`.
    pub fn get(&self, left: &str, right: &str) -> Option<u64> {
        self.counts
            .get(&(CompactString::new(left), CompactString::new(right)))
            .copied()
    }

    /// The pair to merge next: highest count, smallest pair on ties.
    pub fn most_frequent(&self) -> Option<MergeCandidate> {
        subtok_core::select_best(
            self.counts
                .iter()
                .map(|(pair, &count)| MergeCandidate::new(pair.clone(), count)),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pair, u64)> + '_ {
        self.counts.iter().map(|(pair, &count)| (pair, count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtok_core::SpecialTokensConfig;

    fn vocab() -> Vocabulary {
        Vocabulary::new(100, SpecialTokensConfig::default()).unwrap()
    }

    #[test]
    fn test_build_alphabet_discovery_order() {
        let mut vocab = vocab();
        let added = build_alphabet(&mut vocab, &["ba c", "ad"]);
        assert_eq!(added, 5);

        let tokens: Vec<&str> = vocab.tokens().skip(4).map(|t| t.as_str()).collect();
        assert_eq!(tokens, vec!["b", "a", " ", "c", "d"]);
        assert!(vocab.contains_char(' '));
    }

    #[test]
    fn test_build_alphabet_twice() {
        let mut vocab = vocab();
        build_alphabet(&mut vocab, &["abc"]);
        assert_eq!(build_alphabet(&mut vocab, &["cab"]), 0);
        assert_eq!(vocab.alphabet_len(), 3);
    }

    #[test]
    fn test_word_freqs() {
        let freqs = WordFrequencies::from_corpus(&["ab ab ab", "ab cd"]);
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs.get("ab"), Some(4));
        assert_eq!(freqs.get("cd"), Some(1));
        assert_eq!(freqs.get("ef"), None);
        assert_eq!(freqs.total(), 5);
    }

    #[test]
    fn test_word_freqs_ignore_empty_segments() {
        let freqs = WordFrequencies::from_corpus(&["  ab   ab ", " "]);
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs.get("ab"), Some(2));
    }

    #[test]
    fn test_word_freqs_first_seen_order() {
        let freqs = WordFrequencies::from_corpus(&["z y z", "x"]);
        let words: Vec<_> = freqs.iter().collect();
        assert_eq!(words, vec![("z", 2), ("y", 1), ("x", 1)]);
    }

    #[test]
    fn test_make_splits() {
        let freqs = WordFrequencies::from_corpus(&["héllo world"]);
        let splits = freqs.make_splits();
        assert_eq!(splits.len(), 2);
        assert_eq!(splits.get("héllo").unwrap(), &["h", "é", "l", "l", "o"]);
        assert!(splits.get("missing").is_none());
    }

    #[test]
    fn test_pair_freqs_weighted() {
        let freqs = WordFrequencies::from_corpus(&["ab ab ab", "ab cd"]);
        let splits = freqs.make_splits();
        let pairs = PairFrequencies::compute(&freqs, &splits);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get("a", "b"), Some(4));
        assert_eq!(pairs.get("c", "d"), Some(1));
        assert_eq!(pairs.get("b", "c"), None);
    }

    #[test]
    fn test_pair_repeated_within_word() {
        let freqs = WordFrequencies::from_corpus(&["abab abab"]);
        let splits = freqs.make_splits();
        let pairs = PairFrequencies::compute(&freqs, &splits);

        assert_eq!(pairs.get("a", "b"), Some(4));
        assert_eq!(pairs.get("b", "a"), Some(2));
    }

    #[test]
    fn test_pair_iteration_is_sorted() {
        let freqs = WordFrequencies::from_corpus(&["dcba"]);
        let pairs = PairFrequencies::compute(&freqs, &freqs.make_splits());
        let keys: Vec<String> = pairs
            .iter()
            .map(|(pair, _)| format!("{}{}", pair.0, pair.1))
            .collect();
        assert_eq!(keys, vec!["ba", "cb", "dc"]);
    }

    #[test]
    fn test_most_frequent_tie_break() {
        // "xy" and "ab" each occur twice; ("a", "b") sorts first.
        let freqs = WordFrequencies::from_corpus(&["xy ab xy ab"]);
        let pairs = PairFrequencies::compute(&freqs, &freqs.make_splits());
        let best = pairs.most_frequent().unwrap();
        assert_eq!(best.count, 2);
        assert_eq!(best.pair.0, "a");
        assert_eq!(best.pair.1, "b");
    }

    #[test]
    fn test_single_char_words_have_no_pairs() {
        let freqs = WordFrequencies::from_corpus(&["a b c a"]);
        let pairs = PairFrequencies::compute(&freqs, &freqs.make_splits());
        assert!(pairs.is_empty());
        assert!(pairs.most_frequent().is_none());
    }

    #[test]
    fn test_split_state_merge() {
        let freqs = WordFrequencies::from_corpus(&["aaa ab b"]);
        let mut splits = freqs.make_splits();
        let merged = splits.merge(&MergeRule::new("a", "a"));

        assert_eq!(merged, 1);
        assert_eq!(splits.get("aaa").unwrap(), &["aa", "a"]);
        assert_eq!(splits.get("ab").unwrap(), &["a", "b"]);
        assert_eq!(splits.get("b").unwrap(), &["b"]);
    }
}
