//! Segmentation of fresh text with learned merges.

use crate::pre_tokenizer::split_unknown;
use crate::utils::WordCache;
use compact_str::CompactString;
use subtok_core::{split_chars, split_words, MergeRules, Vocabulary};

/// Applies learned merge rules to text.
///
/// Borrows the vocabulary and merge list of a training session; it never
/// mutates either, so segmentation is a pure function of its input.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    vocab: &'a Vocabulary,
    merges: &'a MergeRules,
}

impl<'a> Segmenter<'a> {
    pub fn new(vocab: &'a Vocabulary, merges: &'a MergeRules) -> Self {
        Self { vocab, merges }
    }

    /// Segment `text` into vocabulary tokens.
    ///
    /// Untrained characters become the unknown token. Words within a segment
    /// are separated by the pad token and segments by the unknown token.
    pub fn tokenize(&self, text: &str) -> Vec<CompactString> {
        self.segment_with(text, |word| self.tokenize_word(word))
    }

    /// Same output as [`tokenize`](Self::tokenize), memoizing word splits.
    pub fn tokenize_with_cache(&self, text: &str, cache: &mut WordCache) -> Vec<CompactString> {
        self.segment_with(text, |word| {
            cache.get_or_insert_with(word, |w| self.tokenize_word(w))
        })
    }

    /// Split one word into characters and apply every merge in learned order.
    pub fn tokenize_word(&self, word: &str) -> Vec<CompactString> {
        let mut tokens = split_chars(word);
        self.merges.apply_all(&mut tokens);
        tokens
    }

    /// Tokens of one unknown-free segment, words joined by the pad token.
    pub fn tokenize_segment(&self, segment: &str) -> Vec<CompactString> {
        let mut tokens = Vec::new();
        self.push_segment(segment, &mut tokens, &mut |word: &str| {
            self.tokenize_word(word)
        });
        tokens
    }

    fn segment_with<F>(&self, text: &str, mut word_tokens: F) -> Vec<CompactString>
    where
        F: FnMut(&str) -> Vec<CompactString>,
    {
        let segments = split_unknown(text, |c| self.vocab.contains_char(c));

        let mut tokens = Vec::with_capacity(text.len());
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                tokens.push(self.vocab.special().unk.clone());
            }
            self.push_segment(segment, &mut tokens, &mut word_tokens);
        }
        tokens
    }

    fn push_segment<F>(&self, segment: &str, tokens: &mut Vec<CompactString>, word_tokens: &mut F)
    where
        F: FnMut(&str) -> Vec<CompactString>,
    {
        for (i, word) in split_words(segment).enumerate() {
            if i > 0 {
                tokens.push(self.vocab.special().pad.clone());
            }
            tokens.extend(word_tokens(word));
        }
    }
}
