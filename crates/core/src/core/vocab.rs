//! Vocabulary storage and membership.
//!
//! The vocabulary remembers the order in which tokens were inserted; that order
//! is the id order handed to the [`Codec`](crate::Codec).

use super::split::char_token;
use crate::error::{Result, TokenizerError};
use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Reverse mapping: ID -> token string
pub type VocabR = AHashMap<u32, CompactString>;

/// Configuration for special tokens.
///
/// All of these are inserted into the vocabulary before any character or merge,
/// in field order, and are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTokensConfig {
    /// Replaces characters outside the trained alphabet
    #[serde(rename = "unk_token", alias = "unk")]
    pub unk: String,
    /// End of text marker
    #[serde(rename = "eof_token", alias = "eof")]
    pub eof: String,
    /// Separator between words of a segment
    #[serde(rename = "pad_token", alias = "pad")]
    pub pad: String,
    /// Additional reserved tokens
    #[serde(rename = "extra_tokens", alias = "extra")]
    pub extra: Vec<String>,
}

impl Default for SpecialTokensConfig {
    fn default() -> Self {
        Self {
            unk: "[UNK]".to_string(),
            eof: "<|endoftext|>".to_string(),
            pad: "<PAD>".to_string(),
            extra: vec!["<extra_token_id_0>".to_string()],
        }
    }
}

/// Special token strings cached for fast access.
#[derive(Debug, Clone)]
pub struct SpecialTokens {
    pub unk: CompactString,
    pub eof: CompactString,
    pub pad: CompactString,
    pub extra: Vec<CompactString>,
}

impl SpecialTokens {
    /// Check if a token is one of the special tokens.
    pub fn is_special(&self, token: &str) -> bool {
        self.unk == token
            || self.eof == token
            || self.pad == token
            || self.extra.iter().any(|t| t == token)
    }
}

/// The token universe of a training session.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Size at which training stops
    target_size: usize,
    /// Tokens in insertion order
    tokens: Vec<CompactString>,
    /// Membership index over `tokens`
    members: AHashSet<CompactString>,
    /// Characters seen while building the alphabet
    alphabet: AHashSet<char>,
    /// Special tokens
    special: SpecialTokens,
}

impl Vocabulary {
    /// Create a vocabulary holding only the special tokens.
    ///
    /// Fails with [`TokenizerError::InvalidConfig`] if `target_size` is zero, a
    /// special token is empty, or `target_size` does not exceed the number of
    /// distinct special tokens.
    pub fn new(target_size: usize, special: SpecialTokensConfig) -> Result<Self> {
        if target_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "target vocabulary size must be positive".to_string(),
            ));
        }

        let named = [
            ("unk", &special.unk),
            ("eof", &special.eof),
            ("pad", &special.pad),
        ];
        for (name, token) in named {
            if token.is_empty() {
                return Err(TokenizerError::InvalidConfig(format!(
                    "{} token must not be empty",
                    name
                )));
            }
        }
        if special.extra.iter().any(|t| t.is_empty()) {
            return Err(TokenizerError::InvalidConfig(
                "extra tokens must not be empty".to_string(),
            ));
        }

        let mut vocab = Self {
            target_size,
            tokens: Vec::with_capacity(target_size),
            members: AHashSet::with_capacity(target_size),
            alphabet: AHashSet::new(),
            special: SpecialTokens {
                unk: CompactString::new(&special.unk),
                eof: CompactString::new(&special.eof),
                pad: CompactString::new(&special.pad),
                extra: special.extra.iter().map(CompactString::new).collect(),
            },
        };

        vocab.insert(&special.unk);
        vocab.insert(&special.eof);
        vocab.insert(&special.pad);
        for token in &special.extra {
            vocab.insert(token);
        }

        if target_size <= vocab.len() {
            return Err(TokenizerError::InvalidConfig(format!(
                "target vocabulary size {} must exceed the {} special tokens",
                target_size,
                vocab.len()
            )));
        }

        Ok(vocab)
    }

    /// Add a token if absent.
    ///
    /// Returns `true` if the token was new.
    pub fn insert(&mut self, token: &str) -> bool {
        if self.members.contains(token) {
            return false;
        }
        let token = CompactString::new(token);
        self.members.insert(token.clone());
        self.tokens.push(token);
        true
    }

    /// Record a character in the alphabet and insert its one-character token.
    ///
    /// Returns `true` if the character was not yet part of the alphabet.
    pub fn add_char(&mut self, c: char) -> bool {
        if !self.alphabet.insert(c) {
            return false;
        }
        self.insert(&char_token(c));
        true
    }

    /// Check whether `token` is in the vocabulary.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    /// Check whether `c` belongs to the trained alphabet.
    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    /// Current number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Whether the vocabulary has reached its target size.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.target_size
    }

    /// Number of characters in the alphabet.
    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = &CompactString> + '_ {
        self.tokens.iter()
    }

    #[inline]
    pub fn special(&self) -> &SpecialTokens {
        &self.special
    }

    #[inline]
    pub fn unk(&self) -> &str {
        &self.special.unk
    }

    #[inline]
    pub fn eof(&self) -> &str {
        &self.special.eof
    }

    #[inline]
    pub fn pad(&self) -> &str {
        &self.special.pad
    }

    pub fn extra(&self) -> &[CompactString] {
        &self.special.extra
    }

    /// Check if a token is one of the special tokens.
    pub fn is_special(&self, token: &str) -> bool {
        self.special.is_special(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specials() -> SpecialTokensConfig {
        SpecialTokensConfig {
            unk: "<unk>".to_string(),
            eof: "<eof>".to_string(),
            pad: "<pad>".to_string(),
            extra: vec!["<x0>".to_string(), "<x1>".to_string()],
        }
    }

    #[test]
    fn test_specials_inserted_first() {
        let vocab = Vocabulary::new(10, specials()).unwrap();
        let tokens: Vec<&str> = vocab.tokens().map(|t| t.as_str()).collect();
        assert_eq!(tokens, vec!["<unk>", "<eof>", "<pad>", "<x0>", "<x1>"]);
        assert_eq!(vocab.len(), 5);
        assert!(vocab.is_special("<x1>"));
        assert!(!vocab.is_special("a"));
    }

    #[test]
    fn test_default_specials() {
        let vocab = Vocabulary::new(100, SpecialTokensConfig::default()).unwrap();
        assert_eq!(vocab.unk(), "[UNK]");
        assert_eq!(vocab.eof(), "<|endoftext|>");
        assert_eq!(vocab.pad(), "<PAD>");
        assert_eq!(vocab.extra().len(), 1);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_zero_target_rejected() {
        let err = Vocabulary::new(0, specials()).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_target_must_exceed_specials() {
        assert!(matches!(
            Vocabulary::new(5, specials()),
            Err(TokenizerError::InvalidConfig(_))
        ));
        assert!(Vocabulary::new(6, specials()).is_ok());
    }

    #[test]
    fn test_duplicate_specials_counted_once() {
        let config = SpecialTokensConfig {
            extra: vec!["<pad>".to_string()],
            ..specials()
        };
        let vocab = Vocabulary::new(4, config).unwrap();
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_empty_special_rejected() {
        let config = SpecialTokensConfig {
            unk: String::new(),
            ..specials()
        };
        assert!(matches!(
            Vocabulary::new(10, config),
            Err(TokenizerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut vocab = Vocabulary::new(10, specials()).unwrap();
        assert!(vocab.insert("ab"));
        assert!(!vocab.insert("ab"));
        assert_eq!(vocab.len(), 6);
        assert!(vocab.contains("ab"));
    }

    #[test]
    fn test_add_char() {
        let mut vocab = Vocabulary::new(10, specials()).unwrap();
        assert!(vocab.add_char('a'));
        assert!(!vocab.add_char('a'));
        assert!(vocab.contains_char('a'));
        assert!(vocab.contains("a"));
        assert!(!vocab.contains_char('b'));
        assert_eq!(vocab.alphabet_len(), 1);
    }

    #[test]
    fn test_is_full() {
        let mut vocab = Vocabulary::new(6, specials()).unwrap();
        assert!(!vocab.is_full());
        vocab.insert("a");
        assert!(vocab.is_full());
        assert_eq!(vocab.target_size(), 6);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SpecialTokensConfig =
            serde_json::from_str(r#"{"unk_token": "?", "extra_tokens": []}"#).unwrap();
        assert_eq!(config.unk, "?");
        assert_eq!(config.pad, "<PAD>");
        assert!(config.extra.is_empty());

        let short: SpecialTokensConfig = serde_json::from_str(r#"{"pad": "_"}"#).unwrap();
        assert_eq!(short.pad, "_");
    }
}
