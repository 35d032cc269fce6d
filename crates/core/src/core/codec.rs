//! Bidirectional token <-> id mapping.
//!
//! Ids are assigned consecutively from 0 in vocabulary insertion order and are
//! never reused or renumbered.

use super::vocab::{Vocab, VocabR, Vocabulary};
use crate::error::{Result, TokenizerError};
use compact_str::CompactString;

#[derive(Debug, Clone, Default)]
pub struct Codec {
    /// Forward mapping: token string -> ID
    token_to_id: Vocab,
    /// Reverse mapping: ID -> token string
    id_to_token: VocabR,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number every token of `vocab` in insertion order.
    pub fn from_vocabulary(vocab: &Vocabulary) -> Self {
        let mut codec = Self {
            token_to_id: Vocab::with_capacity(vocab.len()),
            id_to_token: VocabR::with_capacity(vocab.len()),
        };
        codec.extend_from(vocab);
        codec
    }

    /// Append tokens of `vocab` that have no id yet.
    ///
    /// Returns the number of ids assigned.
    pub fn extend_from(&mut self, vocab: &Vocabulary) -> usize {
        let before = self.len();
        for token in vocab.tokens() {
            self.insert(token);
        }
        self.len() - before
    }

    /// Assign the next id to `token` unless it already has one.
    pub fn insert(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }

        let token = CompactString::new(token);
        let id = self.token_to_id.len() as u32;
        self.id_to_token.insert(id, token.clone());
        self.token_to_id.insert(token, id);
        id
    }

    #[inline]
    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    #[inline]
    pub fn token_of(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(&id).map(|s| s.as_str())
    }

    /// Map tokens to ids.
    ///
    /// Fails with [`TokenizerError::UnknownToken`] on the first token without an id.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u32>> {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                self.id_of(token)
                    .ok_or_else(|| TokenizerError::UnknownToken(token.to_string()))
            })
            .collect()
    }

    /// Map ids back to tokens.
    ///
    /// Fails with [`TokenizerError::UnknownId`] on the first id never assigned.
    pub fn decode(&self, ids: &[u32]) -> Result<Vec<CompactString>> {
        ids.iter()
            .map(|&id| {
                self.id_to_token
                    .get(&id)
                    .cloned()
                    .ok_or(TokenizerError::UnknownId(id))
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocab::SpecialTokensConfig;

    fn vocab() -> Vocabulary {
        let mut vocab = Vocabulary::new(
            20,
            SpecialTokensConfig {
                unk: "<unk>".to_string(),
                eof: "<eof>".to_string(),
                pad: "<pad>".to_string(),
                extra: Vec::new(),
            },
        )
        .unwrap();
        vocab.add_char('h');
        vocab.add_char('i');
        vocab.insert("hi");
        vocab
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let codec = Codec::from_vocabulary(&vocab());
        assert_eq!(codec.id_of("<unk>"), Some(0));
        assert_eq!(codec.id_of("<eof>"), Some(1));
        assert_eq!(codec.id_of("<pad>"), Some(2));
        assert_eq!(codec.id_of("h"), Some(3));
        assert_eq!(codec.id_of("i"), Some(4));
        assert_eq!(codec.id_of("hi"), Some(5));
        assert_eq!(codec.token_of(5), Some("hi"));
        assert_eq!(codec.len(), 6);
    }

    #[test]
    fn test_encode_decode() {
        let codec = Codec::from_vocabulary(&vocab());
        let ids = codec.encode(&["hi", "<pad>", "h"]).unwrap();
        assert_eq!(ids, vec![5, 2, 3]);
        let tokens = codec.decode(&ids).unwrap();
        assert_eq!(tokens, vec!["hi", "<pad>", "h"]);
    }

    #[test]
    fn test_encode_unknown_token() {
        let codec = Codec::from_vocabulary(&vocab());
        let err = codec.encode(&["h", "zz"]).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownToken(ref t) if t == "zz"));
        // A failed lookup must not fabricate an entry.
        assert_eq!(codec.id_of("zz"), None);
        assert_eq!(codec.len(), 6);
    }

    #[test]
    fn test_decode_unknown_id() {
        let codec = Codec::from_vocabulary(&vocab());
        let err = codec.decode(&[0, 99]).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownId(99)));
    }

    #[test]
    fn test_extend_is_append_only() {
        let mut vocab = vocab();
        let mut codec = Codec::from_vocabulary(&vocab);
        vocab.insert("ih");
        assert_eq!(codec.extend_from(&vocab), 1);
        assert_eq!(codec.id_of("ih"), Some(6));
        assert_eq!(codec.id_of("hi"), Some(5));
        assert_eq!(codec.extend_from(&vocab), 0);
    }

    #[test]
    fn test_insert_existing() {
        let mut codec = Codec::new();
        assert_eq!(codec.insert("a"), 0);
        assert_eq!(codec.insert("b"), 1);
        assert_eq!(codec.insert("a"), 0);
        assert!(!codec.is_empty());
    }
}
