//! Pre-tokenization applied before merges.
//!
//! Word splitting itself lives in `subtok_core::split_words`; this module only
//! handles characters the vocabulary has never seen.

pub mod unknown;

pub use unknown::split_unknown;
