//! Unknown-character handling.
//!
//! Characters outside the trained alphabet cut the text into segments. Each
//! such character later becomes one unknown token between its neighbouring
//! segments, and merges never cross a segment boundary.

/// Cut `text` at every character rejected by `is_known`.
///
/// The rejected characters are dropped and empty segments are kept, so `n`
/// unknown characters always produce `n + 1` segments. Boundaries come from
/// the characters themselves, never from searching for the unknown token's
/// text, so the result does not depend on how that token is spelled.
pub fn split_unknown<F>(text: &str, is_known: F) -> Vec<&str>
where
    F: Fn(char) -> bool,
{
    text.split(|c: char| !is_known(c)).collect()
}
