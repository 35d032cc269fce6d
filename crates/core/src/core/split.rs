//! Word and character splitting shared by training and segmentation.
//!
//! Words are delimited by the single space character only. Runs of spaces,
//! leading and trailing spaces produce no empty words.

use compact_str::CompactString;

/// The only word delimiter recognised by the tokenizer.
pub const WORD_DELIMITER: char = ' ';

/// Split a line into its space-delimited words, skipping empty segments.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(WORD_DELIMITER).filter(|word| !word.is_empty())
}

/// The one-character token for `c`.
#[inline]
pub fn char_token(c: char) -> CompactString {
    let mut buf = [0u8; 4];
    CompactString::new(c.encode_utf8(&mut buf))
}

/// Initial split of a word: one token per character.
pub fn split_chars(word: &str) -> Vec<CompactString> {
    word.chars().map(char_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        let words: Vec<_> = split_words("ab ab  cd ").collect();
        assert_eq!(words, vec!["ab", "ab", "cd"]);
    }

    #[test]
    fn test_split_words_only_spaces() {
        assert_eq!(split_words("   ").count(), 0);
        assert_eq!(split_words("").count(), 0);
    }

    #[test]
    fn test_tabs_are_not_delimiters() {
        let words: Vec<_> = split_words("a\tb c").collect();
        assert_eq!(words, vec!["a\tb", "c"]);
    }

    #[test]
    fn test_split_chars_multibyte() {
        let split = split_chars("añ漢");
        assert_eq!(split, vec!["a", "ñ", "漢"]);
        assert_eq!(char_token('é'), "é");
    }
}
