//! Corpus loading.

use std::fs;
use std::path::Path;
use subtok_core::{Result, TokenizerError};

/// Read a UTF-8 text file into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped; no other normalization is
/// applied, so empty lines are kept.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
    Ok(split_lines(&text))
}

/// Split text into lines without their terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ab ab\r\n\ncd\n").unwrap();

        let lines = read_corpus(file.path()).unwrap();
        assert_eq!(lines, vec!["ab ab", "", "cd"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        match read_corpus(&missing) {
            Err(TokenizerError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("no newline"), vec!["no newline"]);
    }
}
