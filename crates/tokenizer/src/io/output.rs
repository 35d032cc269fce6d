//! Encoded output: one bracketed id line per input line.

use crate::utils::WordCache;
use crate::Tokenizer;
use log::{info, trace};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use subtok_core::{Result, TokenizerError};

/// Prefix of the default output file name.
pub const OUTPUT_PREFIX: &str = "tokenized_";

/// Format ids as `[12 7 45 3]`.
pub fn format_ids(ids: &[u32]) -> String {
    let mut out = String::with_capacity(ids.len() * 4 + 2);
    out.push('[');
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&id.to_string());
    }
    out.push(']');
    out
}

/// Tokenize and encode every line, writing one formatted id line each.
///
/// Returns the number of lines written.
pub fn write_encoded_lines<S, W>(tokenizer: &Tokenizer, lines: &[S], mut writer: W) -> Result<usize>
where
    S: AsRef<str>,
    W: Write,
{
    let mut cache = WordCache::new();
    for (i, line) in lines.iter().enumerate() {
        let encoding = tokenizer.encode_text_with_cache(line.as_ref(), &mut cache)?;
        trace!("line {}: {} tokens", i + 1, encoding.len());
        writeln!(writer, "{}", format_ids(&encoding.ids))?;
    }
    writer.flush()?;
    Ok(lines.len())
}

/// Default output path: `tokenized_<name>` next to `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", OUTPUT_PREFIX, name))
}

/// Encode every line of `input` into `output`.
///
/// Returns the number of lines written.
pub fn encode_file(tokenizer: &Tokenizer, input: &Path, output: &Path) -> Result<usize> {
    let lines = super::read_corpus(input)?;
    let file = File::create(output).map_err(|e| TokenizerError::io(output, e))?;

    let written = write_encoded_lines(tokenizer, &lines, BufWriter::new(file))?;
    info!(
        "Encoded {} lines from {} into {}",
        written,
        input.display(),
        output.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tokenizer() -> Tokenizer {
        let mut tokenizer = Tokenizer::builder().vocab_size(10).build().unwrap();
        tokenizer.train(&["ab ab ab", "ab cd"]).unwrap();
        tokenizer
    }

    #[test]
    fn test_format_ids() {
        assert_eq!(format_ids(&[12, 7, 45, 3]), "[12 7 45 3]");
        assert_eq!(format_ids(&[0]), "[0]");
        assert_eq!(format_ids(&[]), "[]");
    }

    #[test]
    fn test_write_encoded_lines() {
        let tokenizer = tokenizer();
        let mut out = Vec::new();

        let written = write_encoded_lines(&tokenizer, &["ab cd", "", "a?"], &mut out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "[9 2 7 8]\n[]\n[4 0]\n");
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/corpus.txt")),
            PathBuf::from("data/tokenized_corpus.txt")
        );
        assert_eq!(
            default_output_path(Path::new("input")),
            PathBuf::from("tokenized_input")
        );
    }

    #[test]
    fn test_encode_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("text.txt");
        fs::write(&input, "ab\ncd ab\n").unwrap();
        let output = default_output_path(&input);

        let written = encode_file(&tokenizer(), &input, &output).unwrap();
        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "[9]\n[7 8 2 9]\n");
    }

    #[test]
    fn test_encode_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = encode_file(
            &tokenizer(),
            &dir.path().join("nope.txt"),
            &dir.path().join("out.txt"),
        );
        assert!(matches!(result, Err(TokenizerError::Io { .. })));
    }
}
