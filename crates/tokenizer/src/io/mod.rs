//! File collaborators: corpus input and encoded-id output.
//!
//! The training and segmentation algorithms never touch the filesystem; the
//! helpers here feed them lines and write their results.

pub mod corpus;
pub mod output;

pub use corpus::{read_corpus, split_lines};
pub use output::{default_output_path, encode_file, format_ids, write_encoded_lines, OUTPUT_PREFIX};
