//! Utility modules for the tokenizer.

pub mod cache;

pub use cache::{CacheStats, WordCache, DEFAULT_CACHE_CAPACITY};
