//! Word segmentation cache.
//!
//! Natural text repeats the same words constantly, so the merged split of each
//! word is memoized in a small LRU cache owned by the caller.

use ahash::AHashMap;
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Default number of cached words.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// LRU cache from a word to its post-merge token split.
///
/// Every lookup stamps the entry with a fresh generation number; the entry
/// with the smallest stamp is the least recently used. A capacity of zero
/// disables caching.
#[derive(Debug, Clone)]
pub struct WordCache {
    /// Word -> (merged tokens, last-use generation)
    cache: AHashMap<CompactString, (Vec<CompactString>, u64)>,
    /// Last-use generation -> word, oldest first
    order: BTreeMap<u64, CompactString>,
    /// Maximum number of entries
    capacity: usize,
    generation: u64,
    hits: u64,
    misses: u64,
}

impl WordCache {
    /// Create a cache holding at most `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: AHashMap::with_capacity(capacity),
            order: BTreeMap::new(),
            capacity,
            generation: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Get the cached split of `word` or compute and remember it.
    pub fn get_or_insert_with<F>(&mut self, word: &str, segment: F) -> Vec<CompactString>
    where
        F: FnOnce(&str) -> Vec<CompactString>,
    {
        self.generation += 1;
        let generation = self.generation;

        if let Some((tokens, stamp)) = self.cache.get_mut(word) {
            let previous = std::mem::replace(stamp, generation);
            let tokens = tokens.clone();
            if let Some(key) = self.order.remove(&previous) {
                self.order.insert(generation, key);
            }
            self.hits += 1;
            return tokens;
        }

        self.misses += 1;
        let tokens = segment(word);
        if self.capacity > 0 {
            self.insert(CompactString::new(word), tokens.clone(), generation);
        }
        tokens
    }

    fn insert(&mut self, key: CompactString, value: Vec<CompactString>, generation: u64) {
        while self.cache.len() >= self.capacity {
            match self.order.pop_first() {
                Some((_, oldest)) => {
                    self.cache.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.insert(generation, key.clone());
        self.cache.insert(key, (value, generation));
    }

    /// Check whether `word` is cached without touching it.
    pub fn contains(&self, word: &str) -> bool {
        self.cache.contains_key(word)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.order.clear();
        self.generation = 0;
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        CacheStats {
            entries: self.cache.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            hit_rate: if lookups == 0 {
                None
            } else {
                Some(self.hits as f64 / lookups as f64)
            },
        }
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Maximum capacity
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    /// Hits over lookups, `None` before the first lookup
    pub hit_rate: Option<f64>,
}
