//! Merge rule management for BPE.
//!
//! Rules are kept in the order they were learned. That order is the rank of a
//! rule and the order in which rules are applied to new text.

use compact_str::CompactString;
use std::fmt;

/// An ordered pair of adjacent tokens.
pub type Pair = (CompactString, CompactString);

/// A learned instruction to coalesce `left` followed by `right` into `merged`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    pub left: CompactString,
    pub right: CompactString,
    pub merged: CompactString,
}

impl MergeRule {
    pub fn new(left: impl Into<CompactString>, right: impl Into<CompactString>) -> Self {
        let left = left.into();
        let right = right.into();
        let mut merged = CompactString::with_capacity(left.len() + right.len());
        merged.push_str(&left);
        merged.push_str(&right);
        Self {
            left,
            right,
            merged,
        }
    }

    pub fn pair(&self) -> Pair {
        (self.left.clone(), self.right.clone())
    }

    /// Merge every occurrence of the rule's pair in `symbols`.
    ///
    /// Single left-to-right pass; after a merge the scan continues after the
    /// merged entry, so `a a a` with `(a, a)` becomes `aa a`. Returns the number
    /// of merges performed.
    pub fn apply(&self, symbols: &mut Vec<CompactString>) -> usize {
        let len = symbols.len();
        let mut merged = 0;
        let mut read = 0;
        let mut write = 0;

        while read < len {
            if read + 1 < len && symbols[read] == self.left && symbols[read + 1] == self.right {
                symbols[write] = self.merged.clone();
                read += 2;
                merged += 1;
            } else {
                symbols.swap(write, read);
                read += 1;
            }
            write += 1;
        }

        symbols.truncate(write);
        merged
    }
}

impl fmt::Display for MergeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.left, self.right, self.merged)
    }
}

/// Collection of merge rules in learned order.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    rules: Vec<MergeRule>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
        }
    }

    /// Append a rule. Returns its rank.
    pub fn push(&mut self, rule: MergeRule) -> u32 {
        self.rules.push(rule);
        (self.rules.len() - 1) as u32
    }

    /// Rule at position `rank` in learned order.
    pub fn get(&self, rank: u32) -> Option<&MergeRule> {
        self.rules.get(rank as usize)
    }

    /// Apply every rule in learned order to a word's split.
    pub fn apply_all(&self, symbols: &mut Vec<CompactString>) {
        for rule in &self.rules {
            if symbols.len() < 2 {
                break;
            }
            rule.apply(symbols);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[MergeRule] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a MergeRules {
    type Item = &'a MergeRule;
    type IntoIter = std::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<MergeRule> for MergeRules {
    fn from_iter<I: IntoIterator<Item = MergeRule>>(iter: I) -> Self {
        let mut rules = Self::new();
        for rule in iter {
            rules.push(rule);
        }
        rules
    }
}
