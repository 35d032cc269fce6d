//! Priority ordering of BPE merge candidates.
//!
//! The greatest [`MergeCandidate`] is the one training merges next: highest
//! count first, and among equal counts the lexicographically smallest pair.

use crate::core::merges::Pair;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of adjacent tokens to merge
    pub pair: Pair,
    /// Frequency-weighted occurrence count of the pair
    pub count: u64,
}

impl MergeCandidate {
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Pair order is reversed: the smaller pair wins a tie.
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the candidate training merges next.
pub fn select_best<I>(candidates: I) -> Option<MergeCandidate>
where
    I: IntoIterator<Item = MergeCandidate>,
{
    candidates.into_iter().max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn candidate(a: &str, b: &str, count: u64) -> MergeCandidate {
        MergeCandidate::new((CompactString::new(a), CompactString::new(b)), count)
    }

    #[test]
    fn test_higher_count_wins() {
        let best = select_best(vec![
            candidate("a", "b", 10),
            candidate("b", "c", 20),
            candidate("c", "d", 15),
        ])
        .unwrap();
        assert_eq!(best, candidate("b", "c", 20));
    }

    #[test]
    fn test_tie_goes_to_smallest_pair() {
        let best = select_best(vec![
            candidate("c", "d", 3),
            candidate("a", "z", 3),
            candidate("a", "b", 3),
            candidate("b", "a", 3),
        ])
        .unwrap();
        assert_eq!(best.pair.0, "a");
        assert_eq!(best.pair.1, "b");
    }

    #[test]
    fn test_tie_break_independent_of_input_order() {
        let forward = vec![candidate("x", "y", 2), candidate("ab", "c", 2)];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();
        assert_eq!(select_best(forward), select_best(backward));
    }

    #[test]
    fn test_empty() {
        assert!(select_best(Vec::new()).is_none());
    }
}
