//! Pluggable line-comparison strategies.
//!
//! The differ delegates the actual line comparison to a [`Comparator`].
//! [`TextComparator`] is the provided default, backed by the `similar` crate.

use similar::{Algorithm, DiffOp, TextDiff};

use crate::edit::{Edit, EditScript};

/// Line-comparison strategy for the blob differ.
///
/// Implementations receive both sides as already-validated text (the differ
/// handles absence and binary suppression before dispatching) and return the
/// ordered edit script transforming the old line sequence into the new one.
pub trait Comparator: Send + Sync {
    /// Compute the edit script between two line sequences.
    fn compare(&self, old: &str, new: &str) -> EditScript;
}

/// Diff algorithm used by [`TextComparator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiffAlgorithm {
    /// Myers' O(ND) algorithm.
    #[default]
    Myers,
    /// Patience diff: anchors on unique common lines.
    Patience,
    /// Longest common subsequence.
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Default comparator: line-oriented diff via the `similar` crate.
///
/// Produces the minimal ordered sequence of non-equal edits. For fixed
/// inputs and a fixed algorithm the output is exactly reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextComparator {
    algorithm: DiffAlgorithm,
}

impl TextComparator {
    /// Create a comparator using the given algorithm.
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The algorithm this comparator uses.
    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }
}

impl Comparator for TextComparator {
    fn compare(&self, old: &str, new: &str) -> EditScript {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_lines(old, new);
        diff.ops()
            .iter()
            .filter_map(|op| match *op {
                DiffOp::Equal { .. } => None,
                DiffOp::Delete {
                    old_index,
                    old_len,
                    new_index,
                } => Some(Edit::new(old_index, old_index + old_len, new_index, new_index)),
                DiffOp::Insert {
                    old_index,
                    new_index,
                    new_len,
                } => Some(Edit::new(old_index, old_index, new_index, new_index + new_len)),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => Some(Edit::new(
                    old_index,
                    old_index + old_len,
                    new_index,
                    new_index + new_len,
                )),
            })
            .collect()
    }
}
