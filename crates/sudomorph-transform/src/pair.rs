//! Permutation pairs over the index set 1-9.

use std::collections::HashSet;

use tinyvec::TinyVec;

use crate::notation::NotationError;

/// A `(from, to)` index mapping over 1-9.
///
/// A sequence of pairs models a partial function on the index set: indices
/// that appear in no pair keep their identity mapping. Whether a sequence
/// forms a true permutation is checked separately by
/// [`validate_permutation`]; the transform engine applies sequences as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermutationPair {
    /// Source index (1-9).
    pub from: u8,
    /// Destination index (1-9).
    pub to: u8,
}

impl PermutationPair {
    /// Creates a pair, checking both indices.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not in the range 1-9.
    #[must_use]
    pub fn new(from: u8, to: u8) -> Self {
        assert!((1..=9).contains(&from), "Invalid source index: {from}");
        assert!((1..=9).contains(&to), "Invalid destination index: {to}");
        Self { from, to }
    }
}

/// A sequence of permutation pairs.
///
/// A full permutation of 1-9 needs at most nine pairs, so the sequence
/// stays inline for every realistic input and spills to the heap only for
/// degenerate ones (for example repeated pairs in a long pair list).
pub type PairSeq = TinyVec<[PermutationPair; 9]>;

/// Checks whether a pair sequence can be read as a permutation.
///
/// This check is advisory: the transform engine never performs it, so that
/// deliberately non-bijective relabelings remain applicable. Callers that
/// want permutation semantics (row and column permutations in particular)
/// gate on it before applying.
///
/// # Errors
///
/// Returns [`NotationError::DuplicateSource`] if any source index appears in
/// more than one pair, or [`NotationError::DuplicateDestination`] if any
/// destination index does.
///
/// # Examples
///
/// ```
/// use sudomorph_transform::{PermutationPair, validate_permutation};
///
/// let swap = [PermutationPair::new(1, 2), PermutationPair::new(2, 1)];
/// assert!(validate_permutation(&swap).is_ok());
///
/// let collapse = [PermutationPair::new(1, 3), PermutationPair::new(2, 3)];
/// assert_eq!(
///     validate_permutation(&collapse).unwrap_err().to_string(),
///     "Each destination index can only appear once."
/// );
/// ```
pub fn validate_permutation(pairs: &[PermutationPair]) -> Result<(), NotationError> {
    let mut sources = HashSet::new();
    for pair in pairs {
        if !sources.insert(pair.from) {
            return Err(NotationError::DuplicateSource);
        }
    }
    let mut destinations = HashSet::new();
    for pair in pairs {
        if !destinations.insert(pair.to) {
            return Err(NotationError::DuplicateDestination);
        }
    }
    Ok(())
}
