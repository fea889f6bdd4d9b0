//! Structural board transforms for the Sudomorph puzzle toolkit.
//!
//! Two 9×9 puzzles can be related by a structural transform: relabeling the
//! digits, permuting rows or columns, rotating, transposing, or mirroring
//! the board. This crate provides the pieces needed to explore that
//! relationship:
//!
//! - [`pair`]: [`PermutationPair`] index mappings over 1-9 and the advisory
//!   [`validate_permutation`] check.
//! - [`notation`]: the two user-facing grammars that produce pairs — comma
//!   separated pair lists (`"6 8,5-7"`) and cycle notation (`"(1 2 3)(4 5)"`).
//! - [`engine`]: the ordered transform pipeline described by a
//!   [`TransformSpec`], applied with [`apply_full`] (all steps) or
//!   [`apply_spatial`] (position-changing steps only).
//!
//! Applying and validating are deliberately separate: the engine applies
//! row/column/relabel mappings as-is even when they are not true
//! permutations, and callers that want permutation semantics gate on
//! [`validate_permutation`] first.
//!
//! # Examples
//!
//! ```
//! use sudomorph_core::Grid;
//! use sudomorph_transform::{TransformSpec, apply_full, parse_cycles};
//!
//! let mut grid = Grid::new();
//! grid.set(0, 0, 5);
//!
//! let spec = TransformSpec {
//!     shift: 2,
//!     row_pairs: parse_cycles("(1 2)")?,
//!     ..TransformSpec::default()
//! };
//!
//! // The 5 shifts to 7 and its row swaps with row 2.
//! let transformed = apply_full(&grid, &spec);
//! assert_eq!(transformed.get(1, 0), 7);
//! assert_eq!(transformed.get(0, 0), 0);
//! # Ok::<(), sudomorph_transform::NotationError>(())
//! ```

pub mod engine;
pub mod notation;
pub mod pair;

pub use self::{
    engine::{
        Mirror, Rotation, TransformSpec, apply_full, apply_spatial, mirror, permute_cols,
        permute_rows, relabel_values, rotate, shift_values, transpose,
    },
    notation::{NotationError, parse_cycles, parse_pair_list},
    pair::{PairSeq, PermutationPair, validate_permutation},
};
