//! The ordered transform pipeline.
//!
//! A [`TransformSpec`] describes one transform application as an immutable
//! value. [`apply_full`] runs all seven steps in a fixed order; the order is
//! observable (a shift followed by a row permutation is not the same board
//! as the reverse) and must not be rearranged:
//!
//! 1. digit shift
//! 2. manual digit relabel
//! 3. row permutation
//! 4. column permutation
//! 5. rotation
//! 6. transposition
//! 7. mirror
//!
//! [`apply_spatial`] runs only steps 3-7, the position-changing steps. It is
//! used to move *original* values into their transformed positions, which
//! lets a front end show "what used to be here" overlays after a relabeling
//! transform.
//!
//! Every step is a pure, total function; no validation happens here. Pair
//! sequences are applied with documented overwrite semantics even when they
//! are not true permutations — callers that want permutation semantics gate
//! on [`validate_permutation`](crate::validate_permutation) first.

use sudomorph_core::Grid;

use crate::pair::{PairSeq, PermutationPair};

/// A quarter-turn rotation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0,
    /// 90° clockwise.
    R90,
    /// 180°.
    R180,
    /// 270° clockwise (90° counter-clockwise).
    R270,
}

impl Rotation {
    /// Normalizes a degree count into a rotation.
    ///
    /// Any multiple of 90 is accepted, including negatives and values
    /// beyond a full turn; anything else is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudomorph_transform::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(450), Some(Rotation::R90));
    /// assert_eq!(Rotation::from_degrees(-90), Some(Rotation::R270));
    /// assert_eq!(Rotation::from_degrees(45), None);
    /// ```
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    /// Returns the rotation as degrees clockwise (0, 90, 180, or 270).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }
}

/// A mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mirror {
    /// No mirroring.
    #[default]
    None,
    /// Reverse each row's element order (flip across the vertical axis).
    Horizontal,
    /// Reverse the order of rows (flip across the horizontal axis).
    Vertical,
}

/// An immutable description of one transform application.
///
/// The default value is the identity transform. Specs are values: build one
/// per application, never mutate one in place while it is shared.
///
/// # Examples
///
/// ```
/// use sudomorph_core::Grid;
/// use sudomorph_transform::{Rotation, TransformSpec, apply_full};
///
/// let spec = TransformSpec {
///     rotation: Rotation::R180,
///     ..TransformSpec::default()
/// };
///
/// let mut grid = Grid::new();
/// grid.set(0, 0, 9);
/// assert_eq!(apply_full(&grid, &spec).get(8, 8), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformSpec {
    /// Amount added to every non-zero digit, wrapping within 1-9. Any
    /// integer is accepted and normalized.
    pub shift: i32,
    /// Manual digit relabeling pairs (values, not positions).
    pub relabel: PairSeq,
    /// Row permutation pairs (1-based row indices).
    pub row_pairs: PairSeq,
    /// Column permutation pairs (1-based column indices).
    pub col_pairs: PairSeq,
    /// Rotation step.
    pub rotation: Rotation,
    /// Whether to transpose after rotating.
    pub transpose: bool,
    /// Mirror step, applied last.
    pub mirror: Mirror,
}

/// Applies the full transform pipeline, value steps included.
#[must_use]
pub fn apply_full(grid: &Grid, spec: &TransformSpec) -> Grid {
    let grid = shift_values(grid, spec.shift);
    let grid = relabel_values(&grid, &spec.relabel);
    apply_positional(&grid, spec)
}

/// Applies only the position-changing steps (row/column permutation,
/// rotation, transposition, mirror), leaving every cell's value untouched.
#[must_use]
pub fn apply_spatial(grid: &Grid, spec: &TransformSpec) -> Grid {
    apply_positional(grid, spec)
}

fn apply_positional(grid: &Grid, spec: &TransformSpec) -> Grid {
    let grid = permute_rows(grid, &spec.row_pairs);
    let grid = permute_cols(&grid, &spec.col_pairs);
    let grid = rotate(&grid, spec.rotation);
    let grid = if spec.transpose {
        transpose(&grid)
    } else {
        grid
    };
    mirror(&grid, spec.mirror)
}

/// Shifts every non-zero digit by `amount`, wrapping within 1-9.
///
/// The amount is normalized into 0-8 first, so any integer (negative or
/// beyond a full cycle) is meaningful. Empty cells stay empty.
#[must_use]
pub fn shift_values(grid: &Grid, amount: i32) -> Grid {
    let shift = u8::try_from(amount.rem_euclid(9)).expect("rem_euclid(9) is in 0..9");
    let mut out = grid.clone();
    for row in 0..9 {
        for col in 0..9 {
            let value = grid.get(row, col);
            if value != 0 {
                out.set(row, col, (value - 1 + shift) % 9 + 1);
            }
        }
    }
    out
}

/// Replaces digit values according to `pairs`.
///
/// Later pairs sharing a source silently overwrite earlier ones. Values
/// named by no pair are left unchanged, and empty cells stay empty. The
/// mapping is applied as-is even when it is not bijective, so the result
/// may use some digit more than nine times.
#[must_use]
pub fn relabel_values(grid: &Grid, pairs: &[PermutationPair]) -> Grid {
    let mut mapping = [None::<u8>; 10];
    for pair in pairs {
        mapping[usize::from(pair.from)] = Some(pair.to);
    }

    let mut out = grid.clone();
    for row in 0..9 {
        for col in 0..9 {
            let value = grid.get(row, col);
            if value == 0 {
                continue;
            }
            if let Some(mapped) = mapping[usize::from(value)] {
                out.set(row, col, mapped);
            }
        }
    }
    out
}

/// Moves whole rows according to `pairs` (1-based indices).
///
/// Each pair copies row `from` of the *original* grid into slot `to` of the
/// result; rows named by no pair keep their pre-permutation content. Because
/// every copy reads the original snapshot, pairs never cascade, and later
/// pairs targeting the same destination overwrite earlier ones.
#[must_use]
pub fn permute_rows(grid: &Grid, pairs: &[PermutationPair]) -> Grid {
    let mut out = grid.clone();
    for pair in pairs {
        let from = usize::from(pair.from) - 1;
        let to = usize::from(pair.to) - 1;
        for col in 0..9 {
            out.set(to, col, grid.get(from, col));
        }
    }
    out
}

/// Moves whole columns according to `pairs` (1-based indices).
///
/// Same snapshot semantics as [`permute_rows`], column-wise.
#[must_use]
pub fn permute_cols(grid: &Grid, pairs: &[PermutationPair]) -> Grid {
    let mut out = grid.clone();
    for pair in pairs {
        let from = usize::from(pair.from) - 1;
        let to = usize::from(pair.to) - 1;
        for row in 0..9 {
            out.set(row, to, grid.get(row, from));
        }
    }
    out
}

/// Rotates the grid clockwise by a quarter-turn multiple.
#[must_use]
pub fn rotate(grid: &Grid, rotation: Rotation) -> Grid {
    let mut out = Grid::new();
    for row in 0..9 {
        for col in 0..9 {
            let value = match rotation {
                Rotation::R0 => grid.get(row, col),
                Rotation::R90 => grid.get(8 - col, row),
                Rotation::R180 => grid.get(8 - row, 8 - col),
                Rotation::R270 => grid.get(col, 8 - row),
            };
            out.set(row, col, value);
        }
    }
    out
}

/// Transposes the grid across its main diagonal.
#[must_use]
pub fn transpose(grid: &Grid) -> Grid {
    let mut out = Grid::new();
    for row in 0..9 {
        for col in 0..9 {
            out.set(row, col, grid.get(col, row));
        }
    }
    out
}

/// Mirrors the grid across the named axis.
#[must_use]
pub fn mirror(grid: &Grid, mirror: Mirror) -> Grid {
    let mut out = Grid::new();
    for row in 0..9 {
        for col in 0..9 {
            let value = match mirror {
                Mirror::None => grid.get(row, col),
                Mirror::Horizontal => grid.get(row, 8 - col),
                Mirror::Vertical => grid.get(8 - row, col),
            };
            out.set(row, col, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::notation::{parse_cycles, parse_pair_list};

    /// A grid whose 81 cells are all distinct positions: cell (r, c) holds
    /// `(r * 9 + c) % 9 + 1`, so every row is a different rotation of 1-9.
    fn position_grid() -> Grid {
        let mut grid = Grid::new();
        for row in 0..9 {
            for col in 0..9 {
                let value = u8::try_from((row * 9 + col) % 9).unwrap() + 1;
                grid.set(row, col, value);
            }
        }
        grid
    }

    fn sparse_grid() -> Grid {
        let mut grid = Grid::new();
        grid.set(0, 0, 1);
        grid.set(2, 5, 7);
        grid.set(8, 8, 9);
        grid
    }

    #[test]
    fn test_shift_wraps_and_skips_blanks() {
        let grid = sparse_grid();
        let shifted = shift_values(&grid, 3);
        assert_eq!(shifted.get(0, 0), 4);
        assert_eq!(shifted.get(2, 5), 1); // 7 wraps to 1
        assert_eq!(shifted.get(8, 8), 3);
        assert_eq!(shifted.get(4, 4), 0); // blanks stay blank
    }

    #[test]
    fn test_shift_normalizes_any_amount() {
        let grid = sparse_grid();
        assert_eq!(shift_values(&grid, -2), shift_values(&grid, 7));
        assert_eq!(shift_values(&grid, 18), grid);
    }

    #[test]
    fn test_relabel_maps_named_values_only() {
        let grid = sparse_grid();
        let pairs = parse_pair_list("1-2,7-1").unwrap();
        let relabeled = relabel_values(&grid, &pairs);
        assert_eq!(relabeled.get(0, 0), 2);
        assert_eq!(relabeled.get(2, 5), 1);
        assert_eq!(relabeled.get(8, 8), 9); // unnamed value unchanged
    }

    #[test]
    fn test_relabel_later_pairs_overwrite_shared_sources() {
        let grid = sparse_grid();
        let pairs = parse_pair_list("1-2,1-5").unwrap();
        assert_eq!(relabel_values(&grid, &pairs).get(0, 0), 5);
    }

    #[test]
    fn test_relabel_applies_non_bijective_mappings_as_is() {
        // Both 1 and 7 collapse onto 9; the engine does not object.
        let grid = sparse_grid();
        let pairs = parse_pair_list("1-9,7-9").unwrap();
        let relabeled = relabel_values(&grid, &pairs);
        assert_eq!(relabeled.get(0, 0), 9);
        assert_eq!(relabeled.get(2, 5), 9);
        assert_eq!(relabeled.get(8, 8), 9);
    }

    #[test]
    fn test_row_permutation_reads_the_snapshot_not_the_result() {
        // A 2-pair partial cycle: row 1 lands in slot 2, and row 2 lands in
        // slot 3. Slot 1 keeps its original content because nothing targets
        // it; row 1's own content survives only in slot 2.
        let grid = position_grid();
        let pairs = parse_pair_list("1-2,2-3").unwrap();
        let permuted = permute_rows(&grid, &pairs);

        let row = |g: &Grid, r: usize| -> Vec<u8> { (0..9).map(|c| g.get(r, c)).collect() };
        assert_eq!(row(&permuted, 1), row(&grid, 0));
        assert_eq!(row(&permuted, 2), row(&grid, 1)); // original row 2, not row 1's copy
        assert_eq!(row(&permuted, 0), row(&grid, 0)); // untargeted slot unchanged
    }

    #[test]
    fn test_row_permutation_last_write_wins_per_destination() {
        let grid = position_grid();
        let pairs = parse_pair_list("1-3,2-3").unwrap();
        let permuted = permute_rows(&grid, &pairs);
        let row = |g: &Grid, r: usize| -> Vec<u8> { (0..9).map(|c| g.get(r, c)).collect() };
        assert_eq!(row(&permuted, 2), row(&grid, 1));
    }

    #[test]
    fn test_col_permutation_swap() {
        let grid = position_grid();
        let pairs = parse_cycles("(1 9)").unwrap();
        let permuted = permute_cols(&grid, &pairs);
        for row in 0..9 {
            assert_eq!(permuted.get(row, 0), grid.get(row, 8));
            assert_eq!(permuted.get(row, 8), grid.get(row, 0));
            assert_eq!(permuted.get(row, 4), grid.get(row, 4));
        }
    }

    #[test]
    fn test_rotate_quarter_turn_moves_corners() {
        let grid = sparse_grid();
        let rotated = rotate(&grid, Rotation::R90);
        // (0, 0) moves to (0, 8) under a clockwise quarter turn.
        assert_eq!(rotated.get(0, 8), 1);
        assert_eq!(rotated.get(8, 0), 9);
    }

    #[test]
    fn test_mirror_axes() {
        let grid = sparse_grid();
        let horizontal = mirror(&grid, Mirror::Horizontal);
        assert_eq!(horizontal.get(0, 8), 1);
        let vertical = mirror(&grid, Mirror::Vertical);
        assert_eq!(vertical.get(8, 0), 1);
    }

    #[test]
    fn test_full_pipeline_order() {
        // Shift before relabel before row permutation: 1 at (0, 0) becomes
        // 2, the relabel then maps 2 to 9, and the row swap moves it to
        // row 1.
        let grid = {
            let mut g = Grid::new();
            g.set(0, 0, 1);
            g
        };
        let spec = TransformSpec {
            shift: 1,
            relabel: parse_pair_list("2-9").unwrap(),
            row_pairs: parse_cycles("(1 2)").unwrap(),
            ..TransformSpec::default()
        };
        let out = apply_full(&grid, &spec);
        assert_eq!(out.get(1, 0), 9);
        assert_eq!(out.get(0, 0), 0);
    }

    #[test]
    fn test_apply_spatial_skips_value_steps() {
        let grid = sparse_grid();
        let spec = TransformSpec {
            shift: 4,
            relabel: parse_pair_list("1-9").unwrap(),
            rotation: Rotation::R90,
            ..TransformSpec::default()
        };
        let spatial = apply_spatial(&grid, &spec);
        // Position changed by the rotation, value untouched.
        assert_eq!(spatial.get(0, 8), 1);

        let full = apply_full(&grid, &spec);
        // Full pipeline shifts 1 to 5 first (the relabel no longer sees a 1).
        assert_eq!(full.get(0, 8), 5);
    }

    #[test]
    fn test_default_spec_is_identity() {
        let grid = position_grid();
        assert_eq!(apply_full(&grid, &TransformSpec::default()), grid);
        assert_eq!(apply_spatial(&grid, &TransformSpec::default()), grid);
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::R0));
        assert_eq!(Rotation::from_degrees(360), Some(Rotation::R0));
        assert_eq!(Rotation::from_degrees(-180), Some(Rotation::R180));
        assert_eq!(Rotation::from_degrees(30), None);
        assert_eq!(Rotation::R270.degrees(), 270);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        prop::collection::vec(0_u8..=9, 81).prop_map(|values| {
            let mut grid = Grid::new();
            for (i, v) in values.into_iter().enumerate() {
                grid.set(i / 9, i % 9, v);
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn prop_four_quarter_turns_are_identity(grid in arb_grid()) {
            let mut turned = grid.clone();
            for _ in 0..4 {
                turned = rotate(&turned, Rotation::R90);
            }
            prop_assert_eq!(turned, grid);
        }

        #[test]
        fn prop_rotations_compose_from_quarter_turns(grid in arb_grid()) {
            let twice = rotate(&rotate(&grid, Rotation::R90), Rotation::R90);
            prop_assert_eq!(&twice, &rotate(&grid, Rotation::R180));
            let thrice = rotate(&twice, Rotation::R90);
            prop_assert_eq!(&thrice, &rotate(&grid, Rotation::R270));
        }

        #[test]
        fn prop_transpose_twice_is_identity(grid in arb_grid()) {
            prop_assert_eq!(transpose(&transpose(&grid)), grid);
        }

        #[test]
        fn prop_mirror_twice_is_identity(grid in arb_grid()) {
            prop_assert_eq!(
                mirror(&mirror(&grid, Mirror::Horizontal), Mirror::Horizontal),
                grid.clone()
            );
            prop_assert_eq!(
                mirror(&mirror(&grid, Mirror::Vertical), Mirror::Vertical),
                grid
            );
        }

        #[test]
        fn prop_shift_and_complement_restore_values(grid in arb_grid(), s in 0_i32..9) {
            prop_assert_eq!(
                shift_values(&shift_values(&grid, s), 9 - s),
                grid
            );
        }
    }
}
