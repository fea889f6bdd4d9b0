//! Backtracking Sudoku solving for the Sudomorph puzzle toolkit.
//!
//! This crate provides the placement legality predicate [`is_legal`] and the
//! depth-first backtracking solver [`solve`]. The solver is deterministic:
//! it scans cells in row-major order and tries values 1 through 9 ascending,
//! so an under-constrained puzzle always yields the same completion across
//! runs.
//!
//! The solver never mutates its input; it works on a private copy and
//! returns the solution as a new grid.
//!
//! # Examples
//!
//! ```
//! use sudomorph_core::Puzzle;
//! use sudomorph_solver::solve_puzzle;
//!
//! let puzzle = Puzzle::parse(
//!     "classic",
//!     "530070000
//!      600195000
//!      098000060
//!      800060003
//!      400803001
//!      700020006
//!      060000280
//!      000419005
//!      000080079",
//! );
//! let solution = solve_puzzle(&puzzle)?;
//! assert!(solution.is_complete());
//! assert_eq!(solution.get(0, 2), 4);
//! # Ok::<(), sudomorph_solver::SolveError>(())
//! ```

use sudomorph_core::{Grid, GridError, Puzzle};

/// Errors produced by a solve attempt.
///
/// A solve error is fatal to that attempt only; the puzzle itself remains
/// valid for display.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum SolveError {
    /// The grid had the wrong shape or held an out-of-range value.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// A given value conflicts with another cell in its row, column, or box.
    #[display("Row {row}, column {col} holds {value}, which conflicts with another cell")]
    Conflict {
        /// Row number (1-based).
        row: usize,
        /// Column number (1-based).
        col: usize,
        /// The conflicting value.
        value: u8,
    },
    /// The search space was exhausted without a complete assignment.
    #[display("No solution found")]
    NoSolution,
}

/// Returns whether placing `value` at `(row, col)` is legal.
///
/// The placement is legal when `value` does not already occur elsewhere in
/// the row, elsewhere in the column, or anywhere else in the containing 3×3
/// box. The cell's own current content is ignored, so the predicate can be
/// used both for empty cells and to re-check an already placed value.
///
/// `value` must be in the range 1-9; checking a blank is meaningless.
///
/// # Examples
///
/// ```
/// use sudomorph_core::Grid;
/// use sudomorph_solver::is_legal;
///
/// let mut grid = Grid::new();
/// grid.set(0, 0, 5);
///
/// assert!(!is_legal(&grid, 0, 8, 5)); // same row
/// assert!(!is_legal(&grid, 8, 0, 5)); // same column
/// assert!(!is_legal(&grid, 1, 1, 5)); // same box
/// assert!(is_legal(&grid, 4, 4, 5));
/// ```
#[must_use]
pub fn is_legal(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    debug_assert!((1..=9).contains(&value), "Invalid placement value: {value}");

    for i in 0..9 {
        if i != col && grid.get(row, i) == value {
            return false;
        }
        if i != row && grid.get(i, col) == value {
            return false;
        }
    }

    let box_row = (row / 3) * 3;
    let box_col = (col / 3) * 3;
    for r in box_row..box_row + 3 {
        for c in box_col..box_col + 3 {
            if (r, c) != (row, col) && grid.get(r, c) == value {
                return false;
            }
        }
    }

    true
}

/// Solves a grid by deterministic depth-first backtracking.
///
/// Before searching, every given (non-zero) cell is re-checked by clearing
/// it on a scratch copy and testing [`is_legal`] at its own position; a
/// failure is reported as [`SolveError::Conflict`] without searching.
///
/// The search visits cells in row-major order, trying values 1-9 ascending
/// at the first empty cell and undoing on failure to extend. The first
/// complete assignment found under this ordering is returned; it is not
/// necessarily unique for under-constrained grids, but it is reproducible.
///
/// # Errors
///
/// Returns [`SolveError::Conflict`] if the givens contradict each other, or
/// [`SolveError::NoSolution`] if the search space is exhausted.
pub fn solve(grid: &Grid) -> Result<Grid, SolveError> {
    check_givens(grid)?;

    let mut work = grid.clone();
    let mut placements = 0_u64;
    if search(&mut work, &mut placements) {
        log::debug!("solved after {placements} placements");
        Ok(work)
    } else {
        log::debug!("search exhausted after {placements} placements");
        Err(SolveError::NoSolution)
    }
}

/// Converts a puzzle into a validated grid and solves it.
///
/// # Errors
///
/// Returns [`SolveError::Grid`] if the puzzle's raw rows do not form a
/// valid 9×9 grid, otherwise whatever [`solve`] returns.
pub fn solve_puzzle(puzzle: &Puzzle) -> Result<Grid, SolveError> {
    let grid = puzzle.grid()?;
    solve(&grid)
}

/// Checks every given against the rest of the grid.
fn check_givens(grid: &Grid) -> Result<(), SolveError> {
    let mut scratch = grid.clone();
    for row in 0..9 {
        for col in 0..9 {
            let value = grid.get(row, col);
            if value == 0 {
                continue;
            }
            scratch.set(row, col, 0);
            let legal = is_legal(&scratch, row, col, value);
            scratch.set(row, col, value);
            if !legal {
                return Err(SolveError::Conflict {
                    row: row + 1,
                    col: col + 1,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn first_empty(grid: &Grid) -> Option<(usize, usize)> {
    for row in 0..9 {
        for col in 0..9 {
            if grid.get(row, col) == 0 {
                return Some((row, col));
            }
        }
    }
    None
}

/// Recursive backtracking step. Depth is bounded by the 81 board cells.
fn search(grid: &mut Grid, placements: &mut u64) -> bool {
    let Some((row, col)) = first_empty(grid) else {
        return true;
    };
    for value in 1..=9 {
        if is_legal(grid, row, col, value) {
            grid.set(row, col, value);
            *placements += 1;
            if search(grid, placements) {
                return true;
            }
            grid.set(row, col, 0);
        }
    }
    false
}
