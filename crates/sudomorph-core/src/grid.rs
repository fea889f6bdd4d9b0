//! The 9×9 grid data model.
//!
//! [`Grid`] is the validated board representation shared by every other
//! component: exactly 9 rows of exactly 9 cells, each cell holding 0 (empty)
//! or a digit 1-9. Dimensions are fixed by the type; constructors reject
//! out-of-range values, so downstream code (solving, transforming,
//! comparing) never re-validates shape.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Errors produced when constructing or parsing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input did not have exactly 9 rows.
    #[display("Puzzle has {found} rows, expected 9")]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row did not have exactly 9 values.
    #[display("Row {row} has {found} values, expected 9")]
    RowLength {
        /// Row number (1-based).
        row: usize,
        /// Number of values found in that row.
        found: usize,
    },
    /// A cell value was outside the range 0-9.
    #[display("Row {row}, column {col} holds {value}, which is out of range 0-9")]
    ValueOutOfRange {
        /// Row number (1-based).
        row: usize,
        /// Column number (1-based).
        col: usize,
        /// The offending value.
        value: u32,
    },
    /// Grid notation contained a character other than a digit, `.`, `_`, or
    /// whitespace.
    #[display("Unexpected character {ch:?} in grid notation")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// Grid notation did not describe exactly 81 cells.
    #[display("Grid notation has {found} cells, expected 81")]
    CellCount {
        /// Number of cells found.
        found: usize,
    },
}

/// A 9×9 Sudoku grid.
///
/// Cells hold `0` for empty or a digit `1-9`. A `Grid` is an immutable value
/// for all practical purposes: the solver and the transform engine operate
/// on private copies and return new grids, and two grids compare equal only
/// when every cell (including empty cells) matches exactly.
///
/// # Examples
///
/// ```
/// use sudomorph_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.get(0, 0), 5);
/// assert_eq!(grid.get(0, 2), 0); // empty
/// assert!(!grid.is_complete());
/// # Ok::<(), sudomorph_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Board side length.
    pub const SIZE: usize = 9;

    /// Creates an all-empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Creates a grid from a cell array, validating every value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] if any cell is greater than 9.
    pub fn from_cells(cells: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for (r, row) in cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::ValueOutOfRange {
                        row: r + 1,
                        col: c + 1,
                        value: u32::from(value),
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Creates a grid from raw ingestion rows, validating shape and range.
    ///
    /// This is the bridge from a lenient [`Puzzle`](crate::Puzzle) to a
    /// validated grid: the raw rows may be ragged or hold values greater
    /// than 9, and each defect maps to a distinct error.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowCount`] if there are not exactly 9 rows,
    /// [`GridError::RowLength`] if any row does not have exactly 9 values,
    /// or [`GridError::ValueOutOfRange`] if any value is greater than 9.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, GridError> {
        if rows.len() != 9 {
            return Err(GridError::RowCount { found: rows.len() });
        }
        let mut cells = [[0_u8; 9]; 9];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 9 {
                return Err(GridError::RowLength {
                    row: r + 1,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match u8::try_from(value) {
                    Ok(v) if v <= 9 => cells[r][c] = v,
                    _ => {
                        return Err(GridError::ValueOutOfRange {
                            row: r + 1,
                            col: c + 1,
                            value,
                        });
                    }
                }
            }
        }
        Ok(Self { cells })
    }

    /// Returns the value at `(row, col)`; `0` means empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Sets the value at `(row, col)`; `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8, or if `value` is
    /// greater than 9.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(value <= 9, "Invalid cell value: {value}");
        self.cells[row][col] = value;
    }

    /// Returns the underlying cell array.
    #[must_use]
    #[inline]
    pub const fn cells(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Returns a boolean mask marking every cell that holds `value`.
    ///
    /// Returns `None` when `value` is 0 or greater than 9; masking empty
    /// cells is not meaningful for puzzle comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudomorph_core::Grid;
    ///
    /// let mut grid = Grid::new();
    /// grid.set(4, 7, 3);
    ///
    /// let mask = grid.value_mask(3).unwrap();
    /// assert!(mask[4][7]);
    /// assert!(!mask[0][0]);
    ///
    /// assert!(grid.value_mask(0).is_none());
    /// ```
    #[must_use]
    pub fn value_mask(&self, value: u8) -> Option<[[bool; 9]; 9]> {
        if value == 0 || value > 9 {
            return None;
        }
        let mut mask = [[false; 9]; 9];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                mask[r][c] = v == value;
            }
        }
        Some(mask)
    }
}

impl Display for Grid {
    /// Renders the grid in the notation accepted by [`Grid::from_str`]:
    /// nine lines of nine cells, `_` for empty, a space between box stacks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c == 3 || c == 6 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    f.write_str("_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses strict grid notation: exactly 81 significant characters,
    /// where `1-9` is a filled cell, `.`, `_`, or `0` is an empty cell, and
    /// whitespace is ignored.
    ///
    /// This is the internal notation used by tests and the CLI. Lenient
    /// ingestion of user puzzle files lives in
    /// [`Puzzle::parse`](crate::Puzzle::parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[0_u8; 9]; 9];
        let mut count = 0_usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match ch {
                '.' | '_' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(GridError::UnexpectedCharacter { ch }),
            };
            if count < 81 {
                cells[count / 9][count % 9] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridError::CellCount { found: count });
        }
        Ok(Self { cells })
    }
}
