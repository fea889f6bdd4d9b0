//! Lenient puzzle ingestion.
//!
//! Puzzle files in the wild come in two textual formats: a compact one digit
//! per cell form where `0` marks a blank (`530070000`), and a separator
//! delimited form where cells are whitespace- or dash-separated numbers
//! (`5 3 0 0 7 0 0 0 0`). [`Puzzle::parse`] accepts both, never fails, and
//! accumulates [`ParseDiagnostic`]s for structural problems instead of
//! discarding what it could read. A puzzle with diagnostics remains
//! displayable; callers gate solving and transforming on
//! [`Puzzle::is_well_formed`].

use crate::grid::{Grid, GridError};

/// A structural problem found while ingesting puzzle text.
///
/// Diagnostics are accumulated, not fail-fast: parsing always completes and
/// returns whatever rows it could extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseDiagnostic {
    /// A data line produced a row with the wrong number of values.
    #[display("Row {row} has {found} values, expected 9")]
    RowLength {
        /// Row number (1-based, counting accepted data rows).
        row: usize,
        /// Number of values the row produced.
        found: usize,
    },
    /// The text produced the wrong number of data rows.
    #[display("Puzzle has {found} rows, expected 9")]
    RowCount {
        /// Number of rows the text produced.
        found: usize,
    },
}

/// A named puzzle as ingested from raw text.
///
/// The raw rows may be ragged (wrong row or value counts) and may hold
/// values greater than 9 when the separator format contains large numbers;
/// [`Puzzle::grid`] performs the strict conversion.
///
/// # Examples
///
/// ```
/// use sudomorph_core::Puzzle;
///
/// let text = "
/// 123456789
/// 456789123
/// 789123456
/// 214365897
/// 365897214
/// 897214365
/// 531642978
/// 642978531
/// 978531642
/// ";
/// let puzzle = Puzzle::parse("latin", text);
/// assert!(puzzle.is_well_formed());
/// assert!(puzzle.grid()?.is_complete());
/// # Ok::<(), sudomorph_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    name: String,
    rows: Vec<Vec<u32>>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl Puzzle {
    /// Ingests raw puzzle text.
    ///
    /// Blank lines are skipped. For each remaining line, the number of
    /// individual digit characters decides the format: 1 to 9 digit
    /// characters means the compact format (one digit per cell, right-padded
    /// with blanks to 9 cells), anything else means the separator format
    /// (every maximal digit run becomes one cell value, taken verbatim).
    /// A line producing no values contributes no row.
    ///
    /// The digit-count threshold is deliberate: a line like
    /// `1 2 3 4 5 6 7 8 9` has nine digit characters and is read as the
    /// compact format, which yields the same row either way. Existing
    /// puzzle corpora rely on this exact boundary.
    #[must_use]
    pub fn parse(name: impl Into<String>, text: &str) -> Self {
        let mut rows: Vec<Vec<u32>> = Vec::with_capacity(9);
        let mut diagnostics = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let digits: Vec<u32> = line
                .chars()
                .filter_map(|ch| ch.to_digit(10))
                .collect();

            let mut row = if (1..=9).contains(&digits.len()) {
                let mut row = digits;
                row.resize(9, 0);
                row
            } else {
                digit_runs(line)
            };

            if row.is_empty() {
                continue;
            }
            if row.len() != 9 {
                diagnostics.push(ParseDiagnostic::RowLength {
                    row: rows.len() + 1,
                    found: row.len(),
                });
            }
            row.shrink_to_fit();
            rows.push(row);
        }

        if rows.len() != 9 {
            diagnostics.push(ParseDiagnostic::RowCount { found: rows.len() });
        }

        Self {
            name: name.into(),
            rows,
            diagnostics,
        }
    }

    /// Returns the puzzle's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw ingested rows, possibly ragged.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Returns the ingestion diagnostics, in the order they were found.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if ingestion produced no diagnostics.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Converts the raw rows into a validated [`Grid`].
    ///
    /// # Errors
    ///
    /// Returns the first shape or range defect as a [`GridError`]; see
    /// [`Grid::from_rows`].
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::from_rows(&self.rows)
    }
}

/// Extracts every maximal run of digit characters as a number.
fn digit_runs(line: &str) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut current: Option<u32> = None;
    for ch in line.chars() {
        if let Some(digit) = ch.to_digit(10) {
            // Saturate on absurdly long runs; they are out of range either way.
            let value = current.unwrap_or(0);
            current = Some(value.saturating_mul(10).saturating_add(digit));
        } else if let Some(value) = current.take() {
            runs.push(value);
        }
    }
    if let Some(value) = current {
        runs.push(value);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: &str = "
        530070000
        600195000
        098000060
        800060003
        400803001
        700020006
        060000280
        000419005
        000080079
    ";

    #[test]
    fn test_parse_compact_format() {
        let puzzle = Puzzle::parse("compact", COMPACT);
        assert!(puzzle.is_well_formed());
        assert_eq!(puzzle.rows().len(), 9);
        assert_eq!(puzzle.rows()[0], vec![5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(puzzle.rows()[8], vec![0, 0, 0, 0, 8, 0, 0, 7, 9]);
    }

    #[test]
    fn test_parse_compact_format_pads_short_lines() {
        // 4 digit characters: compact format, right-padded with blanks.
        let puzzle = Puzzle::parse("padded", "1234\n");
        assert_eq!(puzzle.rows()[0], vec![1, 2, 3, 4, 0, 0, 0, 0, 0]);
        // Only the row-count diagnostic; the padded row has 9 values.
        assert_eq!(
            puzzle.diagnostics(),
            &[ParseDiagnostic::RowCount { found: 1 }]
        );
    }

    #[test]
    fn test_parse_separator_format() {
        let text = "
            5 3 0 0 7 0 0 0 10
            6-0-0-1-9-5-0-0-0 extra
        ";
        let puzzle = Puzzle::parse("separated", text);
        // First line has 10 digit characters: separator format, runs verbatim.
        assert_eq!(puzzle.rows()[0], vec![5, 3, 0, 0, 7, 0, 0, 0, 10]);
        // Second line has 9 digit characters: compact format wins, and the
        // trailing non-digit text is ignored.
        assert_eq!(puzzle.rows()[1], vec![6, 0, 0, 1, 9, 5, 0, 0, 0]);
    }

    #[test]
    fn test_nine_single_digit_cells_with_separators_reads_as_compact() {
        // Nine digit characters, so the compact branch wins; the result is
        // the same row the separator branch would have produced.
        let puzzle = Puzzle::parse("ambiguous", "1 2 3 4 5 6 7 8 9");
        assert_eq!(puzzle.rows()[0], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_blank_and_non_data_lines_are_skipped() {
        let text = "\n   \n-- header --\n123456789\n";
        let puzzle = Puzzle::parse("sparse", text);
        assert_eq!(puzzle.rows().len(), 1);
        assert_eq!(puzzle.rows()[0], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_row_length_diagnostic_keeps_the_row() {
        // 12 digit characters: separator format with 12 one-digit runs.
        let text = "1 2 3 4 5 6 7 8 9 1 2 3";
        let puzzle = Puzzle::parse("long-row", text);
        assert_eq!(puzzle.rows()[0].len(), 12);
        assert_eq!(
            puzzle.diagnostics()[0],
            ParseDiagnostic::RowLength { row: 1, found: 12 }
        );
        assert_eq!(
            puzzle.diagnostics()[0].to_string(),
            "Row 1 has 12 values, expected 9"
        );
    }

    #[test]
    fn test_row_count_diagnostic_message() {
        let text = "123456789\n".repeat(8);
        let puzzle = Puzzle::parse("eight-rows", &text);
        assert_eq!(puzzle.rows().len(), 8);
        assert_eq!(puzzle.diagnostics().len(), 1);
        assert_eq!(
            puzzle.diagnostics()[0].to_string(),
            "Puzzle has 8 rows, expected 9"
        );
    }

    #[test]
    fn test_well_formed_puzzle_converts_to_grid() {
        let puzzle = Puzzle::parse("compact", COMPACT);
        let grid = puzzle.grid().unwrap();
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(8, 8), 9);
    }

    #[test]
    fn test_malformed_puzzle_remains_displayable() {
        let puzzle = Puzzle::parse("short", "123456789\n987654321");
        assert!(!puzzle.is_well_formed());
        assert_eq!(puzzle.rows().len(), 2);
        assert_eq!(puzzle.name(), "short");
        // Conversion reports the shape defect rather than panicking.
        assert_eq!(
            puzzle.grid().unwrap_err(),
            GridError::RowCount { found: 2 }
        );
    }

    #[test]
    fn test_zero_only_line_is_compact_blank_row() {
        let puzzle = Puzzle::parse("blanks", "0");
        assert_eq!(puzzle.rows()[0], vec![0; 9]);
    }
}
