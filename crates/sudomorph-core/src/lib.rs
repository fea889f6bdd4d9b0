//! Core data structures for the Sudomorph puzzle toolkit.
//!
//! This crate provides the 9×9 grid data model shared by the solving and
//! transform components, together with the lenient puzzle ingestion parser
//! used to turn raw text fetched by a front end into a displayable puzzle.
//!
//! # Overview
//!
//! - [`grid`]: the validated [`Grid`] type (exactly 9×9, values 0-9 with 0
//!   meaning an empty cell), strict grid notation via `FromStr`/`Display`,
//!   and the [`Grid::value_mask`] comparison helper.
//! - [`puzzle`]: the [`Puzzle`] type produced by lenient ingestion, which
//!   always succeeds and accumulates [`ParseDiagnostic`]s instead of
//!   failing.
//!
//! # Examples
//!
//! ```
//! use sudomorph_core::Puzzle;
//!
//! let puzzle = Puzzle::parse("daily-1", "123456789\n987654321");
//! assert_eq!(puzzle.rows().len(), 2);
//!
//! // Ingestion never fails; problems are reported as diagnostics.
//! assert_eq!(
//!     puzzle.diagnostics()[0].to_string(),
//!     "Puzzle has 2 rows, expected 9"
//! );
//! ```

pub mod grid;
pub mod puzzle;

pub use self::{
    grid::{Grid, GridError},
    puzzle::{ParseDiagnostic, Puzzle},
};
