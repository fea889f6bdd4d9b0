//! Command-line front end for the Sudomorph puzzle toolkit.
//!
//! This binary is the presentation glue around the library crates: it owns
//! file I/O, prints ingestion diagnostics, and gates row/column permutations
//! on the advisory validity check before handing a [`TransformSpec`] to the
//! engine. Everything with algorithmic content lives in the library crates.

use std::{error::Error, ffi::OsStr, fs, path::Path, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, Subcommand, ValueEnum};
use sudomorph_core::{Grid, Puzzle};
use sudomorph_solver::solve_puzzle;
use sudomorph_transform::{
    Mirror, NotationError, PairSeq, Rotation, TransformSpec, apply_full, apply_spatial,
    parse_cycles, parse_pair_list, validate_permutation,
};

#[derive(Debug, Parser)]
#[command(
    name = "sudomorph",
    version,
    about = "Browse, solve, and transform 9×9 number-place puzzles"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle file and print the solution grid.
    Solve {
        /// Path to the puzzle text file.
        file: PathBuf,
    },
    /// Apply a structural transform to a puzzle and print the result.
    Transform {
        /// Path to the puzzle text file.
        file: PathBuf,
        #[command(flatten)]
        transform: TransformArgs,
    },
    /// Transform the first puzzle and compare the result with the second.
    Compare {
        /// Path to the puzzle to transform.
        file_a: PathBuf,
        /// Path to the puzzle to compare against.
        file_b: PathBuf,
        #[command(flatten)]
        transform: TransformArgs,
        /// Also print a mask of every cell in the second puzzle holding VALUE.
        #[arg(long, value_name = "VALUE")]
        mask: Option<u8>,
    },
}

#[derive(Debug, clap::Args)]
struct TransformArgs {
    /// Digit shift amount (any integer; wraps within 1-9).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    shift: i32,
    /// Manual digit relabeling as a pair list, e.g. "1 2,3-4".
    #[arg(long)]
    relabel: Option<String>,
    /// Row permutation, in cycle notation or as a pair list.
    #[arg(long)]
    rows: Option<String>,
    /// Column permutation, in cycle notation or as a pair list.
    #[arg(long)]
    cols: Option<String>,
    /// Rotation in degrees (a multiple of 90).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    rotate: i32,
    /// Transpose the grid after rotating.
    #[arg(long)]
    transpose: bool,
    /// Mirror axis, applied last.
    #[arg(long, value_enum)]
    mirror: Option<MirrorArg>,
    /// Apply only the position-changing steps, leaving values untouched.
    #[arg(long)]
    spatial: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MirrorArg {
    None,
    Horizontal,
    Vertical,
}

impl From<MirrorArg> for Mirror {
    fn from(arg: MirrorArg) -> Self {
        match arg {
            MirrorArg::None => Mirror::None,
            MirrorArg::Horizontal => Mirror::Horizontal,
            MirrorArg::Vertical => Mirror::Vertical,
        }
    }
}

impl TransformArgs {
    fn to_spec(&self) -> Result<TransformSpec, Box<dyn Error>> {
        let relabel = match &self.relabel {
            // Relabelings may be deliberately non-bijective, so no validity gate.
            Some(input) => parse_pair_list(input)?,
            None => PairSeq::new(),
        };
        let row_pairs = match &self.rows {
            Some(input) => parse_positional(input)?,
            None => PairSeq::new(),
        };
        let col_pairs = match &self.cols {
            Some(input) => parse_positional(input)?,
            None => PairSeq::new(),
        };
        let rotation = Rotation::from_degrees(self.rotate)
            .ok_or("rotation must be a multiple of 90 degrees")?;
        Ok(TransformSpec {
            shift: self.shift,
            relabel,
            row_pairs,
            col_pairs,
            rotation,
            transpose: self.transpose,
            mirror: self.mirror.map_or(Mirror::None, Into::into),
        })
    }
}

/// Parses a row/column permutation field and gates it on validity.
///
/// Cycle notation when the input contains `(`, a pair list otherwise.
fn parse_positional(input: &str) -> Result<PairSeq, NotationError> {
    let pairs = if input.contains('(') {
        parse_cycles(input)?
    } else {
        parse_pair_list(input)?
    };
    validate_permutation(&pairs)?;
    Ok(pairs)
}

fn load_puzzle(path: &Path) -> Result<Puzzle, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("puzzle");
    let puzzle = Puzzle::parse(name, &text);
    for diagnostic in puzzle.diagnostics() {
        eprintln!("{}: {diagnostic}", puzzle.name());
    }
    Ok(puzzle)
}

fn load_grid(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let puzzle = load_puzzle(path)?;
    if !puzzle.is_well_formed() {
        return Err(format!("{} is malformed; refusing to continue", puzzle.name()).into());
    }
    Ok(puzzle.grid()?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Solve { file } => {
            let puzzle = load_puzzle(&file)?;
            if !puzzle.is_well_formed() {
                return Err(format!("{} is malformed; refusing to solve", puzzle.name()).into());
            }
            let start = Instant::now();
            let solution = solve_puzzle(&puzzle)?;
            log::debug!("solved {} in {:?}", puzzle.name(), start.elapsed());
            println!("{solution}");
        }
        Command::Transform { file, transform } => {
            let grid = load_grid(&file)?;
            let spec = transform.to_spec()?;
            let result = if transform.spatial {
                apply_spatial(&grid, &spec)
            } else {
                apply_full(&grid, &spec)
            };
            println!("{result}");
        }
        Command::Compare {
            file_a,
            file_b,
            transform,
            mask,
        } => {
            let a = load_grid(&file_a)?;
            let b = load_grid(&file_b)?;
            let spec = transform.to_spec()?;
            let transformed = if transform.spatial {
                apply_spatial(&a, &spec)
            } else {
                apply_full(&a, &spec)
            };
            if transformed == b {
                println!("match");
            } else {
                println!("no match");
            }
            if let Some(value) = mask {
                let mask = b
                    .value_mask(value)
                    .ok_or("mask value must be in the range 1-9")?;
                for row in &mask {
                    let line: String = row.iter().map(|&hit| if hit { '#' } else { '.' }).collect();
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
