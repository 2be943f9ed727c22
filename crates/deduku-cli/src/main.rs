//! Command-line front end for the direct sudoku solver.
//!
//! Reads a puzzle file, runs deduction to a fixed point, and prints the
//! result. Puzzle files contain nine rows of nine characters, where `1`-`9`
//! are givens and `x`, `.`, `_` or `0` mark empty cells; whitespace is
//! ignored.
//!
//! # Usage
//!
//! ```sh
//! deduku samples/easy.sudoku
//! ```
//!
//! The `.sudoku` extension is appended when the given path has none. For
//! puzzles that direct deduction cannot finish, `--details` dumps the full
//! remaining candidate state:
//!
//! ```sh
//! deduku --details samples/hard
//! ```
//!
//! Exit codes: 0 when solved, 1 when only a partial solution was reached,
//! 2 on infeasible puzzles or input errors.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use deduku_core::{ChoiceBoard, DigitGrid};
use deduku_solver::{DirectSolver, SolveStatus};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve.
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,

    /// Dump every cell's remaining candidates when the puzzle cannot be
    /// fully solved.
    #[arg(long)]
    details: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    run(&Args::parse())
}

fn run(args: &Args) -> ExitCode {
    let path = with_default_extension(&args.puzzle);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("cannot read {}: {err}", path.display());
            return ExitCode::from(2);
        }
    };
    let grid: DigitGrid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("cannot parse {}: {err}", path.display());
            return ExitCode::from(2);
        }
    };

    println!("{grid}");

    let mut board = ChoiceBoard::from_source(&grid);
    match DirectSolver::new().solve(&mut board) {
        Ok((SolveStatus::Solved, stats)) => {
            println!(
                "solved in {} rounds ({} eliminations, {} isolations)\n",
                stats.rounds, stats.eliminations, stats.isolations
            );
            println!("{}", board.to_grid());
            ExitCode::SUCCESS
        }
        Ok((SolveStatus::Partial, stats)) => {
            println!(
                "not fully solvable by direct deduction; stopped after {} rounds\n",
                stats.rounds
            );
            println!("{board}");
            if args.details {
                println!("{}", board.details());
            }
            ExitCode::from(1)
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(2)
        }
    }
}

/// Appends the `.sudoku` extension when the path has none.
fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("sudoku")
    } else {
        path.to_path_buf()
    }
}
