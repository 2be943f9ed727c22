//! Core data structures for deductive sudoku solving.
//!
//! This crate provides the data model the propagation engine operates on.
//! It contains no solving logic of its own.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: sets of digits, the per-cell candidate representation
//! - [`position`]: (row, column) cell coordinates
//! - [`grouping`]: the three constraint groupings (rows, columns, boxes)
//!   and the groups of 9 cells they produce
//! - [`grid`]: plain value grids, text parsing and pretty-printing, and the
//!   [`GridSource`] initialization contract
//! - [`board`]: the mutable per-cell candidate store, [`ChoiceBoard`]
//!
//! # Examples
//!
//! ```
//! use deduku_core::{ChoiceBoard, Digit, ForbidOutcome, Position};
//!
//! let mut board = ChoiceBoard::new();
//! let pos = Position::new(4, 4);
//!
//! // Fresh cells carry all nine candidates.
//! assert_eq!(board.candidate_count(pos), 9);
//!
//! // Removing a live candidate is a useful deduction.
//! assert_eq!(board.forbid(pos, Digit::D5), ForbidOutcome::Useful);
//! assert_eq!(board.candidate_count(pos), 8);
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod grouping;
pub mod position;

pub use self::{
    board::{ChoiceBoard, ForbidOutcome, ForceSetOutcome},
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridSource, ParseGridError},
    grouping::{Group, Grouping},
    position::Position,
};
