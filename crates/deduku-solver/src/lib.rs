//! Fixed-point constraint propagation for sudoku boards.
//!
//! This crate drives a [`ChoiceBoard`](deduku_core::ChoiceBoard) to a fixed
//! point by repeatedly applying two deduction rules over every row, column
//! and box:
//!
//! - **elimination** removes digits already placed elsewhere in a group from
//!   the group's undecided cells;
//! - **isolation** forces a digit into the only cell of a group that can
//!   still hold it.
//!
//! There is no guessing and no backtracking: when neither rule can make
//! further progress the solve ends, reporting either a fully determined
//! board, a partial board left for inspection, or a contradiction.
//!
//! # Examples
//!
//! ```
//! use deduku_core::{ChoiceBoard, DigitGrid};
//! use deduku_solver::DirectSolver;
//!
//! let grid: DigitGrid = "
//!     x93 468 157
//!     841 725 639
//!     765 139 842
//!     627 x91 384
//!     154 283 796
//!     389 674 215
//!     478 916 x23
//!     932 857 461
//!     516 342 978
//! "
//! .parse()
//! .unwrap();
//!
//! let mut board = ChoiceBoard::from_source(&grid);
//! let (status, stats) = DirectSolver::new().solve(&mut board)?;
//!
//! assert!(status.is_solved());
//! assert!(stats.has_progress());
//! # Ok::<(), deduku_solver::SolverError>(())
//! ```

pub use self::{
    direct::{DirectSolver, DirectSolverStats},
    error::SolverError,
    outcome::{PassOutcome, SolveStatus},
};

mod direct;
mod error;
mod outcome;

#[cfg(test)]
mod testing;
