//! The direct (deduction-only) solver.

use deduku_core::{
    ChoiceBoard, Digit, DigitSet, ForbidOutcome, ForceSetOutcome, Group, Grouping, Position,
};
use tinyvec::ArrayVec;

use crate::{PassOutcome, SolveStatus, SolverError};

/// Statistics collected during a solve.
///
/// # Examples
///
/// ```
/// use deduku_core::ChoiceBoard;
/// use deduku_solver::DirectSolver;
///
/// let mut board = ChoiceBoard::new();
/// let (_status, stats) = DirectSolver::new().solve(&mut board)?;
///
/// // A board with no givens offers no deductions.
/// assert!(!stats.has_progress());
/// # Ok::<(), deduku_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectSolverStats {
    /// Number of rounds driven, including the final no-change round.
    pub rounds: usize,
    /// Number of candidates removed by the elimination rule.
    pub eliminations: usize,
    /// Number of cells forced by the isolation rule.
    pub isolations: usize,
}

impl DirectSolverStats {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any rule application changed the board.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.eliminations > 0 || self.isolations > 0
    }
}

/// A solver that narrows a [`ChoiceBoard`] by pure deduction.
///
/// Each round runs the elimination rule and then the isolation rule over all
/// groups of all three groupings. Rounds repeat until a round changes
/// nothing (fixed point) or a rule hits a contradiction. The solver holds no
/// state of its own; the board is borrowed exclusively for the duration of a
/// call, so independent puzzles can be solved from independent boards.
///
/// # Examples
///
/// ```
/// use deduku_core::{ChoiceBoard, DigitGrid};
/// use deduku_solver::{DirectSolver, SolveStatus};
///
/// let grid: DigitGrid = "x".repeat(81).parse().unwrap();
/// let mut board = ChoiceBoard::from_source(&grid);
///
/// let (status, _stats) = DirectSolver::new().solve(&mut board)?;
/// assert_eq!(status, SolveStatus::Partial);
/// # Ok::<(), deduku_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectSolver;

impl DirectSolver {
    /// Creates a new `DirectSolver`.
    #[must_use]
    pub const fn new() -> Self {
        DirectSolver
    }

    /// Drives the board to a fixed point or a contradiction.
    ///
    /// # Returns
    ///
    /// * `Ok((SolveStatus::Solved, stats))` - every cell is final
    /// * `Ok((SolveStatus::Partial, stats))` - a fixed point was reached
    ///   with undecided cells; the board retains the partial candidate state
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a deduction proves the
    /// board infeasible. The board keeps the state it had immediately before
    /// the fatal rule application.
    pub fn solve(
        &self,
        board: &mut ChoiceBoard,
    ) -> Result<(SolveStatus, DirectSolverStats), SolverError> {
        let mut stats = DirectSolverStats::new();
        while self.step(board, &mut stats)? {}

        let status = if board.all_final() {
            SolveStatus::Solved
        } else {
            SolveStatus::Partial
        };
        log::debug!(
            "fixed point after {} rounds: {status:?}, {} candidates remain",
            stats.rounds,
            board.total_candidates()
        );
        Ok((status, stats))
    }

    /// Runs one round: an elimination pass, then an isolation pass, each
    /// over all groups of all three groupings.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the round changed the board
    /// * `Ok(false)` - the round was a no-op; the board is at a fixed point
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] as soon as either pass reports
    /// an inconsistency; the rest of the round is skipped.
    pub fn step(
        &self,
        board: &mut ChoiceBoard,
        stats: &mut DirectSolverStats,
    ) -> Result<bool, SolverError> {
        stats.rounds += 1;

        let elimination = Self::sweep(board, |board, group| {
            Self::eliminate_in_group(board, group, &mut stats.eliminations)
        });
        if elimination.is_inconsistent() {
            log::debug!("elimination pass hit a contradiction in round {}", stats.rounds);
            return Err(SolverError::Contradiction);
        }

        let isolation = Self::sweep(board, |board, group| {
            Self::isolate_in_group(board, group, &mut stats.isolations)
        });
        if isolation.is_inconsistent() {
            log::debug!("isolation pass hit a contradiction in round {}", stats.rounds);
            return Err(SolverError::Contradiction);
        }

        log::trace!(
            "round {}: {} candidates remain",
            stats.rounds,
            board.total_candidates()
        );
        Ok(elimination.merge(isolation).is_changed())
    }

    /// Applies a per-group rule to every group of every grouping.
    ///
    /// Outcomes aggregate under [`PassOutcome::merge`]; an inconsistency
    /// short-circuits the whole sweep.
    fn sweep<F>(board: &mut ChoiceBoard, mut rule: F) -> PassOutcome
    where
        F: FnMut(&mut ChoiceBoard, &Group) -> PassOutcome,
    {
        let mut outcome = PassOutcome::Unchanged;
        for grouping in Grouping::ALL {
            for group in grouping.groups() {
                match rule(board, &group) {
                    PassOutcome::Inconsistent => return PassOutcome::Inconsistent,
                    other => outcome = outcome.merge(other),
                }
            }
        }
        outcome
    }

    /// Elimination rule: forbid every digit already final in the group from
    /// the group's undecided cells.
    fn eliminate_in_group(
        board: &mut ChoiceBoard,
        group: &Group,
        eliminations: &mut usize,
    ) -> PassOutcome {
        let mut used = DigitSet::EMPTY;
        let mut free: ArrayVec<[Position; 9]> = ArrayVec::new();
        for &pos in group {
            if board.is_final(pos) {
                used.insert(board.value_of(pos));
            } else {
                free.push(pos);
            }
        }

        let mut outcome = PassOutcome::Unchanged;
        for pos in free {
            for digit in used {
                match board.forbid(pos, digit) {
                    ForbidOutcome::LeftEmptyHanded => return PassOutcome::Inconsistent,
                    ForbidOutcome::Useful => {
                        *eliminations += 1;
                        outcome = PassOutcome::Changed;
                    }
                    ForbidOutcome::Useless => {}
                }
            }
        }
        outcome
    }

    /// Isolation rule: if exactly one cell of the group still lists a digit
    /// as a candidate and that cell is not final yet, force it.
    fn isolate_in_group(
        board: &mut ChoiceBoard,
        group: &Group,
        isolations: &mut usize,
    ) -> PassOutcome {
        let mut usage = [0u8; 9];
        let mut location = [Position::default(); 9];
        for &pos in group {
            for digit in board.candidates_of(pos) {
                usage[digit.index()] += 1;
                location[digit.index()] = pos;
            }
        }

        let mut outcome = PassOutcome::Unchanged;
        for digit in Digit::ALL {
            if usage[digit.index()] != 1 {
                continue;
            }
            let pos = location[digit.index()];
            if board.is_final(pos) {
                continue;
            }
            match board.force_set(pos, digit) {
                ForceSetOutcome::Impossible => {
                    // The digit was counted as live in this very pass, so a
                    // refusal means the usage/location bookkeeping no longer
                    // matches the board. Not a puzzle contradiction.
                    log::error!(
                        "isolation bookkeeping out of sync: digit {digit} at {pos} \
                         was observed live but cannot be forced"
                    );
                    return PassOutcome::Inconsistent;
                }
                ForceSetOutcome::Applied => {
                    *isolations += 1;
                    outcome = PassOutcome::Changed;
                }
                ForceSetOutcome::Useless => {}
            }
        }
        outcome
    }
}
