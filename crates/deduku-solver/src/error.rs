//! Solver error types.

use derive_more::{Display, Error};

/// Terminal failure of a solve session.
///
/// Failure is terminal for this engine: there is no recovery and no
/// alternate branch to explore. The board keeps the state it had immediately
/// before the fatal rule application, so callers can still inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// A deduction would have removed the last remaining candidate of a
    /// cell: the puzzle (or the partially deduced state) is infeasible under
    /// the rules applied so far.
    #[display("puzzle is infeasible: a deduction left a cell with no candidates")]
    Contradiction,
}
