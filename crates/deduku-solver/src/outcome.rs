//! Outcome classification for rule passes and whole solves.

use derive_more::IsVariant;

/// Classification of one rule application, one group, one pass, or one full
/// round.
///
/// The three variants form a small lattice the engine aggregates over:
/// [`Inconsistent`](Self::Inconsistent) short-circuits everything above it,
/// otherwise [`Changed`](Self::Changed) dominates
/// [`Unchanged`](Self::Unchanged). All control flow in the engine
/// discriminates the full three-way distinction, never a bare
/// success/failure collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PassOutcome {
    /// An operation hit a contradiction; the sweep stops immediately.
    Inconsistent,
    /// At least one candidate was removed or one cell was forced.
    Changed,
    /// Nothing changed.
    Unchanged,
}

impl PassOutcome {
    /// Combines two outcomes under the dominance order
    /// `Inconsistent > Changed > Unchanged`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_solver::PassOutcome;
    ///
    /// assert_eq!(
    ///     PassOutcome::Unchanged.merge(PassOutcome::Changed),
    ///     PassOutcome::Changed
    /// );
    /// assert_eq!(
    ///     PassOutcome::Changed.merge(PassOutcome::Inconsistent),
    ///     PassOutcome::Inconsistent
    /// );
    /// ```
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Inconsistent, _) | (_, Self::Inconsistent) => Self::Inconsistent,
            (Self::Changed, _) | (_, Self::Changed) => Self::Changed,
            (Self::Unchanged, Self::Unchanged) => Self::Unchanged,
        }
    }
}

/// Successful terminal state of a solve session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolveStatus {
    /// Every cell was driven to a single candidate.
    Solved,
    /// A fixed point was reached with undecided cells left; the board
    /// retains the partial candidate state for inspection or hand-off to a
    /// stronger solver.
    Partial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_dominance() {
        use PassOutcome::*;

        assert_eq!(Unchanged.merge(Unchanged), Unchanged);
        assert_eq!(Unchanged.merge(Changed), Changed);
        assert_eq!(Changed.merge(Unchanged), Changed);
        assert_eq!(Changed.merge(Changed), Changed);
        assert_eq!(Inconsistent.merge(Unchanged), Inconsistent);
        assert_eq!(Changed.merge(Inconsistent), Inconsistent);
        assert_eq!(Inconsistent.merge(Inconsistent), Inconsistent);
    }

    #[test]
    fn test_is_variant_helpers() {
        assert!(PassOutcome::Changed.is_changed());
        assert!(!PassOutcome::Unchanged.is_changed());
        assert!(SolveStatus::Solved.is_solved());
        assert!(SolveStatus::Partial.is_partial());
    }
}
