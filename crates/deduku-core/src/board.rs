//! The per-cell candidate store.
//!
//! [`ChoiceBoard`] tracks, for every of the 81 cells, the set of digits still
//! possible for that cell. All solving works by shrinking these sets through
//! the two mutating operations [`forbid`](ChoiceBoard::forbid) and
//! [`force_set`](ChoiceBoard::force_set); everything else is a pure read.
//!
//! A stored candidate set is never empty: an operation that would empty one
//! reports [`ForbidOutcome::LeftEmptyHanded`] instead of applying, and the
//! caller treats that as a contradiction.

use std::fmt::{self, Display, Write as _};

use crate::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridSource},
    position::Position,
};

/// Outcome of [`ChoiceBoard::forbid`].
///
/// All three variants drive control flow in the propagation engine, so
/// callers must discriminate all of them rather than collapsing to a
/// success/failure pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbidOutcome {
    /// The digit was the cell's last remaining candidate. The removal was
    /// **not** applied; the caller must treat this as a contradiction.
    LeftEmptyHanded,
    /// The digit was present among two or more candidates and has been
    /// removed; the cell's count decreased by one.
    Useful,
    /// The digit was already absent (including: the cell is final with a
    /// different value). Nothing changed.
    Useless,
}

/// Outcome of [`ChoiceBoard::force_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceSetOutcome {
    /// The digit is not among the cell's candidates. Nothing changed.
    Impossible,
    /// The cell had two or more candidates including the digit; its set
    /// collapsed to exactly that digit.
    Applied,
    /// The cell is already final. Nothing changed. This holds even when the
    /// existing final value differs from the requested digit: the operation
    /// is a pass-through no-op, not a validation.
    Useless,
}

/// Mutable per-cell candidate state for a full board.
///
/// # Examples
///
/// ```
/// use deduku_core::{ChoiceBoard, Digit, ForceSetOutcome, Position};
///
/// let mut board = ChoiceBoard::new();
/// let pos = Position::new(0, 0);
///
/// assert_eq!(board.force_set(pos, Digit::D5), ForceSetOutcome::Applied);
/// assert!(board.is_final(pos));
/// assert_eq!(board.value_of(pos), Digit::D5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceBoard {
    cells: [DigitSet; 81],
}

impl Default for ChoiceBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceBoard {
    /// Creates a board where every cell still admits all nine digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Creates a board from initial cell values.
    ///
    /// A given digit becomes a singleton candidate set (count 1); an empty
    /// cell becomes the full set `{1..9}` (count 9). There is no error path:
    /// the source is assumed well-formed.
    pub fn from_source<S: GridSource>(source: &S) -> Self {
        let mut board = Self::new();
        for row in 0..9 {
            for col in 0..9 {
                if let Some(digit) = source.get_cell(row, col) {
                    board.cells[Position::new(row, col).index()] = DigitSet::from_elem(digit);
                }
            }
        }
        board
    }

    /// Removes `digit` from the candidates of the cell at `pos`.
    ///
    /// The removal is only applied when it leaves at least one candidate;
    /// see [`ForbidOutcome`] for the full classification. A cell therefore
    /// never stores an empty set.
    pub fn forbid(&mut self, pos: Position, digit: Digit) -> ForbidOutcome {
        let cell = &mut self.cells[pos.index()];
        if cell.len() == 1 {
            return if cell.contains(digit) {
                ForbidOutcome::LeftEmptyHanded
            } else {
                ForbidOutcome::Useless
            };
        }
        if cell.remove(digit) {
            ForbidOutcome::Useful
        } else {
            ForbidOutcome::Useless
        }
    }

    /// Collapses the cell at `pos` to exactly `digit`.
    ///
    /// Only applies when the cell is not yet final and `digit` is among its
    /// candidates; see [`ForceSetOutcome`]. Callers outside the propagation
    /// engine must not pass arbitrary digits without checking them against
    /// [`candidates_of`](Self::candidates_of) first.
    pub fn force_set(&mut self, pos: Position, digit: Digit) -> ForceSetOutcome {
        let cell = &mut self.cells[pos.index()];
        if cell.len() == 1 {
            return ForceSetOutcome::Useless;
        }
        if !cell.contains(digit) {
            return ForceSetOutcome::Impossible;
        }
        *cell = DigitSet::from_elem(digit);
        ForceSetOutcome::Applied
    }

    /// Returns `true` if the cell at `pos` has exactly one candidate left.
    #[must_use]
    pub fn is_final(&self, pos: Position) -> bool {
        self.cells[pos.index()].len() == 1
    }

    /// Returns the first (smallest) remaining candidate of the cell at `pos`.
    ///
    /// This is the result-export accessor: it is callable regardless of
    /// finality, but only fully meaningful once the cell is final.
    #[must_use]
    pub fn value_of(&self, pos: Position) -> Digit {
        match self.cells[pos.index()].first() {
            Some(digit) => digit,
            None => unreachable!("stored candidate sets are never empty"),
        }
    }

    /// Returns the number of candidates remaining in the cell at `pos`.
    #[must_use]
    pub fn candidate_count(&self, pos: Position) -> usize {
        self.cells[pos.index()].len()
    }

    /// Returns a snapshot of the candidates of the cell at `pos`.
    ///
    /// The returned set is a copy; iterating it yields the candidates in
    /// ascending order.
    #[must_use]
    pub fn candidates_of(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Returns `true` if every cell is final.
    #[must_use]
    pub fn all_final(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Returns the total number of candidates across all 81 cells.
    ///
    /// Every applied mutation strictly decreases this total, and it is
    /// bounded below by 81, which is what guarantees the propagation loop
    /// terminates.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.cells.iter().map(|cell| cell.len()).sum()
    }

    /// Exports the board as a value grid.
    ///
    /// Final cells become givens; cells with several remaining candidates
    /// stay empty, so a partial board exports as a partial grid.
    #[must_use]
    pub fn to_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                if self.is_final(pos) {
                    grid.set(pos, Some(self.value_of(pos)));
                }
            }
        }
        grid
    }

    /// Renders every cell's remaining candidates, column-aligned.
    ///
    /// Final cells print their value; free cells print all their candidates
    /// concatenated. Useful when inspecting a board the engine could not
    /// fully resolve.
    #[must_use]
    pub fn details(&self) -> String {
        let widths: Vec<usize> = (0..9)
            .map(|col| {
                (0..9)
                    .map(|row| self.candidate_count(Position::new(row, col)))
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        let mut out = String::new();
        for row in 0..9 {
            for col in 0..9 {
                let cell = self.candidates_of(Position::new(row, col)).to_string();
                let width = widths[usize::from(col)];
                let _ = write!(out, "{cell:>width$}");
                if col < 8 {
                    out.push_str("  ");
                }
            }
            out.push('\n');
            if row == 2 || row == 5 {
                out.push('\n');
            }
        }
        out
    }
}

impl Display for ChoiceBoard {
    /// Formats a compact summary: final cells print ` d `, free cells print
    /// `[n]` where `n` is the remaining candidate count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                if self.is_final(pos) {
                    write!(f, " {} ", self.value_of(pos))?;
                } else {
                    write!(f, "[{}]", self.candidate_count(pos))?;
                }
                if col == 2 || col == 5 {
                    f.write_str("  ")?;
                } else if col < 8 {
                    f.write_str(" ")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    const EASY: &str = "
        29x 46x 157
        841 72x x39
        xxx 13x 8xx

        6xx xx1 xxx
        xxx 2xx x96
        x89 xxx 2x5

        xxx 9xx 5xx
        93x 8x7 xxx
        x16 xx2 x7x
    ";

    fn easy_board() -> ChoiceBoard {
        let grid: DigitGrid = EASY.parse().unwrap();
        ChoiceBoard::from_source(&grid)
    }

    #[test]
    fn test_initialize_from_source() {
        let board = easy_board();

        // Ground truth of the upper-left 3x3 box.
        let known = [
            (Position::new(0, 0), D2),
            (Position::new(0, 1), D9),
            (Position::new(1, 0), D8),
            (Position::new(1, 1), D4),
            (Position::new(1, 2), D1),
        ];
        for (pos, value) in known {
            assert!(board.is_final(pos));
            assert_eq!(board.value_of(pos), value);
        }

        let unknown = [
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ];
        for pos in unknown {
            assert!(!board.is_final(pos));
            assert_eq!(board.candidate_count(pos), 9);
        }

        assert!(!board.all_final());
    }

    #[test]
    fn test_forbid_useful_shrinks_by_one() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(4, 4);

        assert_eq!(board.forbid(pos, D3), ForbidOutcome::Useful);
        assert_eq!(board.candidate_count(pos), 8);
        assert!(!board.candidates_of(pos).contains(D3));
    }

    #[test]
    fn test_forbid_useless_when_absent() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(4, 4);

        board.forbid(pos, D3);
        assert_eq!(board.forbid(pos, D3), ForbidOutcome::Useless);
        assert_eq!(board.candidate_count(pos), 8);
    }

    #[test]
    fn test_forbid_useless_on_final_with_other_value() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(0, 0);
        board.force_set(pos, D5);

        assert_eq!(board.forbid(pos, D7), ForbidOutcome::Useless);
        assert_eq!(board.value_of(pos), D5);
    }

    #[test]
    fn test_forbid_last_candidate_is_refused() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(0, 0);
        board.force_set(pos, D5);

        // Removing the sole candidate is reported, not applied.
        assert_eq!(board.forbid(pos, D5), ForbidOutcome::LeftEmptyHanded);
        assert_eq!(board.candidate_count(pos), 1);
        assert_eq!(board.value_of(pos), D5);
    }

    #[test]
    fn test_force_set_applied() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(2, 7);

        assert_eq!(board.force_set(pos, D9), ForceSetOutcome::Applied);
        assert!(board.is_final(pos));
        assert_eq!(board.candidates_of(pos).as_single(), Some(D9));
    }

    #[test]
    fn test_force_set_useless_on_final_cell() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(2, 7);
        board.force_set(pos, D9);

        assert_eq!(board.force_set(pos, D9), ForceSetOutcome::Useless);
        // The no-op is NOT validated against the requested digit: forcing a
        // different value on a final cell is still Useless, and the stored
        // value is untouched.
        assert_eq!(board.force_set(pos, D1), ForceSetOutcome::Useless);
        assert_eq!(board.value_of(pos), D9);
    }

    #[test]
    fn test_force_set_impossible_for_missing_candidate() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(6, 3);
        board.forbid(pos, D4);

        assert_eq!(board.force_set(pos, D4), ForceSetOutcome::Impossible);
        assert_eq!(board.candidate_count(pos), 8);
    }

    #[test]
    fn test_candidates_snapshot_is_detached() {
        let mut board = ChoiceBoard::new();
        let pos = Position::new(1, 1);
        let snapshot = board.candidates_of(pos);

        board.forbid(pos, D2);
        assert!(snapshot.contains(D2));
        assert!(!board.candidates_of(pos).contains(D2));
    }

    #[test]
    fn test_all_final_and_export() {
        let mut grid = DigitGrid::new();
        // A fully given top row; the rest stays empty.
        for col in 0..9 {
            grid.set(Position::new(0, col), Some(Digit::from_value(col + 1)));
        }
        let board = ChoiceBoard::from_source(&grid);

        assert!(!board.all_final());
        let exported = board.to_grid();
        assert_eq!(exported.get(Position::new(0, 4)), Some(D5));
        assert_eq!(exported.get(Position::new(1, 0)), None);
    }

    #[test]
    fn test_total_candidates() {
        let mut board = ChoiceBoard::new();
        assert_eq!(board.total_candidates(), 81 * 9);

        board.forbid(Position::new(0, 0), D1);
        assert_eq!(board.total_candidates(), 81 * 9 - 1);

        board.force_set(Position::new(8, 8), D2);
        assert_eq!(board.total_candidates(), 81 * 9 - 1 - 8);
    }

    #[test]
    fn test_display_summary() {
        let board = easy_board();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        // Final cells render their value, free cells their count.
        assert!(lines[0].starts_with(" 2   9  [9]"));
    }

    #[test]
    fn test_details_renders_all_cells() {
        let board = easy_board();
        let details = board.details();
        // Free cells of a fresh puzzle still list all nine candidates.
        assert!(details.contains("123456789"));
        // Final cells print just their value somewhere in the first row.
        assert!(details.lines().next().unwrap().trim_start().starts_with('2'));
    }

    proptest! {
        #[test]
        fn prop_no_empty_cells_and_monotonic_total(
            ops in prop::collection::vec((0u8..9, 0u8..9, 1u8..=9, prop::bool::ANY), 0..300),
        ) {
            let mut board = ChoiceBoard::new();
            let mut prev_total = board.total_candidates();

            for (row, col, value, use_force) in ops {
                let pos = Position::new(row, col);
                let digit = Digit::from_value(value);
                if use_force {
                    board.force_set(pos, digit);
                } else {
                    board.forbid(pos, digit);
                }

                let total = board.total_candidates();
                prop_assert!(total <= prev_total);
                prev_total = total;

                prop_assert!(board.candidate_count(pos) >= 1);
            }

            for row in 0..9 {
                for col in 0..9 {
                    prop_assert!(board.candidate_count(Position::new(row, col)) >= 1);
                }
            }
        }
    }
}
