//! Shared puzzle fixtures for solver tests.
//!
//! The outcomes asserted in the test suite depend on these grids exactly as
//! written, so do not edit them in place; add new fixtures instead.

use deduku_core::{ChoiceBoard, DigitGrid};

/// Parses a grid text and initializes a board from it.
///
/// # Panics
///
/// Panics if the text is not a valid grid.
pub(crate) fn board_from_str(text: &str) -> ChoiceBoard {
    let grid: DigitGrid = text.parse().expect("fixture grids are well-formed");
    ChoiceBoard::from_source(&grid)
}

/// A valid, fully determined grid: every cell is a given.
pub(crate) const COMPLETE: &str = "
    293 468 157
    841 725 639
    765 139 842

    627 591 384
    154 283 796
    389 674 215

    478 916 523
    932 857 461
    516 342 978
";

/// [`COMPLETE`] with three cells blanked, one per band, each recoverable by
/// row elimination alone.
pub(crate) const TRIVIAL: &str = "
    x93 468 157
    841 725 639
    765 139 842

    627 x91 384
    154 283 796
    389 674 215

    478 916 x23
    932 857 461
    516 342 978
";

/// An easy puzzle: falls to elimination plus isolation, needing both.
pub(crate) const EASY: &str = "
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

/// A medium puzzle, still within reach of the two direct rules.
pub(crate) const MEDIUM: &str = "
    47x xxx 6x8
    x62 xxx x4x
    xxx xx4 2x1

    89x 5x6 x37
    xx6 xxx 8x5
    xxx xx1 xx2

    9xx xxx 58x
    687 xxx xxx
    x5x x63 xxx
";

/// A hard puzzle: direct deduction stalls at a partial fixed point.
pub(crate) const HARD: &str = "
    x3x 6xx 89x
    xxx x4x xxx
    xxx 8xx 5x7

    x9x xxx xxx
    xxx xx6 4x5
    3xx xx4 x1x

    x6x x1x x3x
    xx1 xxx 2xx
    4xx x2x xxx
";

/// An infeasible grid: row 0 holds the digit 5 twice, and column 8 pins
/// both digits the row leaves over onto the same open cell.
pub(crate) const CONTRADICTORY: &str = "
    515 234 67x
    xxx xxx xx8
    xxx xxx xx9

    xxx xxx xxx
    xxx xxx xxx
    xxx xxx xxx

    xxx xxx xxx
    xxx xxx xxx
    xxx xxx xxx
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        for fixture in [COMPLETE, TRIVIAL, EASY, MEDIUM, HARD, CONTRADICTORY] {
            let _ = board_from_str(fixture);
        }
    }

    #[test]
    fn test_complete_fixture_is_fully_given() {
        let grid: DigitGrid = COMPLETE.parse().unwrap();
        assert_eq!(grid.given_count(), 81);
    }
}
