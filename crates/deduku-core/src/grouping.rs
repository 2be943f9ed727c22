//! The three constraint groupings: rows, columns and 3x3 boxes.
//!
//! Each grouping partitions the 81 cells into 9 disjoint groups of 9 cells;
//! within one group no two cells may hold the same final digit. The three
//! groupings overlap in coverage (every cell belongs to one row, one column
//! and one box at the same time), which is what lets a deduction made under
//! one grouping unlock further deductions under another.
//!
//! A grouping is pure constant data: 9 designated *parent* cells plus 9
//! relative *child* offsets. Applying every child offset to a parent
//! enumerates one full group.

use std::fmt::{self, Display};

use crate::position::Position;

/// One group of 9 cells that must contain each digit exactly once.
pub type Group = [Position; 9];

/// A (row, column) offset relative to a group's parent cell.
type Child = (u8, u8);

/// One of the three schemes partitioning the board into groups of 9 cells.
///
/// # Examples
///
/// ```
/// use deduku_core::Grouping;
///
/// // Each grouping yields 9 groups of 9 distinct cells.
/// for grouping in Grouping::ALL {
///     assert_eq!(grouping.groups().count(), 9);
/// }
///
/// let first_row = Grouping::Rows.groups().next().unwrap();
/// assert!(first_row.iter().all(|pos| pos.row() == 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// The nine rows.
    Rows,
    /// The nine columns.
    Columns,
    /// The nine 3x3 boxes.
    Boxes,
}

const ROW_PARENTS: [Position; 9] = {
    let mut parents = [Position::new(0, 0); 9];
    let mut row = 0;
    while row < 9 {
        parents[row as usize] = Position::new(row, 0);
        row += 1;
    }
    parents
};

const COLUMN_PARENTS: [Position; 9] = {
    let mut parents = [Position::new(0, 0); 9];
    let mut col = 0;
    while col < 9 {
        parents[col as usize] = Position::new(0, col);
        col += 1;
    }
    parents
};

const BOX_PARENTS: [Position; 9] = {
    let mut parents = [Position::new(0, 0); 9];
    let mut i = 0;
    while i < 9 {
        parents[i as usize] = Position::new(i / 3 * 3, i % 3 * 3);
        i += 1;
    }
    parents
};

const ROW_CHILDREN: [Child; 9] = {
    let mut children = [(0, 0); 9];
    let mut col = 0;
    while col < 9 {
        children[col as usize] = (0, col);
        col += 1;
    }
    children
};

const COLUMN_CHILDREN: [Child; 9] = {
    let mut children = [(0, 0); 9];
    let mut row = 0;
    while row < 9 {
        children[row as usize] = (row, 0);
        row += 1;
    }
    children
};

const BOX_CHILDREN: [Child; 9] = {
    let mut children = [(0, 0); 9];
    let mut i = 0;
    while i < 9 {
        children[i as usize] = (i / 3, i % 3);
        i += 1;
    }
    children
};

impl Grouping {
    /// All three groupings, in the order the engine sweeps them.
    pub const ALL: [Self; 3] = [Self::Rows, Self::Columns, Self::Boxes];

    /// The 9 designated parent cells of this grouping, one per group.
    const fn parents(self) -> &'static [Position; 9] {
        match self {
            Self::Rows => &ROW_PARENTS,
            Self::Columns => &COLUMN_PARENTS,
            Self::Boxes => &BOX_PARENTS,
        }
    }

    /// The 9 relative offsets enumerating a group from its parent.
    const fn children(self) -> &'static [Child; 9] {
        match self {
            Self::Rows => &ROW_CHILDREN,
            Self::Columns => &COLUMN_CHILDREN,
            Self::Boxes => &BOX_CHILDREN,
        }
    }

    /// Returns the group obtained by applying this grouping's child offsets
    /// to `parent`.
    ///
    /// The result is an ordered list of 9 distinct cell positions. This is a
    /// pure table lookup with no error path.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not one of this grouping's designated parents
    /// and an offset would leave the board.
    #[must_use]
    pub fn group_of(self, parent: Position) -> Group {
        let children = self.children();
        let mut group = [parent; 9];
        for (cell, &(rows, cols)) in group.iter_mut().zip(children) {
            *cell = parent.offset(rows, cols);
        }
        group
    }

    /// Returns an iterator over the 9 groups of this grouping.
    ///
    /// The iterator is finite and restartable: every call starts a fresh
    /// traversal over the same constant tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_core::Grouping;
    ///
    /// let boxes: Vec<_> = Grouping::Boxes.groups().collect();
    /// assert_eq!(boxes.len(), 9);
    /// // The first box is the top-left 3x3 block.
    /// assert!(boxes[0].iter().all(|pos| pos.row() < 3 && pos.col() < 3));
    /// ```
    pub fn groups(self) -> impl Iterator<Item = Group> {
        self.parents().iter().map(move |&parent| self.group_of(parent))
    }
}

impl Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
            Self::Boxes => "boxes",
        };
        f.write_str(name)
    }
}
