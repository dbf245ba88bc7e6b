// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain data types shared by the grid focus manager.

/// A `(row, column)` position in a grid of cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Index of the row in the row collection.
    pub row: usize,
    /// Index of the cell within its row.
    pub column: usize,
}

impl GridCoord {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// Horizontal reading direction.
///
/// Decides whether the right arrow advances or retreats the column index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right: the right arrow moves to the next column.
    #[default]
    Ltr,
    /// Right-to-left: the right arrow moves to the previous column.
    Rtl,
}

bitflags::bitflags! {
    /// Behavior switches for a [`GridKeyManager`](crate::GridKeyManager).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GridFlags: u8 {
        /// Home and End jump to the first and last cell of the grid.
        const HOME_AND_END = 0b0000_0001;
        /// Vertical moves wrap from the last row to the first and back.
        const WRAP_ROWS    = 0b0000_0010;
        /// Horizontal moves wrap from the last cell of the grid to the first and back.
        const WRAP_CELLS   = 0b0000_0100;
    }
}

impl Default for GridFlags {
    fn default() -> Self {
        Self::WRAP_ROWS | Self::WRAP_CELLS
    }
}

/// Notification delivered to change subscribers whenever the active cell moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActiveCellChange {
    /// The newly active coordinate.
    pub coord: GridCoord,
    /// Whether the host should move real focus to the new cell.
    ///
    /// This is `true` for [`set_active_cell`](crate::GridKeyManager::set_active_cell) and
    /// keyboard navigation, and `false` for
    /// [`update_active_cell`](crate::GridKeyManager::update_active_cell), which only syncs
    /// bookkeeping (for example after a cell received focus by pointer).
    pub move_focus: bool,
}

impl ActiveCellChange {
    /// Row index of the newly active cell.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.coord.row
    }

    /// Column index of the newly active cell.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.coord.column
    }
}

/// What happened to the active cell when the rows were replaced or edited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowsRefresh {
    /// The active cell (or the lack of one) is unaffected.
    Unchanged,
    /// The active cell still exists and moved to a new coordinate.
    Tracked(GridCoord),
    /// The active cell is gone; the old coordinate was clamped into the new bounds.
    Clamped(GridCoord),
    /// The grid no longer has any cells; nothing is active.
    Cleared,
}

impl RowsRefresh {
    /// Returns the coordinate the host should focus, if the refresh moved focus elsewhere.
    ///
    /// `Tracked` is not included: the same cell stays focused, only its index changed.
    #[must_use]
    pub const fn refocus(&self) -> Option<GridCoord> {
        match self {
            Self::Clamped(coord) => Some(*coord),
            Self::Unchanged | Self::Tracked(_) | Self::Cleared => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_wrap_without_home_end() {
        let flags = GridFlags::default();
        assert!(flags.contains(GridFlags::WRAP_ROWS | GridFlags::WRAP_CELLS));
        assert!(!flags.contains(GridFlags::HOME_AND_END));
    }

    #[test]
    fn coords_order_by_row_then_column() {
        assert!(GridCoord::new(0, 5) < GridCoord::new(1, 0));
        assert!(GridCoord::new(1, 0) < GridCoord::new(1, 1));
        assert_eq!(GridCoord::from((2, 3)), GridCoord::new(2, 3));
    }

    #[test]
    fn only_clamped_refresh_requests_refocus() {
        let c = GridCoord::new(1, 1);
        assert_eq!(RowsRefresh::Clamped(c).refocus(), Some(c));
        assert_eq!(RowsRefresh::Tracked(c).refocus(), None);
        assert_eq!(RowsRefresh::Cleared.refocus(), None);
        assert_eq!(RowsRefresh::Unchanged.refocus(), None);
    }
}
