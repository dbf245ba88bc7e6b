// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid key manager: a roving-focus state machine over rows of cells.

use alloc::vec::Vec;
use core::mem;

use log::{debug, trace};

use crate::change::{ChangeEmitter, Subscription};
use crate::keys::{GridNavigation, KeyCode};
use crate::row::{GridRow, locate};
use crate::{ActiveCellChange, Direction, GridCoord, GridFlags, RowsRefresh};

/// Something that identifies a cell: either its coordinate or the cell handle itself.
///
/// Built implicitly through [`From`] by [`GridKeyManager::set_active_cell`] and
/// [`GridKeyManager::update_active_cell`], so callers can pass a [`GridCoord`], a
/// `(row, column)` tuple, or `&cell`.
#[derive(Debug)]
pub enum CellTarget<'a, T> {
    /// A `(row, column)` position.
    Coord(GridCoord),
    /// A cell handle, looked up by equality.
    Cell(&'a T),
}

impl<T> From<GridCoord> for CellTarget<'_, T> {
    fn from(coord: GridCoord) -> Self {
        Self::Coord(coord)
    }
}

impl<T> From<(usize, usize)> for CellTarget<'_, T> {
    fn from(coord: (usize, usize)) -> Self {
        Self::Coord(coord.into())
    }
}

impl<'a, T> From<&'a T> for CellTarget<'a, T> {
    fn from(cell: &'a T) -> Self {
        Self::Cell(cell)
    }
}

/// Tracks one active cell in a grid of rows and moves it in response to keys.
///
/// The manager owns the rows in visual order. It never touches real focus: every time
/// the active coordinate changes it notifies the listeners registered with
/// [`subscribe`](Self::subscribe), and the host moves focus to the matching widget.
///
/// Invalid input never panics and never corrupts state. Navigating an empty grid,
/// activating an unknown cell, or passing an out-of-range coordinate are all no-ops.
///
/// ## Traversal
///
/// - Vertical moves keep the column (clamped for shorter rows) and wrap from the last
///   row to the first when [`GridFlags::WRAP_ROWS`] is set.
/// - Horizontal moves walk cells in reading order, continuing on the next or previous
///   row at row edges, and wrap around the whole grid when [`GridFlags::WRAP_CELLS`]
///   is set.
/// - Rows with no cells are skipped.
/// - From the unfocused state, forward moves activate the first cell and backward
///   moves the last.
///
/// ```rust
/// use understory_grid_focus::{GridCoord, GridKeyManager, keys};
///
/// let mut grid = GridKeyManager::new(vec![vec!['a', 'b'], vec!['c', 'd']]);
/// grid.set_first_cell_active();
///
/// assert!(grid.on_keydown(keys::RIGHT_ARROW));
/// assert_eq!(grid.active_cell(), Some(&'b'));
///
/// // Moving past the end of a row continues on the next one.
/// grid.on_keydown(keys::RIGHT_ARROW);
/// assert_eq!(grid.active_coord(), Some(GridCoord::new(1, 0)));
/// ```
#[derive(Debug)]
pub struct GridKeyManager<R: GridRow> {
    rows: Vec<R>,
    active: Option<GridCoord>,
    direction: Direction,
    flags: GridFlags,
    changes: ChangeEmitter,
}

impl<R: GridRow> Default for GridKeyManager<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: GridRow> GridKeyManager<R> {
    /// Creates a manager over `rows` with no active cell.
    ///
    /// Defaults: left-to-right, Home/End disabled, full wraparound.
    #[must_use]
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            active: None,
            direction: Direction::Ltr,
            flags: GridFlags::default(),
            changes: ChangeEmitter::new(),
        }
    }

    /// Sets the horizontal direction used to interpret arrow keys.
    #[must_use]
    pub fn with_directionality(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Enables or disables the Home and End shortcuts.
    #[must_use]
    pub fn with_home_and_end(mut self, enabled: bool) -> Self {
        self.set_home_and_end(enabled);
        self
    }

    /// Chooses whether vertical (`rows`) and horizontal (`cells`) moves wrap at grid edges.
    #[must_use]
    pub fn with_wrap(mut self, rows: bool, cells: bool) -> Self {
        self.flags.set(GridFlags::WRAP_ROWS, rows);
        self.flags.set(GridFlags::WRAP_CELLS, cells);
        self
    }

    /// Replaces every behavior flag at once.
    #[must_use]
    pub fn with_flags(mut self, flags: GridFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the horizontal direction. Only affects subsequent key handling.
    pub fn set_directionality(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Enables or disables the Home and End shortcuts.
    pub fn set_home_and_end(&mut self, enabled: bool) {
        self.flags.set(GridFlags::HOME_AND_END, enabled);
    }

    /// Returns the current horizontal direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current behavior flags.
    #[must_use]
    pub const fn flags(&self) -> GridFlags {
        self.flags
    }

    /// Returns `true` if Home and End are handled.
    #[must_use]
    pub const fn home_and_end_enabled(&self) -> bool {
        self.flags.contains(GridFlags::HOME_AND_END)
    }

    /// Returns the rows, in order.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the active coordinate, or `None` before the first activation.
    #[must_use]
    pub const fn active_coord(&self) -> Option<GridCoord> {
        self.active
    }

    /// Returns the row index of the active cell.
    #[must_use]
    pub fn active_row_index(&self) -> Option<usize> {
        self.active.map(|c| c.row)
    }

    /// Returns the column index of the active cell.
    #[must_use]
    pub fn active_column_index(&self) -> Option<usize> {
        self.active.map(|c| c.column)
    }

    /// Returns the active cell.
    #[must_use]
    pub fn active_cell(&self) -> Option<&R::Cell> {
        self.cell_at(self.active?)
    }

    /// Returns the change emitter.
    #[must_use]
    pub fn changes(&self) -> &ChangeEmitter {
        &self.changes
    }

    /// Returns the change emitter mutably.
    pub fn changes_mut(&mut self) -> &mut ChangeEmitter {
        &mut self.changes
    }

    /// Registers a listener for active cell changes.
    ///
    /// Listeners run synchronously, before the call that moved the active cell returns.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&ActiveCellChange) + 'static,
    {
        self.changes.subscribe(listener)
    }

    /// Removes a listener registered with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.changes.unsubscribe(subscription)
    }

    /// Makes `target` the active cell and asks listeners to move focus there.
    ///
    /// `target` is a [`GridCoord`], a `(row, column)` tuple, or `&cell`. Cells are found by
    /// scanning rows in order. Returns `false`, changing nothing, if the coordinate is out
    /// of bounds or the cell is not in the grid. Listeners are only notified when the
    /// active coordinate actually changes.
    pub fn set_active_cell<'a, C>(&mut self, target: C) -> bool
    where
        C: Into<CellTarget<'a, R::Cell>>,
        R::Cell: 'a,
    {
        self.resolve(target.into())
            .map(|coord| self.activate(coord, true))
            .is_some()
    }

    /// Like [`set_active_cell`](Self::set_active_cell), but the emitted change has
    /// [`move_focus`](ActiveCellChange::move_focus) unset.
    ///
    /// Use this to sync bookkeeping when focus already moved by other means, for example
    /// when the user clicked a cell.
    pub fn update_active_cell<'a, C>(&mut self, target: C) -> bool
    where
        C: Into<CellTarget<'a, R::Cell>>,
        R::Cell: 'a,
    {
        self.resolve(target.into())
            .map(|coord| self.activate(coord, false))
            .is_some()
    }

    /// Handles a key press.
    ///
    /// Returns `true` if `key` is a grid navigation key under the current configuration,
    /// in which case the host should suppress the key's default action. The active cell
    /// moves if the grid has anywhere to move to.
    pub fn on_keydown(&mut self, key: KeyCode) -> bool {
        let Some(nav) =
            GridNavigation::from_key(key, self.direction, self.home_and_end_enabled())
        else {
            return false;
        };
        trace!("grid key {key:?} mapped to {nav:?}");
        self.navigate(nav);
        true
    }

    /// Runs a single navigation intent. Returns `false` if there was no cell to move to.
    pub fn navigate(&mut self, nav: GridNavigation) -> bool {
        let target = match nav {
            GridNavigation::NextRow => self.next_row_target(),
            GridNavigation::PreviousRow => self.previous_row_target(),
            GridNavigation::NextColumn => self.next_column_target(),
            GridNavigation::PreviousColumn => self.previous_column_target(),
            GridNavigation::FirstCell => self.first_cell(),
            GridNavigation::LastCell => self.last_cell(),
        };
        target.map(|coord| self.activate(coord, true)).is_some()
    }

    /// Activates the first cell of the grid.
    pub fn set_first_cell_active(&mut self) {
        self.navigate(GridNavigation::FirstCell);
    }

    /// Activates the last cell of the grid.
    pub fn set_last_cell_active(&mut self) {
        self.navigate(GridNavigation::LastCell);
    }

    /// Moves to the same column of the next row.
    pub fn set_next_row_active(&mut self) {
        self.navigate(GridNavigation::NextRow);
    }

    /// Moves to the same column of the previous row.
    pub fn set_previous_row_active(&mut self) {
        self.navigate(GridNavigation::PreviousRow);
    }

    /// Moves to the next cell in reading order.
    pub fn set_next_column_active(&mut self) {
        self.navigate(GridNavigation::NextColumn);
    }

    /// Moves to the previous cell in reading order.
    pub fn set_previous_column_active(&mut self) {
        self.navigate(GridNavigation::PreviousColumn);
    }

    /// Replaces the rows and re-validates the active cell against them.
    ///
    /// If the active cell is still present it stays active at its new coordinate.
    /// Otherwise the old coordinate is clamped into the new grid, or cleared if the grid
    /// has no cells left. No change notification is emitted; inspect the returned
    /// [`RowsRefresh`] to decide whether focus needs to move.
    pub fn set_rows(&mut self, rows: Vec<R>) -> RowsRefresh {
        let previous = mem::replace(&mut self.rows, rows);
        let previous_cell = self
            .active
            .and_then(|c| previous.get(c.row)?.cells().get(c.column));
        self.revalidate(previous_cell)
    }

    /// Edits the rows in place, then re-validates like [`set_rows`](Self::set_rows).
    pub fn update_rows<F>(&mut self, edit: F) -> RowsRefresh
    where
        F: FnOnce(&mut Vec<R>),
        R::Cell: Clone,
    {
        let previous_cell = self.active_cell().cloned();
        edit(&mut self.rows);
        self.revalidate(previous_cell.as_ref())
    }

    fn activate(&mut self, coord: GridCoord, move_focus: bool) {
        if self.active == Some(coord) {
            return;
        }
        trace!(
            "grid active cell {:?} -> ({}, {})",
            self.active, coord.row, coord.column
        );
        self.active = Some(coord);
        self.changes.emit(&ActiveCellChange { coord, move_focus });
    }

    fn resolve(&self, target: CellTarget<'_, R::Cell>) -> Option<GridCoord> {
        match target {
            CellTarget::Coord(coord) => {
                (coord.column < self.row_len(coord.row)).then_some(coord)
            }
            CellTarget::Cell(cell) => locate(&self.rows, cell).map(GridCoord::from),
        }
    }

    fn revalidate(&mut self, previous_cell: Option<&R::Cell>) -> RowsRefresh {
        let Some(old) = self.active else {
            return RowsRefresh::Unchanged;
        };
        if let Some(cell) = previous_cell {
            // Handles may repeat; an equal cell at the old coordinate keeps it.
            if self.cell_at(old) == Some(cell) {
                return RowsRefresh::Unchanged;
            }
        }
        if let Some(found) = previous_cell.and_then(|cell| locate(&self.rows, cell)) {
            let found = GridCoord::from(found);
            trace!("grid rows changed, active cell tracked to {found:?}");
            self.active = Some(found);
            return RowsRefresh::Tracked(found);
        }
        match self.clamp(old) {
            Some(coord) => {
                debug!("grid active cell {old:?} removed, clamped to {coord:?}");
                self.active = Some(coord);
                RowsRefresh::Clamped(coord)
            }
            None => {
                debug!("grid active cell {old:?} removed, grid has no cells");
                self.active = None;
                RowsRefresh::Cleared
            }
        }
    }

    /// Nearest non-empty row at or above `coord.row` (else below), column clamped.
    fn clamp(&self, coord: GridCoord) -> Option<GridCoord> {
        let last = self.rows.len().checked_sub(1)?;
        let start = coord.row.min(last);
        let row = (0..=start)
            .rev()
            .find(|&r| self.row_len(r) > 0)
            .or_else(|| (start + 1..self.rows.len()).find(|&r| self.row_len(r) > 0))?;
        Some(self.cell_in_row(row, coord.column))
    }

    fn cell_at(&self, coord: GridCoord) -> Option<&R::Cell> {
        self.rows.get(coord.row)?.cells().get(coord.column)
    }

    fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, GridRow::len)
    }

    /// `column` clamped into `row`, which must be non-empty.
    fn cell_in_row(&self, row: usize, column: usize) -> GridCoord {
        GridCoord::new(row, column.min(self.row_len(row).saturating_sub(1)))
    }

    fn first_row(&self) -> Option<usize> {
        (0..self.rows.len()).find(|&r| self.row_len(r) > 0)
    }

    fn last_row(&self) -> Option<usize> {
        (0..self.rows.len()).rev().find(|&r| self.row_len(r) > 0)
    }

    fn row_after(&self, row: usize) -> Option<usize> {
        (row + 1..self.rows.len()).find(|&r| self.row_len(r) > 0)
    }

    fn row_before(&self, row: usize) -> Option<usize> {
        (0..row.min(self.rows.len())).rev().find(|&r| self.row_len(r) > 0)
    }

    fn first_cell(&self) -> Option<GridCoord> {
        self.first_row().map(|row| GridCoord::new(row, 0))
    }

    fn last_cell(&self) -> Option<GridCoord> {
        self.last_row()
            .map(|row| GridCoord::new(row, self.row_len(row) - 1))
    }

    fn wraps(&self, flag: GridFlags) -> bool {
        self.flags.contains(flag)
    }

    fn next_row_target(&self) -> Option<GridCoord> {
        let Some(current) = self.active else {
            return self.first_cell();
        };
        let row = self.row_after(current.row).or_else(|| {
            self.wraps(GridFlags::WRAP_ROWS)
                .then(|| self.first_row())
                .flatten()
        })?;
        Some(self.cell_in_row(row, current.column))
    }

    fn previous_row_target(&self) -> Option<GridCoord> {
        let Some(current) = self.active else {
            return self.last_cell();
        };
        let row = self.row_before(current.row).or_else(|| {
            self.wraps(GridFlags::WRAP_ROWS)
                .then(|| self.last_row())
                .flatten()
        })?;
        Some(self.cell_in_row(row, current.column))
    }

    fn next_column_target(&self) -> Option<GridCoord> {
        let Some(current) = self.active else {
            return self.first_cell();
        };
        if current.column + 1 < self.row_len(current.row) {
            return Some(GridCoord::new(current.row, current.column + 1));
        }
        match self.row_after(current.row) {
            Some(row) => Some(GridCoord::new(row, 0)),
            None if self.wraps(GridFlags::WRAP_CELLS) => self.first_cell(),
            None => None,
        }
    }

    fn previous_column_target(&self) -> Option<GridCoord> {
        let Some(current) = self.active else {
            return self.last_cell();
        };
        if current.column > 0 {
            return Some(self.cell_in_row(current.row, current.column - 1));
        }
        match self.row_before(current.row) {
            Some(row) => Some(GridCoord::new(row, self.row_len(row) - 1)),
            None if self.wraps(GridFlags::WRAP_CELLS) => self.last_cell(),
            None => None,
        }
    }
}
