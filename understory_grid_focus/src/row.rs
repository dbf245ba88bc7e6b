// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row abstraction consumed by the grid manager.

use alloc::boxed::Box;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// A row of focusable cells.
///
/// A row only needs to expose its cells in visual order. Cells are compared with
/// [`PartialEq`] when looking them up, so they are usually small handles (widget ids,
/// node keys) rather than the widgets themselves.
///
/// All rows of a grid are expected to have the same number of cells. Rows of different
/// lengths are tolerated: vertical moves clamp the column and empty rows are skipped.
pub trait GridRow {
    /// The cell handle type.
    type Cell: PartialEq;

    /// Returns the cells of this row, in order.
    fn cells(&self) -> &[Self::Cell];

    /// Returns the number of cells in this row.
    fn len(&self) -> usize {
        self.cells().len()
    }

    /// Returns `true` if this row has no cells.
    fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }
}

impl<T: PartialEq> GridRow for Vec<T> {
    type Cell = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<T: PartialEq, const N: usize> GridRow for [T; N] {
    type Cell = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<T: PartialEq> GridRow for &[T] {
    type Cell = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<T: PartialEq> GridRow for Box<[T]> {
    type Cell = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<A> GridRow for SmallVec<A>
where
    A: smallvec::Array,
    A::Item: PartialEq,
{
    type Cell = A::Item;

    fn cells(&self) -> &[A::Item] {
        self
    }
}

/// Finds the first cell equal to `cell`, scanning rows in order.
pub(crate) fn locate<R: GridRow>(rows: &[R], cell: &R::Cell) -> Option<(usize, usize)> {
    rows.iter().enumerate().find_map(|(row, r)| {
        r.cells()
            .iter()
            .position(|c| c == cell)
            .map(|column| (row, column))
    })
}
