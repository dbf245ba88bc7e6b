// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_grid_focus --heading-base-level=0

//! Understory Grid Focus: roving focus for 2D grids of cells.
//!
//! This crate provides a small, headless controller for keyboard navigation inside a
//! composite widget laid out as rows of focusable cells, such as a chip grid where each
//! row exposes the chip body and its remove button. Only one cell is "active" at a time;
//! arrow keys move it.
//!
//! The core concepts are:
//!
//! - [`GridRow`]: anything that can expose an ordered slice of cell handles. Implemented
//!   for `Vec<T>`, arrays, slices, boxed slices and `SmallVec`.
//! - [`GridKeyManager`]: owns the rows and tracks the active [`GridCoord`]. It maps
//!   [`KeyCode`]s to [`GridNavigation`] intents (taking [`Direction`] into account),
//!   applies them with wraparound controlled by [`GridFlags`], and re-validates the
//!   active cell when rows are replaced.
//! - [`ChangeEmitter`]: a synchronous, multi-subscriber stream of [`ActiveCellChange`]
//!   notifications. Nothing is replayed to late subscribers.
//!
//! This crate deliberately does **not** move real focus, render anything, or know about
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Forwarding key events as [`KeyCode`]s and suppressing the default action when
//!   [`GridKeyManager::on_keydown`] returns `true`.
//! - Subscribing to changes and focusing the widget behind the new active cell when
//!   [`ActiveCellChange::move_focus`] is set.
//! - Calling [`GridKeyManager::set_rows`] or [`GridKeyManager::update_rows`] after
//!   adding or removing rows, and refocusing when the returned [`RowsRefresh`] asks for it.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use understory_grid_focus::{Direction, GridCoord, GridKeyManager, keys};
//!
//! // Three chips, each with a body and a remove button.
//! let rows = vec![
//!     vec!["apple", "apple-remove"],
//!     vec!["pear", "pear-remove"],
//!     vec!["plum", "plum-remove"],
//! ];
//! let mut grid = GridKeyManager::new(rows)
//!     .with_directionality(Direction::Ltr)
//!     .with_home_and_end(true);
//!
//! let focused = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&focused);
//! grid.subscribe(move |change| sink.borrow_mut().push(change.coord));
//!
//! grid.set_first_cell_active();
//! assert!(grid.on_keydown(keys::DOWN_ARROW));
//! assert!(grid.on_keydown(keys::RIGHT_ARROW));
//! assert_eq!(grid.active_cell(), Some(&"pear-remove"));
//!
//! assert!(grid.on_keydown(keys::END));
//! assert_eq!(grid.active_coord(), Some(GridCoord::new(2, 1)));
//! assert_eq!(focused.borrow().len(), 4);
//! ```
//!
//! ## Rows that change
//!
//! The manager owns its rows. After a structural change it looks the previously active
//! cell up again, so focus follows a chip when rows above it are removed, and falls back
//! to the nearest surviving cell when the active chip itself is gone:
//!
//! ```rust
//! use understory_grid_focus::{GridCoord, GridKeyManager, RowsRefresh};
//!
//! let mut grid = GridKeyManager::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
//! grid.set_active_cell(&6);
//!
//! let refresh = grid.update_rows(|rows| {
//!     rows.remove(0);
//! });
//! assert_eq!(refresh, RowsRefresh::Tracked(GridCoord::new(1, 1)));
//!
//! let refresh = grid.update_rows(|rows| rows.truncate(1));
//! assert_eq!(refresh, RowsRefresh::Clamped(GridCoord::new(0, 1)));
//! assert_eq!(grid.active_cell(), Some(&4));
//! ```
//!
//! Navigation emits `trace`-level records and refresh fallbacks `debug`-level records
//! through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod change;
pub mod keys;
mod manager;
mod row;
mod types;

pub use change::{ChangeEmitter, Subscription};
pub use keys::{GridNavigation, KeyCode, NAVIGATION_KEYS, is_navigation_key};
pub use manager::{CellTarget, GridKeyManager};
pub use row::GridRow;
pub use types::{ActiveCellChange, Direction, GridCoord, GridFlags, RowsRefresh};
