// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation keys and the intents they map to.
//!
//! Keys are identified by their DOM `keyCode` value wrapped in [`KeyCode`]. Hosts that
//! receive key events from another toolkit map them onto these constants before calling
//! [`GridKeyManager::on_keydown`](crate::GridKeyManager::on_keydown).

use crate::Direction;

/// A keyboard key identified by its DOM `keyCode` value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

/// The End key.
pub const END: KeyCode = KeyCode(35);
/// The Home key.
pub const HOME: KeyCode = KeyCode(36);
/// The left arrow key.
pub const LEFT_ARROW: KeyCode = KeyCode(37);
/// The up arrow key.
pub const UP_ARROW: KeyCode = KeyCode(38);
/// The right arrow key.
pub const RIGHT_ARROW: KeyCode = KeyCode(39);
/// The down arrow key.
pub const DOWN_ARROW: KeyCode = KeyCode(40);

/// Every key the grid manager treats as a navigation key.
///
/// Home and End are listed even though they only act when enabled with
/// [`GridKeyManager::with_home_and_end`](crate::GridKeyManager::with_home_and_end).
pub const NAVIGATION_KEYS: [KeyCode; 6] =
    [DOWN_ARROW, UP_ARROW, RIGHT_ARROW, LEFT_ARROW, HOME, END];

/// Returns `true` if `key` is one of [`NAVIGATION_KEYS`].
#[must_use]
pub fn is_navigation_key(key: KeyCode) -> bool {
    NAVIGATION_KEYS.contains(&key)
}

/// A single grid navigation intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridNavigation {
    /// Same column, next row.
    NextRow,
    /// Same column, previous row.
    PreviousRow,
    /// Next cell in reading order.
    NextColumn,
    /// Previous cell in reading order.
    PreviousColumn,
    /// First cell of the grid.
    FirstCell,
    /// Last cell of the grid.
    LastCell,
}

impl GridNavigation {
    /// Maps a key to an intent.
    ///
    /// Horizontal arrows are resolved against `direction`. Home and End only map when
    /// `home_and_end` is set. Returns `None` for every other key.
    #[must_use]
    pub fn from_key(key: KeyCode, direction: Direction, home_and_end: bool) -> Option<Self> {
        let rtl = direction == Direction::Rtl;
        match key {
            DOWN_ARROW => Some(Self::NextRow),
            UP_ARROW => Some(Self::PreviousRow),
            RIGHT_ARROW if rtl => Some(Self::PreviousColumn),
            RIGHT_ARROW => Some(Self::NextColumn),
            LEFT_ARROW if rtl => Some(Self::NextColumn),
            LEFT_ARROW => Some(Self::PreviousColumn),
            HOME if home_and_end => Some(Self::FirstCell),
            END if home_and_end => Some(Self::LastCell),
            _ => None,
        }
    }
}
