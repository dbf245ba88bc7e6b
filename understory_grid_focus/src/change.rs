// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous change notifications.
//!
//! [`ChangeEmitter`] is a minimal multi-subscriber event source. Listeners are invoked
//! in subscription order, synchronously, from inside the call that moved the active cell.
//! Nothing is buffered: a listener only sees changes emitted after it subscribed.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::ActiveCellChange;

/// Handle returned by [`ChangeEmitter::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&ActiveCellChange)>;

/// Multi-subscriber source of [`ActiveCellChange`] notifications.
#[derive(Default)]
pub struct ChangeEmitter {
    // Most grids have a single owner listening.
    listeners: SmallVec<[(Subscription, Listener); 2]>,
    next_id: u64,
}

impl fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ChangeEmitter {
    /// Creates an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns a handle for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&ActiveCellChange) + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        match self.listeners.iter().position(|(id, _)| *id == subscription) {
            Some(pos) => {
                drop(self.listeners.remove(pos));
                true
            }
            None => false,
        }
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers `change` to every listener, in subscription order.
    pub fn emit(&mut self, change: &ActiveCellChange) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }
}
