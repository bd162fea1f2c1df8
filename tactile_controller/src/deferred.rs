// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred attribute resets for timer-based cosmetic effects.
//!
//! A pulse effect temporarily changes a target's orientation or scale and
//! schedules the end-state to be restored after a delay. Entries carry the
//! generation of the target at scheduling time; the controller drops an entry
//! whose target has since started a newer session, so a stale reset never
//! stomps a value written by that session.
//!
//! The queue itself is a plain ordered collection with no clock: the host
//! drives it by calling [`Controller::advance`](crate::controller::Controller::advance)
//! with its own timestamps.

use alloc::vec::Vec;

use tactile_gesture::pinch::Scale3;
use tactile_gesture::rotate::Euler;

/// The end-state a deferred reset restores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetValue {
    /// Restore the target's orientation.
    Orientation(Euler),
    /// Restore the target's per-axis scale.
    Scale(Scale3),
}

/// A scheduled reset for one target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeferredReset<K> {
    /// The target whose attribute is restored.
    pub node: K,
    /// The target's generation when the reset was scheduled.
    pub generation: u64,
    /// Host timestamp at which the reset becomes due, in milliseconds.
    pub due_ms: u64,
    /// The value to restore.
    pub value: ResetValue,
}

/// FIFO queue of scheduled resets.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue<K> {
    entries: Vec<DeferredReset<K>>,
}

impl<K: Copy> DeferredQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a scheduled reset.
    pub fn push(&mut self, entry: DeferredReset<K>) {
        self.entries.push(entry);
    }

    /// Removes and returns every entry due at `now_ms`, preserving the order
    /// in which they were scheduled.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<DeferredReset<K>> {
        let mut due = Vec::new();
        self.entries.retain(|entry| {
            if entry.due_ms <= now_ms {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due
    }

    /// Returns the number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no resets are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
