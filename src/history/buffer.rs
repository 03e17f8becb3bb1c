//! Linear undo buffer with a movable cursor and a redeal floor.
//!
//! ```text
//! entries:  [deal] [move] [move] [redeal] [move]
//!                          ^floor          ^cursor
//! ```
//!
//! - `record` drops everything after the cursor, appends, and moves the
//!   cursor onto the new entry.
//! - `step_back` moves the cursor one entry back, never below the floor.
//! - `mark_floor` pins the floor at the cursor; it is called right before
//!   the post-redeal snapshot is recorded.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Append-only history of `T` with a cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<T: Clone> {
    entries: Vector<T>,
    cursor: Option<usize>,
    floor: Option<usize>,
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self {
            entries: Vector::new(),
            cursor: None,
            floor: None,
        }
    }
}

impl<T: Clone> History<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry and reset cursor and floor.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record a new entry, discarding any entries after the cursor.
    pub fn record(&mut self, entry: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push_back(entry);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Number of recorded entries (including any after the cursor).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Oldest index undo may return to.
    #[must_use]
    pub fn floor(&self) -> Option<usize> {
        self.floor
    }

    /// Pin the floor at the current cursor.
    pub fn mark_floor(&mut self) {
        self.floor = self.cursor;
    }

    /// The entry under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor?)
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Can the cursor move back without crossing the floor?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        match (self.cursor, self.floor) {
            (Some(cursor), Some(floor)) => cursor > floor,
            (Some(cursor), None) => cursor > 0,
            (None, _) => false,
        }
    }

    /// Move the cursor back one entry and return it.
    ///
    /// Returns `None` (cursor unchanged) when blocked by the floor or at
    /// the first entry.
    pub fn step_back(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        let index = self.cursor? - 1;
        self.restore(index)
    }

    /// Move the cursor to `index` and return that entry.
    ///
    /// The entry list is left as is. Returns `None` (cursor unchanged) for
    /// an index past the end.
    pub fn restore(&mut self, index: usize) -> Option<&T> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = Some(index);
        self.entries.get(index)
    }
}
