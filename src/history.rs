//! Bounded generation history with a rewind cursor.
//!
//! Entries are captured at the start of every computed tick, so entry `i` holds
//! the grid a tick started from and the dirty cells that produced it. The cursor
//! counts steps back from the present: at cursor `c < 0` the live state is entry
//! `len + c`. The present itself is not an entry; it is stashed on the first
//! step back and handed back when the cursor returns to zero, so stepping
//! forward never recomputes a generation.

use std::collections::VecDeque;

use crate::{DirtySet, EngineError, Grid};

pub const DEFAULT_CAPACITY: usize = 100;

/// an owned copy of the live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub dirty: DirtySet,
}

impl HistoryEntry {
    pub fn capture(grid: &Grid, dirty: &DirtySet) -> Self {
        Self {
            grid: grid.clone(),
            dirty: dirty.clone(),
        }
    }

    pub fn restore_into(&self, grid: &mut Grid, dirty: &mut DirtySet) {
        grid.clone_from(&self.grid);
        dirty.clone_from(&self.dirty);
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    cursor: isize,
    present: Option<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            cursor: 0,
            present: None,
        }
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Result<Self, EngineError> {
        if capacity == 0 {
            return Err(EngineError::ZeroCapacity);
        }
        // grows on demand up to `capacity`
        Ok(Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            cursor: 0,
            present: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// always `<= 0`, with magnitude at most `len()`.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn is_rewound(&self) -> bool {
        self.cursor < 0
    }

    pub fn can_untick(&self) -> bool {
        !self.entries.is_empty() && self.entries.len() > self.cursor.unsigned_abs()
    }

    pub fn can_retick(&self) -> bool {
        self.cursor < 0
    }

    /// appends the state a tick is about to start from, evicting the oldest
    /// entry when full. Only valid at the present.
    pub fn record(&mut self, entry: HistoryEntry) {
        debug_assert_eq!(self.cursor, 0, "recording while rewound");
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// moves one entry back. `live` is stashed as the present when leaving it.
    /// Returns the entry to restore, or `None` when nothing older is retained.
    pub fn step_back(&mut self, live: impl FnOnce() -> HistoryEntry) -> Option<&HistoryEntry> {
        if !self.can_untick() {
            return None;
        }
        if self.cursor == 0 {
            self.present = Some(live());
        }
        self.cursor -= 1;
        self.entries.get(self.position())
    }

    /// moves one entry forward, returning the state to restore. `None` means
    /// the cursor is already at the present.
    pub fn step_forward(&mut self) -> Option<HistoryEntry> {
        if self.cursor >= 0 {
            return None;
        }
        if self.cursor == -1 {
            let present = self.present.take()?;
            self.cursor = 0;
            return Some(present);
        }
        let entry = self.entries.get(self.position() + 1)?.clone();
        self.cursor += 1;
        Some(entry)
    }

    /// drops every entry newer than the one currently viewed and makes it the
    /// present. Returns the number of entries dropped.
    pub fn discard_future(&mut self) -> usize {
        if self.cursor == 0 {
            return 0;
        }
        let keep = self.position();
        let dropped = self.entries.len() - keep;
        self.entries.truncate(keep);
        self.present = None;
        self.cursor = 0;
        dropped
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.present = None;
        self.cursor = 0;
    }

    #[cfg(test)]
    pub(crate) fn forget_present(&mut self) {
        self.present = None;
    }

    fn position(&self) -> usize {
        (self.entries.len() as isize + self.cursor) as usize
    }
}
