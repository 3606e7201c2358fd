use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{next_state, CellId, Dims, Grid, NEIGHBOUR_OFFSETS};

type KeySet = HashSet<u64, MetroBuildHasher>;

/// cells whose state changed during the last completed operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtySet {
    keys: KeySet,
}

impl DirtySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// returns false if the cell was already marked.
    pub fn mark(&mut self, cell: CellId) -> bool {
        self.keys.insert(cell.packed())
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.keys.contains(&cell.packed())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.keys.iter().copied().map(CellId::from_packed)
    }

    /// every dirty cell together with its wrapped neighbourhood. Cells outside
    /// this set cannot change on the next step.
    pub fn candidates(&self, dims: Dims) -> CandidateSet {
        let mut keys = KeySet::with_capacity_and_hasher(self.len() * 9, Default::default());
        for cell in self.iter() {
            keys.insert(cell.packed());
            for &(dr, dc) in NEIGHBOUR_OFFSETS.iter() {
                keys.insert(dims.wrap(cell, dr, dc).packed());
            }
        }
        CandidateSet { keys }
    }
}

/// deduplicated cells scheduled for evaluation on one step.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    keys: KeySet,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.keys.contains(&cell.packed())
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.keys.iter().copied().map(CellId::from_packed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// candidates the rule was evaluated for.
    pub evaluated: usize,
    /// cells whose state flipped.
    pub changed: usize,
}

/// advances `grid` one generation, visiting only the neighbourhood of `dirty`,
/// and leaves `dirty` holding exactly the cells that changed.
pub fn step(grid: &mut Grid, dirty: &mut DirtySet) -> StepReport {
    let candidates = dirty.candidates(grid.dims());

    // all counts come from the unmutated grid
    let counts: Vec<(CellId, u8)> = candidates
        .iter()
        .map(|cell| (cell, grid.neighbour_count(cell)))
        .collect();

    dirty.clear();
    for &(cell, count) in counts.iter() {
        let next = next_state(grid.get(cell), count);
        if grid.set(cell, next) {
            dirty.mark(cell);
        }
    }

    StepReport {
        evaluated: counts.len(),
        changed: dirty.len(),
    }
}
