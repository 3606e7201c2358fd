use log::{debug, warn};

use crate::{
    cell, presets, step, CellId, Dims, DirtySet, EngineError, Grid, History, HistoryEntry,
    StepReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// a new generation was computed.
    Advanced(StepReport),
    /// an already known generation was restored from history.
    Replayed,
    /// the engine is rewound but the next generation could not be restored;
    /// nothing changed.
    Refused,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub computed_ticks: u64,
    pub replayed_ticks: u64,
    pub cells_evaluated: u64,
}

/// owns the live grid, its dirty cells and the generation history.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    dirty: DirtySet,
    history: History,
    generation: u64,
    stats: EngineStats,
}

impl Engine {
    pub fn new(rows: u32, cols: u32) -> Result<Self, EngineError> {
        Ok(Self::from_parts(Dims::new(rows, cols)?, History::default()))
    }

    pub fn with_history(dims: Dims, capacity: usize) -> Result<Self, EngineError> {
        Ok(Self::from_parts(dims, History::with_capacity(capacity)?))
    }

    fn from_parts(dims: Dims, history: History) -> Self {
        Self {
            grid: Grid::new(dims),
            dirty: DirtySet::new(),
            history,
            generation: 0,
            stats: EngineStats::default(),
        }
    }

    pub fn dims(&self) -> Dims {
        self.grid.dims()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    pub fn get(&self, row: u32, col: u32) -> Result<bool, EngineError> {
        let cell = self.dims().check(cell!(row, col))?;
        Ok(self.grid.get(cell))
    }

    pub fn cursor(&self) -> isize {
        self.history.cursor()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// generations since the last load or reset, as seen from the cursor.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn can_untick(&self) -> bool {
        self.history.can_untick()
    }

    /// flips one cell and marks it dirty. Returns the new value.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<bool, EngineError> {
        let cell = self.dims().check(cell!(row, col))?;
        let alive = !self.grid.get(cell);
        self.write(cell, alive);
        Ok(alive)
    }

    /// writes one cell, marking it dirty only if the value changed.
    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> Result<bool, EngineError> {
        let cell = self.dims().check(cell!(row, col))?;
        Ok(self.write(cell, alive))
    }

    /// history and cursor are left alone, even while rewound.
    fn write(&mut self, cell: CellId, alive: bool) -> bool {
        let changed = self.grid.set(cell, alive);
        if changed {
            self.dirty.mark(cell);
        }
        changed
    }

    /// drops the generations ahead of the one being viewed, making it the
    /// present. Returns how many entries were dropped.
    pub fn discard_future(&mut self) -> usize {
        let dropped = self.history.discard_future();
        if dropped > 0 {
            debug!("dropped {dropped} forward entries at generation {}", self.generation);
        }
        dropped
    }

    pub fn tick(&mut self) -> TickOutcome {
        if let Some(entry) = self.history.step_forward() {
            entry.restore_into(&mut self.grid, &mut self.dirty);
            self.generation += 1;
            self.stats.replayed_ticks += 1;
            debug!("replayed generation {} (cursor {})", self.generation, self.cursor());
            return TickOutcome::Replayed;
        }
        if self.history.is_rewound() {
            warn!("cannot replay past generation {}, tick refused", self.generation);
            return TickOutcome::Refused;
        }

        self.history
            .record(HistoryEntry::capture(&self.grid, &self.dirty));
        let report = step(&mut self.grid, &mut self.dirty);
        self.generation += 1;
        self.stats.computed_ticks += 1;
        self.stats.cells_evaluated += report.evaluated as u64;
        debug!(
            "computed generation {}: {} evaluated, {} changed",
            self.generation, report.evaluated, report.changed
        );
        TickOutcome::Advanced(report)
    }

    /// restores the state before the last tick. Refused, with state untouched,
    /// when no older entry is retained.
    pub fn untick(&mut self) -> Result<(), EngineError> {
        let Self {
            grid,
            dirty,
            history,
            ..
        } = self;
        let Some(entry) = history.step_back(|| HistoryEntry::capture(grid, dirty)) else {
            debug!("untick refused, no older generation retained");
            return Err(EngineError::NothingToUntick);
        };
        entry.restore_into(grid, dirty);
        self.generation = self.generation.saturating_sub(1);
        debug!("rewound to generation {} (cursor {})", self.generation, self.cursor());
        Ok(())
    }

    /// clears the grid and history, then sets every listed cell alive. Nothing
    /// changes if any cell is out of bounds.
    pub fn load_preset(
        &mut self,
        cells: impl IntoIterator<Item = CellId>,
    ) -> Result<(), EngineError> {
        let dims = self.dims();
        let cells = cells
            .into_iter()
            .map(|cell| dims.check(cell))
            .collect::<Result<Vec<_>, _>>()?;

        self.reset();
        for cell in cells {
            if self.grid.set(cell, true) {
                self.dirty.mark(cell);
            }
        }
        debug!("loaded {} cells", self.dirty.len());
        Ok(())
    }

    /// loads a catalogue preset centred on the grid. Unknown names leave the
    /// engine untouched and return `Ok(false)`.
    pub fn load_named(&mut self, name: &str) -> Result<bool, EngineError> {
        let Some(preset) = presets::find(name) else {
            debug!("unknown preset {name:?}");
            return Ok(false);
        };
        self.load_preset(preset.centered(self.dims()))?;
        Ok(true)
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.dirty.clear();
        self.history.clear();
        self.generation = 0;
    }
}
