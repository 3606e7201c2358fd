//! A Game of Life engine on a fixed-size torus.
//!
//! Ticks only revisit the neighbourhood of cells that changed on the previous
//! step, and every computed tick is recorded in a bounded history that can be
//! rewound and replayed without recomputation.

pub use utils::{CellId, Dims, NEIGHBOUR_OFFSETS};
mod utils;

pub use error::{ConfigError, EngineError};
mod error;

pub use world::{next_state, step, CandidateSet, DirtySet, Grid, StepReport};
pub mod world;

pub use history::{History, HistoryEntry};
pub mod history;

pub use engine::{Engine, EngineStats, TickOutcome};
mod engine;

pub use presets::Preset;
pub mod presets;

pub use config::{Config, Seed};
pub mod config;

pub use sim::{Sim, SimCmd, SimHandle, Snapshot};
mod sim;

pub use view::View;
pub mod view;
