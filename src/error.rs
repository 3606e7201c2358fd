//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: u32, cols: u32 },

    /// A coordinate lies outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: u32, col: u32, rows: u32, cols: u32 },

    /// No older history entry is available.
    #[error("nothing to untick")]
    NothingToUntick,

    /// The history buffer must hold at least one entry.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

/// Errors raised while reading the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("failed to read pattern {}: {source}", path.display())]
    PatternRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {}: {source}", path.display())]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
