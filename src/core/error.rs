//! Error taxonomy for the host-facing engine API.
//!
//! Nothing inside `step`, `refresh` or `live_at` can fail once the engine is
//! configured; every error here comes from validating caller input.

use thiserror::Error;

/// Misuse of the configure/lifecycle contract. Never mutates engine state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("engine used before configure")]
    NotConfigured,

    #[error("grid dimensions must be positive and addressable, got {columns}x{rows}")]
    InvalidDimensions { columns: i64, rows: i64 },

    #[error("cell size must be finite and non-negative, got {0}")]
    InvalidCellSize(f32),

    #[error("grid offsets must be finite, got ({column_offset}, {row_offset})")]
    InvalidOffset { column_offset: f32, row_offset: f32 },

    #[error("partition count must be at least 1")]
    InvalidPartitionCount,

    #[error("base opacity must be in [0, 1), got {0}")]
    InvalidBaseOpacity(f32),

    #[error("invalid grid config json: {0}")]
    InvalidJson(String),
}

/// Failure decoding or placing a run-length encoded pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unexpected `{tag}` at byte {offset}")]
    UnexpectedTag { tag: char, offset: usize },

    #[error("run writes cell ({column}, {row}) outside {columns}x{rows} pattern")]
    OutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    #[error("pattern box {columns}x{rows} exceeds {max} cells")]
    TooLarge { columns: usize, rows: usize, max: usize },

    #[error("invalid pattern library json: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("cell index {index} outside grid of {len} cells")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("cell state {state} is not a valid age (0..={max})")]
    InvalidCellState { state: i32, max: u8 },

    #[error("failed to allocate buffers for {cells} cells")]
    Allocation { cells: usize },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type EngineResult<T> = Result<T, EngineError>;
