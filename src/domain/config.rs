//! Grid configuration: dimensions, cell geometry and stepper fan-out.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigurationError;

/// Partitions per step when the host does not choose one.
pub const DEFAULT_PARTITIONS: usize = 8;

fn default_partitions() -> usize {
    DEFAULT_PARTITIONS
}

/// Everything `configure` needs to size and lay out a simulation.
///
/// Deserializes from the same camelCase JSON the JS host builds:
/// `{"columns":80,"rows":60,"cellSize":10,"columnOffset":0,"rowOffset":0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
    #[serde(default)]
    pub column_offset: f32,
    #[serde(default)]
    pub row_offset: f32,
    #[serde(default = "default_partitions")]
    pub partitions: usize,
}

impl GridConfig {
    pub fn new(columns: u32, rows: u32, cell_size: f32, column_offset: f32, row_offset: f32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            column_offset,
            row_offset,
            partitions: DEFAULT_PARTITIONS,
        }
    }

    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidJson(e.to_string()))
    }

    /// Validate and return the cell count.
    ///
    /// Dimensions are capped at `i32::MAX` per axis so wrapped coordinates stay
    /// representable as signed offsets, and `cells * 3` must fit in `usize` for
    /// the coordinate buffer.
    pub fn validate(&self) -> Result<usize, ConfigurationError> {
        let invalid_dims = || ConfigurationError::InvalidDimensions {
            columns: self.columns as i64,
            rows: self.rows as i64,
        };

        if self.columns == 0 || self.rows == 0 {
            return Err(invalid_dims());
        }
        if self.columns > i32::MAX as u32 || self.rows > i32::MAX as u32 {
            return Err(invalid_dims());
        }
        let cells = (self.columns as usize)
            .checked_mul(self.rows as usize)
            .filter(|cells| cells.checked_mul(3).is_some())
            .ok_or_else(invalid_dims)?;

        if !self.cell_size.is_finite() || self.cell_size < 0.0 {
            return Err(ConfigurationError::InvalidCellSize(self.cell_size));
        }
        if !self.column_offset.is_finite() || !self.row_offset.is_finite() {
            return Err(ConfigurationError::InvalidOffset {
                column_offset: self.column_offset,
                row_offset: self.row_offset,
            });
        }
        if self.partitions == 0 {
            return Err(ConfigurationError::InvalidPartitionCount);
        }

        Ok(cells)
    }
}
