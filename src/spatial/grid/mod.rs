//! Grid - double-buffered cell storage plus the render coordinate buffer
//!
//! Two generations live side by side:
//!     current[]  read by the rule during a step, committed state otherwise
//!     next[]     written by the rule; always pre-seeded with `current`
//! and one interleaved `coordinates[]` of (x, y, z) per cell for the renderer.
//!
//! All three are allocated once per configure and never resized.

use crate::core::error::{EngineError, EngineResult};
use crate::domain::config::GridConfig;

mod indexing;
mod accessors;

pub use indexing::GenerationView;
pub use accessors::RANDOM_ALIVE_PROBABILITY;

/// Per-cell state: 0 = dead, 1..=3 = alive with that many generations of age.
pub type CellState = u8;

pub const DEAD: CellState = 0;

/// z written for every cell at setup, before the first projection.
pub const SETUP_Z_MARKER: f32 = 3.0;

/// Floats per cell in the coordinate buffer.
pub const COORDS_PER_CELL: usize = 3;

pub struct Grid {
    columns: u32,
    rows: u32,
    size: usize,

    cell_size: f32,
    column_offset: f32,
    row_offset: f32,

    pub current: Vec<CellState>,
    pub next: Vec<CellState>,
    pub coordinates: Vec<f32>,
}

fn allocate<T: Clone>(len: usize, fill: T, cells: usize) -> EngineResult<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| EngineError::Allocation { cells })?;
    buffer.resize(len, fill);
    Ok(buffer)
}

impl Grid {
    /// Allocate all buffers for `config`, every cell dead.
    pub fn new(config: &GridConfig) -> EngineResult<Self> {
        let size = config.validate()?;

        let current = allocate(size, DEAD, size)?;
        let next = allocate(size, DEAD, size)?;
        let mut coordinates = allocate(size * COORDS_PER_CELL, 0.0f32, size)?;

        let side = config.cell_size;
        let columns = config.columns as usize;
        for (idx, cell) in coordinates.chunks_exact_mut(COORDS_PER_CELL).enumerate() {
            let column = idx % columns;
            let row = idx / columns;
            cell[0] = side / 2.0 + column as f32 * side + config.column_offset;
            cell[1] = side / 2.0 + row as f32 * side + config.row_offset;
            cell[2] = SETUP_Z_MARKER;
        }

        Ok(Self {
            columns: config.columns,
            rows: config.rows,
            size,
            cell_size: config.cell_size,
            column_offset: config.column_offset,
            row_offset: config.row_offset,
            current,
            next,
            coordinates,
        })
    }

    /// Publish `next` as the new `current`. Must only run after every
    /// partition of the step has finished writing `next`.
    pub fn commit(&mut self) {
        self.current.copy_from_slice(&self.next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: u32, rows: u32) -> Grid {
        Grid::new(&GridConfig::new(columns, rows, 10.0, 5.0, 7.0)).unwrap()
    }

    #[test]
    fn buffers_are_sized_from_dimensions() {
        let grid = grid(4, 3);
        assert_eq!(grid.size(), 12);
        assert_eq!(grid.current.len(), 12);
        assert_eq!(grid.next.len(), 12);
        assert_eq!(grid.coordinates.len(), 36);
        assert!(grid.current.iter().chain(grid.next.iter()).all(|&c| c == DEAD));
    }

    #[test]
    fn coordinates_are_cell_centres_with_offsets() {
        let grid = grid(4, 3);
        // index 6 = column 2, row 1
        let cell = &grid.coordinates[6 * COORDS_PER_CELL..7 * COORDS_PER_CELL];
        assert_eq!(cell, &[5.0 + 20.0 + 5.0, 5.0 + 10.0 + 7.0, SETUP_Z_MARKER]);
    }

    #[test]
    fn commit_copies_next_over_current() {
        let mut grid = grid(2, 2);
        grid.next[3] = 2;
        grid.commit();
        assert_eq!(grid.current, vec![0, 0, 0, 2]);
    }

    #[test]
    fn invalid_config_allocates_nothing() {
        let err = Grid::new(&GridConfig::new(0, 5, 1.0, 0.0, 0.0)).err().unwrap();
        assert!(matches!(err, EngineError::Configuration(_)));
    }
}
