use crate::core::error::{EngineError, EngineResult};
use crate::domain::patterns::Pattern;
use crate::domain::rules::MAX_AGE;
use crate::spatial::grid::{CellState, DEAD};

use super::SimulationCore;

pub(super) fn clear_all(sim: &mut SimulationCore) {
    sim.grid.clear();
    sim.generation = 0;
    log::debug!("cleared {} cells", sim.grid.size());
}

pub(super) fn set_cell(sim: &mut SimulationCore, index: usize, state: CellState) -> EngineResult<()> {
    let len = sim.grid.size();
    if index >= len {
        log::warn!("set_cell rejected: index {} outside {} cells", index, len);
        return Err(EngineError::IndexOutOfRange { index: index as i64, len });
    }
    if state > MAX_AGE {
        log::warn!("set_cell rejected: state {} above max age {}", state, MAX_AGE);
        return Err(EngineError::InvalidCellState { state: state as i32, max: MAX_AGE });
    }

    sim.grid.set_cell(index, state);
    Ok(())
}

/// Place `pattern` with its centre at (column, row). Coordinates wrap, and
/// cells that are already alive are left as they are.
pub(super) fn stamp_pattern(sim: &mut SimulationCore, column: i64, row: i64, pattern: &Pattern) -> usize {
    let origin_x = column - (pattern.columns() / 2) as i64;
    let origin_y = row - (pattern.rows() / 2) as i64;
    let mut placed = 0usize;

    for py in 0..pattern.rows() {
        for px in 0..pattern.columns() {
            let state = pattern.get(px, py);
            if state == DEAD {
                continue;
            }
            let idx = sim.grid.wrapped_index(origin_x + px as i64, origin_y + py as i64);
            if sim.grid.is_alive(idx) {
                continue;
            }
            sim.grid.set_cell(idx, state);
            placed += 1;
        }
    }

    log::debug!(
        "stamped {}x{} pattern at ({}, {}): {} cells placed",
        pattern.columns(),
        pattern.rows(),
        column,
        row,
        placed
    );
    placed
}

/// Inverse of the coordinate layout: which cell's square contains (px, py).
pub(super) fn cell_at_point(sim: &SimulationCore, px: f32, py: f32) -> Option<usize> {
    let grid = &sim.grid;
    let side = grid.cell_size() as f64;
    if side <= 0.0 {
        return None;
    }

    let (column_offset, row_offset) = grid.offsets();
    let x = ((px as f64 - column_offset as f64) / side).floor();
    let y = ((py as f64 - row_offset as f64) / side).floor();

    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if x < 0.0 || y < 0.0 || x >= grid.columns() as f64 || y >= grid.rows() as f64 {
        return None;
    }

    Some(grid.index(x as u32, y as u32))
}

pub(super) fn paint_at_point(sim: &mut SimulationCore, px: f32, py: f32, alive: bool) -> Option<usize> {
    let idx = cell_at_point(sim, px, py)?;
    sim.grid.set_cell(idx, if alive { 1 } else { DEAD });
    Some(idx)
}
