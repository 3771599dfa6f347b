use crate::spatial::grid::{COORDS_PER_CELL, DEAD};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::SimulationCore;

/// Write each cell's current state into the z slot of its coordinate triple.
///
/// Live cells project their age; dead cells project the base opacity (0.0 by
/// default). x and y are never touched.
pub(super) fn refresh(sim: &mut SimulationCore) -> &[f32] {
    let base = sim.base_opacity;
    let grid = &mut sim.grid;

    #[cfg(feature = "parallel")]
    {
        grid.coordinates
            .par_chunks_exact_mut(COORDS_PER_CELL)
            .zip(grid.current.par_iter())
            .for_each(|(cell, &state)| cell[2] = project(state, base));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (cell, &state) in grid.coordinates.chunks_exact_mut(COORDS_PER_CELL).zip(grid.current.iter()) {
            cell[2] = project(state, base);
        }
    }

    &sim.grid.coordinates
}

#[inline(always)]
fn project(state: u8, base: f32) -> f32 {
    if state > DEAD { state as f32 } else { base }
}
