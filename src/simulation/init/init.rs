use crate::core::error::EngineResult;
use crate::domain::config::GridConfig;
use crate::spatial::grid::Grid;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: GridConfig) -> EngineResult<SimulationCore> {
    let grid = Grid::new(&config)?;

    log::info!(
        "configured {}x{} torus ({} cells, cell size {}, {} partitions)",
        config.columns,
        config.rows,
        grid.size(),
        config.cell_size,
        config.partitions
    );

    Ok(SimulationCore {
        grid,
        partitions: config.partitions,
        base_opacity: 0.0,
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
