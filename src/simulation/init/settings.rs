use crate::core::error::{ConfigurationError, EngineResult};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn partitions(sim: &SimulationCore) -> usize {
    sim.partitions
}

pub(super) fn set_partition_count(sim: &mut SimulationCore, partitions: usize) -> EngineResult<()> {
    if partitions == 0 {
        return Err(ConfigurationError::InvalidPartitionCount.into());
    }
    sim.partitions = partitions;
    Ok(())
}

pub(super) fn base_opacity(sim: &SimulationCore) -> f32 {
    sim.base_opacity
}

pub(super) fn set_base_opacity(sim: &mut SimulationCore, opacity: f32) -> EngineResult<()> {
    if !opacity.is_finite() || !(0.0..1.0).contains(&opacity) {
        return Err(ConfigurationError::InvalidBaseOpacity(opacity).into());
    }
    sim.base_opacity = opacity;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
