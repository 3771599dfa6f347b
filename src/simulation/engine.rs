//! LifeEngine - configure-before-use lifecycle around `SimulationCore`.
//!
//! The engine starts empty. Every operation other than `configure*` fails with
//! `ConfigurationError::NotConfigured` until a configure succeeds, and a
//! failed configure never touches the running simulation.

use crate::core::error::{ConfigurationError, EngineResult};
use crate::domain::config::GridConfig;
use crate::domain::patterns::Pattern;
use crate::spatial::grid::CellState;

use super::{PerfStats, SimulationCore};

#[derive(Default)]
pub struct LifeEngine {
    core: Option<SimulationCore>,
}

impl LifeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.core.is_some()
    }

    pub fn core(&self) -> EngineResult<&SimulationCore> {
        self.core.as_ref().ok_or_else(|| ConfigurationError::NotConfigured.into())
    }

    pub fn core_mut(&mut self) -> EngineResult<&mut SimulationCore> {
        self.core.as_mut().ok_or_else(|| ConfigurationError::NotConfigured.into())
    }

    // === Lifecycle ===

    pub fn configure(
        &mut self,
        columns: u32,
        rows: u32,
        cell_size: f32,
        column_offset: f32,
        row_offset: f32,
    ) -> EngineResult<()> {
        self.configure_with(GridConfig::new(columns, rows, cell_size, column_offset, row_offset))
    }

    /// Validate, release the previous buffers, then allocate the new ones.
    ///
    /// Validation errors leave the current simulation running. An allocation
    /// failure happens after the old buffers are gone and leaves the engine
    /// unconfigured.
    pub fn configure_with(&mut self, config: GridConfig) -> EngineResult<()> {
        config.validate()?;
        self.core = None;
        self.core = Some(SimulationCore::new(config)?);
        Ok(())
    }

    pub fn configure_json(&mut self, json: &str) -> EngineResult<()> {
        self.configure_with(GridConfig::from_json(json)?)
    }

    // === Operations ===

    pub fn clear_all(&mut self) -> EngineResult<()> {
        self.core_mut()?.clear_all();
        Ok(())
    }

    pub fn set_cell(&mut self, index: usize, state: CellState) -> EngineResult<()> {
        self.core_mut()?.set_cell(index, state)
    }

    pub fn randomize_all(&mut self) -> EngineResult<()> {
        self.core_mut()?.randomize_all();
        Ok(())
    }

    pub fn randomize_with_seed(&mut self, seed: u64) -> EngineResult<()> {
        self.core_mut()?.randomize_with_seed(seed);
        Ok(())
    }

    pub fn live_at(&self, x: i32, y: i32) -> EngineResult<u8> {
        Ok(self.core()?.live_at(x, y))
    }

    pub fn step(&mut self) -> EngineResult<()> {
        self.core_mut()?.step();
        Ok(())
    }

    pub fn refresh(&mut self) -> EngineResult<&[f32]> {
        Ok(self.core_mut()?.refresh())
    }

    pub fn stamp_pattern(&mut self, column: i64, row: i64, pattern: &Pattern) -> EngineResult<usize> {
        Ok(self.core_mut()?.stamp_pattern(column, row, pattern))
    }

    pub fn cell_at_point(&self, px: f32, py: f32) -> EngineResult<Option<usize>> {
        Ok(self.core()?.cell_at_point(px, py))
    }

    pub fn paint_at_point(&mut self, px: f32, py: f32, alive: bool) -> EngineResult<Option<usize>> {
        Ok(self.core_mut()?.paint_at_point(px, py, alive))
    }

    // === Settings & counters ===

    pub fn set_partition_count(&mut self, partitions: usize) -> EngineResult<()> {
        self.core_mut()?.set_partition_count(partitions)
    }

    pub fn set_base_opacity(&mut self, opacity: f32) -> EngineResult<()> {
        self.core_mut()?.set_base_opacity(opacity)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) -> EngineResult<()> {
        self.core_mut()?.enable_perf_metrics(enabled);
        Ok(())
    }

    pub fn get_perf_stats(&self) -> EngineResult<PerfStats> {
        Ok(self.core()?.get_perf_stats())
    }

    pub fn generation(&self) -> EngineResult<u64> {
        Ok(self.core()?.generation())
    }

    pub fn live_count(&self) -> EngineResult<usize> {
        Ok(self.core()?.live_count())
    }
}
