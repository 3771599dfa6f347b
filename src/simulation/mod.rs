//! Simulation - one configured toroidal Life instance
//!
//! `SimulationCore` owns the grid and orchestrates; the work lives in
//! submodules:
//! - step/      partitioned, double-buffered generation transition
//! - render/    projection of cell state into the coordinate buffer
//! - commands/  external edits (set, clear, stamp, paint)
//! - init/      construction, randomization and runtime settings
//!
//! `LifeEngine` adds the configure-before-use lifecycle on top, and `Engine`
//! is the wasm-bindgen facade over that.

use crate::core::error::EngineResult;
use crate::domain::config::GridConfig;
use crate::domain::patterns::Pattern;
use crate::spatial::grid::{CellState, Grid};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/partition.rs"]
mod partition;
#[path = "step/step.rs"]
mod step;
#[path = "render/projection.rs"]
mod projection;
#[path = "commands/commands.rs"]
mod commands;
mod engine;
mod facade;

pub use engine::LifeEngine;
pub use facade::Engine;
pub use partition::partition_bounds;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// A configured simulation: buffers, fan-out and counters.
pub struct SimulationCore {
    grid: Grid,

    // Settings
    partitions: usize,
    base_opacity: f32,

    // State
    generation: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Validate `config` and allocate every buffer, all cells dead.
    pub fn new(config: GridConfig) -> EngineResult<Self> {
        init::create_simulation_core(config)
    }

    pub fn columns(&self) -> u32 { self.grid.columns() }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn size(&self) -> usize { self.grid.size() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn live_count(&self) -> usize { self.grid.live_count() }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Committed cell states, row-major.
    pub fn cells(&self) -> &[CellState] { &self.grid.current }

    pub fn cell(&self, index: usize) -> Option<CellState> {
        self.grid.current.get(index).copied()
    }

    // === Settings ===

    pub fn partitions(&self) -> usize {
        settings::partitions(self)
    }

    pub fn set_partition_count(&mut self, partitions: usize) -> EngineResult<()> {
        settings::set_partition_count(self, partitions)
    }

    pub fn base_opacity(&self) -> f32 {
        settings::base_opacity(self)
    }

    /// z projected for dead cells (0.0 unless the host wants a faint grid).
    pub fn set_base_opacity(&mut self, opacity: f32) -> EngineResult<()> {
        settings::set_base_opacity(self, opacity)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    pub fn clear_all(&mut self) {
        commands::clear_all(self);
    }

    pub fn set_cell(&mut self, index: usize, state: CellState) -> EngineResult<()> {
        commands::set_cell(self, index, state)
    }

    pub fn live_at(&self, x: i32, y: i32) -> u8 {
        self.grid.live_at(x as i64, y as i64)
    }

    /// Randomize from a wall-clock seed.
    pub fn randomize_all(&mut self) {
        random::randomize(self, random::clock_seed());
    }

    pub fn randomize_with_seed(&mut self, seed: u64) {
        random::randomize(self, seed);
    }

    /// Stamp `pattern` centred on (column, row); returns cells brought alive.
    pub fn stamp_pattern(&mut self, column: i64, row: i64, pattern: &Pattern) -> usize {
        commands::stamp_pattern(self, column, row, pattern)
    }

    /// Grid cell under a point in coordinate-buffer space.
    pub fn cell_at_point(&self, px: f32, py: f32) -> Option<usize> {
        commands::cell_at_point(self, px, py)
    }

    pub fn paint_at_point(&mut self, px: f32, py: f32, alive: bool) -> Option<usize> {
        commands::paint_at_point(self, px, py, alive)
    }

    // === Stepping ===

    /// Advance one generation. Returns once every partition has finished and
    /// the commit is done.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Rendering ===

    /// Project current state into z and return the whole coordinate buffer.
    pub fn refresh(&mut self) -> &[f32] {
        projection::refresh(self)
    }

    /// Coordinate buffer as of the last refresh.
    pub fn coordinates(&self) -> &[f32] {
        &self.grid.coordinates
    }

    /// Pointer to the coordinate buffer (for JS Float32Array views)
    pub fn coordinates_ptr(&self) -> *const f32 {
        self.grid.coordinates.as_ptr()
    }

    pub fn coordinates_len(&self) -> usize {
        self.grid.coordinates.len()
    }

    pub fn coordinates_byte_len(&self) -> usize {
        self.grid.coordinates.len() * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
