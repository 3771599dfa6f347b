use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::patterns::Pattern;
use crate::spatial::grid::CellState;

use super::perf_stats::PerfStats;
use super::LifeEngine;

fn js_err(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing engine. Every call forwards to `LifeEngine`; errors become
/// strings thrown into JS.
#[wasm_bindgen]
pub struct Engine {
    inner: LifeEngine,
}

#[wasm_bindgen]
impl Engine {
    /// Create an unconfigured engine; call `configure` before anything else.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: LifeEngine::new() }
    }

    /// Allocate a columns x rows torus and lay out cell centres.
    pub fn configure(
        &mut self,
        columns: u32,
        rows: u32,
        cell_size: f32,
        column_offset: f32,
        row_offset: f32,
    ) -> Result<(), JsValue> {
        self.inner
            .configure(columns, rows, cell_size, column_offset, row_offset)
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = configureJson)]
    pub fn configure_json(&mut self, json: String) -> Result<(), JsValue> {
        self.inner.configure_json(&json).map_err(js_err)
    }

    #[wasm_bindgen(getter)]
    pub fn configured(&self) -> bool {
        self.inner.is_configured()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.inner.core().map(|c| c.columns()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.inner.core().map(|c| c.rows()).unwrap_or(0)
    }

    pub fn generation(&self) -> Result<u64, JsValue> {
        self.inner.generation().map_err(js_err)
    }

    pub fn live_count(&self) -> Result<u32, JsValue> {
        self.inner.live_count().map(|n| n as u32).map_err(js_err)
    }

    /// Kill every cell
    pub fn clear_all(&mut self) -> Result<(), JsValue> {
        self.inner.clear_all().map_err(js_err)
    }

    /// Force one cell (both generations). `state` must be an age in 0..=3.
    pub fn set_cell(&mut self, index: u32, state: i32) -> Result<(), JsValue> {
        let state = CellState::try_from(state).map_err(|_| {
            js_err(EngineError::InvalidCellState {
                state,
                max: crate::domain::rules::MAX_AGE,
            })
        })?;
        self.inner.set_cell(index as usize, state).map_err(js_err)
    }

    /// Reseed from the clock and fill ~30% of cells
    pub fn randomize_all(&mut self) -> Result<(), JsValue> {
        self.inner.randomize_all().map_err(js_err)
    }

    /// Toroidal liveness probe (0 or 1)
    pub fn live_at(&self, x: i32, y: i32) -> Result<u8, JsValue> {
        self.inner.live_at(x, y).map_err(js_err)
    }

    /// Advance one generation
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.inner.step().map_err(js_err)
    }

    /// Project state into the coordinate buffer and return its pointer.
    /// View it as `new Float32Array(memory.buffer, ptr, coordinates_len)`.
    pub fn refresh(&mut self) -> Result<*const f32, JsValue> {
        self.inner.refresh().map(|coords| coords.as_ptr()).map_err(js_err)
    }

    pub fn coordinates_ptr(&self) -> Result<*const f32, JsValue> {
        self.inner.core().map(|c| c.coordinates_ptr()).map_err(js_err)
    }

    pub fn coordinates_len(&self) -> Result<usize, JsValue> {
        self.inner.core().map(|c| c.coordinates_len()).map_err(js_err)
    }

    pub fn coordinates_byte_len(&self) -> Result<usize, JsValue> {
        self.inner.core().map(|c| c.coordinates_byte_len()).map_err(js_err)
    }

    // === PATTERNS & PAINTING ===

    /// Decode an RLE body and stamp it centred on (column, row).
    /// Returns the number of cells brought alive.
    pub fn stamp_rle(
        &mut self,
        column: i32,
        row: i32,
        code: String,
        pattern_columns: u32,
        pattern_rows: u32,
    ) -> Result<u32, JsValue> {
        let pattern = Pattern::parse_rle(&code, pattern_columns as usize, pattern_rows as usize)
            .map_err(|e| js_err(e.into()))?;
        self.inner
            .stamp_pattern(column as i64, row as i64, &pattern)
            .map(|placed| placed as u32)
            .map_err(js_err)
    }

    /// Cell index under a point in coordinate space, if any
    pub fn cell_at_point(&self, px: f32, py: f32) -> Result<Option<u32>, JsValue> {
        self.inner
            .cell_at_point(px, py)
            .map(|idx| idx.map(|i| i as u32))
            .map_err(js_err)
    }

    /// Paint (or erase with `alive = false`) the cell under a point
    pub fn paint_at_point(&mut self, px: f32, py: f32, alive: bool) -> Result<Option<u32>, JsValue> {
        self.inner
            .paint_at_point(px, py, alive)
            .map(|idx| idx.map(|i| i as u32))
            .map_err(js_err)
    }

    // === SETTINGS ===

    pub fn set_partition_count(&mut self, partitions: u32) -> Result<(), JsValue> {
        self.inner.set_partition_count(partitions as usize).map_err(js_err)
    }

    pub fn set_base_opacity(&mut self, opacity: f32) -> Result<(), JsValue> {
        self.inner.set_base_opacity(opacity).map_err(js_err)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) -> Result<(), JsValue> {
        self.inner.enable_perf_metrics(enabled).map_err(js_err)
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> Result<PerfStats, JsValue> {
        self.inner.get_perf_stats().map_err(js_err)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Native access to the wrapped engine (tests and Rust hosts).
    pub fn inner(&self) -> &LifeEngine {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut LifeEngine {
        &mut self.inner
    }
}
