use wasm_bindgen::prelude::*;

/// Timing and counters for the most recent step.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) evaluate_ms: f64,
    pub(super) commit_ms: f64,
    pub(super) partitions: u32,
    pub(super) live_cells: u32,
    pub(super) grid_size: u32,
    pub(super) generation: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    #[wasm_bindgen(getter)]
    pub fn evaluate_ms(&self) -> f64 { self.evaluate_ms }

    #[wasm_bindgen(getter)]
    pub fn commit_ms(&self) -> f64 { self.commit_ms }

    #[wasm_bindgen(getter)]
    pub fn partitions(&self) -> u32 { self.partitions }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }

    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}
