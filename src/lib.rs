//! Torus Life Engine - aging Game of Life on a toroidal grid, built for WASM
//!
//! The engine owns the cell generations and a flat (x, y, z) coordinate buffer
//! that a WebGL host draws directly out of wasm memory.
//!
//! Architecture:
//! - core/        - errors, console logging
//! - spatial/     - grid store (generations, coordinates, wrapping)
//! - domain/      - configuration, transition rule, RLE patterns
//! - simulation/  - stepping, projection, commands, wasm facade

pub mod core;
pub mod spatial;
pub mod domain;
pub mod simulation;

pub use spatial::grid;
pub use domain::config;
pub use domain::patterns;
pub use domain::rules;

use wasm_bindgen::prelude::*;

// Thread pool initialization for rayon in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::install(log::LevelFilter::Info);
    log::info!("torus life engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{ConfigurationError, EngineError, EngineResult, PatternError};
pub use config::{GridConfig, DEFAULT_PARTITIONS};
pub use grid::CellState;
pub use patterns::{load_pattern_library, Pattern, PatternSpec};
pub use rules::MAX_AGE;
pub use simulation::{partition_bounds, Engine, LifeEngine, PerfStats, SimulationCore};
