//! Browser-side smoke test for the JS facade. Run with `wasm-pack test --headless --chrome`.
//!
//! Only calls that stay off the rayon pool are exercised, since the pool needs
//! `init_thread_pool` from the host page.

#![cfg(target_arch = "wasm32")]

use torus_life_engine::Engine;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn engine_rejects_calls_before_configure() {
    let mut engine = Engine::new();
    assert!(!engine.configured());
    assert!(engine.live_at(0, 0).is_err());
    assert!(engine.set_cell(0, 1).is_err());
}

#[wasm_bindgen_test]
fn facade_edits_and_probes_the_torus() {
    let mut engine = Engine::new();
    engine.configure(8, 6, 4.0, 0.0, 0.0).unwrap();
    assert_eq!(engine.columns(), 8);
    assert_eq!(engine.coordinates_len().unwrap(), 8 * 6 * 3);

    engine.set_cell(7, 1).unwrap();
    assert_eq!(engine.live_at(-1, 0).unwrap(), 1);
    assert!(engine.set_cell(0, 9).is_err());

    let placed = engine.stamp_rle(3, 3, "bo$2bo$3o!".into(), 3, 3).unwrap();
    assert_eq!(placed, 5);
    assert!(engine.stamp_rle(3, 3, "o!".into(), u32::MAX, u32::MAX).is_err());

    assert_eq!(engine.cell_at_point(2.0, 2.0).unwrap(), Some(0));
}
