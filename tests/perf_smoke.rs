use torus_life_engine::{Engine, Pattern};

#[test]
fn perf_smoke_step() {
    let mut engine = Engine::new();
    let life = engine.inner_mut();
    life.configure(256, 128, 2.0, 0.0, 0.0).unwrap();
    life.enable_perf_metrics(true).unwrap();
    life.randomize_with_seed(2024).unwrap();

    let glider = Pattern::parse_rle("bo$2bo$3o!", 3, 3).unwrap();
    life.stamp_pattern(10, 10, &glider).unwrap();

    for _ in 0..10 {
        life.step().unwrap();
    }
    life.refresh().unwrap();

    let stats = life.get_perf_stats().unwrap();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.partitions(), 8);
    assert_eq!(stats.generation(), 10);
    assert_eq!(stats.grid_size(), 256 * 128);
}
