use torus_life_engine::{ConfigurationError, EngineError, GridConfig, LifeEngine};

fn configured(columns: u32, rows: u32) -> LifeEngine {
    let mut engine = LifeEngine::new();
    engine.configure(columns, rows, 4.0, 0.0, 0.0).unwrap();
    engine
}

fn cells(engine: &LifeEngine) -> Vec<u8> {
    engine.core().unwrap().cells().to_vec()
}

#[test]
fn middle_row_on_three_by_three_torus() {
    let mut engine = configured(3, 3);
    for idx in 3..6 {
        engine.set_cell(idx, 1).unwrap();
    }

    engine.step().unwrap();

    // On a 3x3 torus every cell neighbours all eight others: the six outer
    // cells see exactly 3 live neighbours and are born, the middle row sees 2
    // and survives one generation older.
    #[rustfmt::skip]
    let expected = vec![
        1, 1, 1,
        2, 2, 2,
        1, 1, 1,
    ];
    assert_eq!(cells(&engine), expected);

    // now every cell has 8 live neighbours
    engine.step().unwrap();
    assert_eq!(cells(&engine), vec![0; 9]);
}

#[test]
fn cleared_grid_probes_dead_at_every_wrap() {
    for (columns, rows) in [(1, 1), (2, 5), (7, 3), (16, 16)] {
        let mut engine = configured(columns, rows);
        engine.randomize_all().unwrap();
        engine.clear_all().unwrap();
        let (c, r) = (columns as i32, rows as i32);
        for y in -r..=r {
            for x in -c..=c {
                assert_eq!(engine.live_at(x, y).unwrap(), 0);
            }
        }
    }
}

#[test]
fn wrap_probe_matches_opposite_edge_for_any_state() {
    let mut engine = configured(9, 4);
    engine.randomize_with_seed(17).unwrap();
    for y in 0..4 {
        assert_eq!(engine.live_at(-1, y).unwrap(), engine.live_at(8, y).unwrap());
        assert_eq!(engine.live_at(9, y).unwrap(), engine.live_at(0, y).unwrap());
    }
}

#[test]
fn operations_before_configure_fail() {
    let mut engine = LifeEngine::new();
    let not_configured = EngineError::Configuration(ConfigurationError::NotConfigured);

    assert_eq!(engine.step(), Err(not_configured.clone()));
    assert_eq!(engine.clear_all(), Err(not_configured.clone()));
    assert_eq!(engine.set_cell(0, 1), Err(not_configured.clone()));
    assert_eq!(engine.randomize_all(), Err(not_configured.clone()));
    assert_eq!(engine.live_at(0, 0), Err(not_configured.clone()));
    assert!(matches!(engine.refresh(), Err(e) if e == not_configured));
}

#[test]
fn rejected_configure_keeps_running_simulation() {
    let mut engine = configured(4, 4);
    engine.set_cell(5, 2).unwrap();

    let err = engine.configure(0, 4, 1.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Configuration(ConfigurationError::InvalidDimensions { .. })
    ));
    assert_eq!(cells(&engine)[5], 2);
    assert_eq!(engine.core().unwrap().columns(), 4);
}

#[test]
fn reconfigure_replaces_buffers() {
    let mut engine = configured(4, 4);
    engine.randomize_with_seed(1).unwrap();
    engine
        .configure_with(GridConfig::new(5, 2, 2.0, 1.0, 1.0).with_partitions(3))
        .unwrap();

    let core = engine.core().unwrap();
    assert_eq!(core.size(), 10);
    assert_eq!(core.live_count(), 0);
    assert_eq!(core.partitions(), 3);
    assert_eq!(core.coordinates_len(), 30);
}

#[test]
fn configure_from_json() {
    let mut engine = LifeEngine::new();
    engine
        .configure_json(r#"{"columns":8,"rows":6,"cellSize":3,"columnOffset":1.5,"rowOffset":0}"#)
        .unwrap();
    let coords = engine.refresh().unwrap();
    assert_eq!(coords.len(), 8 * 6 * 3);
    assert_eq!(&coords[..2], &[3.0, 1.5]);
}

#[test]
fn out_of_range_set_cell_is_local() {
    let mut engine = configured(3, 3);
    engine.set_cell(4, 1).unwrap();
    assert_eq!(
        engine.set_cell(9, 1),
        Err(EngineError::IndexOutOfRange { index: 9, len: 9 })
    );
    // the grid is untouched and still usable
    assert_eq!(engine.live_count().unwrap(), 1);
    engine.set_cell(8, 1).unwrap();
    assert_eq!(engine.live_count().unwrap(), 2);
}

#[test]
fn projection_tracks_steps() {
    let mut engine = configured(5, 5);
    for idx in [11, 12, 13] {
        engine.set_cell(idx, 1).unwrap();
    }
    engine.step().unwrap();
    let core_cells = cells(&engine);
    let coords = engine.refresh().unwrap().to_vec();
    for (idx, state) in core_cells.iter().enumerate() {
        assert_eq!(coords[idx * 3 + 2], *state as f32);
    }
    assert_eq!(engine.generation().unwrap(), 1);
}
