use blockbrush::{BlockPosition, BrushConfig, GridWorld, Shape};

#[test]
fn defaults_match_shipped_settings() {
    let config = BrushConfig::default();
    assert_eq!(config.max_size, 15);
    assert_eq!(config.min_async_size, 15);
    assert_eq!(config.max_revert_stores, 15);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = BrushConfig::from_json_str(r#"{"max_size": 30}"#).unwrap();
    assert_eq!(config.max_size, 30);
    assert_eq!(config.min_async_size, 15);

    assert!(BrushConfig::from_json_str("not json").is_err());
}

#[test]
fn size_limit_and_deferral_thresholds() {
    let config = BrushConfig::default();
    assert!(config.allows_size(1));
    assert!(config.allows_size(15));
    assert!(!config.allows_size(16));
    assert!(!config.allows_size(0));

    assert!(!config.should_defer(14.9));
    assert!(config.should_defer(15.0));
    assert!(config.should_defer(786.0));
}

/// The intended caller flow: validate size against config, build the shape,
/// then let the estimate pick the execution strategy.
#[test]
fn caller_schedules_from_estimate() {
    let config = BrushConfig::default();
    let world = GridWorld::new();

    let radius = 5;
    assert!(config.allows_size(radius));
    let shape = Shape::standing_cylinder(
        &world,
        BlockPosition::new(0, 64, 0),
        radius,
        10,
        false,
        false,
    )
    .unwrap();

    assert!(config.should_defer(shape.approximate_processed_blocks()));
}
