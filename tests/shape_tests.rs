use blockbrush::{BlockPosition, BlockState, GridWorld, Shape, ShapeError};
use std::collections::HashSet;

fn origin() -> BlockPosition {
    BlockPosition::new(0, 64, 0)
}

/// Solid, non-true-circle cylinder with a square horizontal footprint:
/// inclusion is exactly `x^2 + z^2 <= (R - 0.5)^2` and independent of y.
#[test]
fn solid_cylinder_matches_disc_inequality() {
    let world = GridWorld::new();
    let radius = 5;
    let shape = Shape::standing_cylinder(&world, origin(), radius, 2, false, false).unwrap();
    let bounds = shape.bounds();

    let threshold = (radius as f64 - 0.5).powi(2);
    let included: HashSet<(i32, i32, i32)> = shape
        .block_positions()
        .into_iter()
        .map(|p| (p.x, p.y, p.z))
        .collect();

    for x in bounds.min_x..=bounds.max_x {
        for z in bounds.min_z..=bounds.max_z {
            for y in bounds.min_y..=bounds.max_y {
                let dist = f64::from(x * x + z * z);
                if included.contains(&(x, y, z)) {
                    assert!(dist <= threshold, "included point ({x},{y},{z}) outside disc");
                } else {
                    assert!(dist > threshold, "excluded point ({x},{y},{z}) inside disc");
                }
            }
        }
    }
}

#[test]
fn solid_cylinder_cross_section_independent_of_y() {
    let world = GridWorld::new();
    let shape = Shape::standing_cylinder(&world, origin(), 4, 3, false, false).unwrap();
    let bounds = shape.bounds();

    let mut rows: Vec<HashSet<(i32, i32)>> = vec![HashSet::new(); (bounds.max_y - bounds.min_y + 1) as usize];
    for p in shape.block_positions() {
        rows[(p.y - bounds.min_y) as usize].insert((p.x, p.z));
    }
    for row in &rows {
        assert_eq!(row, &rows[0], "cross-section varies with y");
    }
}

/// In true-circle mode the boundary biases outward: the point at exactly
/// radius distance is kept, while the default mode drops it.
#[test]
fn true_circle_biases_boundary_outward() {
    let world = GridWorld::new();
    let on_rim = |true_circle: bool| {
        let shape = Shape::standing_cylinder(&world, origin(), 5, 1, true_circle, false).unwrap();
        shape
            .block_positions()
            .iter()
            .any(|p| p.x == 5 && p.z == 0)
    };
    assert!(on_rim(true));
    assert!(!on_rim(false));
}

/// Hollow cylinders keep closed top and bottom caps: the cap rows contain
/// the full solid cross-section even though mid rows are carved out.
#[test]
fn hollow_cylinder_caps_are_closed() {
    let world = GridWorld::new();
    let center = origin();
    let solid = Shape::standing_cylinder(&world, center, 5, 3, false, false).unwrap();
    let hollow = Shape::standing_cylinder(&world, center, 5, 3, false, true).unwrap();
    let bounds = solid.bounds();

    let row = |shape: &Shape, y: i32| -> HashSet<(i32, i32)> {
        shape
            .block_positions()
            .into_iter()
            .filter(|p| p.y == y)
            .map(|p| (p.x, p.z))
            .collect()
    };

    for cap in [bounds.min_y, bounds.max_y] {
        assert_eq!(row(&hollow, cap), row(&solid, cap), "cap row at y={cap} not closed");
    }

    // A mid row loses its interior: the axis point is carved out but the
    // wall band survives.
    let mid = row(&hollow, center.y);
    assert!(!mid.contains(&(0, 0)));
    assert!(mid.contains(&(4, 0)));
    assert!(mid.len() < row(&solid, center.y).len());
}

/// Solid pyramid mode fills the entire bounding cuboid; the taper is
/// deliberately not applied.
#[test]
fn solid_pyramid_fills_full_box() {
    let world = GridWorld::new();
    let shape = Shape::pyramid(&world, origin(), 3, 4, false).unwrap();
    // (2*3+1) * (2*4+1) * (2*3+1)
    assert_eq!(shape.block_positions().len(), 7 * 9 * 7);
}

/// Hollow pyramid mode yields the box's six-face shell, with the standard
/// hollow-box cardinality.
#[test]
fn hollow_pyramid_is_box_shell() {
    let world = GridWorld::new();
    let shape = Shape::pyramid(&world, origin(), 3, 4, true).unwrap();
    let bounds = shape.bounds();
    let positions = shape.block_positions();

    for p in &positions {
        assert!(bounds.on_face(p.x, p.y, p.z), "{p} not on a box face");
    }
    let shell = 7 * 9 * 7 - 5 * 7 * 5;
    assert_eq!(positions.len(), shell);
}

#[test]
fn cylinder_estimates() {
    let world = GridWorld::new();
    let solid = Shape::standing_cylinder(&world, origin(), 5, 10, false, false).unwrap();
    // ceil(25 * pi * 10)
    assert_eq!(solid.approximate_processed_blocks(), 786.0);

    let hollow = Shape::standing_cylinder(&world, origin(), 3, 5, false, true).unwrap();
    // ceil(2*pi*9 + 2*(2*pi*3*5))
    assert_eq!(hollow.approximate_processed_blocks(), 246.0);
}

#[test]
fn pyramid_estimate_is_unrounded() {
    let world = GridWorld::new();
    let shape = Shape::pyramid(&world, origin(), 3, 6, false).unwrap();
    let estimate = shape.approximate_processed_blocks();
    assert!((estimate - 18.0).abs() < 1e-9, "got {estimate}");

    // A non-integral case stays fractional.
    let odd = Shape::pyramid(&world, origin(), 2, 5, false).unwrap();
    let estimate = odd.approximate_processed_blocks();
    assert!((estimate - 20.0 / 3.0).abs() < 1e-9, "got {estimate}");
}

#[test]
fn enumeration_is_idempotent() {
    let world = GridWorld::new();
    let shape = Shape::standing_cylinder(&world, origin(), 4, 2, false, true).unwrap();
    assert_eq!(shape.block_positions(), shape.block_positions());
}

#[test]
fn blocks_inside_resolves_world_blocks() {
    let mut world = GridWorld::new();
    let stone = BlockState::new("minecraft:stone");
    world.set_block(0, 64, 0, stone.clone());

    let shape = Shape::pyramid(&world, origin(), 1, 1, false).unwrap();
    let blocks = shape.blocks_inside(&world);
    assert_eq!(blocks.len(), 27);

    for (pos, block) in &blocks {
        if (pos.x, pos.y, pos.z) == (0, 64, 0) {
            assert_eq!(block, &stone);
        } else {
            assert!(block.is_air());
        }
    }
}

#[test]
fn construction_rejects_bad_dimensions() {
    let world = GridWorld::new();
    assert!(matches!(
        Shape::standing_cylinder(&world, origin(), 0, 5, false, false),
        Err(ShapeError::NonPositiveDimension { name: "radius", value: 0 })
    ));
    assert!(matches!(
        Shape::pyramid(&world, origin(), -2, 5, false),
        Err(ShapeError::NonPositiveDimension { name: "width", .. })
    ));
    assert!(matches!(
        Shape::pyramid(&world, origin(), 3, 0, false),
        Err(ShapeError::NonPositiveDimension { name: "height", value: 0 })
    ));
}

#[test]
fn construction_rejects_out_of_world_shapes() {
    let world = GridWorld::new();
    let high = BlockPosition::new(0, 1000, 0);
    assert!(matches!(
        Shape::standing_cylinder(&world, high, 5, 5, false, false),
        Err(ShapeError::OutsideWorldBounds { .. })
    ));

    // A box merely poking past the top is still accepted.
    let near_top = BlockPosition::new(0, 330, 0);
    assert!(Shape::standing_cylinder(&world, near_top, 5, 20, false, false).is_ok());
}

#[test]
fn names_and_accessors() {
    let world = GridWorld::new();
    let cyl = Shape::standing_cylinder(&world, origin(), 5, 10, false, false).unwrap();
    assert_eq!(cyl.name(), "Standing Cylinder");
    assert_eq!(cyl.height(), 10);
    assert_eq!(cyl.horizontal_extent(), 5);
    assert_eq!(cyl.center(), origin());
    assert!(!cyl.is_hollow());
    assert!(!cyl.is_selected());
    assert!(cyl.clone().with_selected(true).is_selected());

    let hollow_cyl = Shape::standing_cylinder(&world, origin(), 5, 10, false, true).unwrap();
    assert_eq!(hollow_cyl.name(), "Hollow Standing Cylinder");

    let pyramid = Shape::pyramid(&world, origin(), 3, 6, true).unwrap();
    assert_eq!(pyramid.name(), "Hollow Pyramid");
    assert_eq!(pyramid.horizontal_extent(), 3);
}
