//! Voxel brush-shape engine.
//!
//! Computes, for a voxel-grid world, the exact set of grid cells belonging
//! to a parametric solid positioned at a center point, the set of 16×16
//! world chunks its footprint overlaps (snapshotted for rollback), and a
//! closed-form cost estimate callers use to pick synchronous or deferred
//! execution.
//!
//! ```
//! use blockbrush::{BlockPosition, GridWorld, Shape};
//!
//! let mut world = GridWorld::new();
//! let shape = Shape::standing_cylinder(
//!     &world,
//!     BlockPosition::new(0, 64, 0),
//!     5,     // radius
//!     10,    // height
//!     false, // true_circle
//!     false, // hollow
//! )
//! .unwrap();
//!
//! let estimate = shape.approximate_processed_blocks();
//! let snapshots = shape.touched_chunks(&mut world);
//! let positions = shape.block_positions();
//! assert!(positions.len() as f64 <= estimate * 2.0);
//! assert!(!snapshots.is_empty());
//! ```

pub mod block_position;
pub mod block_state;
pub mod bounding_box;
pub mod chunk;
pub mod config;
pub mod error;
pub mod shape;
pub mod shapes;
pub mod world;

pub use block_position::BlockPosition;
pub use block_state::BlockState;
pub use bounding_box::{calculate_boundary, BoundingBox};
pub use chunk::{chunk_key, split_chunk_key, world_to_chunk, Chunk, CHUNK_SIZE};
pub use config::BrushConfig;
pub use error::{Result, ShapeError, SnapshotError};
pub use shape::Shape;
pub use shapes::{BrushGeometry, Classification, Cylinder, Pyramid, ShapeKind};
pub use world::{GridWorld, World};
