use crate::block_position::BlockPosition;
use crate::block_state::BlockState;
use crate::bounding_box::{calculate_boundary, BoundingBox};
use crate::chunk::{chunk_key, world_to_chunk, CHUNK_SIZE};
use crate::error::{Result, ShapeError};
use crate::shapes::{BrushGeometry, Classification, Cylinder, Pyramid, ShapeKind};
use crate::world::World;
use rustc_hash::FxHashMap;

/// A positioned brush shape: the composition root of the engine.
///
/// Built once per brush application, used for a single estimate, snapshot
/// and enumerate sequence, then discarded. All parameters are explicit
/// constructor inputs; the world is borrowed per call and never stored. A
/// constructed shape's enumeration calls cannot fail: every invalid
/// parameter combination is rejected up front.
#[derive(Debug, Clone)]
pub struct Shape {
    center: BlockPosition,
    height: i32,
    hollow: bool,
    selected: bool,
    kind: ShapeKind,
}

impl Shape {
    /// A standing cylinder of the given radius, `height` blocks above and
    /// below the center.
    pub fn standing_cylinder(
        world: &impl World,
        center: BlockPosition,
        radius: i32,
        height: i32,
        true_circle: bool,
        hollow: bool,
    ) -> Result<Self> {
        Self::with_kind(
            world,
            center,
            height,
            hollow,
            ShapeKind::Cylinder(Cylinder::new(radius, true_circle)),
        )
    }

    /// A pyramid brush of the given half-width and height.
    pub fn pyramid(
        world: &impl World,
        center: BlockPosition,
        width: i32,
        height: i32,
        hollow: bool,
    ) -> Result<Self> {
        Self::with_kind(
            world,
            center,
            height,
            hollow,
            ShapeKind::Pyramid(Pyramid::new(width)),
        )
    }

    pub fn with_kind(
        world: &impl World,
        center: BlockPosition,
        height: i32,
        hollow: bool,
        kind: ShapeKind,
    ) -> Result<Self> {
        let extent = kind.horizontal_extent();
        if extent <= 0 {
            let name = match kind {
                ShapeKind::Cylinder(_) => "radius",
                ShapeKind::Pyramid(_) => "width",
            };
            return Err(ShapeError::NonPositiveDimension {
                name,
                value: extent,
            });
        }
        if height <= 0 {
            return Err(ShapeError::NonPositiveDimension {
                name: "height",
                value: height,
            });
        }
        let bounds = calculate_boundary(center, extent, extent, height);
        if !bounds.intersects_vertical(world.min_y(), world.max_y()) {
            return Err(ShapeError::OutsideWorldBounds {
                min_y: bounds.min_y,
                max_y: bounds.max_y,
                world_min: world.min_y(),
                world_max: world.max_y(),
            });
        }
        Ok(Self {
            center,
            height,
            hollow,
            selected: false,
            kind,
        })
    }

    /// Marks the shape as a preview selection. Carried through for caller
    /// use; geometry is unaffected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The shape's bounding box, recomputed on every call.
    pub fn bounds(&self) -> BoundingBox {
        let extent = self.kind.horizontal_extent();
        calculate_boundary(self.center, extent, extent, self.height)
    }

    /// Enumerates the voxel positions belonging to the shape, without any
    /// world reads. Safe to run off the world-owning context.
    pub fn block_positions(&self) -> Vec<BlockPosition> {
        let mut positions = Vec::new();
        self.for_each_position(|pos| positions.push(pos));
        positions
    }

    /// Enumerates positions together with their current blocks, one world
    /// read per included point.
    pub fn blocks_inside<W: World>(&self, world: &W) -> Vec<(BlockPosition, BlockState)> {
        let mut blocks = Vec::new();
        self.for_each_position(|pos| blocks.push((pos, world.block_at(pos.x, pos.y, pos.z))));
        blocks
    }

    fn for_each_position<F>(&self, mut f: F)
    where
        F: FnMut(BlockPosition),
    {
        let bounds = self.bounds();
        for x in bounds.min_x..=bounds.max_x {
            for z in bounds.min_z..=bounds.max_z {
                for y in bounds.min_y..=bounds.max_y {
                    let included = match self.kind.classify(self.center, &bounds, x, y, z) {
                        Classification::Outside => false,
                        Classification::Shell => true,
                        Classification::Interior => !self.hollow,
                    };
                    if included {
                        f(BlockPosition::new(x, y, z));
                    }
                }
            }
        }
    }

    /// Snapshots every chunk the shape's horizontal footprint touches,
    /// keyed by packed chunk coordinate, for rollback before mutation.
    ///
    /// Enumeration steps one chunk-width at a time and runs one extra step
    /// past the high edge on both axes, over-covering by up to one chunk
    /// there; kept for compatibility with the worlds this engine edits.
    /// Chunks the world cannot provide are skipped.
    pub fn touched_chunks<W: World>(&self, world: &mut W) -> FxHashMap<i64, Vec<u8>> {
        let extent = self.kind.horizontal_extent();
        let min_x = self.center.x - extent;
        let max_x = self.center.x + extent;
        let min_z = self.center.z - extent;
        let max_z = self.center.z + extent;

        let mut touched = FxHashMap::default();
        for x in (min_x..=max_x + CHUNK_SIZE).step_by(CHUNK_SIZE as usize) {
            for z in (min_z..=max_z + CHUNK_SIZE).step_by(CHUNK_SIZE as usize) {
                let (cx, cz) = (world_to_chunk(x), world_to_chunk(z));
                let Some(chunk) = world.chunk_or_generate(cx, cz) else {
                    log::debug!("chunk ({cx}, {cz}) unavailable, omitting from snapshot");
                    continue;
                };
                match chunk.fast_serialize() {
                    Ok(blob) => {
                        touched.insert(chunk_key(cx, cz), blob);
                    }
                    Err(e) => {
                        log::warn!("failed to serialize chunk ({cx}, {cz}): {e}");
                    }
                }
            }
        }
        touched
    }

    /// Fast closed-form estimate of how many blocks enumeration will
    /// produce; callers compare it against their deferral threshold.
    pub fn approximate_processed_blocks(&self) -> f64 {
        self.kind.estimated_blocks(self.height, self.hollow)
    }

    pub fn name(&self) -> &'static str {
        self.kind.label(self.hollow)
    }

    pub fn center(&self) -> BlockPosition {
        self.center
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Radius for cylinders, half-width for pyramids.
    pub fn horizontal_extent(&self) -> i32 {
        self.kind.horizontal_extent()
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn is_hollow(&self) -> bool {
        self.hollow
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
