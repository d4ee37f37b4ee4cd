use crate::block_position::BlockPosition;

/// Axis-aligned integer bounding box, inclusive on every axis.
///
/// Boxes are derived on demand from a shape's center and extents and never
/// cached on the shape itself; recomputation is trivial next to the voxel
/// iteration it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub max_z: i32,
}

impl BoundingBox {
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= self.min_x
            && x <= self.max_x
            && y >= self.min_y
            && y <= self.max_y
            && z >= self.min_z
            && z <= self.max_z
    }

    /// True when the point lies on at least one of the six box faces.
    pub fn on_face(&self, x: i32, y: i32, z: i32) -> bool {
        x == self.max_x
            || x == self.min_x
            || y == self.max_y
            || y == self.min_y
            || z == self.max_z
            || z == self.min_z
    }

    /// True when the box overlaps the vertical band `world_min..=world_max`.
    pub fn intersects_vertical(&self, world_min: i32, world_max: i32) -> bool {
        self.max_y >= world_min && self.min_y <= world_max
    }
}

/// Derives the box for a shape centered at `center`, symmetric about it on
/// every axis: `extent_x` on x, `extent_z` on z and `extent_y` on y. Shapes
/// with a single horizontal extent pass it for both horizontal axes. No
/// clamping to world limits happens here; shape construction rejects centers
/// that would put the whole box out of range.
pub fn calculate_boundary(
    center: BlockPosition,
    extent_x: i32,
    extent_z: i32,
    extent_y: i32,
) -> BoundingBox {
    BoundingBox {
        min_x: center.x - extent_x,
        min_y: center.y - extent_y,
        min_z: center.z - extent_z,
        max_x: center.x + extent_x,
        max_y: center.y + extent_y,
        max_z: center.z + extent_z,
    }
}
