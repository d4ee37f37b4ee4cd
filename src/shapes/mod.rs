mod cylinder;
mod pyramid;

pub use cylinder::Cylinder;
pub use pyramid::Pyramid;

use crate::block_position::BlockPosition;
use crate::bounding_box::BoundingBox;

/// Where a candidate point falls relative to a shape.
///
/// Solid shapes keep `Interior` and `Shell`; hollow shapes keep only
/// `Shell`, which covers the wall band plus any closed caps or faces the
/// variant defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Outside,
    Interior,
    Shell,
}

/// Per-variant geometry: point classification, extents and cost estimation.
pub trait BrushGeometry {
    /// Classifies one integer point of the bounding box.
    fn classify(
        &self,
        center: BlockPosition,
        bounds: &BoundingBox,
        x: i32,
        y: i32,
        z: i32,
    ) -> Classification;

    /// The single horizontal extent (radius or half-width) of the variant.
    fn horizontal_extent(&self) -> i32;

    /// Closed-form approximation of the enumerated block count, used by
    /// callers for cost-based scheduling. Cylinder estimates are ceiled;
    /// the pyramid estimate is returned unrounded.
    fn estimated_blocks(&self, height: i32, hollow: bool) -> f64;

    /// Human-readable label, e.g. "Hollow Standing Cylinder".
    fn label(&self, hollow: bool) -> &'static str;
}

macro_rules! delegate_kind {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            ShapeKind::Cylinder(s) => s.$method($($arg),*),
            ShapeKind::Pyramid(s) => s.$method($($arg),*),
        }
    };
}

/// Tagged dispatch over the shape variants, each carrying its own parameter
/// struct. Keeps the per-voxel hot loop free of virtual calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    Cylinder(Cylinder),
    Pyramid(Pyramid),
}

impl BrushGeometry for ShapeKind {
    fn classify(
        &self,
        center: BlockPosition,
        bounds: &BoundingBox,
        x: i32,
        y: i32,
        z: i32,
    ) -> Classification {
        delegate_kind!(self, classify, center, bounds, x, y, z)
    }

    fn horizontal_extent(&self) -> i32 {
        delegate_kind!(self, horizontal_extent)
    }

    fn estimated_blocks(&self, height: i32, hollow: bool) -> f64 {
        delegate_kind!(self, estimated_blocks, height, hollow)
    }

    fn label(&self, hollow: bool) -> &'static str {
        delegate_kind!(self, label, hollow)
    }
}
