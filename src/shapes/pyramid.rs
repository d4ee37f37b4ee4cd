use super::{BrushGeometry, Classification};
use crate::block_position::BlockPosition;
use crate::bounding_box::BoundingBox;

/// A square-based pyramid brush.
///
/// The fill deliberately does not taper: solid mode yields the full bounding
/// cuboid and hollow mode yields the cuboid's six-face shell. Historic
/// behavior of the brush this engine reproduces; kept for compatibility with
/// worlds edited by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pyramid {
    pub width: i32,
}

impl Pyramid {
    pub fn new(width: i32) -> Self {
        Self { width }
    }
}

impl BrushGeometry for Pyramid {
    fn classify(
        &self,
        _center: BlockPosition,
        bounds: &BoundingBox,
        x: i32,
        y: i32,
        z: i32,
    ) -> Classification {
        if bounds.on_face(x, y, z) {
            Classification::Shell
        } else {
            Classification::Interior
        }
    }

    fn horizontal_extent(&self) -> i32 {
        self.width
    }

    fn estimated_blocks(&self, height: i32, _hollow: bool) -> f64 {
        // Classic pyramid volume, left unrounded; callers truncate if they
        // need an integer.
        1.0 / 3.0 * f64::from(self.width) * f64::from(self.width) * f64::from(height)
    }

    fn label(&self, hollow: bool) -> &'static str {
        if hollow {
            "Hollow Pyramid"
        } else {
            "Pyramid"
        }
    }
}
