use super::{BrushGeometry, Classification};
use crate::block_position::BlockPosition;
use crate::bounding_box::BoundingBox;
use std::f64::consts::PI;

/// A standing (vertical-axis) cylinder with uniform cross-section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cylinder {
    pub radius: i32,
    /// Selects an outward-biased rounding tolerance at the circular boundary
    /// instead of the default inward bias.
    pub true_circle: bool,
}

impl Cylinder {
    pub fn new(radius: i32, true_circle: bool) -> Self {
        Self {
            radius,
            true_circle,
        }
    }

    /// Tolerance-banded squared radius: `r^2 + 0.5` in true-circle mode,
    /// `(r - 0.5)^2` otherwise, smoothing voxel aliasing at the boundary.
    fn radius_squared(&self, radius: f64) -> f64 {
        if self.true_circle {
            radius * radius + 0.5
        } else {
            (radius - 0.5) * (radius - 0.5)
        }
    }
}

impl BrushGeometry for Cylinder {
    fn classify(
        &self,
        center: BlockPosition,
        bounds: &BoundingBox,
        x: i32,
        y: i32,
        z: i32,
    ) -> Classification {
        let radius_x = f64::from(bounds.max_x - bounds.min_x) / 2.0;
        let radius_z = f64::from(bounds.max_z - bounds.min_z) / 2.0;
        let radius = (radius_x + radius_z) / 2.0;

        // Anisotropic correction: when the horizontal extents differ, these
        // keep the footprint proportionate rather than forcing a circle.
        // Construction guarantees both extents are non-zero.
        let x_factor = (radius_z / radius_x).powf(0.9);
        let z_factor = (radius_x / radius_z).powf(0.9);

        let radius_squared = self.radius_squared(radius);

        let dx = f64::from(center.x - x);
        let dz = f64::from(center.z - z);
        let distance = dx * dx * x_factor + dz * dz * z_factor;

        if distance > radius_squared {
            return Classification::Outside;
        }
        // The shell keeps the wall band plus closed top and bottom caps;
        // everything strictly inside the inner margin and off the caps is
        // interior, carved out in hollow mode.
        let inner_margin = radius_squared - 3.0 - f64::from(self.radius) / 0.5;
        if y == bounds.max_y || y == bounds.min_y || distance >= inner_margin {
            Classification::Shell
        } else {
            Classification::Interior
        }
    }

    fn horizontal_extent(&self) -> i32 {
        self.radius
    }

    fn estimated_blocks(&self, height: i32, hollow: bool) -> f64 {
        let radius = f64::from(self.radius);
        let height = f64::from(height);
        let count = if hollow {
            // Wall + cap area, doubled to bias async thresholds high.
            (PI * radius * radius * 2.0) + (2.0 * PI * radius * height * 2.0)
        } else {
            radius * radius * PI * height
        };
        count.ceil()
    }

    fn label(&self, hollow: bool) -> &'static str {
        if hollow {
            "Hollow Standing Cylinder"
        } else {
            "Standing Cylinder"
        }
    }
}
