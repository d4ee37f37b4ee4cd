use serde::{Deserialize, Serialize};

/// Caller-side brush limits.
///
/// The engine itself never reads configuration; callers use these values to
/// reject oversized shapes before construction and to decide whether to run
/// enumeration deferred, based on [`Shape::approximate_processed_blocks`].
///
/// [`Shape::approximate_processed_blocks`]: crate::Shape::approximate_processed_blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Maximum allowed radius/width for any shape.
    pub max_size: i32,
    /// Estimated block count at or above which enumeration should be
    /// deferred off the world-owning context.
    pub min_async_size: i32,
    /// How many chunk snapshots the undo system retains per session.
    pub max_revert_stores: usize,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            max_size: 15,
            min_async_size: 15,
            max_revert_stores: 15,
        }
    }
}

impl BrushConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn allows_size(&self, size: i32) -> bool {
        size > 0 && size <= self.max_size
    }

    pub fn should_defer(&self, estimated_blocks: f64) -> bool {
        estimated_blocks >= f64::from(self.min_async_size)
    }
}
