//! Configuration options for scene synthesis.

use serde::{Deserialize, Serialize};

/// Global options for building a point-cloud scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Divisor applied to each segment's point budget before generation.
    ///
    /// The budgets describe the full-resolution scan; the synthesized scene
    /// renders `floor(budget / density_divisor)` points per segment.
    pub density_divisor: f32,

    /// Point count for the fallback cloud used when a scene has no segments.
    pub fallback_point_count: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            density_divisor: 1.5,
            fallback_point_count: 10_000,
        }
    }
}

impl SceneOptions {
    /// Returns the scaled point count for a segment budget.
    ///
    /// A non-positive or non-finite divisor falls back to the unscaled
    /// budget rather than producing a bogus count.
    #[must_use]
    pub fn scaled_count(&self, point_budget: u32) -> usize {
        if self.density_divisor.is_finite() && self.density_divisor > 0.0 {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (point_budget as f32 / self.density_divisor).floor() as usize;
            scaled
        } else {
            point_budget as usize
        }
    }
}
