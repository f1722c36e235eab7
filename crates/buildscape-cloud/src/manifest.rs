//! Scene manifest: a serializable summary of what was synthesized.
//!
//! Hosts hand this to dashboards or drop it next to an exported scene; it
//! carries no sample data, only per-segment bookkeeping.

use buildscape_core::{Result, SegmentKind};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::SegmentCloud;

/// Summary of one synthesized segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    /// Segment name ("walls", "roof", ...).
    pub segment: String,
    /// Number of generated samples.
    pub points: usize,
    /// Base color the samples were derived from.
    pub base_color: Vec3,
}

/// A summary of a whole synthesized scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Per-segment summaries, in synthesis order.
    pub segments: Vec<SegmentSummary>,
    /// Total sample count across all segments.
    pub total_points: usize,
}

impl SceneManifest {
    /// Builds a manifest from synthesized clouds.
    #[must_use]
    pub fn from_clouds(clouds: &[SegmentCloud]) -> Self {
        let segments: Vec<SegmentSummary> = clouds
            .iter()
            .map(|cloud| SegmentSummary {
                segment: cloud.kind.name().to_string(),
                points: cloud.len(),
                base_color: cloud.base_color,
            })
            .collect();
        let total_points = segments.iter().map(|s| s.points).sum();
        Self {
            segments,
            total_points,
        }
    }

    /// Returns the summary for a segment kind, if present.
    #[must_use]
    pub fn segment(&self, kind: SegmentKind) -> Option<&SegmentSummary> {
        self.segments.iter().find(|s| s.segment == kind.name())
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
