//! Whole-building scene assembly.

use buildscape_core::{SceneOptions, SegmentDescriptor};
use buildscape_cloud::{PointCloudSynthesizer, SceneManifest, SegmentCloud};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fully synthesized building scene: one cloud per segment plus the
/// manifest summarizing them.
#[derive(Debug, Clone)]
pub struct BuildingScene {
    /// Per-segment clouds, in descriptor order.
    pub clouds: Vec<SegmentCloud>,
    /// Summary of the synthesized segments.
    pub manifest: SceneManifest,
}

impl BuildingScene {
    /// Synthesizes the standard five-segment building with a seeded
    /// generator, so the same seed always yields the same scene.
    #[must_use]
    pub fn synthesize(options: SceneOptions, seed: u64) -> Self {
        Self::synthesize_segments(options, &SegmentDescriptor::building_set(), seed)
    }

    /// Synthesizes a scene from caller-supplied descriptors.
    #[must_use]
    pub fn synthesize_segments(
        options: SceneOptions,
        segments: &[SegmentDescriptor],
        seed: u64,
    ) -> Self {
        let synthesizer = PointCloudSynthesizer::new(options);
        let mut rng = StdRng::seed_from_u64(seed);
        let clouds = synthesizer.synthesize_building(segments, &mut rng);
        let manifest = SceneManifest::from_clouds(&clouds);
        log::info!(
            "scene synthesized: {} segments, {} points",
            clouds.len(),
            manifest.total_points
        );
        Self { clouds, manifest }
    }

    /// Total sample count across all clouds.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.manifest.total_points
    }
}
