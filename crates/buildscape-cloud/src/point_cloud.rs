//! Point sample generation and scene assembly.

use buildscape_core::{Envelope, SceneOptions, SegmentDescriptor, SegmentKind};
use glam::Vec3;
use rand::Rng;

use crate::sampler;

/// One generated point: position in scene units, color in [0, 1] per
/// channel, and a point-sprite radius factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    /// Position in scene units.
    pub position: Vec3,
    /// Color triple, base color times a per-point brightness jitter.
    pub color: Vec3,
    /// Sprite radius factor in [0.5, 1.1].
    pub size: f32,
}

/// The generated cloud for one building segment, paired with the segment's
/// display envelope so hosts can draw component bounds.
#[derive(Debug, Clone)]
pub struct SegmentCloud {
    /// Which building part this cloud represents.
    pub kind: SegmentKind,
    /// Base color the samples were derived from.
    pub base_color: Vec3,
    /// The generated samples.
    pub samples: Vec<PointSample>,
    /// Display envelope for this segment.
    pub envelope: Envelope,
}

impl SegmentCloud {
    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether the cloud is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Generates stylized building point clouds, one segment at a time.
///
/// The synthesizer is stateless apart from its options; all randomness comes
/// from the caller's [`Rng`], so seeding the generator makes a scene
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct PointCloudSynthesizer {
    options: SceneOptions,
}

impl PointCloudSynthesizer {
    /// Creates a synthesizer with the given options.
    #[must_use]
    pub fn new(options: SceneOptions) -> Self {
        Self { options }
    }

    /// Returns the synthesis options.
    #[must_use]
    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    /// Generates exactly `point_count` samples for one segment.
    ///
    /// A zero count yields an empty vector. Unknown segment kinds fall back
    /// to a generic cuboid volume rather than failing.
    pub fn generate<R: Rng>(
        &self,
        segment: &SegmentDescriptor,
        point_count: usize,
        rng: &mut R,
    ) -> Vec<PointSample> {
        let mut samples = Vec::with_capacity(point_count);
        for _ in 0..point_count {
            let position = sampler::sample_position(segment.kind, rng);
            // Brightness jitter keeps the surface from reading as flat color.
            let brightness = 0.9 + rng.gen::<f32>() * 0.2;
            let size = 0.5 + rng.gen::<f32>() * 0.6;
            samples.push(PointSample {
                position,
                color: segment.base_color * brightness,
                size,
            });
        }
        samples
    }

    /// Generates one [`SegmentCloud`] at the density-scaled count for the
    /// segment's budget.
    pub fn generate_segment<R: Rng>(
        &self,
        segment: &SegmentDescriptor,
        rng: &mut R,
    ) -> SegmentCloud {
        let count = self.options.scaled_count(segment.point_budget);
        log::info!(
            "generating {count} points for segment '{}'",
            segment.kind.name()
        );
        SegmentCloud {
            kind: segment.kind,
            base_color: segment.base_color,
            samples: self.generate(segment, count, rng),
            envelope: segment.kind.envelope(),
        }
    }

    /// Synthesizes a whole building: one cloud per descriptor, in order.
    ///
    /// An empty descriptor list yields the [fallback
    /// cloud](Self::fallback_cloud) so a misconfigured scene still renders
    /// something.
    pub fn synthesize_building<R: Rng>(
        &self,
        segments: &[SegmentDescriptor],
        rng: &mut R,
    ) -> Vec<SegmentCloud> {
        if segments.is_empty() {
            log::warn!("no segments supplied, using fallback cloud");
            return vec![self.fallback_cloud(rng)];
        }
        segments
            .iter()
            .map(|segment| self.generate_segment(segment, rng))
            .collect()
    }

    /// Generates the plain fallback cloud: uniform points over the whole
    /// building volume in a single flat color.
    pub fn fallback_cloud<R: Rng>(&self, rng: &mut R) -> SegmentCloud {
        let count = self.options.fallback_point_count;
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(PointSample {
                position: Vec3::new(
                    rng.gen_range(-100.0..=100.0),
                    rng.gen_range(-20.0..=80.0),
                    rng.gen_range(-100.0..=100.0),
                ),
                color: Vec3::new(0.6, 0.8, 1.0),
                size: 2.0,
            });
        }
        SegmentCloud {
            kind: SegmentKind::Other,
            base_color: Vec3::new(0.6, 0.8, 1.0),
            samples,
            envelope: Envelope::centered(Vec3::new(200.0, 100.0, 200.0), 30.0),
        }
    }
}
