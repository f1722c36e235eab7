//! Per-segment display envelopes.
//!
//! Each segment kind has a designated axis-aligned box that hosts use to draw
//! wireframe component bounds around the generated points. The boxes are
//! display geometry: jittered samples can poke a few units past them, and the
//! left/right wall faces intentionally run longer than the box's depth.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::SegmentKind;

/// An axis-aligned bounding box in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Envelope {
    /// Creates an envelope from full extents centered at (0, `center_y`, 0).
    #[must_use]
    pub fn centered(extents: Vec3, center_y: f32) -> Self {
        let half = extents * 0.5;
        let center = Vec3::new(0.0, center_y, 0.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the full extents of the box.
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns whether `point` lies inside the box (inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns the box grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }
}

impl SegmentKind {
    /// Returns the display envelope for this segment kind.
    #[must_use]
    pub fn envelope(self) -> Envelope {
        match self {
            SegmentKind::Wall => Envelope::centered(Vec3::new(200.0, 100.0, 120.0), 30.0),
            SegmentKind::Roof => Envelope::centered(Vec3::new(120.0, 20.0, 120.0), 90.0),
            SegmentKind::Floor => Envelope::centered(Vec3::new(120.0, 10.0, 120.0), -15.0),
            SegmentKind::Window => Envelope::centered(Vec3::new(180.0, 80.0, 116.0), 30.0),
            SegmentKind::Hvac => Envelope::centered(Vec3::new(100.0, 40.0, 100.0), 40.0),
            SegmentKind::Other => Envelope::centered(Vec3::new(100.0, 100.0, 100.0), 50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_construction() {
        let env = Envelope::centered(Vec3::new(200.0, 100.0, 120.0), 30.0);
        assert_eq!(env.min, Vec3::new(-100.0, -20.0, -60.0));
        assert_eq!(env.max, Vec3::new(100.0, 80.0, 60.0));
        assert_eq!(env.center(), Vec3::new(0.0, 30.0, 0.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let env = SegmentKind::Roof.envelope();
        assert!(env.contains(env.min));
        assert!(env.contains(env.max));
        assert!(env.contains(env.center()));
        assert!(!env.contains(env.max + Vec3::splat(0.1)));
    }

    #[test]
    fn test_expanded_grows_every_side() {
        let env = SegmentKind::Hvac.envelope();
        let grown = env.expanded(5.0);
        assert_eq!(grown.extents(), env.extents() + Vec3::splat(10.0));
        assert_eq!(grown.center(), env.center());
    }

    #[test]
    fn test_other_envelope_starts_at_ground() {
        let env = SegmentKind::Other.envelope();
        assert_eq!(env.min.y, 0.0);
        assert_eq!(env.max.y, 100.0);
    }
}
