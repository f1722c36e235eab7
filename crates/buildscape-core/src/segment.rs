//! Building segment kinds and descriptors.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One structurally distinct part of the modeled building.
///
/// Each kind maps to exactly one point-sampling rule. Unknown segment names
/// parse to [`SegmentKind::Other`], which samples a generic cuboid volume, so
/// a scene with unrecognized parts still renders something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Exterior walls (four faces around the building perimeter).
    Wall,
    /// Pitched roof slab.
    Roof,
    /// Foundation slab below grade.
    Floor,
    /// Window frames set slightly inside the wall planes.
    Window,
    /// Rooftop HVAC units and ductwork.
    Hvac,
    /// Unrecognized segment - generic cuboid volume.
    #[default]
    Other,
}

impl SegmentKind {
    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Wall => "walls",
            SegmentKind::Roof => "roof",
            SegmentKind::Floor => "floor",
            SegmentKind::Window => "windows",
            SegmentKind::Hvac => "hvac",
            SegmentKind::Other => "other",
        }
    }

    /// Parses a segment name permissively; unknown names map to `Other`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "walls" | "wall" => SegmentKind::Wall,
            "roof" => SegmentKind::Roof,
            "floor" => SegmentKind::Floor,
            "windows" | "window" => SegmentKind::Window,
            "hvac" => SegmentKind::Hvac,
            _ => SegmentKind::Other,
        }
    }

    /// Returns all kinds with a dedicated sampling rule.
    #[must_use]
    pub fn all() -> [SegmentKind; 5] {
        [
            SegmentKind::Wall,
            SegmentKind::Roof,
            SegmentKind::Floor,
            SegmentKind::Window,
            SegmentKind::Hvac,
        ]
    }
}

/// Converts 8-bit RGB channels to a unit-range color triple.
fn rgb8(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
}

/// An immutable description of one building segment: which part it is, how
/// many points it nominally gets, and its base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentDescriptor {
    /// Which building part this describes.
    pub kind: SegmentKind,
    /// Nominal point count before density scaling.
    pub point_budget: u32,
    /// Base color, each channel in [0, 1].
    pub base_color: Vec3,
}

impl SegmentDescriptor {
    /// Creates a new segment descriptor.
    #[must_use]
    pub fn new(kind: SegmentKind, point_budget: u32, base_color: Vec3) -> Self {
        Self {
            kind,
            point_budget,
            base_color,
        }
    }

    /// Returns the standard five-segment building set with its canonical
    /// point budgets and colors (walls blue, roof/floor green, windows amber,
    /// hvac violet).
    #[must_use]
    pub fn building_set() -> Vec<SegmentDescriptor> {
        vec![
            SegmentDescriptor::new(SegmentKind::Wall, 85_000, rgb8(0x3B, 0x82, 0xF6)),
            SegmentDescriptor::new(SegmentKind::Roof, 45_000, rgb8(0x10, 0xB9, 0x81)),
            SegmentDescriptor::new(SegmentKind::Window, 25_000, rgb8(0xF5, 0x9E, 0x0B)),
            SegmentDescriptor::new(SegmentKind::Hvac, 35_000, rgb8(0x8B, 0x5C, 0xF6)),
            SegmentDescriptor::new(SegmentKind::Floor, 60_000, rgb8(0x10, 0xB9, 0x81)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in SegmentKind::all() {
            assert_eq!(SegmentKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_unknown_name_maps_to_other() {
        assert_eq!(SegmentKind::from_name("chimney"), SegmentKind::Other);
        assert_eq!(SegmentKind::from_name(""), SegmentKind::Other);
    }

    #[test]
    fn test_building_set_budgets_sum() {
        let total: u32 = SegmentDescriptor::building_set()
            .iter()
            .map(|s| s.point_budget)
            .sum();
        assert_eq!(total, 250_000);
    }

    #[test]
    fn test_building_set_colors_in_unit_range() {
        for seg in SegmentDescriptor::building_set() {
            for channel in seg.base_color.to_array() {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
