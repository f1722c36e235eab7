//! Per-segment position sampling rules.
//!
//! Each rule places a point on or near the geometry of one building part.
//! Wall-like segments pick one of four faces, fix the perpendicular
//! coordinate at the face offset, and spread the point across the face; the
//! jitter passes thicken the surface so it reads as solid rather than as a
//! perfect plane.

use buildscape_core::SegmentKind;
use glam::Vec3;
use rand::Rng;

/// Samples one position for the given segment kind.
pub(crate) fn sample_position<R: Rng>(kind: SegmentKind, rng: &mut R) -> Vec3 {
    match kind {
        SegmentKind::Wall => sample_wall(rng),
        SegmentKind::Roof => sample_roof(rng),
        SegmentKind::Floor => sample_floor(rng),
        SegmentKind::Window => sample_window(rng),
        SegmentKind::Hvac => sample_hvac(rng),
        SegmentKind::Other => sample_cuboid(rng),
    }
}

/// Uniform value in [-half, half].
fn spread<R: Rng>(rng: &mut R, half: f32) -> f32 {
    rng.gen_range(-half..=half)
}

/// One of the two face offsets, chosen with equal probability.
fn face<R: Rng>(rng: &mut R, offset: f32) -> f32 {
    if rng.gen_bool(0.5) {
        -offset
    } else {
        offset
    }
}

/// Applies a surface-thickening jitter to two coordinates with the given
/// probability and full magnitude.
fn jitter2<R: Rng>(rng: &mut R, a: &mut f32, b: &mut f32, probability: f64, magnitude: f32) {
    if rng.gen_bool(probability) {
        *a += spread(rng, magnitude * 0.5);
        *b += spread(rng, magnitude * 0.5);
    }
}

/// Walls: four faces at x = +/-60 or z = +/-60, spanning +/-100 along the
/// face and [-20, 80] in height. Two jitter passes (p=0.7 mag 5, p=0.5 mag 3)
/// on the in-plane axes.
fn sample_wall<R: Rng>(rng: &mut R) -> Vec3 {
    if rng.gen_bool(0.5) {
        // Front/back faces
        let mut x = spread(rng, 100.0);
        let mut y = rng.gen_range(-20.0..=80.0);
        let z = face(rng, 60.0);
        jitter2(rng, &mut x, &mut y, 0.7, 5.0);
        jitter2(rng, &mut x, &mut y, 0.5, 3.0);
        Vec3::new(x, y, z)
    } else {
        // Left/right faces
        let x = face(rng, 60.0);
        let mut y = rng.gen_range(-20.0..=80.0);
        let mut z = spread(rng, 100.0);
        jitter2(rng, &mut y, &mut z, 0.7, 5.0);
        jitter2(rng, &mut y, &mut z, 0.5, 3.0);
        Vec3::new(x, y, z)
    }
}

/// Roof: 120-unit square slab at y in [80, 100] with a pitch term
/// proportional to |x|. Jitter passes p=0.8 mag 4 and p=0.6 mag 2 on x,z.
fn sample_roof<R: Rng>(rng: &mut R) -> Vec3 {
    let mut x = spread(rng, 60.0);
    let y = 80.0 + rng.gen_range(0.0..=20.0) + x.abs() * 0.1;
    let mut z = spread(rng, 60.0);
    jitter2(rng, &mut x, &mut z, 0.8, 4.0);
    jitter2(rng, &mut x, &mut z, 0.6, 2.0);
    Vec3::new(x, y, z)
}

/// Floor: foundation slab, y in [-20, -5], same footprint and jitter as the
/// roof.
fn sample_floor<R: Rng>(rng: &mut R) -> Vec3 {
    let mut x = spread(rng, 60.0);
    let y = -20.0 + rng.gen_range(0.0..=15.0);
    let mut z = spread(rng, 60.0);
    jitter2(rng, &mut x, &mut z, 0.8, 4.0);
    jitter2(rng, &mut x, &mut z, 0.6, 2.0);
    Vec3::new(x, y, z)
}

/// Windows: same face selection as walls, but frames sit at +/-58 (inside
/// the wall plane), span +/-90 by [-10, 70], and jitter less (p=0.8 mag 3,
/// p=0.6 mag 2).
fn sample_window<R: Rng>(rng: &mut R) -> Vec3 {
    if rng.gen_bool(0.5) {
        let mut x = spread(rng, 90.0);
        let mut y = rng.gen_range(-10.0..=70.0);
        let z = face(rng, 58.0);
        jitter2(rng, &mut x, &mut y, 0.8, 3.0);
        jitter2(rng, &mut x, &mut y, 0.6, 2.0);
        Vec3::new(x, y, z)
    } else {
        let x = face(rng, 58.0);
        let mut y = rng.gen_range(-10.0..=70.0);
        let mut z = spread(rng, 90.0);
        jitter2(rng, &mut y, &mut z, 0.8, 3.0);
        jitter2(rng, &mut y, &mut z, 0.6, 2.0);
        Vec3::new(x, y, z)
    }
}

/// HVAC: 70% rooftop unit volume (100x40x100 box lifted to y in [20, 60]),
/// 30% narrower duct volume (80x30x80, y in [30, 60]); one volumetric jitter
/// pass per branch.
fn sample_hvac<R: Rng>(rng: &mut R) -> Vec3 {
    if rng.gen_bool(0.7) {
        let mut x = spread(rng, 50.0);
        let mut y = 20.0 + rng.gen_range(0.0..=40.0);
        let mut z = spread(rng, 50.0);
        if rng.gen_bool(0.6) {
            x += spread(rng, 2.5);
            y += spread(rng, 2.5);
            z += spread(rng, 2.5);
        }
        Vec3::new(x, y, z)
    } else {
        let mut x = spread(rng, 40.0);
        let mut y = 30.0 + rng.gen_range(0.0..=30.0);
        let mut z = spread(rng, 40.0);
        if rng.gen_bool(0.6) {
            x += spread(rng, 2.0);
            y += spread(rng, 2.0);
            z += spread(rng, 2.0);
        }
        Vec3::new(x, y, z)
    }
}

/// Fallback for unknown segments: uniform in a 100x100x100 box above ground.
fn sample_cuboid<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        spread(rng, 50.0),
        rng.gen_range(0.0..=100.0),
        spread(rng, 50.0),
    )
}
