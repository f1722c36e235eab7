//! Procedural point-cloud synthesis for buildscape.
//!
//! Given a [`SegmentDescriptor`](buildscape_core::SegmentDescriptor), the
//! [`PointCloudSynthesizer`] generates positions, colors, and per-point sizes
//! that visually approximate that building part. All randomness flows through
//! a caller-supplied [`rand::Rng`], so a seeded generator yields a
//! reproducible scene.

// Geometry code intentionally uses casts for counts and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod manifest;
pub mod point_cloud;
mod sampler;

pub use manifest::{SceneManifest, SegmentSummary};
pub use point_cloud::{PointCloudSynthesizer, PointSample, SegmentCloud};
