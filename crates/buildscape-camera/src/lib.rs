//! Orbit camera control for buildscape.
//!
//! [`OrbitCamera`] keeps a spherical-coordinate camera state (radius, polar
//! angle, azimuth) around the scene origin and turns pointer, wheel, touch,
//! and keyboard deltas into a continuously-queryable Cartesian eye position.
//! The host event layer translates platform events into the methods here; no
//! platform API is read directly.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod orbit;

pub use orbit::{NudgeDirection, OrbitCamera, OrbitConfig, OrbitState, ZoomDirection};
