//! Core abstractions for buildscape.
//!
//! This crate provides the fundamental types used throughout buildscape:
//! - [`SegmentKind`] and [`SegmentDescriptor`] for the building parts a scene
//!   is composed of
//! - [`Envelope`] display bounds per segment
//! - Error types and configuration options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod envelope;
pub mod error;
pub mod options;
pub mod segment;

pub use envelope::Envelope;
pub use error::{BuildscapeError, Result};
pub use options::SceneOptions;
pub use segment::{SegmentDescriptor, SegmentKind};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3};
