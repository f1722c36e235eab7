//! buildscape: procedural building point-cloud synthesis and orbit camera
//! control.
//!
//! buildscape generates the stylized per-segment point clouds (walls, roof,
//! floor, windows, HVAC) behind a building-intelligence viewer and drives an
//! orbit camera from pointer/wheel/touch/keyboard deltas. It is a pure
//! computation library: the renderer consumes [`PointSample`] buffers and
//! [`OrbitCamera::cartesian_position`], and the host event layer feeds the
//! camera's input methods.
//!
//! # Quick Start
//!
//! ```
//! use buildscape::*;
//!
//! fn main() -> Result<()> {
//!     // Synthesize the standard five-segment building, deterministically.
//!     let scene = BuildingScene::synthesize(SceneOptions::default(), 42);
//!     assert_eq!(scene.clouds.len(), 5);
//!
//!     // Drive the camera like a host event loop would.
//!     let mut camera = OrbitCamera::default();
//!     camera.begin_drag(100.0, 100.0)?;
//!     camera.update_drag(150.0, 80.0)?;
//!     camera.end_drag();
//!     let _eye = camera.cartesian_position();
//!     Ok(())
//! }
//! ```

pub mod scene;

// Re-export core types
pub use buildscape_core::{
    envelope::Envelope,
    error::{BuildscapeError, Result},
    options::SceneOptions,
    segment::{SegmentDescriptor, SegmentKind},
    Mat4, Vec3,
};

// Re-export synthesis types
pub use buildscape_cloud::{
    PointCloudSynthesizer, PointSample, SceneManifest, SegmentCloud, SegmentSummary,
};

// Re-export camera types
pub use buildscape_camera::{NudgeDirection, OrbitCamera, OrbitConfig, OrbitState, ZoomDirection};

pub use scene::BuildingScene;

/// Initializes logging for host applications and demos.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::try_init();
    log::info!("buildscape logging initialized");
}
