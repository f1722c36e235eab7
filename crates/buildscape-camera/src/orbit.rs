//! Spherical-coordinate orbit camera.

use buildscape_core::error::BuildscapeError;
use buildscape_core::Result;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Polar angle clamp bound keeping the camera off the poles.
const POLE_EPSILON: f32 = 0.01;

/// Discrete keyboard-style camera adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// Rotate azimuth negative (scene appears to turn right).
    Left,
    /// Rotate azimuth positive.
    Right,
    /// Tilt toward the top pole.
    Up,
    /// Tilt toward the bottom pole.
    Down,
    /// Move the camera closer.
    ZoomIn,
    /// Move the camera farther away.
    ZoomOut,
}

/// Wheel zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Scroll toward the scene: radius shrinks by 10%.
    In,
    /// Scroll away from the scene: radius grows by 10%.
    Out,
}

/// Tuning knobs for the orbit controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Closest allowed camera distance.
    pub min_radius: f32,
    /// Farthest allowed camera distance.
    pub max_radius: f32,
    /// Radians of rotation per pixel of drag.
    pub sensitivity: f32,
    /// Auto-rotation speed in radians per second.
    pub auto_rotate_speed: f32,
    /// Default angular step for keyboard nudges, in radians.
    pub nudge_step: f32,
    /// Default radius step for keyboard zoom nudges, in scene units.
    pub zoom_step: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_radius: 50.0,
            max_radius: 1200.0,
            sensitivity: 0.02,
            auto_rotate_speed: 0.5,
            nudge_step: 0.1,
            zoom_step: 50.0,
        }
    }
}

/// The camera's spherical-coordinate state.
///
/// Owned and mutated exclusively by [`OrbitCamera`]; read it through
/// [`OrbitCamera::state`] or the individual accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle (phi), clamped away from 0 and pi.
    pub polar: f32,
    /// Azimuth (theta), unbounded; wraps via trigonometric periodicity.
    pub azimuth: f32,
    /// True while a pointer drag gesture is active.
    pub dragging: bool,
    /// True while auto-rotation is enabled.
    pub auto_rotate: bool,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            radius: 400.0,
            polar: std::f32::consts::FRAC_PI_4,
            azimuth: std::f32::consts::FRAC_PI_4,
            dragging: false,
            auto_rotate: false,
        }
    }
}

/// Orbit camera controller: translates input events into camera state and
/// derives the Cartesian eye position, always looking at the origin.
///
/// Malformed finite input is clamped, never rejected; non-finite input is
/// rejected with [`BuildscapeError::NonFiniteInput`] before it can reach the
/// state.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    config: OrbitConfig,
    state: OrbitState,
    last_x: f32,
    last_y: f32,
}

impl OrbitCamera {
    /// Creates a controller with the given config and default state.
    #[must_use]
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            state: OrbitState::default(),
            last_x: 0.0,
            last_y: 0.0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Returns the controller config.
    #[must_use]
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Current camera distance.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.state.radius
    }

    /// Current polar angle (phi).
    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        self.state.polar
    }

    /// Current azimuth (theta).
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.state.azimuth
    }

    /// Whether a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Whether auto-rotation is enabled.
    #[must_use]
    pub fn auto_rotate_enabled(&self) -> bool {
        self.state.auto_rotate
    }

    /// Starts a drag gesture at the given pointer coordinates.
    ///
    /// No-op if a drag is already active.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> Result<()> {
        let x = BuildscapeError::check_finite("begin_drag", x)?;
        let y = BuildscapeError::check_finite("begin_drag", y)?;
        if self.state.dragging {
            return Ok(());
        }
        self.state.dragging = true;
        self.last_x = x;
        self.last_y = y;
        log::debug!("drag started at ({x:.1}, {y:.1})");
        Ok(())
    }

    /// Applies a pointer-move during a drag.
    ///
    /// Horizontal motion rotates the azimuth, vertical motion tilts the polar
    /// angle (clamped off the poles). No-op when no drag is active, matching
    /// the tolerant behavior of an interactive surface.
    pub fn update_drag(&mut self, x: f32, y: f32) -> Result<()> {
        let x = BuildscapeError::check_finite("update_drag", x)?;
        let y = BuildscapeError::check_finite("update_drag", y)?;
        if !self.state.dragging {
            return Ok(());
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;

        self.state.azimuth -= dx * self.config.sensitivity;
        self.state.polar = clamp_polar(self.state.polar + dy * self.config.sensitivity);

        self.last_x = x;
        self.last_y = y;
        Ok(())
    }

    /// Ends the drag gesture. Idempotent.
    pub fn end_drag(&mut self) {
        if self.state.dragging {
            log::debug!("drag ended");
        }
        self.state.dragging = false;
    }

    /// Wheel zoom: scales the radius by 10% in or out, then clamps.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::Out => 1.1,
            ZoomDirection::In => 0.9,
        };
        self.set_radius(self.state.radius * factor);
    }

    /// Two-finger pinch zoom: scales the radius by the ratio of the gesture's
    /// start distance to its current distance, then clamps.
    ///
    /// Non-positive distances are ignored (a degenerate pinch), not an error.
    pub fn pinch_zoom(&mut self, start_distance: f32, current_distance: f32) -> Result<()> {
        let start = BuildscapeError::check_finite("pinch_zoom", start_distance)?;
        let current = BuildscapeError::check_finite("pinch_zoom", current_distance)?;
        if start <= 0.0 || current <= 0.0 {
            return Ok(());
        }
        self.set_radius(self.state.radius * (start / current));
        Ok(())
    }

    /// Discrete keyboard-style adjustment of one camera axis by `amount`
    /// (radians for rotation, scene units for zoom).
    pub fn nudge(&mut self, direction: NudgeDirection, amount: f32) -> Result<()> {
        let amount = BuildscapeError::check_finite("nudge", amount)?;
        match direction {
            NudgeDirection::Left => self.state.azimuth -= amount,
            NudgeDirection::Right => self.state.azimuth += amount,
            NudgeDirection::Up => self.state.polar = clamp_polar(self.state.polar - amount),
            NudgeDirection::Down => self.state.polar = clamp_polar(self.state.polar + amount),
            NudgeDirection::ZoomIn => self.set_radius(self.state.radius - amount),
            NudgeDirection::ZoomOut => self.set_radius(self.state.radius + amount),
        }
        Ok(())
    }

    /// Restores the default state: radius 400, phi and theta at pi/4,
    /// auto-rotation off.
    pub fn reset(&mut self) {
        self.state = OrbitState::default();
        log::debug!("camera reset");
    }

    /// Toggles auto-rotation.
    pub fn toggle_auto_rotate(&mut self) {
        self.state.auto_rotate = !self.state.auto_rotate;
    }

    /// Advances auto-rotation by `dt_seconds`.
    ///
    /// The host's render loop calls this once per frame; nothing happens
    /// while auto-rotation is off or a drag is in progress.
    pub fn tick(&mut self, dt_seconds: f32) -> Result<()> {
        let dt = BuildscapeError::check_finite("tick", dt_seconds)?;
        if self.state.auto_rotate && !self.state.dragging {
            self.state.azimuth += self.config.auto_rotate_speed * dt;
        }
        Ok(())
    }

    /// Returns the Cartesian eye position for the current state.
    #[must_use]
    pub fn cartesian_position(&self) -> Vec3 {
        let OrbitState {
            radius,
            polar,
            azimuth,
            ..
        } = self.state;
        Vec3::new(
            radius * polar.sin() * azimuth.cos(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.sin(),
        )
    }

    /// Returns the view matrix looking from the eye position at the origin.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.cartesian_position(), Vec3::ZERO, Vec3::Y)
    }

    /// Formats a status-bar line with the camera position, angles in
    /// degrees, and zoom distance.
    #[must_use]
    pub fn status(&self) -> String {
        let p = self.cartesian_position();
        format!(
            "Camera: ({:.0}, {:.0}, {:.0}) | Angle: {:.1}\u{b0} | Elevation: {:.1}\u{b0} | Zoom: {:.0}",
            p.x,
            p.y,
            p.z,
            self.state.azimuth.to_degrees(),
            self.state.polar.to_degrees(),
            self.state.radius,
        )
    }

    fn set_radius(&mut self, radius: f32) {
        self.state.radius = radius.clamp(self.config.min_radius, self.config.max_radius);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

fn clamp_polar(polar: f32) -> f32 {
    polar.clamp(POLE_EPSILON, std::f32::consts::PI - POLE_EPSILON)
}
