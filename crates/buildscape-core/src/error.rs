//! Error types for buildscape.

use thiserror::Error;

/// The main error type for buildscape operations.
#[derive(Error, Debug)]
pub enum BuildscapeError {
    /// A numeric input was NaN or infinite.
    ///
    /// Camera input methods reject non-finite values instead of letting them
    /// propagate into the orbit state; finite out-of-range values are clamped
    /// rather than rejected.
    #[error("non-finite input to {op}: {value}")]
    NonFiniteInput {
        /// The operation that received the value.
        op: &'static str,
        /// The offending value.
        value: f32,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl BuildscapeError {
    /// Checks that `value` is finite, returning `NonFiniteInput` otherwise.
    pub fn check_finite(op: &'static str, value: f32) -> Result<f32> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(BuildscapeError::NonFiniteInput { op, value })
        }
    }
}

/// A specialized Result type for buildscape operations.
pub type Result<T> = std::result::Result<T, BuildscapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite_accepts_normal_values() {
        assert!(BuildscapeError::check_finite("test", 0.0).is_ok());
        assert!(BuildscapeError::check_finite("test", -1200.5).is_ok());
    }

    #[test]
    fn test_check_finite_rejects_nan_and_infinity() {
        assert!(BuildscapeError::check_finite("test", f32::NAN).is_err());
        assert!(BuildscapeError::check_finite("test", f32::INFINITY).is_err());
        assert!(BuildscapeError::check_finite("test", f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_operation() {
        let err = BuildscapeError::check_finite("update_drag", f32::NAN).unwrap_err();
        assert!(err.to_string().contains("update_drag"));
    }
}
