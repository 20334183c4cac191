//! Error types for gait configuration and baking.

use thiserror::Error;

/// Result type for gaitcade operations.
pub type GaitResult<T> = Result<T, GaitError>;

/// Errors that can occur while configuring the gait engine, skeleton or selector.
///
/// Every variant is a configuration error: sampling and per-frame updates never
/// fail once construction has succeeded.
#[derive(Debug, Error)]
pub enum GaitError {
    /// Gait cycle time is zero, negative or not finite.
    #[error("invalid cycle time: {cycle_time} seconds (must be positive and finite)")]
    InvalidCycleTime {
        /// The rejected cycle time.
        cycle_time: f64,
    },

    /// A curve does not have exactly four control points.
    #[error("malformed curve '{name}': expected 4 control points, found {count}")]
    MalformedCurve {
        /// Curve name.
        name: String,
        /// Number of control points supplied.
        count: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Animation mode duration is zero, negative or not finite.
    #[error("invalid mode duration: {duration} seconds")]
    InvalidModeDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// The animation playlist has no modes.
    #[error("animation playlist is empty")]
    EmptyPlaylist,

    /// A joint limit has min > max or a non-finite bound.
    #[error("invalid joint limit for {joint}: [{min}, {max}]")]
    InvalidJointLimit {
        /// Joint class and axis (e.g. "kneeX").
        joint: String,
        /// Lower bound in radians.
        min: f64,
        /// Upper bound in radians.
        max: f64,
    },

    /// Bake settings are out of range.
    #[error("invalid bake settings: {message}")]
    InvalidBakeSettings {
        /// Error message.
        message: String,
    },

    /// Serialization failure while hashing or exporting poses.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GaitError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid bake settings error.
    pub fn invalid_bake(message: impl Into<String>) -> Self {
        Self::InvalidBakeSettings {
            message: message.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GaitError::InvalidCycleTime { .. } => "GAIT_001",
            GaitError::MalformedCurve { .. } => "GAIT_002",
            GaitError::InvalidParameter { .. } => "GAIT_003",
            GaitError::InvalidModeDuration { .. } => "GAIT_004",
            GaitError::EmptyPlaylist => "GAIT_005",
            GaitError::InvalidJointLimit { .. } => "GAIT_006",
            GaitError::InvalidBakeSettings { .. } => "GAIT_007",
            GaitError::Serialization(_) => "GAIT_008",
        }
    }

    /// Returns the error category.
    pub fn category(&self) -> &'static str {
        match self {
            GaitError::InvalidBakeSettings { .. } | GaitError::Serialization(_) => "bake",
            _ => "config",
        }
    }
}

/// Checks that a named value is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> GaitResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GaitError::invalid_param(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Checks that a named value is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> GaitResult<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GaitError::invalid_param(
            name,
            format!("must be positive, got {}", value),
        ))
    }
}

/// Checks that a named value is finite and not negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> GaitResult<()> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GaitError::invalid_param(
            name,
            format!("must not be negative, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = GaitError::invalid_param("hip_amplitude", "must be finite, got NaN");
        assert!(err.to_string().contains("hip_amplitude"));
        assert!(err.to_string().contains("must be finite"));
        assert_eq!(err.code(), "GAIT_003");
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_malformed_curve_message() {
        let err = GaitError::MalformedCurve {
            name: "knee".to_string(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed curve 'knee': expected 4 control points, found 3"
        );
        assert_eq!(err.code(), "GAIT_002");
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            GaitError::InvalidCycleTime { cycle_time: 0.0 },
            GaitError::MalformedCurve {
                name: String::new(),
                count: 0,
            },
            GaitError::invalid_param("x", "y"),
            GaitError::InvalidModeDuration { duration: 0.0 },
            GaitError::EmptyPlaylist,
            GaitError::InvalidJointLimit {
                joint: "kneeX".to_string(),
                min: 1.0,
                max: 0.0,
            },
            GaitError::invalid_bake("fps"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("cycle_time", 1.0).is_ok());
        assert!(ensure_positive("cycle_time", 0.0).is_err());
        assert!(ensure_positive("cycle_time", -1.0).is_err());
        assert!(ensure_positive("cycle_time", f64::NAN).is_err());
        assert!(ensure_positive("cycle_time", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("height", 0.0).is_ok());
        assert!(ensure_non_negative("height", 0.5).is_ok());
        assert!(ensure_non_negative("height", -0.1).is_err());
        assert!(ensure_non_negative("height", f64::NAN).is_err());
    }
}
