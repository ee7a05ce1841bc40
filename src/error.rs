//! Construction-time error taxonomy
//!
//! Per-frame operations are total and never fail; everything that can go
//! wrong is caught while the scene is being built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Configuration document could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A chaos or formed endpoint contained NaN or infinity.
    #[error("non-finite {field} in pose")]
    NonFinitePose { field: &'static str },

    /// A numeric setting is outside its allowed range.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidSetting {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Two photos share the same id.
    #[error("duplicate photo id {0}")]
    DuplicatePhoto(u32),
}

pub type Result<T> = std::result::Result<T, SceneError>;

/// Reject anything but a finite value above zero
pub(crate) fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidSetting {
            name,
            value,
            reason: "must be a finite number greater than zero",
        })
    }
}

pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidSetting {
            name,
            value,
            reason: "must be a finite, non-negative number",
        })
    }
}

/// Open interval (0, 1)
pub(crate) fn unit_fraction(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidSetting {
            name,
            value,
            reason: "must lie strictly between zero and one",
        })
    }
}
