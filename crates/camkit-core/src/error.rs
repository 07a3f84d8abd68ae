//! Error types for camkit.

use thiserror::Error;

/// The main error type for camkit operations.
#[derive(Error, Debug)]
pub enum CamkitError {
    /// camkit has not been initialized.
    #[error("camkit not initialized - call camkit::init() first")]
    NotInitialized,

    /// camkit has already been initialized.
    #[error("camkit already initialized")]
    AlreadyInitialized,

    /// A camera with the given type and name is already registered.
    #[error("{0} '{1}' already exists")]
    CameraExists(String, String),

    /// A camera with the given name was not found.
    #[error("camera '{0}' not found")]
    CameraNotFound(String),

    /// More than one camera type has a camera registered under this name.
    #[error("camera name '{0}' is used by more than one camera type")]
    AmbiguousCameraName(String),

    /// Merged parameters could not be read as the camera's parameter type.
    #[error("invalid camera parameters: {0}")]
    InvalidParams(#[source] serde_json::Error),

    /// A pair of opposing clipping planes does not enclose any volume.
    #[error("degenerate {axis} planes: {min} must be less than {max}")]
    DegeneratePlanes {
        axis: &'static str,
        min: f32,
        max: f32,
    },

    /// A projection parameter is NaN or infinite.
    #[error("camera parameter '{0}' is not finite")]
    NonFinite(&'static str),

    /// A projection parameter is out of its allowed range.
    #[error("invalid camera parameter '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for camkit operations.
pub type Result<T> = std::result::Result<T, CamkitError>;
