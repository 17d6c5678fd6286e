//! Error types for the color wheel host.

use chroma_wheel::WheelError;
use thiserror::Error;

/// Errors that can occur while configuring or updating a color wheel view.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Rejected geometry, pixel scale, or border width
    #[error("Wheel error: {0}")]
    Wheel(#[from] WheelError),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file written by a newer version
    #[error(
        "Config version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        /// Version found in the file
        file_version: u32,
        /// Highest version this build understands
        supported_version: u32,
    },
}

pub type Result<T> = std::result::Result<T, PickerError>;
