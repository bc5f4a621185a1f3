//! Render errors.

use thiserror::Error;

/// Errors that can occur while rendering or writing images.
///
/// None of these are retried: a render either has everything it needs
/// up front or fails before the first pixel.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No tracer configured for the world")]
    MissingTracer,

    #[error("No sampler configured on the view plane")]
    MissingSampler,

    #[error("Invalid view plane: {0}")]
    InvalidViewPlane(String),

    #[error("Raw image size mismatch: expected {expected} bytes, found {actual}")]
    RawSize { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
