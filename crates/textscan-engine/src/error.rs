//! Error types for OCR operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building an engine, running it, or
/// aggregating its output.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Model files not found.
    #[error("model not found at {path}: {message}")]
    ModelNotFound { path: String, message: String },

    /// Model loading or engine construction failed.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The engine was asked for a capability it does not have.
    #[error("unsupported engine option: {0}")]
    Unsupported(String),

    /// Input image does not exist.
    #[error("image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// Input image could not be read or decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// Detection or recognition failed.
    #[error("recognition failed: {0}")]
    Recognition(String),

    /// A result record has an unexpected shape.
    #[error("malformed result record: {0}")]
    MalformedRecord(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for OcrError {
    fn from(e: image::ImageError) -> Self {
        OcrError::ImageDecode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OcrError>;
