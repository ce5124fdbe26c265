//! OCR engine integration for textscan.
//!
//! Wraps the ocrs library behind the [`OcrEngine`] trait, locates its models
//! on disk, and flattens the records it produces into a list of text lines.

mod aggregate;
mod engine;
mod error;
mod models;
mod options;

pub use aggregate::{collect_texts, REC_TEXTS_KEY};
pub use engine::{OcrEngine, OcrsEngine, Records};
pub use error::{OcrError, Result};
pub use models::{resolve_models_dir, DETECTION_MODEL, RECOGNITION_MODEL};
pub use options::EngineOptions;
