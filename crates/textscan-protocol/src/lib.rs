//! Protocol types for textscan output.
//!
//! This crate defines the JSON envelope printed by the CLI and the result
//! records produced by OCR engines.

mod envelope;
mod record;

pub use envelope::*;
pub use record::*;
