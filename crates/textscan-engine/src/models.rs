//! Locating the detection and recognition models on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OcrError, Result};

/// File name of the text detection model.
pub const DETECTION_MODEL: &str = "text-detection.rten";

/// File name of the text recognition model.
pub const RECOGNITION_MODEL: &str = "text-recognition.rten";

/// Find the directory holding both OCR models.
///
/// An explicit directory is used as-is and must contain both files.
/// Otherwise the models are looked up at `bin/../models` relative to the
/// executable, then at `./models`.
pub fn resolve_models_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return check_models_dir(dir).map(|()| dir.to_path_buf());
    }

    let mut candidates = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        // Models are sibling to the bin directory: bin/../models
        if let Some(root) = exe_path.parent().and_then(|p| p.parent()) {
            candidates.push(root.join("models"));
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("models"));
    }

    first_with_models(&candidates)
}

/// Return the first candidate that contains both models.
fn first_with_models(candidates: &[PathBuf]) -> Result<PathBuf> {
    for dir in candidates {
        if has_models(dir) {
            debug!("Found models directory at {:?}", dir);
            return Ok(dir.clone());
        }
        debug!("No models at {:?}", dir);
    }

    let searched = candidates
        .iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Err(OcrError::ModelNotFound {
        path: searched,
        message: format!(
            "expected {} and {}; pass --models-dir or set TEXTSCAN_MODELS_DIR",
            DETECTION_MODEL, RECOGNITION_MODEL
        ),
    })
}

fn has_models(dir: &Path) -> bool {
    dir.join(DETECTION_MODEL).is_file() && dir.join(RECOGNITION_MODEL).is_file()
}

/// Verify an explicitly chosen directory, naming the first missing file.
fn check_models_dir(dir: &Path) -> Result<()> {
    for name in [DETECTION_MODEL, RECOGNITION_MODEL] {
        if !dir.join(name).is_file() {
            return Err(OcrError::ModelNotFound {
                path: dir.display().to_string(),
                message: format!("missing {}", name),
            });
        }
    }
    Ok(())
}
