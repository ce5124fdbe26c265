//! Engine construction options.

use serde::{Deserialize, Serialize};
use textscan_protocol::ModelSettings;

/// Optional pipeline stages an engine may be asked to run.
///
/// The default disables every stage, which is what the CLI always uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Classify and correct whole-document rotation before detection.
    pub use_doc_orientation_classify: bool,
    /// Flatten curved or skewed document photos before detection.
    pub use_doc_unwarping: bool,
    /// Classify and correct per-line rotation before recognition.
    pub use_textline_orientation: bool,
}

impl EngineOptions {
    /// Names of the stages that are switched on.
    pub fn enabled_stages(&self) -> Vec<&'static str> {
        let mut stages = Vec::new();
        if self.use_doc_orientation_classify {
            stages.push("use_doc_orientation_classify");
        }
        if self.use_doc_unwarping {
            stages.push("use_doc_unwarping");
        }
        if self.use_textline_orientation {
            stages.push("use_textline_orientation");
        }
        stages
    }
}

impl From<EngineOptions> for ModelSettings {
    fn from(options: EngineOptions) -> Self {
        ModelSettings {
            use_doc_orientation_classify: options.use_doc_orientation_classify,
            use_doc_unwarping: options.use_doc_unwarping,
            use_textline_orientation: options.use_textline_orientation,
        }
    }
}
