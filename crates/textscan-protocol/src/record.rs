//! Result records produced by OCR engines.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Engine settings echoed back in every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../bindings/")]
pub struct ModelSettings {
    /// Document orientation classification was applied.
    pub use_doc_orientation_classify: bool,
    /// Document unwarping was applied.
    pub use_doc_unwarping: bool,
    /// Text line orientation detection was applied.
    pub use_textline_orientation: bool,
}

/// One unit of engine output: the recognized lines of one image or page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrRecord {
    /// Path of the image the record was produced from.
    pub input_path: String,

    /// Page number for multi-page inputs, `null` for single images.
    pub page_index: Option<u32>,

    /// Settings the engine ran with.
    pub model_settings: ModelSettings,

    /// Recognized text, one entry per line, in reading order.
    pub rec_texts: Vec<String>,

    /// `[x_min, y_min, x_max, y_max]` for each entry of `rec_texts`.
    pub rec_boxes: Vec<[i32; 4]>,
}

impl OcrRecord {
    /// Create an empty record for the given input.
    pub fn new(input_path: impl Into<String>, model_settings: ModelSettings) -> Self {
        Self {
            input_path: input_path.into(),
            page_index: None,
            model_settings,
            rec_texts: Vec::new(),
            rec_boxes: Vec::new(),
        }
    }

    /// Append a recognized line and its bounding box.
    pub fn push_line(&mut self, text: impl Into<String>, bbox: [i32; 4]) {
        self.rec_texts.push(text.into());
        self.rec_boxes.push(bbox);
    }

    /// Convert into the untyped JSON shape engines hand to aggregation.
    pub fn into_value(self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
