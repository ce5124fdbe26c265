//! OCR engine abstraction and the ocrs-backed implementation.

use std::path::Path;

use image::RgbImage;
use ocrs::{ImageSource, OcrEngineParams, TextItem};
use rten::Model;
use serde_json::Value;
use textscan_protocol::{ModelSettings, OcrRecord};
use tracing::{debug, trace};

use crate::error::{OcrError, Result};
use crate::models::{DETECTION_MODEL, RECOGNITION_MODEL};
use crate::options::EngineOptions;

/// Lazily produced result records.
pub type Records<'a> = Box<dyn Iterator<Item = Result<Value>> + 'a>;

/// Trait that OCR engines implement.
pub trait OcrEngine {
    /// Returns the engine identifier (e.g., "ocrs")
    fn name(&self) -> &'static str;

    /// Start recognition on an image file.
    ///
    /// Errors returned here mean the input could not be handed to the engine
    /// at all. Errors met while producing records are yielded by the
    /// iterator instead.
    fn predict(&self, path: &Path) -> Result<Records<'_>>;
}

/// OCR engine backed by the ocrs library.
pub struct OcrsEngine {
    engine: ocrs::OcrEngine,
    settings: ModelSettings,
}

impl OcrsEngine {
    /// Create a new engine by loading models from the given directory.
    pub fn new(models_dir: &Path, options: EngineOptions) -> Result<Self> {
        let enabled = options.enabled_stages();
        if !enabled.is_empty() {
            return Err(OcrError::Unsupported(format!(
                "{} (no orientation or unwarping models are available)",
                enabled.join(", ")
            )));
        }

        let detection_path = models_dir.join(DETECTION_MODEL);
        let recognition_path = models_dir.join(RECOGNITION_MODEL);

        debug!("Loading OCR detection model from {:?}", detection_path);
        let detection_model = Model::load_file(&detection_path).map_err(|e| {
            OcrError::ModelLoad(format!("{}: {}", detection_path.display(), e))
        })?;

        debug!("Loading OCR recognition model from {:?}", recognition_path);
        let recognition_model = Model::load_file(&recognition_path).map_err(|e| {
            OcrError::ModelLoad(format!("{}: {}", recognition_path.display(), e))
        })?;

        let engine = ocrs::OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|e| OcrError::ModelLoad(format!("failed to create OCR engine: {}", e)))?;

        debug!("OCR engine initialized successfully");
        Ok(Self {
            engine,
            settings: options.into(),
        })
    }

    /// Run detection, line grouping and recognition on a decoded image.
    fn recognize(&self, input_path: &str, img: &RgbImage) -> Result<OcrRecord> {
        let (width, height) = img.dimensions();

        let img_source = ImageSource::from_bytes(img.as_raw(), (width, height))
            .map_err(|e| OcrError::Recognition(format!("invalid image source: {}", e)))?;

        let ocr_input = self
            .engine
            .prepare_input(img_source)
            .map_err(|e| OcrError::Recognition(format!("failed to prepare input: {}", e)))?;

        let word_rects = self
            .engine
            .detect_words(&ocr_input)
            .map_err(|e| OcrError::Recognition(format!("failed to detect words: {}", e)))?;

        trace!("Detected {} word regions", word_rects.len());

        let line_rects = self.engine.find_text_lines(&ocr_input, &word_rects);

        let line_texts = self
            .engine
            .recognize_text(&ocr_input, &line_rects)
            .map_err(|e| OcrError::Recognition(format!("failed to recognize text: {}", e)))?;

        let mut record = OcrRecord::new(input_path, self.settings);

        for line in line_texts.iter().flatten() {
            let text = line.to_string();
            if text.trim().is_empty() {
                continue;
            }

            let bbox = line_bounds(line.words().map(|word| {
                let rect = word.bounding_rect();
                (
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                )
            }));

            if let Some(bbox) = bbox {
                record.push_line(text, bbox);
            }
        }

        debug!("Recognized {} text lines", record.rec_texts.len());
        Ok(record)
    }
}

impl OcrEngine for OcrsEngine {
    fn name(&self) -> &'static str {
        "ocrs"
    }

    fn predict(&self, path: &Path) -> Result<Records<'_>> {
        let img = load_rgb(path)?;
        let input_path = path.display().to_string();

        Ok(Box::new(std::iter::once_with(move || {
            self.recognize(&input_path, &img)?
                .into_value()
                .map_err(|e| OcrError::MalformedRecord(e.to_string()))
        })))
    }
}

/// Read and decode an image file into RGB8.
pub(crate) fn load_rgb(path: &Path) -> Result<RgbImage> {
    if !path.is_file() {
        return Err(OcrError::ImageNotFound(path.to_path_buf()));
    }

    let img = image::open(path)?.into_rgb8();
    debug!("Image loaded: {}x{}", img.width(), img.height());
    Ok(img)
}

/// Bounding box `[x_min, y_min, x_max, y_max]` enclosing the given
/// `(left, top, width, height)` rectangles, or `None` when there are none.
///
/// Edges are summed before truncating to whole pixels.
fn line_bounds(rects: impl Iterator<Item = (f32, f32, f32, f32)>) -> Option<[i32; 4]> {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    let mut any = false;

    for (left, top, width, height) in rects {
        any = true;
        min_x = min_x.min(left);
        min_y = min_y.min(top);
        max_x = max_x.max(left + width);
        max_y = max_y.max(top + height);
    }

    any.then_some([
        min_x as i32,
        min_y as i32,
        max_x as i32,
        max_y as i32,
    ])
}
