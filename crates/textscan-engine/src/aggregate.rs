//! Flattening of engine result records into text lines.

use serde_json::Value;
use tracing::trace;

use crate::error::{OcrError, Result};

/// Record field holding the recognized lines.
pub const REC_TEXTS_KEY: &str = "rec_texts";

/// Concatenate the `rec_texts` of every record, in record order.
///
/// Records that are not JSON objects, or objects without `rec_texts`, are
/// skipped. An `Err` pulled from `records` aborts aggregation, as does a
/// `rec_texts` value that is not an array of strings.
pub fn collect_texts<I>(records: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = Result<Value>>,
{
    let mut texts = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let record = record?;

        let field = match record.as_object().and_then(|map| map.get(REC_TEXTS_KEY)) {
            Some(field) => field,
            None => {
                trace!("Record {} has no {}, skipping", index, REC_TEXTS_KEY);
                continue;
            }
        };

        let entries = field.as_array().ok_or_else(|| {
            OcrError::MalformedRecord(format!(
                "record {}: {} is not an array",
                index, REC_TEXTS_KEY
            ))
        })?;

        for (line, entry) in entries.iter().enumerate() {
            match entry {
                Value::String(text) => texts.push(text.clone()),
                other => {
                    return Err(OcrError::MalformedRecord(format!(
                        "record {}: {}[{}] is not a string: {}",
                        index, REC_TEXTS_KEY, line, other
                    )));
                }
            }
        }

        trace!("Record {} contributed {} lines", index, entries.len());
    }

    Ok(texts)
}
