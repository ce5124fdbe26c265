//! One invocation: predict on an image and fold the records into an envelope.

use std::path::Path;

use textscan_engine::{collect_texts, OcrEngine, Records, Result};
use textscan_protocol::Envelope;
use tracing::{debug, warn};

/// Run `engine` on `path` and build the envelope to print.
///
/// Failing to start prediction is returned as an error. Anything that goes
/// wrong while walking the records becomes a failure envelope.
pub fn scan_with<E: OcrEngine + ?Sized>(engine: &E, path: &Path) -> Result<Envelope> {
    debug!("Running {} on {:?}", engine.name(), path);
    let records = engine.predict(path)?;
    Ok(envelope_from(records))
}

/// Aggregate records into a success or failure envelope.
pub fn envelope_from(records: Records<'_>) -> Envelope {
    match collect_texts(records) {
        Ok(texts) => {
            debug!("Collected {} text lines", texts.len());
            Envelope::success(texts)
        }
        Err(e) => {
            warn!("Aggregation failed: {}", e);
            Envelope::failure(e.to_string())
        }
    }
}
