//! Output formatting for CLI results.

use std::io::Write;

use textscan_protocol::Envelope;

use crate::cli::Format;

/// Output formatter.
pub struct Output {
    format: Format,
}

impl Output {
    /// Create a new output formatter.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Print an envelope to stdout and flush it.
    pub fn print_envelope(&self, envelope: &Envelope) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_envelope(&mut out, envelope)?;
        out.flush()?;
        Ok(())
    }

    /// Write an envelope in the configured format.
    ///
    /// In text mode a failure goes to stderr and nothing is written to `out`.
    pub fn write_envelope<W: Write>(&self, out: &mut W, envelope: &Envelope) -> anyhow::Result<()> {
        match self.format {
            Format::Json => {
                writeln!(out, "{}", envelope.to_json_line()?)?;
            }
            Format::Text => {
                if envelope.success {
                    for text in envelope.texts.iter().flatten() {
                        writeln!(out, "{}", text)?;
                    }
                } else if let Some(ref error) = envelope.error {
                    eprintln!("Error: {}", error);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: Format, envelope: &Envelope) -> String {
        let mut buf = Vec::new();
        Output::new(format).write_envelope(&mut buf, envelope).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_is_one_line() {
        let out = render(
            Format::Json,
            &Envelope::success(vec!["Hello".to_string(), "World".to_string()]),
        );
        assert_eq!(out, "{\"success\":true,\"texts\":[\"Hello\",\"World\"]}\n");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_json_failure() {
        let out = render(Format::Json, &Envelope::failure("bad record"));
        let parsed: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"success": false, "error": "bad record"})
        );
    }

    #[test]
    fn test_text_lines() {
        let out = render(
            Format::Text,
            &Envelope::success(vec!["first".to_string(), "second".to_string()]),
        );
        assert_eq!(out, "first\nsecond\n");
    }

    #[test]
    fn test_text_failure_writes_nothing_to_stdout() {
        assert_eq!(render(Format::Text, &Envelope::failure("boom")), "");
    }
}
