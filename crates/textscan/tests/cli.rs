//! End-to-end checks of the textscan binary.

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

fn textscan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textscan"));
    cmd.env_remove("RUST_LOG").env_remove("TEXTSCAN_MODELS_DIR");
    cmd
}

#[test]
fn test_missing_models_print_failure_envelope_and_exit_one() {
    let models = TempDir::new().unwrap();

    let output = textscan()
        .arg("--models-dir")
        .arg(models.path())
        .arg("scan.png")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let envelope: Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(envelope["success"], Value::Bool(false));
    assert!(envelope.get("texts").is_none());
    assert!(envelope["error"]
        .as_str()
        .unwrap()
        .contains("text-detection.rten"));
}

#[test]
fn test_text_format_reports_engine_failure_once() {
    let models = TempDir::new().unwrap();

    let output = textscan()
        .args(["--format", "text", "--models-dir"])
        .arg(models.path())
        .arg("scan.png")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("model not found").count(), 1);
    assert!(stderr.starts_with("Error: "));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = textscan().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
