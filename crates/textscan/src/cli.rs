//! CLI definition using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// Recognize the text lines of an image and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "textscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the image file
    pub image_path: PathBuf,

    /// Directory containing text-detection.rten and text-recognition.rten
    #[arg(long, env = "TEXTSCAN_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line of JSON: {"success": ..., "texts" | "error": ...}
    Json,
    /// One recognized line per output line
    Text,
}

impl Cli {
    /// Image path with a leading `~` expanded.
    pub fn image_path(&self) -> PathBuf {
        expand(&self.image_path)
    }

    /// Models directory with a leading `~` expanded, if one was given.
    pub fn models_dir(&self) -> Option<PathBuf> {
        self.models_dir.as_deref().map(expand)
    }
}

/// Expand a leading `~`. Paths that are not valid UTF-8 are kept verbatim.
fn expand(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_parse_from(["textscan", "scan.png"]).unwrap();
        assert_eq!(cli.image_path, PathBuf::from("scan.png"));
        assert_eq!(cli.format, Format::Json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_image_path_is_usage_error() {
        let err = Cli::try_parse_from(["textscan"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["textscan", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "textscan",
            "--models-dir",
            "/opt/models",
            "--format",
            "text",
            "-v",
            "scan.png",
        ])
        .unwrap();
        assert_eq!(cli.models_dir(), Some(PathBuf::from("/opt/models")));
        assert_eq!(cli.format, Format::Text);
        assert!(cli.verbose);
    }

    #[test]
    fn test_plain_paths_are_untouched() {
        let cli = Cli::try_parse_from(["textscan", "dir/scan image.png"]).unwrap();
        assert_eq!(cli.image_path(), PathBuf::from("dir/scan image.png"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_image_path_is_accepted() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"scan\xff.png");
        let cli = Cli::try_parse_from([OsStr::new("textscan"), raw]).unwrap();
        assert_eq!(cli.image_path(), PathBuf::from(raw));
    }
}
