//! Error types for a single qrclip run.
//!
//! `Unavailable` is the graceful "nothing to encode" outcome and exits 0.
//! Everything in `QrError` other than `Unavailable` ends the process with
//! status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Why no URL could be obtained.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    #[error("Clipboard is not accessible")]
    ClipboardInaccessible,
    #[error("No valid URL found in clipboard")]
    ClipboardNotUrl,
    #[error("No URL provided")]
    NoInput,
}

/// Platform failure while talking to the system clipboard.
#[derive(Error, Debug)]
#[error("clipboard {stage}: {message}")]
pub struct ClipboardError {
    pub stage: &'static str,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum QrError {
    #[error(transparent)]
    Unavailable(#[from] Unavailable),
    #[error("{0}")]
    Encoding(String),
    #[error("failed to save image to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QrError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            QrError::Unavailable(_) => 0,
            _ => 1,
        }
    }
}
