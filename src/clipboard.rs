use crate::error::ClipboardError;

/// Anything that can hand back the current clipboard text.
///
/// The CLI uses [`SystemClipboard`]; tests plug in fixed strings or failures.
pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// The system clipboard, reached through the `arboard` crate.
///
/// On some platforms or in headless CI environments clipboard initialization
/// fails; callers treat any error as "no URL in the clipboard".
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        read_from_clipboard()
    }
}

/// Read the text currently held by the system clipboard.
///
/// A clipboard holding no text (empty, or an image) reads as an empty string.
pub fn read_from_clipboard() -> Result<String, ClipboardError> {
    let mut ctx = arboard::Clipboard::new().map_err(|e| ClipboardError {
        stage: "init",
        message: e.to_string(),
    })?;
    text_or_empty(ctx.get_text())
}

fn text_or_empty(read: Result<String, arboard::Error>) -> Result<String, ClipboardError> {
    match read {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e) => Err(ClipboardError {
            stage: "read",
            message: e.to_string(),
        }),
    }
}
