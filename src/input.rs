//! Resolving the text to encode.
//!
//! The command line is turned into a short ordered plan of
//! [`InputSource`]s; [`resolve`] tries them in turn and stops at the first
//! one that yields a URL. With no flags the plan is clipboard, then prompt.

use std::io::{BufRead, ErrorKind, Write};

use crate::clipboard::ClipboardSource;
use crate::error::{QrError, Unavailable};
use crate::validate;

const PROMPT: &str = "Enter URL: ";
const RETRY_HINT: &str = "Please enter a valid URL (starting with http:// or https://)";

/// Where the URL comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Used verbatim, without the scheme check.
    Argument(String),
    Clipboard,
    InteractivePrompt,
}

/// Build the ordered list of sources for the given command-line choices.
///
/// An explicit argument wins over `--clipboard`, which wins over `--input`.
/// An empty argument counts as absent.
pub fn plan(url: Option<&str>, clipboard: bool, input: bool) -> Vec<InputSource> {
    match url.filter(|u| !u.is_empty()) {
        Some(u) => vec![InputSource::Argument(u.to_owned())],
        None if clipboard => vec![InputSource::Clipboard],
        None if input => vec![InputSource::InteractivePrompt],
        None => vec![InputSource::Clipboard, InputSource::InteractivePrompt],
    }
}

/// Take a URL from the clipboard.
///
/// Platform failures are logged and reported only as
/// `Unavailable::ClipboardInaccessible`.
pub fn url_from_clipboard(clipboard: &mut dyn ClipboardSource) -> Result<String, Unavailable> {
    let text = clipboard.read_text().map_err(|e| {
        log::debug!("ignoring clipboard failure: {}", e);
        Unavailable::ClipboardInaccessible
    })?;
    validate::accept(&text).ok_or(Unavailable::ClipboardNotUrl)
}

/// Prompt on `writer` until a line read from `reader` is a valid URL.
///
/// There is no retry limit. Each rejected entry consumes exactly one line,
/// including lines that are not valid UTF-8.
///
/// # Errors
/// `Unavailable::NoInput` when `reader` reaches end of input, `QrError::Io`
/// when reading or writing fails.
pub fn url_from_prompt<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<String, QrError> {
    let mut line = String::new();
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                writeln!(writer)?;
                return Err(Unavailable::NoInput.into());
            }
            Ok(_) => {
                if let Some(url) = validate::accept(&line) {
                    return Ok(url);
                }
                log::debug!("rejected prompt entry {:?}", line.trim());
            }
            // the undecodable bytes are already consumed up to the newline
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log::debug!("rejected prompt entry that is not UTF-8");
            }
            Err(e) => return Err(e.into()),
        }
        writeln!(writer, "{}", RETRY_HINT)?;
    }
}

/// Walk `plan` in order and return the first URL obtained.
///
/// When every source comes up empty the error names the reason of the last
/// one tried.
pub fn resolve<R: BufRead, W: Write>(
    plan: &[InputSource],
    clipboard: &mut dyn ClipboardSource,
    mut reader: R,
    mut writer: W,
) -> Result<String, QrError> {
    let mut last = Unavailable::NoInput;
    for source in plan {
        log::debug!("trying input source {:?}", source);
        let attempt = match source {
            InputSource::Argument(url) => Ok(url.clone()),
            InputSource::Clipboard => url_from_clipboard(clipboard).map_err(QrError::from),
            InputSource::InteractivePrompt => url_from_prompt(&mut reader, &mut writer),
        };
        match attempt {
            Ok(url) => return Ok(url),
            Err(QrError::Unavailable(reason)) => last = reason,
            Err(e) => return Err(e),
        }
    }
    Err(last.into())
}
