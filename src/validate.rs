//! URL acceptance rules for the clipboard and prompt paths.
//!
//! A positional command-line argument never goes through here: it is handed
//! to the encoder verbatim, so `ftp://host` on the command line still gets a
//! QR code while the same text in the clipboard is ignored.

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Returns true when the trimmed string starts with `http://` or `https://`.
///
/// The scheme check is case-sensitive.
pub fn is_url(s: &str) -> bool {
    let s = s.trim();
    SCHEMES.iter().any(|scheme| s.starts_with(scheme))
}

/// Return the trimmed candidate if it is an acceptable URL.
pub fn accept(s: &str) -> Option<String> {
    is_url(s).then(|| s.trim().to_owned())
}
