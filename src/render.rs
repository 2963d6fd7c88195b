//! Terminal rendering of a [`QrMatrix`].
//!
//! Two module rows share one text line through half-block characters. The
//! output is inverted: light modules are drawn with block glyphs and dark
//! modules are left blank, so on a dark terminal the symbol reads as dark
//! modules on a light field. The inversion is fixed.

use crate::encode::QrMatrix;

const BACKGROUND_BLACK: &str = "\x1b[48;5;232m";
const FOREGROUND_WHITE: &str = "\x1b[38;5;255m";
const RESET: &str = "\x1b[0m";

/// Glyph for a (top, bottom) pair of modules, indexed by `top | bottom << 1`
/// where a set bit means dark.
const GLYPHS: [char; 4] = ['█', '▄', '▀', ' '];

/// Render `qr`, border included, as inverted half-block text.
///
/// With `color` set every line is painted white on black with ANSI escapes,
/// which keeps the code legible on light terminal themes too. The last line
/// of an odd-height symbol keeps the terminal background under its blank
/// lower half.
pub fn to_terminal(qr: &QrMatrix, color: bool) -> String {
    let border = i64::from(qr.border());
    let size = i64::from(qr.size());
    let end = size + border;

    // Past the bottom border there is no module row; count it as dark so the
    // lower half of the last line stays empty.
    let dark = |x: i64, y: i64| y >= end || qr.is_dark(x, y);

    let mut out = String::new();
    for y in (-border..end).step_by(2) {
        if color {
            if y < end - 1 {
                out.push_str(BACKGROUND_BLACK);
            }
            out.push_str(FOREGROUND_WHITE);
        }
        for x in -border..end {
            let index = usize::from(dark(x, y)) | (usize::from(dark(x, y + 1)) << 1);
            out.push(GLYPHS[index]);
        }
        if color {
            out.push_str(RESET);
        }
        out.push('\n');
    }
    out
}
