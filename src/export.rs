//! Raster export of a [`QrMatrix`].

use std::path::Path;

use image::{GrayImage, Luma};

use crate::encode::QrMatrix;
use crate::error::QrError;

const BLACK: Luma<u8> = Luma([0u8]);
const WHITE: Luma<u8> = Luma([255u8]);

/// Draw `qr` as black modules on white, `box_size` pixels per module with a
/// `border`-module quiet zone on every side.
pub fn to_image(qr: &QrMatrix) -> GrayImage {
    let scale = qr.box_size();
    let border = qr.border();
    let side = (qr.size() + 2 * border) * scale;

    GrayImage::from_fn(side, side, |x, y| {
        let module_x = i64::from(x / scale) - i64::from(border);
        let module_y = i64::from(y / scale) - i64::from(border);
        if qr.is_dark(module_x, module_y) {
            BLACK
        } else {
            WHITE
        }
    })
}

/// Write `qr` to `path`, replacing any existing file.
///
/// The image format follows the file extension (`.png` unless the caller
/// asks otherwise).
///
/// # Errors
/// Returns `QrError::Export` when the format is unknown or the file cannot be
/// written.
pub fn save(qr: &QrMatrix, path: &Path) -> Result<(), QrError> {
    let img = to_image(qr);
    log::debug!("writing {}x{} image to {}", img.width(), img.height(), path.display());
    img.save(path).map_err(|source| QrError::Export {
        path: path.to_path_buf(),
        source,
    })
}
