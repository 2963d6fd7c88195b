//! QR encoding on top of the `qirust` encoder.
//!
//! `qirust` builds the symbol into caller-provided buffers and hands back a
//! borrowing `QrCode`. [`encode`] copies the modules out into an owned
//! [`QrMatrix`] so the buffers can be dropped right away and the renderers
//! don't carry the encoder's lifetimes around.

use qirust::qrcode::{QrCode, QrCodeEcc, Version};

use crate::error::QrError;

/// Pixels per module in the exported image.
pub const BOX_SIZE: u32 = 2;
/// Quiet-zone width, in modules, around the symbol.
pub const BORDER: u32 = 2;

/// An encoded QR symbol, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    size: u32,
    modules: Vec<bool>,
    version: u8,
    ecc: QrCodeEcc,
    box_size: u32,
    border: u32,
}

impl QrMatrix {
    /// Side length in modules, without the border.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// True for a dark module. Coordinates outside the symbol (the border) are light.
    pub fn is_dark(&self, x: i64, y: i64) -> bool {
        let size = i64::from(self.size);
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return false;
        }
        self.modules[(y * size + x) as usize]
    }

    /// QR version, 1 to 40.
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn error_correction(&self) -> QrCodeEcc {
        self.ecc
    }

    pub fn box_size(&self) -> u32 {
        self.box_size
    }

    pub fn border(&self) -> u32 {
        self.border
    }
}

/// Encode `text` with medium error correction, letting the encoder pick the
/// smallest version that fits.
///
/// # Errors
/// Returns `QrError::Encoding` when the text exceeds the capacity of a
/// version 40 symbol at this level.
pub fn encode(text: &str) -> Result<QrMatrix, QrError> {
    let mut outbuffer = vec![0u8; Version::MAX.buffer_len()];
    let mut tempbuffer = vec![0u8; Version::MAX.buffer_len()];
    let qr = QrCode::encode_text(
        text,
        &mut tempbuffer,
        &mut outbuffer,
        QrCodeEcc::Medium,
        Version::MIN,
        Version::MAX,
        None,
        false,
    )
    .map_err(|e| QrError::Encoding(e.to_string()))?;

    let size = qr.size();
    let modules = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| qr.get_module(x, y))
        .collect();
    let matrix = QrMatrix {
        size: size as u32,
        modules,
        version: qr.version().value(),
        // Boosting is off, so the symbol carries exactly the requested level.
        ecc: QrCodeEcc::Medium,
        box_size: BOX_SIZE,
        border: BORDER,
    };
    log::debug!(
        "encoded {} bytes as version {} ({}x{} modules)",
        text.len(),
        matrix.version,
        matrix.size,
        matrix.size
    );
    Ok(matrix)
}
