//! Boundary to the external QR symbol encoder.

use qrcode::{Color, EcLevel, QrCode};

use crate::error::Error;

/// Encode `content` into a square module matrix (true = dark module) at the
/// highest error-correction level. The symbol encoding itself (error
/// correction, module placement) is entirely the `qrcode` crate's business;
/// this layer only rejects empty content and reshapes the result.
pub fn encode(content: &str) -> Result<Vec<Vec<bool>>, Error> {
    if content.is_empty() {
        return Err(Error::EmptyQrContent);
    }

    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::H)?;
    let width = code.width();

    Ok(code
        .to_colors()
        .chunks(width)
        .map(|row| row.iter().map(|module| *module == Color::Dark).collect())
        .collect())
}
