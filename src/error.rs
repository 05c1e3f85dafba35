//! Error taxonomy shared by every component.

use thiserror::Error;

/// Everything that can go wrong in a generation request. No variant is
/// retried anywhere; each one travels straight up to `main`.
#[derive(Debug, Error)]
pub enum Error {
    /// The composed alphabet has zero characters.
    #[error("Character set is empty.")]
    EmptyCharset,

    /// A random draw was requested with `min > max`. This is an internal
    /// logic error (a window or length computation bug), not user input.
    #[error("min cannot be greater than max.")]
    InvalidRange,

    /// The OS entropy source failed. Fatal for the current request.
    #[error("System random source unavailable: {0}")]
    RandomnessUnavailable(getrandom::Error),

    /// QR output was requested for an empty password string.
    #[error("The content for QR generation should not be empty.")]
    EmptyQrContent,

    /// The external QR encoder rejected the content (e.g. too long).
    #[error("QR encoding failed: {0}")]
    QrEncoding(#[from] qrcode::types::QrError),
}
