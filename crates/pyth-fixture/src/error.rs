//! Fixture construction errors.

use thiserror::Error;

/// Ways building or reading back a fixture can fail.
///
/// All of these are input mistakes, not transient conditions: the encoder is
/// pure, so a failed call fails identically on retry. The only remedy is
/// correcting the input. Layout-level mistakes (writing a value with the wrong
/// width or out of field order) are programming errors and panic instead, so a
/// miswritten fixture can never corrupt a test silently.
#[derive(Debug, Error, PartialEq)]
pub enum FixtureError {
    /// The feed id hex decoded cleanly but not to 32 bytes.
    #[error("feed id must decode to 32 bytes, got {len} bytes instead")]
    FeedIdLength { len: usize },

    /// The feed id is not valid hexadecimal (bad digit or odd digit count).
    #[error("feed id is not valid hex: {0}")]
    FeedIdNotHex(#[from] hex::FromHexError),

    /// The buffer is shorter than the fixed `PriceUpdateV2` layout.
    #[error("price update data is {0} bytes, shorter than the 133-byte layout")]
    DataTooShort(usize),

    /// The verification tag is not `Full`. A partial level carries an extra
    /// signature-count byte, which shifts every field after it.
    #[error("unsupported verification level tag {0}; fixtures are always fully verified")]
    UnsupportedVerificationLevel(u8),
}
