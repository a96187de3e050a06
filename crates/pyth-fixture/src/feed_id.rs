//! Feed identifier normalization.

use crate::error::FixtureError;

/// Id of a Pyth price feed. One feed produces one price series; protocols name
/// feeds by this 32-byte value, usually written as 64 hex characters with an
/// optional `0x` prefix.
pub type FeedId = [u8; 32];

/// Parse a human-readable hex feed id into its canonical 32 bytes.
///
/// An optional `0x` prefix is stripped and the remainder is hex-decoded, case
/// insensitively. Anything that does not decode to exactly 32 bytes is
/// rejected; the id is never truncated or padded, since a wrong-length id
/// would silently point the fixture at a different feed.
pub fn parse_feed_id(feed_id_hex: &str) -> Result<FeedId, FixtureError> {
    let cleaned = feed_id_hex.strip_prefix("0x").unwrap_or(feed_id_hex);
    let bytes = hex::decode(cleaned)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| FixtureError::FeedIdLength { len })
}
