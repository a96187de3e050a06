//! Anchor-style account discriminators.

use solana_sdk::hash::hashv;

/// Account type name of the Pyth receiver's price update account.
pub const PRICE_UPDATE_V2: &str = "PriceUpdateV2";

/// Width of the discriminator prefix.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Derive the discriminator for an account type name.
///
/// Anchor-generated programs prefix every account's data with the first 8
/// bytes of `sha256("account:<name>")` so a generic deserializer can detect
/// the account type before interpreting the rest. The receiver program checks
/// this tag, so the fixture must reproduce it exactly.
///
/// Pure function of the name; the encoder computes it once per snapshot and
/// passes the bytes down, so tests can substitute their own tag without
/// touching the field-writing path.
pub fn account_discriminator(account_name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = hashv(&[b"account:", account_name.as_bytes()]);
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest.to_bytes()[..DISCRIMINATOR_LEN]);
    discriminator
}
