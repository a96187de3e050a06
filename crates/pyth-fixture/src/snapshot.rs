//! Building and reading back `PriceUpdateV2` fixture accounts.

use log::debug;
use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::{
    discriminator::{account_discriminator, PRICE_UPDATE_V2},
    error::FixtureError,
    feed_id::FeedId,
    layout::{self, FieldWriter, PRICE_UPDATE_DATA_LEN, VERIFICATION_LEVEL_FULL},
    FIXTURE_LAMPORTS, PYTH_RECEIVER_PROGRAM_ID,
};

/// Inputs for one synthetic price update account.
///
/// A snapshot is constructed once per test scenario and encoded on demand;
/// encoding is a pure function of these fields. The price feed message fields
/// the receiver program stores but a scenario author never cares about are
/// derived: `prev_publish_time` is `publish_time - 1`, and the EMA price and
/// confidence are set equal to the spot values. The fixture deliberately does
/// not model an independent moving average; see the crate tests, which pin
/// that choice down so it cannot drift silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceUpdateSnapshot {
    /// Write authority recorded in the account. Opaque to consumers.
    pub authority: Pubkey,
    /// Normalized feed id, from [`crate::parse_feed_id`].
    pub feed_id: FeedId,
    /// Spot price at `exponent` scale. Negative values are valid and useful
    /// for error-path scenarios.
    pub price: i64,
    /// Confidence interval around `price`, same scale.
    pub conf: u64,
    /// Power-of-ten scale of `price` and `conf`, e.g. -8.
    pub exponent: i32,
    /// Publish timestamp in Unix seconds.
    pub publish_time: i64,
    /// Ledger slot the update was posted at. Zero means "posted at genesis".
    pub posted_slot: u64,
}

impl PriceUpdateSnapshot {
    /// Encode the account data exactly as the receiver program lays it out.
    ///
    /// Walks the layout table in [`crate::layout`] over a zero-initialized
    /// buffer. Always 133 bytes; the verification tag is always `Full`.
    pub fn encode(&self) -> [u8; PRICE_UPDATE_DATA_LEN] {
        // Derived once per snapshot, not per field.
        let discriminator = account_discriminator(PRICE_UPDATE_V2);

        let mut data = [0u8; PRICE_UPDATE_DATA_LEN];
        let mut writer = FieldWriter::new(&mut data);
        writer.put_bytes("discriminator", &discriminator);
        writer.put_bytes("authority", self.authority.as_ref());
        writer.put_u8("verification_level", VERIFICATION_LEVEL_FULL);
        writer.put_bytes("feed_id", &self.feed_id);
        writer.put_i64("price", self.price);
        writer.put_u64("conf", self.conf);
        writer.put_i32("exponent", self.exponent);
        writer.put_i64("publish_time", self.publish_time);
        writer.put_i64("prev_publish_time", self.publish_time - 1);
        writer.put_i64("ema_price", self.price);
        writer.put_u64("ema_conf", self.conf);
        writer.put_u64("posted_slot", self.posted_slot);
        writer.finish();
        data
    }

    /// Wrap the encoded bytes in an account record owned by the receiver
    /// program, ready to hand to the test ledger.
    ///
    /// The caller registers it, typically at
    /// [`crate::price_feed_account_address`], via `ProgramTest::add_account`
    /// or `ProgramTestContext::set_account`.
    pub fn to_account(&self) -> Account {
        debug!(
            "price update fixture: feed {} price {}e{} conf {} published {}",
            hex::encode(self.feed_id),
            self.price,
            self.exponent,
            self.conf,
            self.publish_time,
        );
        Account {
            lamports: FIXTURE_LAMPORTS,
            data: self.encode().to_vec(),
            owner: PYTH_RECEIVER_PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        }
    }
}

/// Every field read back from an encoded account, including the derived ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedPriceUpdate {
    pub discriminator: [u8; 8],
    pub authority: Pubkey,
    pub verification_level: u8,
    pub feed_id: FeedId,
    pub price: i64,
    pub conf: u64,
    pub exponent: i32,
    pub publish_time: i64,
    pub prev_publish_time: i64,
    pub ema_price: i64,
    pub ema_conf: u64,
    pub posted_slot: u64,
}

/// Read a price update buffer back through the layout table.
///
/// The inverse of [`PriceUpdateSnapshot::encode`], for asserting that a seeded
/// account holds what a scenario put there. Only the fully verified layout is
/// supported; real accounts carry a trailing pad byte, which is ignored.
pub fn decode_price_update(data: &[u8]) -> Result<DecodedPriceUpdate, FixtureError> {
    if data.len() < PRICE_UPDATE_DATA_LEN {
        return Err(FixtureError::DataTooShort(data.len()));
    }

    let verification_level = layout::read_u8(data, "verification_level");
    if verification_level != VERIFICATION_LEVEL_FULL {
        return Err(FixtureError::UnsupportedVerificationLevel(verification_level));
    }

    Ok(DecodedPriceUpdate {
        discriminator: layout::read_array(data, "discriminator"),
        authority: Pubkey::new_from_array(layout::read_array(data, "authority")),
        verification_level,
        feed_id: layout::read_array(data, "feed_id"),
        price: layout::read_i64(data, "price"),
        conf: layout::read_u64(data, "conf"),
        exponent: layout::read_i32(data, "exponent"),
        publish_time: layout::read_i64(data, "publish_time"),
        prev_publish_time: layout::read_i64(data, "prev_publish_time"),
        ema_price: layout::read_i64(data, "ema_price"),
        ema_conf: layout::read_u64(data, "ema_conf"),
        posted_slot: layout::read_u64(data, "posted_slot"),
    })
}
