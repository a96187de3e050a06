//! Synthetic Pyth `PriceUpdateV2` accounts for simulated-ledger tests.
//!
//! Programs that read Pyth pull oracles expect a `PriceUpdateV2` account owned
//! by the Pyth receiver program. Producing one for a test normally means
//! running the whole receiver update pipeline (Wormhole message, guardian
//! signatures, posting transaction). This crate skips all of that: it encodes
//! the account's raw storage bytes directly, byte for byte as the receiver
//! program lays them out, so a `solana-program-test` ledger can be seeded with
//! whatever price a scenario needs.
//!
//! ## Usage
//!
//! ```no_run
//! use pyth_fixture::{parse_feed_id, price_feed_account_address, PriceUpdateSnapshot};
//! use solana_program_test::ProgramTest;
//! use solana_sdk::pubkey::Pubkey;
//!
//! let feed_id = parse_feed_id(
//!     "0xeaa020c61cc479712813461ce153894a96a6c00b21ed0cfc2798d1f9a9e9c94a",
//! ).unwrap();
//! let snapshot = PriceUpdateSnapshot {
//!     authority: Pubkey::new_unique(),
//!     feed_id,
//!     price: 12_000_000_000, // $120.00 at exponent -8
//!     conf: 1_000_000,
//!     exponent: -8,
//!     publish_time: 1_700_000_000,
//!     posted_slot: 0,
//! };
//!
//! let mut program_test = ProgramTest::default();
//! program_test.add_account(
//!     price_feed_account_address(0, &feed_id),
//!     snapshot.to_account(),
//! );
//! ```
//!
//! The encoder is pure: identical inputs produce identical bytes, and there is
//! no shared state, so independent test scenarios can build fixtures
//! concurrently.

pub mod discriminator;
pub mod error;
pub mod feed_id;
pub mod layout;
pub mod snapshot;

pub use error::FixtureError;
pub use feed_id::{parse_feed_id, FeedId};
pub use snapshot::{decode_price_update, DecodedPriceUpdate, PriceUpdateSnapshot};

use solana_sdk::{pubkey, pubkey::Pubkey};

/// The Pyth receiver program, which owns `PriceUpdateV2` accounts on mainnet.
/// Fixture accounts carry this owner so the program under test accepts them.
pub const PYTH_RECEIVER_PROGRAM_ID: Pubkey = pubkey!("rec5EKMGg6MxZYaMdyBfgwp4d5rB9T1VQH5pJv5LtFJ");

/// The Pyth push oracle program. Price feed account addresses are PDAs of this
/// program, derived from a shard id and the feed id.
pub const PYTH_PUSH_ORACLE_PROGRAM_ID: Pubkey =
    pubkey!("pythWSnswVUd12oZpeFP8e9CVaEqJg25g1Vtc2biRsT");

/// Nominal funding for fixture accounts. Keeps them rent exempt on the test
/// ledger; the value itself carries no meaning for the oracle reader.
pub const FIXTURE_LAMPORTS: u64 = 1_000_000;

/// Derive the canonical price feed account address for a feed on a shard.
///
/// This matches `getPriceFeedAccountAddress` in the Pyth receiver client SDK:
/// a PDA of the push oracle program seeded with the little-endian shard id and
/// the 32-byte feed id. Shard 0 is what most protocols read.
pub fn price_feed_account_address(shard: u16, feed_id: &FeedId) -> Pubkey {
    Pubkey::find_program_address(
        &[&shard.to_le_bytes(), feed_id],
        &PYTH_PUSH_ORACLE_PROGRAM_ID,
    )
    .0
}
