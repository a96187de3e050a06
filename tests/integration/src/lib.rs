//! Integration tests for pyth-fixture.
//!
//! These tests drive a real `solana-program-test` ledger: they seed synthetic
//! `PriceUpdateV2` accounts into it and read the bytes back through the banks
//! client, proving the fixture survives the ledger round trip intact.

pub use pyth_fixture;
