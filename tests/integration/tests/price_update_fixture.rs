//! Seeds synthetic price update accounts into a simulated ledger and reads
//! them back through the banks client.

use pyth_fixture::{
    decode_price_update, parse_feed_id, price_feed_account_address, PriceUpdateSnapshot,
    FIXTURE_LAMPORTS, PYTH_RECEIVER_PROGRAM_ID,
};
use solana_program_test::{tokio, ProgramTest};
use solana_sdk::{
    account::AccountSharedData,
    pubkey::Pubkey,
    signer::Signer,
};

/// USDC/USD on Pyth mainnet.
const USDC_USD_FEED_ID: &str = "0xeaa020c61cc479712813461ce153894a96a6c00b21ed0cfc2798d1f9a9e9c94a";

fn usdc_snapshot(authority: Pubkey) -> PriceUpdateSnapshot {
    PriceUpdateSnapshot {
        authority,
        feed_id: parse_feed_id(USDC_USD_FEED_ID).expect("valid feed id"),
        price: 12_000_000_000, // $120.00 at exponent -8
        conf: 1_000_000,
        exponent: -8,
        publish_time: 1_700_000_000,
        posted_slot: 0,
    }
}

/// Seed the fixture before the ledger starts, the way a test binary sets up
/// its world, then fetch it back and check every field.
#[tokio::test]
async fn seeds_price_feed_before_startup() {
    let authority = Pubkey::new_unique();
    let snapshot = usdc_snapshot(authority);
    let address = price_feed_account_address(0, &snapshot.feed_id);

    let mut program_test = ProgramTest::default();
    program_test.add_account(address, snapshot.to_account());

    let (mut banks_client, _payer, _recent_blockhash) = program_test.start().await;

    let account = banks_client
        .get_account(address)
        .await
        .expect("banks client error")
        .expect("fixture account missing");

    assert_eq!(account.owner, PYTH_RECEIVER_PROGRAM_ID);
    assert_eq!(account.lamports, FIXTURE_LAMPORTS);
    assert!(!account.executable);

    let decoded = decode_price_update(&account.data).expect("decodable fixture");
    assert_eq!(decoded.authority, authority);
    assert_eq!(decoded.feed_id, snapshot.feed_id);
    assert_eq!(decoded.price, 12_000_000_000);
    assert_eq!(decoded.conf, 1_000_000);
    assert_eq!(decoded.exponent, -8);
    assert_eq!(decoded.publish_time, 1_700_000_000);
    assert_eq!(decoded.prev_publish_time, 1_699_999_999);
    assert_eq!(decoded.posted_slot, 0);
}

/// Register the fixture on an already-running ledger, the path a scenario uses
/// when it needs to inject or replace a price mid-test.
#[tokio::test]
async fn registers_price_feed_on_live_ledger() {
    let mut context = ProgramTest::default().start_with_context().await;

    let authority = context.payer.pubkey();
    let snapshot = usdc_snapshot(authority);
    let address = price_feed_account_address(0, &snapshot.feed_id);

    context.set_account(&address, &AccountSharedData::from(snapshot.to_account()));

    let account = context
        .banks_client
        .get_account(address)
        .await
        .expect("banks client error")
        .expect("fixture account missing");

    let decoded = decode_price_update(&account.data).expect("decodable fixture");
    assert_eq!(decoded.authority, authority);
    assert_eq!(decoded.price, snapshot.price);
    assert_eq!(decoded.ema_price, snapshot.price);
    assert_eq!(decoded.ema_conf, snapshot.conf);
}

/// Overwrite a seeded feed with a new snapshot and confirm readers observe the
/// fresh values, including a price crash below zero.
#[tokio::test]
async fn replaces_price_feed_with_new_snapshot() {
    let mut context = ProgramTest::default().start_with_context().await;

    let authority = context.payer.pubkey();
    let snapshot = usdc_snapshot(authority);
    let address = price_feed_account_address(0, &snapshot.feed_id);

    context.set_account(&address, &AccountSharedData::from(snapshot.to_account()));

    let crashed = PriceUpdateSnapshot {
        price: -5,
        publish_time: snapshot.publish_time + 60,
        posted_slot: 42,
        ..snapshot
    };
    context.set_account(&address, &AccountSharedData::from(crashed.to_account()));

    let account = context
        .banks_client
        .get_account(address)
        .await
        .expect("banks client error")
        .expect("fixture account missing");

    let decoded = decode_price_update(&account.data).expect("decodable fixture");
    assert_eq!(decoded.price, -5);
    assert_eq!(decoded.publish_time, snapshot.publish_time + 60);
    assert_eq!(decoded.prev_publish_time, snapshot.publish_time + 59);
    assert_eq!(decoded.posted_slot, 42);
}
