//! Consumer round trips against a local relay.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::time::Duration;

use market_storage::{QuoteStorageService, StorageConfig};
use quotebus::{BusProducer, MARKET_QUOTES_TOPIC, MarketQuote, Relay};

async fn start_relay() -> String {
    let relay = Relay::bind("127.0.0.1:0").await.expect("bind relay");
    let addr = relay.local_addr().expect("relay addr");
    tokio::spawn(relay.run());
    addr.to_string()
}

fn config_for(endpoint: &str) -> StorageConfig {
    StorageConfig {
        bus_endpoint: endpoint.to_string(),
        consumer_group: "market-quote-storage-group".to_string(),
    }
}

async fn poll_one(service: &mut QuoteStorageService) -> MarketQuote {
    tokio::time::timeout(Duration::from_secs(5), service.poll_next())
        .await
        .expect("record before timeout")
        .expect("bus error")
        .expect("open connection")
}

#[tokio::test]
async fn consumes_published_record() {
    let endpoint = start_relay().await;

    let mut service = QuoteStorageService::connect(&config_for(&endpoint))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    let quote = MarketQuote {
        symbol: "AAPL".to_string(),
        price: 150.0,
        ..MarketQuote::default()
    };
    producer
        .send(MARKET_QUOTES_TOPIC, &quote.symbol, &quote)
        .await
        .unwrap();

    let consumed = poll_one(&mut service).await;
    assert_eq!(consumed, quote);
}

#[tokio::test]
async fn skips_undecodable_record_and_keeps_consuming() {
    let endpoint = start_relay().await;

    let mut service = QuoteStorageService::connect(&config_for(&endpoint))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    producer
        .send_bytes(MARKET_QUOTES_TOPIC, "JUNK", vec![0xFF])
        .await
        .unwrap();
    let quote = MarketQuote {
        symbol: "MSFT".to_string(),
        price: 410.5,
        ..MarketQuote::default()
    };
    producer
        .send(MARKET_QUOTES_TOPIC, &quote.symbol, &quote)
        .await
        .unwrap();

    let consumed = poll_one(&mut service).await;
    assert_eq!(consumed, quote);
}

#[tokio::test]
async fn records_keep_per_key_order() {
    let endpoint = start_relay().await;

    let mut service = QuoteStorageService::connect(&config_for(&endpoint))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    for price in [150.0, 151.0, 152.0] {
        let quote = MarketQuote {
            symbol: "AAPL".to_string(),
            price,
            ..MarketQuote::default()
        };
        producer
            .send(MARKET_QUOTES_TOPIC, &quote.symbol, &quote)
            .await
            .unwrap();
    }

    for expected in [150.0, 151.0, 152.0] {
        assert_eq!(poll_one(&mut service).await.price, expected);
    }
}
