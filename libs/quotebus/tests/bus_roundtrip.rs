//! Producer -> relay -> consumer round trips over loopback TCP.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::time::Duration;

use quotebus::{BusConsumer, BusProducer, MARKET_QUOTES_TOPIC, MarketQuote, Relay};

/// Time to let the relay register a subscription before producing.
const SETTLE: Duration = Duration::from_millis(100);

/// Per-receive timeout; generous so slow CI does not flake.
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Bind a relay on an ephemeral port, run it in the background, and return
/// its endpoint.
async fn start_relay() -> String {
    let relay = Relay::bind("127.0.0.1:0").await.expect("bind relay");
    let addr = relay.local_addr().expect("relay addr");
    tokio::spawn(relay.run());
    addr.to_string()
}

fn sample_quote(symbol: &str, price: f64) -> MarketQuote {
    MarketQuote {
        symbol: symbol.to_string(),
        price,
        ..MarketQuote::default()
    }
}

async fn recv_one(consumer: &mut BusConsumer) -> quotebus::RecordDelivery {
    tokio::time::timeout(RECV_TIMEOUT, consumer.next_record())
        .await
        .expect("receive before timeout")
        .expect("bus error")
        .expect("open connection")
}

#[tokio::test]
async fn record_reaches_subscribed_group() {
    let endpoint = start_relay().await;

    let mut consumer = BusConsumer::subscribe(&endpoint, MARKET_QUOTES_TOPIC, "storage")
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    let quote = sample_quote("AAPL", 150.0);
    producer
        .send(MARKET_QUOTES_TOPIC, &quote.symbol, &quote)
        .await
        .unwrap();

    let delivery = recv_one(&mut consumer).await;
    assert_eq!(delivery.topic, MARKET_QUOTES_TOPIC);
    assert_eq!(delivery.key, "AAPL");
    assert_eq!(delivery.decode::<MarketQuote>().unwrap(), quote);
}

#[tokio::test]
async fn same_key_records_preserve_send_order() {
    let endpoint = start_relay().await;

    let mut consumer = BusConsumer::subscribe(&endpoint, MARKET_QUOTES_TOPIC, "storage")
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    for price in [150.0, 151.0, 152.0] {
        let quote = sample_quote("AAPL", price);
        producer
            .send(MARKET_QUOTES_TOPIC, &quote.symbol, &quote)
            .await
            .unwrap();
    }

    for expected in [150.0, 151.0, 152.0] {
        let delivery = recv_one(&mut consumer).await;
        assert_eq!(delivery.decode::<MarketQuote>().unwrap().price, expected);
    }
}

#[tokio::test]
async fn each_group_receives_every_record() {
    let endpoint = start_relay().await;

    let mut storage = BusConsumer::subscribe(&endpoint, MARKET_QUOTES_TOPIC, "storage")
        .await
        .unwrap();
    let mut audit = BusConsumer::subscribe(&endpoint, MARKET_QUOTES_TOPIC, "audit")
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    let quote = sample_quote("MSFT", 410.5);
    producer
        .send(MARKET_QUOTES_TOPIC, &quote.symbol, &quote)
        .await
        .unwrap();

    assert_eq!(recv_one(&mut storage).await.key, "MSFT");
    assert_eq!(recv_one(&mut audit).await.key, "MSFT");
}

#[tokio::test]
async fn group_members_split_records() {
    let endpoint = start_relay().await;

    let mut first = BusConsumer::subscribe(&endpoint, MARKET_QUOTES_TOPIC, "storage")
        .await
        .unwrap();
    let mut second = BusConsumer::subscribe(&endpoint, MARKET_QUOTES_TOPIC, "storage")
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    for symbol in ["AAPL", "MSFT"] {
        producer
            .send(MARKET_QUOTES_TOPIC, symbol, &sample_quote(symbol, 1.0))
            .await
            .unwrap();
    }

    // One record each, regardless of which member got which.
    let first_delivery = recv_one(&mut first).await;
    let second_delivery = recv_one(&mut second).await;
    let mut keys = vec![first_delivery.key, second_delivery.key];
    keys.sort();
    assert_eq!(keys, vec!["AAPL".to_string(), "MSFT".to_string()]);

    // Neither member sees a second record.
    let extra = tokio::time::timeout(Duration::from_millis(200), first.next_record()).await;
    assert!(extra.is_err(), "member received a duplicate record");
}

#[tokio::test]
async fn other_topics_are_not_delivered() {
    let endpoint = start_relay().await;

    let mut consumer = BusConsumer::subscribe(&endpoint, "other-topic", "storage")
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;

    let producer = BusProducer::connect(&endpoint).await.unwrap();
    producer
        .send(MARKET_QUOTES_TOPIC, "AAPL", &sample_quote("AAPL", 150.0))
        .await
        .unwrap();

    let nothing = tokio::time::timeout(Duration::from_millis(200), consumer.next_record()).await;
    assert!(nothing.is_err(), "received a record from an unrelated topic");
}
