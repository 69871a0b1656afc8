//! QuoteBus - Message Bus for Market Quote Records
//!
//! Shared bus layer for the MarketPulse services. The aggregator publishes
//! canonical [`MarketQuote`] records onto a topic through a [`BusProducer`];
//! the storage service receives them through a [`BusConsumer`] subscribed
//! under a consumer group. Both clients connect to a [`Relay`], shipped here
//! as the `quotebus-relay` binary.
//!
//! # Wire format
//!
//! Every frame on the wire is a u32 big-endian length prefix followed by a
//! bincode-encoded [`Frame`]. Records carry the topic, a partition key, and
//! an opaque payload (the bincode-encoded canonical record).
//!
//! # Delivery semantics
//!
//! A record is delivered once to every consumer group subscribed to its
//! topic (round-robin across a group's members). Records sent on one
//! producer connection are delivered in send order, so records sharing a
//! partition key keep their relative order. There is no cross-key ordering
//! guarantee and no dedup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp))]

mod consumer;
mod error;
mod frame;
mod producer;
mod record;
mod relay;

pub use consumer::{BusConsumer, RecordDelivery};
pub use error::BusError;
pub use frame::{Frame, MAX_FRAME_BYTES, read_frame, write_frame};
pub use producer::BusProducer;
pub use record::{MARKET_QUOTES_TOPIC, MarketQuote};
pub use relay::Relay;
