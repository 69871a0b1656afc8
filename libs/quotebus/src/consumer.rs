//! Consumer client.

use serde::de::DeserializeOwned;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::error::BusError;
use crate::frame::{Frame, read_frame, write_frame};

/// One record received from the bus.
#[derive(Debug, Clone)]
pub struct RecordDelivery {
    /// Topic the record was published to.
    pub topic: String,
    /// Partition key the producer supplied.
    pub key: String,
    /// Encoded record payload.
    pub payload: Vec<u8>,
}

impl RecordDelivery {
    /// Decode the payload with the bus wire encoding.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, BusError> {
        Ok(bincode::deserialize(&self.payload)?)
    }
}

/// Subscribing client for a bus relay.
///
/// Each consumer joins a `(topic, group)` membership; the relay delivers a
/// record once per group, round-robin across the group's members.
#[derive(Debug)]
pub struct BusConsumer {
    reader: OwnedReadHalf,
    // Keeps the write direction open for the lifetime of the subscription.
    _writer: OwnedWriteHalf,
}

impl BusConsumer {
    /// Connect to the relay at `endpoint` and subscribe to `topic` as a
    /// member of consumer group `group`.
    pub async fn subscribe(endpoint: &str, topic: &str, group: &str) -> Result<Self, BusError> {
        let stream = TcpStream::connect(endpoint).await?;
        let (read_half, mut write_half) = stream.into_split();
        let frame = Frame::Subscribe {
            topic: topic.to_string(),
            group: group.to_string(),
        };
        write_frame(&mut write_half, &frame).await?;
        tracing::debug!(endpoint, topic, group, "Subscribed bus consumer");
        Ok(Self {
            reader: read_half,
            _writer: write_half,
        })
    }

    /// Receive the next record.
    ///
    /// Returns `Ok(None)` when the relay closes the connection at a frame
    /// boundary.
    pub async fn next_record(&mut self) -> Result<Option<RecordDelivery>, BusError> {
        loop {
            match read_frame(&mut self.reader).await? {
                Some(Frame::Record {
                    topic,
                    key,
                    payload,
                }) => {
                    return Ok(Some(RecordDelivery {
                        topic,
                        key,
                        payload,
                    }));
                }
                // Not relay-to-consumer traffic; skip.
                Some(Frame::Subscribe { .. }) => continue,
                None => return Ok(None),
            }
        }
    }
}
