//! Producer client.

use serde::Serialize;
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

use crate::error::BusError;
use crate::frame::{Frame, write_frame};

/// Publishing client for a bus relay.
///
/// Holds a single connection; sends are serialized on it, so records keep
/// their send order per producer. Safe to share across tasks behind an
/// `Arc`.
#[derive(Debug)]
pub struct BusProducer {
    writer: Mutex<OwnedWriteHalf>,
    endpoint: String,
}

impl BusProducer {
    /// Connect to the relay at `endpoint` (`host:port`).
    pub async fn connect(endpoint: &str) -> Result<Self, BusError> {
        let stream = TcpStream::connect(endpoint).await?;
        let (_read_half, write_half) = stream.into_split();
        tracing::debug!(endpoint, "Connected bus producer");
        Ok(Self {
            writer: Mutex::new(write_half),
            endpoint: endpoint.to_string(),
        })
    }

    /// Relay endpoint this producer is connected to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send an already-encoded payload to `topic` under `key`.
    pub async fn send_bytes(&self, topic: &str, key: &str, payload: Vec<u8>) -> Result<(), BusError> {
        let frame = Frame::Record {
            topic: topic.to_string(),
            key: key.to_string(),
            payload,
        };
        let mut writer = self.writer.lock().await;
        write_frame(&mut *writer, &frame).await
    }

    /// Encode `record` with the bus wire encoding and send it.
    pub async fn send<T: Serialize + Sync>(
        &self,
        topic: &str,
        key: &str,
        record: &T,
    ) -> Result<(), BusError> {
        let payload = bincode::serialize(record)?;
        self.send_bytes(topic, key, payload).await
    }
}
