//! Length-prefixed frame codec.
//!
//! Every frame on the wire is a u32 big-endian length followed by that many
//! bytes of bincode-encoded [`Frame`].

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::BusError;

/// Maximum encoded frame size in bytes.
pub const MAX_FRAME_BYTES: usize = 1024 * 1024;

/// A single message on a bus connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// Register the connection as a member of `group` for `topic`.
    Subscribe {
        /// Topic to receive records from.
        topic: String,
        /// Consumer group the connection joins.
        group: String,
    },
    /// A published record, producer to relay or relay to consumer.
    Record {
        /// Topic the record belongs to.
        topic: String,
        /// Partition key; records sharing a key keep send order.
        key: String,
        /// Opaque record payload.
        payload: Vec<u8>,
    },
}

/// Write one frame to `writer`.
pub async fn write_frame<W>(writer: &mut W, frame: &Frame) -> Result<(), BusError>
where
    W: AsyncWrite + Unpin,
{
    let bytes = bincode::serialize(frame)?;
    if bytes.len() > MAX_FRAME_BYTES {
        return Err(BusError::FrameTooLarge {
            size: bytes.len(),
            max: MAX_FRAME_BYTES,
        });
    }
    #[allow(clippy::cast_possible_truncation)]
    writer.write_u32(bytes.len() as u32).await?;
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one frame from `reader`.
///
/// Returns `Ok(None)` on a clean end of stream at a frame boundary.
pub async fn read_frame<R>(reader: &mut R) -> Result<Option<Frame>, BusError>
where
    R: AsyncRead + Unpin,
{
    let len = match reader.read_u32().await {
        Ok(len) => len as usize,
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    if len > MAX_FRAME_BYTES {
        return Err(BusError::FrameTooLarge {
            size: len,
            max: MAX_FRAME_BYTES,
        });
    }
    let mut buffer = vec![0u8; len];
    reader.read_exact(&mut buffer).await?;
    Ok(Some(bincode::deserialize(&buffer)?))
}
