//! Bus error types.

use thiserror::Error;

/// Errors from the bus clients and relay.
#[derive(Debug, Error)]
pub enum BusError {
    /// Socket I/O failed.
    #[error("bus I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame or payload could not be encoded or decoded.
    #[error("frame codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// A frame exceeded the maximum allowed size.
    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge {
        /// Size of the offending frame in bytes.
        size: usize,
        /// Maximum frame size in bytes.
        max: usize,
    },
}
