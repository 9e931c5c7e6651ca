//! Errors reported for malformed text input.

use thiserror::Error;

/// Failure to turn a hex dump into an Ethernet frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Decoding stopped before the whole input was consumed.
    #[error("Trailing garbage in packet data")]
    TrailingGarbage,

    /// The decoded bytes cannot hold an Ethernet header.
    #[error("Packet data too short for Ethernet")]
    TooShortForEthernet,
}
