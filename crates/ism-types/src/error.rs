//! Error taxonomy for message verification.
//!
//! Every variant aborts the verification call it came from. Contracts turn
//! these into panics so the surrounding transaction reverts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsmError {
    /// The envelope is shorter than its fixed 77-byte header.
    #[error("Invalid message header")]
    MalformedHeader,

    /// The body is shorter than the 64-byte block commitment.
    #[error("Invalid message body")]
    MalformedMessage,

    /// The claimed hash differs from the oracle's canonical hash at the
    /// claimed height. An oracle with no record for that height lands here.
    #[error("Transaction not dispatched from origin chain")]
    VerificationFailed,

    /// The oracle itself failed. The oracle's own message is kept as is.
    #[error("{0}")]
    Oracle(String),
}

impl IsmError {
    pub fn oracle(message: impl Into<String>) -> Self {
        Self::Oracle(message.into())
    }
}
