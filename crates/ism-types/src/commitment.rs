//! Block commitment carried at the front of every message body.
//!
//! The first 64 bytes of a body are two big-endian 256-bit words: the block
//! hash the sender claims, then the height of that block on the origin chain.
//! Anything after them belongs to the application and is never inspected here.

use near_sdk::near;

use crate::error::IsmError;
use crate::types::Uint256;

/// Size of the encoded commitment.
pub const COMMITMENT_LEN: usize = 64;

/// A `(hash, height)` claim about the origin chain.
#[near(serializers = [json, borsh])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockCommitment {
    /// Block hash the message claims was canonical at `height`.
    pub claimed_hash: Uint256,
    /// Origin chain height of the claimed block.
    pub claimed_height: Uint256,
}

impl BlockCommitment {
    /// Extracts the commitment from a message body.
    ///
    /// Bodies shorter than [`COMMITMENT_LEN`] are rejected with
    /// [`IsmError::MalformedMessage`]; they are never zero-padded.
    pub fn from_body(body: &[u8]) -> Result<Self, IsmError> {
        let prefix = body
            .get(..COMMITMENT_LEN)
            .ok_or(IsmError::MalformedMessage)?;

        let mut claimed_hash = [0u8; 32];
        let mut claimed_height = [0u8; 32];
        claimed_hash.copy_from_slice(&prefix[..32]);
        claimed_height.copy_from_slice(&prefix[32..]);

        Ok(Self {
            claimed_hash,
            claimed_height,
        })
    }

    /// Encodes the commitment as the 64-byte body prefix.
    pub fn encode(&self) -> [u8; COMMITMENT_LEN] {
        let mut out = [0u8; COMMITMENT_LEN];
        out[..32].copy_from_slice(&self.claimed_hash);
        out[32..].copy_from_slice(&self.claimed_height);
        out
    }

    /// Compares the claimed hash with the oracle's canonical hash for the
    /// claimed height.
    ///
    /// Returns `Ok(true)` on an exact match. Any difference, including a zero
    /// sentinel from an oracle that has not seen the height, is
    /// [`IsmError::VerificationFailed`].
    pub fn verify_against(&self, canonical_hash: &Uint256) -> Result<bool, IsmError> {
        if self.claimed_hash == *canonical_hash {
            Ok(true)
        } else {
            Err(IsmError::VerificationFailed)
        }
    }
}
