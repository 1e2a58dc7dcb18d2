//! Interchain message envelope.
//!
//! Layout of an encoded message:
//!
//! | Field       | Offset | Width              |
//! |-------------|--------|--------------------|
//! | version     | 0      | 1                  |
//! | nonce       | 1      | 4 (big-endian)     |
//! | origin      | 5      | 4 (big-endian)     |
//! | sender      | 9      | 32                 |
//! | destination | 41     | 4 (big-endian)     |
//! | recipient   | 45     | 32                 |
//! | body        | 77     | remainder          |
//!
//! The security module only looks at the body. Header fields are decoded so
//! the contracts can log where a message claims to come from.

use near_sdk::near;

use crate::error::IsmError;
use crate::types::Bytes32;

const VERSION_OFFSET: usize = 0;
const NONCE_OFFSET: usize = 1;
const ORIGIN_OFFSET: usize = 5;
const SENDER_OFFSET: usize = 9;
const DESTINATION_OFFSET: usize = 41;
const RECIPIENT_OFFSET: usize = 45;

/// Length of the fixed header; the body starts here.
pub const BODY_OFFSET: usize = 77;

/// A decoded interchain message.
#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub version: u8,
    pub nonce: u32,
    /// Domain of the chain the message claims to be dispatched from.
    pub origin: u32,
    pub sender: Bytes32,
    pub destination: u32,
    pub recipient: Bytes32,
    /// Application payload. Opaque to everything but the block commitment
    /// extractor.
    pub body: Vec<u8>,
}

impl Message {
    /// Decodes an encoded message.
    ///
    /// Fails with [`IsmError::MalformedHeader`] if `bytes` cannot hold the
    /// fixed header. The body may be empty here; its length is checked by
    /// the commitment extractor.
    pub fn decode(bytes: &[u8]) -> Result<Self, IsmError> {
        if bytes.len() < BODY_OFFSET {
            return Err(IsmError::MalformedHeader);
        }

        Ok(Self {
            version: bytes[VERSION_OFFSET],
            nonce: read_u32(bytes, NONCE_OFFSET),
            origin: read_u32(bytes, ORIGIN_OFFSET),
            sender: read_bytes32(bytes, SENDER_OFFSET),
            destination: read_u32(bytes, DESTINATION_OFFSET),
            recipient: read_bytes32(bytes, RECIPIENT_OFFSET),
            body: bytes[BODY_OFFSET..].to_vec(),
        })
    }

    /// Encodes the message into its wire layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BODY_OFFSET + self.body.len());
        out.push(self.version);
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.origin.to_be_bytes());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.destination.to_be_bytes());
        out.extend_from_slice(&self.recipient);
        out.extend_from_slice(&self.body);
        out
    }
}

/// Borrows the body of an encoded message without copying it.
pub fn body(bytes: &[u8]) -> Result<&[u8], IsmError> {
    bytes.get(BODY_OFFSET..).ok_or(IsmError::MalformedHeader)
}

// Callers have already checked `bytes.len() >= BODY_OFFSET`.
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_be_bytes(word)
}

fn read_bytes32(bytes: &[u8], offset: usize) -> Bytes32 {
    let mut word = [0u8; 32];
    word.copy_from_slice(&bytes[offset..offset + 32]);
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(body: Vec<u8>) -> Message {
        Message {
            version: 3,
            nonce: 42,
            origin: 1,
            sender: [0x11; 32],
            destination: 1313161554,
            recipient: [0x22; 32],
            body,
        }
    }

    #[test]
    fn test_header_layout() {
        let encoded = sample(vec![0xab, 0xcd]).encode();

        assert_eq!(encoded.len(), BODY_OFFSET + 2);
        assert_eq!(encoded[0], 3);
        assert_eq!(&encoded[1..5], &42u32.to_be_bytes());
        assert_eq!(&encoded[5..9], &1u32.to_be_bytes());
        assert_eq!(&encoded[9..41], &[0x11; 32]);
        assert_eq!(&encoded[41..45], &1313161554u32.to_be_bytes());
        assert_eq!(&encoded[45..77], &[0x22; 32]);
        assert_eq!(&encoded[77..], &[0xab, 0xcd]);
    }

    #[test]
    fn test_decode_encoded_message() {
        let message = sample(vec![7u8; 100]);
        let decoded = Message::decode(&message.encode()).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_decode_header_only() {
        let decoded = Message::decode(&sample(vec![]).encode()).unwrap();
        assert!(decoded.body.is_empty());
    }

    #[test]
    fn test_decode_short_header() {
        let encoded = sample(vec![]).encode();
        assert_eq!(
            Message::decode(&encoded[..BODY_OFFSET - 1]),
            Err(IsmError::MalformedHeader)
        );
        assert_eq!(Message::decode(&[]), Err(IsmError::MalformedHeader));
    }

    #[test]
    fn test_body_slice() {
        let encoded = sample(vec![1, 2, 3]).encode();
        assert_eq!(body(&encoded).unwrap(), &[1, 2, 3]);
        assert_eq!(body(&encoded[..10]), Err(IsmError::MalformedHeader));
    }
}
