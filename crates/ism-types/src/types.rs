//! Core type definitions for the block hash security module.

/// A 32-byte fixed-size array used for account-shaped identifiers.
///
/// Message senders and recipients are carried as 32-byte words so that
/// addresses from any origin chain fit.
pub type Bytes32 = [u8; 32];

/// A 256-bit unsigned integer in big-endian byte order.
///
/// Used for block hashes and block heights. Two values are equal exactly when
/// their 32 bytes are equal.
pub type Uint256 = [u8; 32];

/// The all-zero word. Oracles return this for heights they have no record of.
pub const ZERO: Uint256 = [0u8; 32];

/// Packs a native integer into a big-endian [`Uint256`].
pub fn uint256_from_u128(value: u128) -> Uint256 {
    let mut word = ZERO;
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Lowercase hex rendering of a word, without a `0x` prefix.
pub fn to_hex(word: &Uint256) -> String {
    hex::encode(word)
}
