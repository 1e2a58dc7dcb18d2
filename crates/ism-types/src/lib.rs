//! Shared types and the verification core for the block hash security module.
//!
//! This crate holds everything that does not need the NEAR host: the message
//! envelope codec, the fixed-layout block commitment, the oracle capability
//! trait and the verifier that ties them together. Contracts in this workspace
//! wrap these pieces with cross-contract calls.
//!
//! # Modules
//!
//! - [`commitment`] - Fixed 64-byte `(hash, height)` prefix of a message body
//! - [`error`] - Error taxonomy shared by the library and the contracts
//! - [`events`] - NEP-297 compliant event definitions for indexing
//! - [`interfaces`] - Oracle capability and security module traits
//! - [`message`] - Interchain message envelope codec
//! - [`types`] - Core type aliases and helpers
//! - [`verifier`] - The block hash verification predicate

pub mod commitment;
pub mod error;
pub mod events;
pub mod interfaces;
pub mod message;
pub mod types;
pub mod verifier;

pub use commitment::BlockCommitment;
pub use error::IsmError;
pub use message::Message;
pub use verifier::BlockHashVerifier;
