//! Event definitions following the NEP-297 standard.
//!
//! Events are logged in JSON format and can be indexed by off-chain services.
//!
//! Reference: https://nomicon.io/Standards/EventsFormat

use near_sdk::{log, serde::Serialize, serde_json::json, AccountId};

use crate::types::{Bytes32, Uint256};

/// Event standard identifier for security module events.
const ISM_EVENT_STANDARD: &str = "block-hash-ism";

/// Event standard identifier for block hash oracle events.
const ORACLE_EVENT_STANDARD: &str = "block-hash-oracle";

/// Current version of the event standards.
const EVENT_STANDARD_VERSION: &str = "1.0.0";

/// Events emitted by the block hash security module.
#[derive(Clone, Serialize)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum IsmEvent<'a> {
    /// Emitted once, when the module is bound to its oracle.
    IsmInitialized {
        /// Oracle account consulted for every verification.
        oracle: &'a AccountId,
        /// Module type tag exposed to relayers.
        module_type: u8,
    },

    /// Emitted when a message's block commitment matched the oracle.
    MessageVerified {
        /// keccak256 of the encoded message.
        message_id: &'a Bytes32,
        /// Origin domain declared in the message header.
        origin: u32,
        /// Height the message committed to.
        block_height: &'a Uint256,
        /// Hash confirmed by the oracle.
        block_hash: &'a Uint256,
    },
}

impl IsmEvent<'_> {
    /// Emit this event to the NEAR logs.
    pub fn emit(&self) {
        emit_event(ISM_EVENT_STANDARD, &self);
    }
}

/// Events emitted by block hash oracles in this workspace.
#[derive(Clone, Serialize)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum OracleEvent<'a> {
    /// Emitted when a canonical hash is recorded for a height.
    BlockHashRecorded {
        /// Domain of the attested chain.
        origin: u32,
        block_height: &'a Uint256,
        block_hash: &'a Uint256,
    },
}

impl OracleEvent<'_> {
    /// Emit this event to the NEAR logs.
    pub fn emit(&self) {
        emit_event(ORACLE_EVENT_STANDARD, &self);
    }
}

/// Formats and logs an event following the NEP-297 standard.
///
/// NEP-297 defines a standard format for indexable events on NEAR:
/// - `standard`: Name of the event standard (e.g., "block-hash-ism")
/// - `version`: Version of the standard (e.g., "1.0.0")
/// - `event`: Event type name (e.g., "message_verified")
/// - `data`: Array of event data objects
///
/// The output is logged with the "EVENT_JSON:" prefix for indexer detection.
fn emit_event<T: ?Sized + Serialize>(standard: &str, data: &T) {
    let result = json!(data);
    let event_json = json!({
        "standard": standard,
        "version": EVENT_STANDARD_VERSION,
        "event": result["event"],
        "data": [result["data"]]
    })
    .to_string();
    log!("{}", format!("EVENT_JSON:{}", event_json));
}
