//! Block Hash Security Module
//!
//! Admits an interchain message only when the block hash embedded at the
//! front of its body is the canonical hash that a block hash oracle reports
//! for the embedded height. The module signs nothing itself; all trust is
//! delegated to the oracle account it is bound to at initialization.

use ism_types::events::IsmEvent;
use ism_types::interfaces::ModuleType;
use ism_types::types::{Bytes32, Uint256};
use ism_types::{BlockCommitment, IsmError, Message};
use near_sdk::{env, ext_contract, near, AccountId, Gas, PanicOnDefault, Promise, PromiseError};

const GAS_FOR_BLOCK_HASH_QUERY: Gas = Gas::from_tgas(5);
const GAS_FOR_ORIGIN_QUERY: Gas = Gas::from_tgas(5);
const GAS_FOR_VERIFY_CALLBACK: Gas = Gas::from_tgas(10);

#[ext_contract(ext_block_hash_oracle)]
#[allow(dead_code)]
trait ExtBlockHashOracle {
    fn origin(&self) -> u32;
    fn block_hash(&self, height: Uint256) -> Uint256;
}

#[ext_contract(ext_self)]
#[allow(dead_code)]
trait ExtBlockHashIsmCallbacks {
    fn on_block_hash(
        &self,
        message_id: Bytes32,
        origin: u32,
        commitment: BlockCommitment,
    ) -> bool;
}

/// Block hash security module contract.
///
/// Stateless apart from the oracle binding, which has no setter.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct BlockHashIsm {
    /// The block hash oracle consulted for every verification.
    oracle: AccountId,
}

#[near]
impl BlockHashIsm {
    /// Initialize the security module.
    ///
    /// # Arguments
    ///
    /// * `oracle` - The block hash oracle contract address
    #[init]
    pub fn new(oracle: AccountId) -> Self {
        IsmEvent::IsmInitialized {
            oracle: &oracle,
            module_type: ModuleType::Null.as_u8(),
        }
        .emit();

        Self { oracle }
    }

    /// Verifies that `message` was dispatched from the oracle's origin chain.
    ///
    /// The envelope and block commitment are decoded before any cross-contract
    /// call, so malformed messages fail immediately. The oracle is then asked
    /// for the canonical hash at the committed height and `on_block_hash`
    /// makes the decision. The promise resolves to `true` or fails; it never
    /// resolves to `false`.
    ///
    /// # Arguments
    ///
    /// * `metadata` - Relayer metadata; not consumed by this module
    /// * `message` - The encoded interchain message
    pub fn verify(&self, metadata: Vec<u8>, message: Vec<u8>) -> Promise {
        let _ = metadata;

        let decoded = Message::decode(&message).unwrap_or_else(|err| abort(err));
        let commitment = BlockCommitment::from_body(&decoded.body).unwrap_or_else(|err| abort(err));
        let message_id = env::keccak256_array(&message);

        ext_block_hash_oracle::ext(self.oracle.clone())
            .with_static_gas(GAS_FOR_BLOCK_HASH_QUERY)
            .block_hash(commitment.claimed_height)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_VERIFY_CALLBACK)
                    .on_block_hash(message_id, decoded.origin, commitment),
            )
    }

    /// Callback after the oracle answered the block hash query.
    ///
    /// Returns `true` on an exact match and panics otherwise, so the caller's
    /// transaction fails on any rejection.
    #[private]
    pub fn on_block_hash(
        &self,
        message_id: Bytes32,
        origin: u32,
        commitment: BlockCommitment,
        #[callback_result] canonical_hash: Result<Uint256, PromiseError>,
    ) -> bool {
        let canonical_hash = match canonical_hash {
            Ok(hash) => hash,
            Err(_) => abort(IsmError::oracle("Block hash oracle query failed")),
        };

        if let Err(err) = commitment.verify_against(&canonical_hash) {
            env::log_str(&format!(
                "Rejected message {}: claimed {} at height {}, oracle reports {}",
                hex_word(&message_id),
                hex_word(&commitment.claimed_hash),
                hex_word(&commitment.claimed_height),
                hex_word(&canonical_hash)
            ));
            abort(err);
        }

        IsmEvent::MessageVerified {
            message_id: &message_id,
            origin,
            block_height: &commitment.claimed_height,
            block_hash: &canonical_hash,
        }
        .emit();

        true
    }

    /// Forwards the bound oracle's origin domain.
    ///
    /// `verify` does not compare message origins with the oracle; deployments
    /// use this to confirm the oracle attests to the chain they expect.
    pub fn oracle_origin(&self) -> Promise {
        ext_block_hash_oracle::ext(self.oracle.clone())
            .with_static_gas(GAS_FOR_ORIGIN_QUERY)
            .origin()
    }

    // ========== View Methods ==========

    /// Module type tag used by relayers to pick a metadata builder.
    pub fn module_type(&self) -> u8 {
        ModuleType::Null.as_u8()
    }

    /// Get the oracle address.
    pub fn get_oracle(&self) -> &AccountId {
        &self.oracle
    }

    /// Decodes the block commitment a message carries, without verifying it.
    pub fn message_commitment(&self, message: Vec<u8>) -> BlockCommitment {
        ism_types::message::body(&message)
            .and_then(BlockCommitment::from_body)
            .unwrap_or_else(|err| abort(err))
    }
}

fn abort(err: IsmError) -> ! {
    env::panic_str(&err.to_string())
}

fn hex_word(word: &Uint256) -> String {
    ism_types::types::to_hex(word)
}
