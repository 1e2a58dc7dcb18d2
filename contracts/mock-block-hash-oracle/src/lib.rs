//! Mock Block Hash Oracle
//!
//! Serves canonical block hashes for one origin chain from an owner-fed
//! table. It exposes the same `origin` and `block_hash` methods a production
//! oracle does, so the security module can be exercised end to end without a
//! live light client.

use ism_types::events::OracleEvent;
use ism_types::interfaces::BlockHashOracle;
use ism_types::types::{Uint256, ZERO};
use near_sdk::store::LookupMap;
use near_sdk::{env, near, require, AccountId, PanicOnDefault};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockBlockHashOracle {
    /// Account allowed to record hashes.
    owner: AccountId,
    /// Domain of the chain this oracle attests to. Fixed at init.
    origin: u32,
    /// Height to canonical block hash.
    block_hashes: LookupMap<Uint256, Uint256>,
}

#[near]
impl MockBlockHashOracle {
    /// Initialize the oracle.
    ///
    /// # Arguments
    /// * `owner` - Account that can record block hashes
    /// * `origin` - Domain of the attested chain
    #[init]
    pub fn new(owner: AccountId, origin: u32) -> Self {
        Self {
            owner,
            origin,
            block_hashes: LookupMap::new(b"h"),
        }
    }

    /// Record the canonical hash for a height, replacing any previous one.
    /// Only the owner can call this method.
    pub fn set_block_hash(&mut self, height: Uint256, hash: Uint256) {
        self.assert_owner();

        self.block_hashes.insert(height, hash);

        OracleEvent::BlockHashRecorded {
            origin: self.origin,
            block_height: &height,
            block_hash: &hash,
        }
        .emit();
    }

    /// Domain of the chain this oracle attests to.
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Canonical hash at `height`, or zero if none was recorded.
    pub fn block_hash(&self, height: Uint256) -> Uint256 {
        self.block_hashes.get(&height).copied().unwrap_or(ZERO)
    }

    /// Transfer ownership to a new account.
    /// Only the current owner can call this method.
    pub fn set_owner(&mut self, new_owner: AccountId) {
        self.assert_owner();
        self.owner = new_owner;
    }

    /// Get the current owner.
    pub fn get_owner(&self) -> AccountId {
        self.owner.clone()
    }

    // ==================== Internal ====================

    fn assert_owner(&self) {
        require!(
            env::predecessor_account_id() == self.owner,
            "Only owner can call this method"
        );
    }
}

/// Lets the recorded table back the library verifier directly.
impl BlockHashOracle for MockBlockHashOracle {
    fn origin(&self) -> u32 {
        self.origin
    }

    fn block_hash(&self, height: &Uint256) -> Result<Uint256, String> {
        Ok(MockBlockHashOracle::block_hash(self, *height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ism_types::types::uint256_from_u128;
    use ism_types::{BlockHashVerifier, IsmError};
    use near_sdk::test_utils::{accounts, get_logs, VMContextBuilder};
    use near_sdk::testing_env;

    fn get_context(predecessor: AccountId) -> VMContextBuilder {
        let mut builder = VMContextBuilder::new();
        builder.predecessor_account_id(predecessor);
        builder
    }

    #[test]
    fn test_new() {
        testing_env!(get_context(accounts(0)).build());

        let contract = MockBlockHashOracle::new(accounts(0), 1);
        assert_eq!(contract.get_owner(), accounts(0));
        assert_eq!(contract.origin(), 1);
    }

    #[test]
    fn test_unknown_height_returns_zero() {
        testing_env!(get_context(accounts(0)).build());

        let contract = MockBlockHashOracle::new(accounts(0), 1);
        assert_eq!(contract.block_hash(uint256_from_u128(5)), ZERO);
    }

    #[test]
    fn test_set_block_hash() {
        testing_env!(get_context(accounts(0)).build());

        let mut contract = MockBlockHashOracle::new(accounts(0), 1);
        contract.set_block_hash(uint256_from_u128(10), [0xbb; 32]);

        assert_eq!(contract.block_hash(uint256_from_u128(10)), [0xbb; 32]);
        assert_eq!(contract.block_hash(uint256_from_u128(11)), ZERO);
        assert!(get_logs()[0].contains("block_hash_recorded"));
    }

    #[test]
    fn test_overwrite_block_hash() {
        testing_env!(get_context(accounts(0)).build());

        let mut contract = MockBlockHashOracle::new(accounts(0), 1);
        contract.set_block_hash(uint256_from_u128(10), [0xaa; 32]);
        contract.set_block_hash(uint256_from_u128(10), [0xbb; 32]);

        assert_eq!(contract.block_hash(uint256_from_u128(10)), [0xbb; 32]);
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_set_block_hash_unauthorized() {
        testing_env!(get_context(accounts(0)).build());
        let mut contract = MockBlockHashOracle::new(accounts(0), 1);

        testing_env!(get_context(accounts(1)).build());
        contract.set_block_hash(uint256_from_u128(10), [0xbb; 32]);
    }

    #[test]
    fn test_transfer_ownership() {
        testing_env!(get_context(accounts(0)).build());
        let mut contract = MockBlockHashOracle::new(accounts(0), 1);

        contract.set_owner(accounts(1));
        assert_eq!(contract.get_owner(), accounts(1));

        testing_env!(get_context(accounts(1)).build());
        contract.set_block_hash(uint256_from_u128(1), [0x01; 32]);
        assert_eq!(contract.block_hash(uint256_from_u128(1)), [0x01; 32]);
    }

    #[test]
    fn test_verifier_against_recorded_hashes() {
        testing_env!(get_context(accounts(0)).build());
        let mut contract = MockBlockHashOracle::new(accounts(0), 1);
        contract.set_block_hash(uint256_from_u128(10), [0xbb; 32]);

        let verifier = BlockHashVerifier::new(&contract);
        assert_eq!(verifier.origin(), 1);

        let mut body = [0xbb; 32].to_vec();
        body.extend_from_slice(&uint256_from_u128(10));
        assert_eq!(verifier.verify_body(&body), Ok(true));

        body[0] = 0xaa;
        assert_eq!(
            verifier.verify_body(&body),
            Err(IsmError::VerificationFailed)
        );

        // Unrecorded height reads as zero, so only a zero claim matches it
        let mut zero_claim = ZERO.to_vec();
        zero_claim.extend_from_slice(&uint256_from_u128(11));
        assert_eq!(verifier.verify_body(&zero_claim), Ok(true));
    }
}
