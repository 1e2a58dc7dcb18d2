//! Block hash verification predicate.
//!
//! A message is admitted when the block hash it commits to is the oracle's
//! canonical hash at the committed height. The verifier owns no state beyond
//! the oracle it was built with, so repeated calls against an unchanged
//! oracle always agree.

use crate::commitment::BlockCommitment;
use crate::error::IsmError;
use crate::interfaces::{BlockHashOracle, InterchainSecurityModule, ModuleType};
use crate::message;

/// Security module that checks messages against a block hash oracle.
///
/// The oracle is bound at construction and cannot be swapped afterwards.
/// `verify` never cross-checks the message's origin domain against
/// [`BlockHashOracle::origin`]; binding the right oracle is a deployment
/// concern, and [`BlockHashVerifier::origin`] is exposed for that check.
#[derive(Clone, Debug)]
pub struct BlockHashVerifier<O> {
    oracle: O,
}

impl<O: BlockHashOracle> BlockHashVerifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Domain the bound oracle attests to.
    pub fn origin(&self) -> u32 {
        self.oracle.origin()
    }

    /// Verifies a bare message body.
    ///
    /// Extracts the commitment, queries the oracle once at the claimed height
    /// and compares. Oracle failures come back as [`IsmError::Oracle`] with
    /// the oracle's message untouched.
    pub fn verify_body(&self, body: &[u8]) -> Result<bool, IsmError> {
        let commitment = BlockCommitment::from_body(body)?;
        let canonical_hash = self
            .oracle
            .block_hash(&commitment.claimed_height)
            .map_err(IsmError::Oracle)?;
        commitment.verify_against(&canonical_hash)
    }
}

impl<O: BlockHashOracle> InterchainSecurityModule for BlockHashVerifier<O> {
    fn module_type(&self) -> ModuleType {
        ModuleType::Null
    }

    fn verify(&self, _metadata: &[u8], message: &[u8]) -> Result<bool, IsmError> {
        self.verify_body(message::body(message)?)
    }
}
