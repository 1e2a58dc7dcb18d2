//! Block hash oracle interface.
//!
//! The oracle is an external collaborator. How it learns remote block hashes
//! is its own business; the verifier only reads from it.

use crate::types::Uint256;

/// Source of canonical block hashes for one fixed origin chain.
///
/// Implementations are treated as ground truth. The verifier never disputes
/// an answer, it only compares against it.
///
/// This is the synchronous form of the oracle contract interface. On-chain,
/// `block-hash-ism` reaches the same two methods through a cross-contract
/// call and `mock-block-hash-oracle` implements both forms.
pub trait BlockHashOracle {
    /// Returns the domain of the chain this oracle attests to.
    ///
    /// Fixed for the lifetime of the oracle instance.
    fn origin(&self) -> u32;

    /// Returns the canonical block hash recorded for `height`.
    ///
    /// An oracle with no record for `height` may return a zero sentinel or
    /// fail. A failure is reported as a plain message and propagated to the
    /// verifier's caller unchanged.
    ///
    /// # Arguments
    ///
    /// * `height` - Big-endian block height on the origin chain
    fn block_hash(&self, height: &Uint256) -> Result<Uint256, String>;
}

impl<T: BlockHashOracle + ?Sized> BlockHashOracle for &T {
    fn origin(&self) -> u32 {
        (**self).origin()
    }

    fn block_hash(&self, height: &Uint256) -> Result<Uint256, String> {
        (**self).block_hash(height)
    }
}
