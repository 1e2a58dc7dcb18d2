//! Interchain security module interface.
//!
//! A security module decides whether a message delivered from a remote chain
//! may be processed. Relaying infrastructure discovers how to feed a module by
//! reading its [`ModuleType`].

use near_sdk::near;

use crate::error::IsmError;

/// Category tags used to classify security modules.
///
/// Discriminants match the module type numbering used across interchain
/// deployments, so the `u8` form can be compared with other chains.
#[near(serializers = [json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModuleType {
    Unused = 0,
    Routing = 1,
    Aggregation = 2,
    LegacyMultisig = 3,
    MerkleRootMultisig = 4,
    MessageIdMultisig = 5,
    /// No signatures or metadata of its own; trust is delegated elsewhere.
    Null = 6,
    CcipRead = 7,
}

impl ModuleType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Interface implemented by security modules.
pub trait InterchainSecurityModule {
    /// Returns the category tag of this module.
    fn module_type(&self) -> ModuleType;

    /// Decides whether `message` may be processed.
    ///
    /// # Arguments
    ///
    /// * `metadata` - Relayer supplied proof data; unused by some modules
    /// * `message` - The encoded interchain message
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the message is admitted. Rejections are errors, never
    /// `Ok(false)`, so callers relying on abort-on-failure stay safe.
    fn verify(&self, metadata: &[u8], message: &[u8]) -> Result<bool, IsmError>;
}
