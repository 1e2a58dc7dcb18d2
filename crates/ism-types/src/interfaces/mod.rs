//! Interface definitions for the block hash security module.
//!
//! This module contains the capability the verifier consumes (the block hash
//! oracle) and the interface it exposes to the surrounding infrastructure
//! (the interchain security module).

pub mod block_hash_oracle;
pub mod security_module;

pub use block_hash_oracle::*;
pub use security_module::*;
