//! Typed identifiers for the decoding engine.
//!
//! The domain separator is deliberately a newtype rather than a bare
//! `H256`: it is an opaque equality key that must never be confused with
//! order hashes or other 32-byte values floating through a signing flow.

use std::fmt;

use ethereum_types::H256;
use serde::{Deserialize, Serialize};

/// EIP-712 signing-domain separator.
///
/// A 32-byte hash a protocol computes to bind signatures to a specific
/// contract, version, and chain. The engine treats it as opaque: it is
/// compared for equality and used as a registry key, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DomainSeparator(pub H256);

impl DomainSeparator {
    /// Builds a separator from its raw 32 bytes. `const` so protocol
    /// decoders can compile their expected domain in.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(H256(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }
}

impl From<H256> for DomainSeparator {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}

impl fmt::Display for DomainSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0 .0))
    }
}
