//! Error taxonomy for decoding and registry operations.
//!
//! Every failure is local to the call that triggered it and is surfaced
//! verbatim to the immediate caller. Nothing is recovered silently:
//! guessing on malformed signing data is exactly the hazard this engine
//! exists to prevent.

use ethereum_types::Address;
use thiserror::Error;

use crate::identifiers::DomainSeparator;

/// Failures while decoding an order payload into the canonical view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The presented domain separator is not the one this decoder was
    /// compiled for. Retrying with the same input cannot succeed.
    #[error("unsupported signing domain: expected {expected}, got {actual}")]
    UnsupportedDomain {
        expected: DomainSeparator,
        actual: DomainSeparator,
    },

    /// The payload is shorter than its declared layout requires, or an
    /// offset points outside it. Caller-supplied garbage, not an engine
    /// defect.
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },

    /// A typed-asset order carried a 4-byte class tag outside the closed
    /// set. Protocol evolution requires adding a variant, not defaulting.
    #[error("unknown asset class tag 0x{}", hex::encode(.tag))]
    UnknownAssetClass { tag: [u8; 4] },

    /// An auction premium pushed an amount past 256 bits. Failing beats
    /// understating what the signer would authorize.
    #[error("value overflow: {context}")]
    ValueOverflow { context: String },
}

/// Failures while mutating the decoder registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller {caller:?} is not the registry owner")]
    Unauthorized { caller: Address },

    #[error("invalid implementation: the null reference cannot decode orders")]
    InvalidImplementation,

    #[error("invalid owner: ownership cannot be transferred to the null reference")]
    InvalidOwner,
}

/// Failures when dispatching a decode through the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No decoder is registered under the presented domain. Unlike a
    /// decoder's own domain check, this can succeed later if the owner
    /// registers an implementation.
    #[error("no decoder registered for signing domain {0}")]
    UnregisteredDomain(DomainSeparator),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_asset_class_renders_tag_as_hex() {
        let err = DecodeError::UnknownAssetClass {
            tag: [0xde, 0xad, 0xbe, 0xef],
        };
        assert_eq!(err.to_string(), "unknown asset class tag 0xdeadbeef");
    }

    #[test]
    fn dispatch_error_wraps_decode_error_transparently() {
        let inner = DecodeError::MalformedPayload {
            reason: "length word out of range".into(),
        };
        let outer = DispatchError::from(inner.clone());
        assert_eq!(outer.to_string(), inner.to_string());
    }
}
