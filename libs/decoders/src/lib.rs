//! # Presign Decoders — Protocol Dispatch Layer
//!
//! ## Purpose
//!
//! Blind-signing structured data is a well-known attack vector: the raw
//! payload is an opaque blob keyed to a signing domain, and different
//! protocols pack wildly different semantics into it. This crate holds
//! the engine that turns `(payload bytes, domain separator)` into one
//! canonical, human-auditable view:
//!
//! - [`OrderDecoder`] — the trait every protocol decoder implements.
//! - [`oneinch`] — 1inch Fusion limit orders (fixed two-asset shape,
//!   Dutch-auction schedule packed into the salt word).
//! - [`rarible`] — Rarible exchange orders (either side may be native
//!   currency, ERC-20, ERC-721 or ERC-1155).
//! - [`asset_class`] — the closed tag→decode-recipe dispatch the Rarible
//!   decoder uses per side.
//! - [`registry`] — the owner-gated domain→decoder dispatch table.
//!
//! ## Trust Boundary
//!
//! A decoder defends itself against being invoked for the wrong protocol
//! (the domain check) and against malformed bytes (typed parse errors).
//! It does NOT defend against a registered decoder lying about its own
//! protocol's semantics; registration is therefore owner-gated.

pub mod asset_class;
pub mod oneinch;
pub mod rarible;
pub mod registry;

use types::errors::DecodeError;
use types::{CanonicalOrderView, DomainSeparator};

pub use asset_class::AssetClass;
pub use oneinch::OneInchOrderDecoder;
pub use rarible::RaribleOrderDecoder;
pub use registry::{DecoderRef, DecoderRegistry};

/// A protocol decoder: a pure function from order bytes to the canonical
/// view, plus the signing domain it is compiled for.
pub trait OrderDecoder: Send + Sync {
    /// The domain separator this decoder understands.
    fn domain_separator(&self) -> DomainSeparator;

    /// Decode `payload` into the canonical view. Implementations call
    /// [`OrderDecoder::check_domain`] before touching the payload.
    fn decode(
        &self,
        payload: &[u8],
        domain: DomainSeparator,
    ) -> Result<CanonicalOrderView, DecodeError>;

    /// Self-defense against being invoked for the wrong protocol: the
    /// presented domain must equal the compiled-in constant.
    fn check_domain(&self, domain: DomainSeparator) -> Result<(), DecodeError> {
        let expected = self.domain_separator();
        if domain != expected {
            return Err(DecodeError::UnsupportedDomain {
                expected,
                actual: domain,
            });
        }
        Ok(())
    }
}
