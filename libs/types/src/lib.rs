//! # Presign Canonical Order Types
//!
//! Shared data model for the presign decoding engine: the canonical,
//! protocol-agnostic view of a structured signing request and the error
//! taxonomy every decoder reports through.
//!
//! ## Design Philosophy
//!
//! - **One output shape**: every protocol decoder, whatever its wire
//!   format, normalizes into [`CanonicalOrderView`] — two lists of asset
//!   movements plus a validity window. Review tooling only ever learns
//!   one shape.
//! - **No silent guessing**: decode failures are typed and surfaced
//!   verbatim ([`errors::DecodeError`]); there is no partial view.
//! - **EVM-native scalars**: account references and amounts are the
//!   `ethereum-types` primitives (`Address`, `U256`) so values round-trip
//!   losslessly from the signed payload to the rendered view.
//!
//! ## Integration Points
//!
//! - `codec` builds on these types for word-layout and auction-schedule
//!   decoding.
//! - `decoders` produces [`CanonicalOrderView`] values and keys its
//!   dispatch registry by [`DomainSeparator`].

pub mod errors;
pub mod identifiers;
pub mod view;

// Re-export the EVM scalar primitives so downstream crates share one source.
pub use ethereum_types::{Address, H256, U256, U512};

pub use errors::{DecodeError, DispatchError, RegistryError};
pub use identifiers::DomainSeparator;
pub use view::{AssetFlow, CanonicalOrderView, LivenessWindow};
