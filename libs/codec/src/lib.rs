//! # Presign Codec — Word-Layout Rules
//!
//! ## Purpose
//!
//! The "rules" layer of the decoding engine: everything that turns raw
//! signed bytes into typed fields, with no protocol semantics attached.
//!
//! - [`abi`] — schema-driven decoding of Solidity `abi.encode` word
//!   layouts (32-byte words, big-endian scalars, offset-referenced tail
//!   regions) plus typed token extraction. Any drift from that layout is
//!   a silent corruption hazard, so all parsing is delegated to `ethabi`
//!   and every failure maps to one typed error.
//! - [`auction`] — the bit-packed Dutch-auction schedule carried in a
//!   Fusion order's salt word, modeled as an explicit struct-of-bitfields
//!   so the packing contract stays auditable in isolation.
//!
//! ## What This Crate Does NOT Contain
//!
//! - Protocol decoders or domain-separator checks (in `decoders`)
//! - The canonical view data model (in `types`)

pub mod abi;
pub mod auction;

pub use abi::decode_message;
pub use auction::{AuctionSchedule, RATE_BUMP_SCALE};
