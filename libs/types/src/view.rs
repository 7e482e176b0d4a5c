//! The canonical order view: what a signing request moves, and when.

use ethereum_types::{Address, U256};
use serde::{Deserialize, Serialize};

/// One asset movement from the signer's perspective.
///
/// `token` is the asset's contract reference; the zero address denotes
/// the chain's native currency. `sub_id` is zero for fungible assets and
/// the collection-item id for unique or semi-fungible tokens.
///
/// `amounts` usually holds a single value. Auction-priced legs carry two:
/// the upper bound first, the base amount second — order matters, and
/// consumers render the pair as a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFlow {
    pub token: Address,
    pub sub_id: U256,
    pub amounts: Vec<U256>,
}

impl AssetFlow {
    /// Flow for a fungible asset (no collection item id, one amount).
    pub fn fungible(token: Address, amount: U256) -> Self {
        Self {
            token,
            sub_id: U256::zero(),
            amounts: vec![amount],
        }
    }

    /// True when the flow moves native currency rather than a token.
    pub fn is_native(&self) -> bool {
        self.token.is_zero()
    }
}

/// The interval during which the signed commitment is live.
///
/// `from <= to` is NOT enforced here: a malformed order can legitimately
/// decode into an inverted window, and hiding that from a reviewer would
/// defeat the point. Check [`LivenessWindow::is_well_formed`] if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivenessWindow {
    pub from: U256,
    pub to: U256,
}

impl LivenessWindow {
    pub fn new(from: U256, to: U256) -> Self {
        Self { from, to }
    }

    pub fn is_well_formed(&self) -> bool {
        self.from <= self.to
    }
}

/// The decoder-agnostic result of visualizing a signing request.
///
/// `assets_out` lists what leaves the signer's control, `assets_in` what
/// the signer receives. Built fresh on every decode call and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalOrderView {
    pub assets_in: Vec<AssetFlow>,
    pub assets_out: Vec<AssetFlow>,
    pub liveness: LivenessWindow,
}
