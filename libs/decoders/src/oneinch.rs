//! Decoder for 1inch Fusion limit orders.
//!
//! A Fusion order always trades the same two token slots; the subtlety
//! is the salt word, which packs the Dutch-auction schedule alongside
//! the nonce (see [`codec::auction`]). The taker leg is therefore
//! reported as a range: the auction-adjusted upper bound first, the base
//! taking amount second.

use ethabi::ParamType;
use hex_literal::hex;

use codec::abi;
use codec::auction::AuctionSchedule;
use types::errors::DecodeError;
use types::{Address, AssetFlow, CanonicalOrderView, DomainSeparator, U256};

use crate::OrderDecoder;

/// Domain separator of the 1inch limit-order protocol v1.1 on mainnet.
pub const DOMAIN_SEPARATOR: DomainSeparator = DomainSeparator::from_bytes(hex!(
    "b50c8913581289bd2e066aeef89fceb9615d490d673131fd1a7047436706834e"
));

/// A Fusion order, fields in declared wire order.
///
/// `receiver`, `allowed_sender`, `offsets` and `interactions` are
/// layout-required and parsed for payload validation, but carry no
/// canonical-view semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionOrder {
    pub salt: U256,
    pub maker_asset: Address,
    pub taker_asset: Address,
    pub maker: Address,
    pub receiver: Address,
    pub allowed_sender: Address,
    pub making_amount: U256,
    pub taking_amount: U256,
    pub offsets: U256,
    pub interactions: Vec<u8>,
}

fn order_schema() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Uint(256),
        ParamType::Address,
        ParamType::Address,
        ParamType::Address,
        ParamType::Address,
        ParamType::Address,
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::Bytes,
    ])
}

impl FusionOrder {
    pub fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let tokens = abi::decode_message(&[order_schema()], payload)?;
        let fields = abi::tuple(&tokens, 0, "order")?;
        Ok(Self {
            salt: abi::uint(&fields, 0, "salt")?,
            maker_asset: abi::address(&fields, 1, "makerAsset")?,
            taker_asset: abi::address(&fields, 2, "takerAsset")?,
            maker: abi::address(&fields, 3, "maker")?,
            receiver: abi::address(&fields, 4, "receiver")?,
            allowed_sender: abi::address(&fields, 5, "allowedSender")?,
            making_amount: abi::uint(&fields, 6, "makingAmount")?,
            taking_amount: abi::uint(&fields, 7, "takingAmount")?,
            offsets: abi::uint(&fields, 8, "offsets")?,
            interactions: abi::bytes(&fields, 9, "interactions")?,
        })
    }
}

/// Stateless decoder; a pure function of its input bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneInchOrderDecoder;

impl OrderDecoder for OneInchOrderDecoder {
    fn domain_separator(&self) -> DomainSeparator {
        DOMAIN_SEPARATOR
    }

    fn decode(
        &self,
        payload: &[u8],
        domain: DomainSeparator,
    ) -> Result<CanonicalOrderView, DecodeError> {
        self.check_domain(domain)?;

        let order = FusionOrder::from_payload(payload)?;
        let schedule = AuctionSchedule::unpack(order.salt);
        let max_taking = schedule.max_taking_amount(order.taking_amount)?;
        tracing::debug!(?schedule, maker_asset = ?order.maker_asset, "decoded fusion order");

        Ok(CanonicalOrderView {
            // Bound first, base amount second.
            assets_in: vec![AssetFlow {
                token: order.taker_asset,
                sub_id: U256::zero(),
                amounts: vec![max_taking, order.taking_amount],
            }],
            assets_out: vec![AssetFlow::fungible(order.maker_asset, order.making_amount)],
            liveness: schedule.window(),
        })
    }
}
