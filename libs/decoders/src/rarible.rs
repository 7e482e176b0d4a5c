//! Decoder for Rarible exchange orders.
//!
//! Either side of the trade may be native currency, an ERC-20, an
//! ERC-721 or an ERC-1155; each side is a tagged descriptor dispatched
//! through [`crate::asset_class`]. No arithmetic is performed: the
//! complexity is entirely in the closed-variant dispatch, and the
//! liveness window is carried verbatim from the order's `start`/`end`.

use ethabi::{ParamType, Token};
use hex_literal::hex;

use codec::abi;
use types::errors::DecodeError;
use types::{Address, CanonicalOrderView, DomainSeparator, LivenessWindow, U256};

use crate::asset_class::AssetClass;
use crate::OrderDecoder;

/// Domain separator of the Rarible exchange on mainnet.
pub const DOMAIN_SEPARATOR: DomainSeparator = DomainSeparator::from_bytes(hex!(
    "36c25de3e541d5d970f66e4210d728721220fff5c077cc6cd008b3a0c62adab7"
));

/// One side of the trade: a classified descriptor plus its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSide {
    pub class: AssetClass,
    pub value: U256,
}

impl AssetSide {
    fn from_tokens(tokens: Vec<Token>) -> Result<Self, DecodeError> {
        let asset_type = abi::tuple(&tokens, 0, "assetType")?;
        let tag = abi::fixed_bytes4(&asset_type, 0, "assetClass")?;
        let data = abi::bytes(&asset_type, 1, "assetData")?;
        Ok(Self {
            class: AssetClass::classify(tag, &data)?,
            value: abi::uint(&tokens, 1, "value")?,
        })
    }

    pub fn flow(&self) -> types::AssetFlow {
        self.class.flow(self.value)
    }
}

/// A Rarible exchange order, fields in declared wire order.
///
/// `data_type` and `data` are a protocol extension slot: parsed so the
/// payload length is validated, but they contribute nothing to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOrder {
    pub maker: Address,
    pub make_asset: AssetSide,
    pub taker: Address,
    pub take_asset: AssetSide,
    pub salt: U256,
    pub start: U256,
    pub end: U256,
    pub data_type: [u8; 4],
    pub data: Vec<u8>,
}

fn asset_schema() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Tuple(vec![ParamType::FixedBytes(4), ParamType::Bytes]),
        ParamType::Uint(256),
    ])
}

fn order_schema() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Address,
        asset_schema(),
        ParamType::Address,
        asset_schema(),
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::FixedBytes(4),
        ParamType::Bytes,
    ])
}

impl ExchangeOrder {
    pub fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let tokens = abi::decode_message(&[order_schema()], payload)?;
        let fields = abi::tuple(&tokens, 0, "order")?;
        Ok(Self {
            maker: abi::address(&fields, 0, "maker")?,
            make_asset: AssetSide::from_tokens(abi::tuple(&fields, 1, "makeAsset")?)?,
            taker: abi::address(&fields, 2, "taker")?,
            take_asset: AssetSide::from_tokens(abi::tuple(&fields, 3, "takeAsset")?)?,
            salt: abi::uint(&fields, 4, "salt")?,
            start: abi::uint(&fields, 5, "start")?,
            end: abi::uint(&fields, 6, "end")?,
            data_type: abi::fixed_bytes4(&fields, 7, "dataType")?,
            data: abi::bytes(&fields, 8, "data")?,
        })
    }
}

/// Stateless decoder; a pure function of its input bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaribleOrderDecoder;

impl OrderDecoder for RaribleOrderDecoder {
    fn domain_separator(&self) -> DomainSeparator {
        DOMAIN_SEPARATOR
    }

    fn decode(
        &self,
        payload: &[u8],
        domain: DomainSeparator,
    ) -> Result<CanonicalOrderView, DecodeError> {
        self.check_domain(domain)?;

        let order = ExchangeOrder::from_payload(payload)?;
        tracing::debug!(
            give = ?order.make_asset.class,
            take = ?order.take_asset.class,
            "decoded exchange order"
        );

        Ok(CanonicalOrderView {
            // What the maker receives comes in; what the maker
            // relinquishes goes out.
            assets_in: vec![order.take_asset.flow()],
            assets_out: vec![order.make_asset.flow()],
            liveness: LivenessWindow::new(order.start, order.end),
        })
    }
}
