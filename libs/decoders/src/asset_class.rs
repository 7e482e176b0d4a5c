//! Asset-class classification for typed-asset orders.
//!
//! Each side of a Rarible order names its kind with a 4-byte tag,
//! `bytes4(keccak256(class_name))`, followed by a class-specific payload.
//! The tag set is closed: an unrecognized tag is an error, never a
//! default.

use ethabi::ParamType;
use types::errors::DecodeError;
use types::{Address, AssetFlow, U256};

use codec::abi;

/// 4-byte class tag as it appears on the wire.
pub type AssetClassTag = [u8; 4];

/// `bytes4(keccak256("ETH"))`
pub const ETH_ASSET_CLASS: AssetClassTag = [0xaa, 0xae, 0xbe, 0xba];
/// `bytes4(keccak256("ERC20"))`
pub const ERC20_ASSET_CLASS: AssetClassTag = [0x8a, 0xe8, 0x5d, 0x84];
/// `bytes4(keccak256("ERC721"))`
pub const ERC721_ASSET_CLASS: AssetClassTag = [0x73, 0xad, 0x21, 0x46];
/// `bytes4(keccak256("ERC1155"))`
pub const ERC1155_ASSET_CLASS: AssetClassTag = [0x97, 0x3b, 0xb6, 0x40];

/// A classified asset descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetClass {
    /// Native currency; the descriptor payload is ignored.
    Eth,
    /// Fungible token; payload is `abi.encode(address)`.
    Erc20 { token: Address },
    /// Unique token; payload is `abi.encode(address, uint256)`.
    Erc721 { token: Address, id: U256 },
    /// Fungible within a collection; payload is `abi.encode(address, uint256)`.
    Erc1155 { token: Address, id: U256 },
}

impl AssetClass {
    /// Dispatch on the tag and decode the class-specific payload.
    pub fn classify(tag: AssetClassTag, data: &[u8]) -> Result<Self, DecodeError> {
        match tag {
            ETH_ASSET_CLASS => Ok(Self::Eth),
            ERC20_ASSET_CLASS => {
                let tokens = abi::decode_message(&[ParamType::Address], data)?;
                Ok(Self::Erc20 {
                    token: abi::address(&tokens, 0, "token")?,
                })
            }
            ERC721_ASSET_CLASS => {
                let (token, id) = decode_collection_item(data)?;
                Ok(Self::Erc721 { token, id })
            }
            ERC1155_ASSET_CLASS => {
                let (token, id) = decode_collection_item(data)?;
                Ok(Self::Erc1155 { token, id })
            }
            _ => Err(DecodeError::UnknownAssetClass { tag }),
        }
    }

    /// The account reference of the flow; zero for native currency.
    pub fn token(&self) -> Address {
        match self {
            Self::Eth => Address::zero(),
            Self::Erc20 { token }
            | Self::Erc721 { token, .. }
            | Self::Erc1155 { token, .. } => *token,
        }
    }

    /// The collection-item id; zero for fungible kinds.
    pub fn sub_id(&self) -> U256 {
        match self {
            Self::Eth | Self::Erc20 { .. } => U256::zero(),
            Self::Erc721 { id, .. } | Self::Erc1155 { id, .. } => *id,
        }
    }

    /// Materialize the canonical flow for this descriptor.
    pub fn flow(&self, value: U256) -> AssetFlow {
        AssetFlow {
            token: self.token(),
            sub_id: self.sub_id(),
            amounts: vec![value],
        }
    }
}

fn decode_collection_item(data: &[u8]) -> Result<(Address, U256), DecodeError> {
    let tokens = abi::decode_message(&[ParamType::Address, ParamType::Uint(256)], data)?;
    Ok((
        abi::address(&tokens, 0, "token")?,
        abi::uint(&tokens, 1, "tokenId")?,
    ))
}
