//! Shared wire-format fixtures for the integration suites.
#![allow(dead_code)]

use ethabi::Token;
use types::{Address, U256};

/// Encode a Fusion order payload (offset-prefixed dynamic tuple, as the
/// protocol delivers it).
pub fn fusion_payload(
    salt: U256,
    maker_asset: Address,
    taker_asset: Address,
    making_amount: U256,
    taking_amount: U256,
) -> Vec<u8> {
    ethabi::encode(&[Token::Tuple(vec![
        Token::Uint(salt),
        Token::Address(maker_asset),
        Token::Address(taker_asset),
        Token::Address(Address::from_low_u64_be(0x3a3e)),
        Token::Address(Address::zero()),
        Token::Address(Address::zero()),
        Token::Uint(making_amount),
        Token::Uint(taking_amount),
        Token::Uint(U256::zero()),
        Token::Bytes(Vec::new()),
    ])])
}

/// One side of a Rarible order: `((assetClass, data), value)`.
pub fn asset_token(tag: [u8; 4], data: Vec<u8>, value: U256) -> Token {
    Token::Tuple(vec![
        Token::Tuple(vec![Token::FixedBytes(tag.to_vec()), Token::Bytes(data)]),
        Token::Uint(value),
    ])
}

/// Encode a Rarible exchange order payload around the given sides.
pub fn exchange_payload(make: Token, take: Token, start: u64, end: u64) -> Vec<u8> {
    ethabi::encode(&[Token::Tuple(vec![
        Token::Address(Address::from_low_u64_be(0x111)),
        make,
        Token::Address(Address::from_low_u64_be(0x222)),
        take,
        Token::Uint(U256::from(0xdead_beefu64)),
        Token::Uint(U256::from(start)),
        Token::Uint(U256::from(end)),
        Token::FixedBytes(vec![0x12, 0x34, 0x56, 0x78]),
        Token::Bytes(vec![0x00]),
    ])])
}
