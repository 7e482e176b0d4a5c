//! Role mapping across every asset-class combination: the give side
//! always lands in `assets_out`, the take side in `assets_in`.

mod common;

use decoders::asset_class::{
    AssetClassTag, ERC1155_ASSET_CLASS, ERC20_ASSET_CLASS, ERC721_ASSET_CLASS, ETH_ASSET_CLASS,
};
use decoders::{rarible, OrderDecoder, RaribleOrderDecoder};
use ethabi::Token;
use types::{Address, AssetFlow, U256};

use common::{asset_token, exchange_payload};

struct ClassFixture {
    name: &'static str,
    tag: AssetClassTag,
    data: Vec<u8>,
    token: Address,
    sub_id: U256,
}

fn fixtures() -> Vec<ClassFixture> {
    let erc20_token = Address::from_low_u64_be(0x20);
    let erc721_token = Address::from_low_u64_be(0x721);
    let erc1155_token = Address::from_low_u64_be(0x1155);

    vec![
        ClassFixture {
            name: "ETH",
            tag: ETH_ASSET_CLASS,
            data: vec![0x00],
            token: Address::zero(),
            sub_id: U256::zero(),
        },
        ClassFixture {
            name: "ERC20",
            tag: ERC20_ASSET_CLASS,
            data: ethabi::encode(&[Token::Address(erc20_token)]),
            token: erc20_token,
            sub_id: U256::zero(),
        },
        ClassFixture {
            name: "ERC721",
            tag: ERC721_ASSET_CLASS,
            data: ethabi::encode(&[
                Token::Address(erc721_token),
                Token::Uint(U256::from(7u64)),
            ]),
            token: erc721_token,
            sub_id: U256::from(7u64),
        },
        ClassFixture {
            name: "ERC1155",
            tag: ERC1155_ASSET_CLASS,
            data: ethabi::encode(&[
                Token::Address(erc1155_token),
                Token::Uint(U256::from(2u64)),
            ]),
            token: erc1155_token,
            sub_id: U256::from(2u64),
        },
    ]
}

fn expected_flow(fixture: &ClassFixture, value: U256) -> AssetFlow {
    AssetFlow {
        token: fixture.token,
        sub_id: fixture.sub_id,
        amounts: vec![value],
    }
}

#[test]
fn give_maps_to_out_and_take_maps_to_in_for_all_sixteen_combinations() {
    let give_value = U256::from(3u64);
    let take_value = U256::from(11u64);

    for give in &fixtures() {
        for take in &fixtures() {
            let payload = exchange_payload(
                asset_token(give.tag, give.data.clone(), give_value),
                asset_token(take.tag, take.data.clone(), take_value),
                1_000,
                2_000,
            );
            let view = RaribleOrderDecoder
                .decode(&payload, rarible::DOMAIN_SEPARATOR)
                .unwrap_or_else(|err| panic!("give {} / take {}: {err}", give.name, take.name));

            assert_eq!(
                view.assets_out,
                vec![expected_flow(give, give_value)],
                "give {} / take {}",
                give.name,
                take.name
            );
            assert_eq!(
                view.assets_in,
                vec![expected_flow(take, take_value)],
                "give {} / take {}",
                give.name,
                take.name
            );
        }
    }
}
