//! Schema-driven decoding of `abi.encode` word layouts.
//!
//! Decoders describe their order shape as an `ethabi` [`ParamType`]
//! schema and get back a token tree; the extractors below convert tokens
//! into typed fields. Both steps fail with
//! [`DecodeError::MalformedPayload`] — a short buffer, an offset pointing
//! outside the payload, or a token of the wrong shape all mean the same
//! thing to a caller: the bytes do not match the declared layout.

use ethabi::{ParamType, Token};
use types::errors::DecodeError;
use types::{Address, U256};

/// Decode `payload` against `schema`.
///
/// The payload must satisfy the full layout, tail regions included; a
/// truncated tail fails here rather than producing a partial token tree.
pub fn decode_message(schema: &[ParamType], payload: &[u8]) -> Result<Vec<Token>, DecodeError> {
    ethabi::decode(schema, payload).map_err(|err| {
        tracing::debug!(len = payload.len(), error = %err, "abi decode failed");
        DecodeError::MalformedPayload {
            reason: format!("{err} ({}-byte payload)", payload.len()),
        }
    })
}

fn shape_error(field: &str, slot: usize) -> DecodeError {
    DecodeError::MalformedPayload {
        reason: format!("missing or mistyped field `{field}` at slot {slot}"),
    }
}

pub fn uint(tokens: &[Token], slot: usize, field: &str) -> Result<U256, DecodeError> {
    tokens
        .get(slot)
        .and_then(|t| t.clone().into_uint())
        .ok_or_else(|| shape_error(field, slot))
}

pub fn address(tokens: &[Token], slot: usize, field: &str) -> Result<Address, DecodeError> {
    tokens
        .get(slot)
        .and_then(|t| t.clone().into_address())
        .ok_or_else(|| shape_error(field, slot))
}

pub fn bytes(tokens: &[Token], slot: usize, field: &str) -> Result<Vec<u8>, DecodeError> {
    tokens
        .get(slot)
        .and_then(|t| t.clone().into_bytes())
        .ok_or_else(|| shape_error(field, slot))
}

pub fn fixed_bytes4(tokens: &[Token], slot: usize, field: &str) -> Result<[u8; 4], DecodeError> {
    tokens
        .get(slot)
        .and_then(|t| t.clone().into_fixed_bytes())
        .and_then(|raw| <[u8; 4]>::try_from(raw).ok())
        .ok_or_else(|| shape_error(field, slot))
}

pub fn tuple(tokens: &[Token], slot: usize, field: &str) -> Result<Vec<Token>, DecodeError> {
    tokens
        .get(slot)
        .and_then(|t| t.clone().into_tuple())
        .ok_or_else(|| shape_error(field, slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Vec<ParamType> {
        vec![ParamType::Tuple(vec![
            ParamType::Address,
            ParamType::Uint(256),
            ParamType::Bytes,
        ])]
    }

    fn sample_payload() -> Vec<u8> {
        ethabi::encode(&[Token::Tuple(vec![
            Token::Address(Address::from_low_u64_be(0x1234)),
            Token::Uint(U256::from(42u64)),
            Token::Bytes(vec![0xaa; 40]),
        ])])
    }

    #[test]
    fn round_trips_a_dynamic_tuple() {
        let tokens = decode_message(&sample_schema(), &sample_payload()).unwrap();
        let fields = tuple(&tokens, 0, "order").unwrap();
        assert_eq!(
            address(&fields, 0, "maker").unwrap(),
            Address::from_low_u64_be(0x1234)
        );
        assert_eq!(uint(&fields, 1, "value").unwrap(), U256::from(42u64));
        assert_eq!(bytes(&fields, 2, "data").unwrap(), vec![0xaa; 40]);
    }

    #[test]
    fn truncated_tail_is_malformed() {
        let payload = sample_payload();
        let truncated = &payload[..payload.len() - 32];
        let err = decode_message(&sample_schema(), truncated).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    }

    #[test]
    fn empty_payload_is_malformed() {
        let err = decode_message(&sample_schema(), &[]).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    }

    #[test]
    fn mistyped_extraction_names_the_field() {
        let tokens = decode_message(&sample_schema(), &sample_payload()).unwrap();
        let fields = tuple(&tokens, 0, "order").unwrap();
        let err = uint(&fields, 0, "salt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed payload: missing or mistyped field `salt` at slot 0"
        );
    }
}
