//! Word-aligned encoding of payload values on top of the Solidity ABI codec.
//!
//! A single value is encoded as a one-element parameter list. A sequence shares one head of
//! 32-byte words: static values sit in the head, dynamic values leave the byte offset of their
//! block there and append the block to the tail. Offsets are measured from the start of the
//! sequence.

extern crate alloc;

use alloc::string::String as AllocString;
use alloc::vec::Vec as AllocVec;
use alloy_primitives::{Address as EvmAddress, Bytes as EvmBytes, U256};
use alloy_sol_types::sol_data::{Array, Int, Uint};
use alloy_sol_types::{sol, sol_data, SolType};
use omnichain_std::ensure;
use soroban_sdk::{Bytes, BytesN, Env, IntoVal, String, TryFromVal, Val, Vec};

use crate::address::AddressData;
use crate::error::PayloadError;
use crate::types::{MsgType, Value};

pub const WORD_SIZE: usize = 32;

type Word = [u8; WORD_SIZE];

sol! {
    struct AddressTuple {
        uint8 chainType;
        address evmAddress;
        string otherAddress;
    }
}

impl AddressTuple {
    fn from_address_data(data: &AddressData) -> Result<Self, PayloadError> {
        Ok(Self {
            chainType: narrow(data.chain_type)?,
            evmAddress: EvmAddress::from(data.evm_address.to_array()),
            otherAddress: to_alloc_string(&data.other_address)?,
        })
    }

    fn into_address_data(self, env: &Env) -> AddressData {
        AddressData {
            chain_type: self.chainType.into(),
            evm_address: BytesN::from_array(env, &self.evmAddress.into_array()),
            other_address: String::from_str(env, &self.otherAddress),
        }
    }
}

impl From<alloy_sol_types::Error> for PayloadError {
    fn from(error: alloy_sol_types::Error) -> Self {
        match error {
            alloy_sol_types::Error::TypeCheckFail { .. } => Self::ValueOutOfRange,
            _ => Self::MalformedBuffer,
        }
    }
}

pub fn encode_value(env: &Env, value: &Value) -> Result<Bytes, PayloadError> {
    Ok(Bytes::from_slice(env, &encode_single(value)?))
}

pub fn decode_value(env: &Env, msg_type: MsgType, data: &Bytes) -> Result<Value, PayloadError> {
    let buffer = data.to_alloc_vec();
    ensure!(
        buffer.len() % WORD_SIZE == 0,
        PayloadError::MalformedBuffer
    );

    decode_single(env, msg_type, &buffer, true)
}

/// Encodes `values` as one parameter list.
pub fn encode_params(env: &Env, values: &Vec<Value>) -> Result<Bytes, PayloadError> {
    let head_len = values.len() as usize * WORD_SIZE;
    let mut head = AllocVec::with_capacity(head_len);
    let mut tail = AllocVec::new();

    for value in values.iter() {
        let encoded = encode_single(&value)?;

        if value.msg_type().is_dynamic() {
            head.extend_from_slice(&U256::from(head_len + tail.len()).to_be_bytes::<WORD_SIZE>());
            tail.extend_from_slice(&encoded[WORD_SIZE..]);
        } else {
            head.extend_from_slice(&encoded);
        }
    }

    head.extend_from_slice(&tail);

    Ok(Bytes::from_slice(env, &head))
}

/// Decodes a parameter list of `msg_types`. Every block must be in canonical form.
pub fn decode_params(
    env: &Env,
    msg_types: &[MsgType],
    data: &Bytes,
) -> Result<Vec<Value>, PayloadError> {
    let buffer = data.to_alloc_vec();
    ensure!(
        buffer.len() % WORD_SIZE == 0,
        PayloadError::MalformedBuffer
    );

    let mut values = Vec::new(env);

    for (index, msg_type) in msg_types.iter().enumerate() {
        let head = word(&buffer, index * WORD_SIZE)?;

        let value = if msg_type.is_dynamic() {
            let offset = offset(head)?;
            ensure!(
                offset % WORD_SIZE == 0 && offset < buffer.len(),
                PayloadError::MalformedBuffer
            );

            let mut single = U256::from(WORD_SIZE).to_be_bytes::<WORD_SIZE>().to_vec();
            single.extend_from_slice(&buffer[offset..]);

            // other blocks may follow, so only the decoded prefix is compared
            let value = decode_single(env, *msg_type, &single, false)?;
            ensure!(
                single.starts_with(&encode_single(&value)?),
                PayloadError::MalformedBuffer
            );
            value
        } else {
            decode_single(env, *msg_type, head, true)?
        };

        values.push_back(value);
    }

    Ok(values)
}

fn encode_single(value: &Value) -> Result<AllocVec<u8>, PayloadError> {
    let encoded = match value {
        Value::String(text) => encode::<sol_data::String>(&to_alloc_string(text)?),
        Value::U8(v) => encode::<Uint<8>>(&narrow(*v)?),
        Value::U16(v) => encode::<Uint<16>>(&narrow(*v)?),
        Value::U32(v) => encode::<Uint<32>>(v),
        Value::U64(v) => encode::<Uint<64>>(v),
        Value::U128(v) => encode::<Uint<128>>(v),
        Value::I8(v) => encode::<Int<8>>(&narrow(*v)?),
        Value::I16(v) => encode::<Int<16>>(&narrow(*v)?),
        Value::I32(v) => encode::<Int<32>>(v),
        Value::I64(v) => encode::<Int<64>>(v),
        Value::I128(v) => encode::<Int<128>>(v),
        Value::StringArray(items) => encode::<Array<sol_data::String>>(
            &items
                .iter()
                .map(|text| to_alloc_string(&text))
                .collect::<Result<AllocVec<_>, _>>()?,
        ),
        Value::U8Array(bytes) => encode::<Array<Uint<8>>>(&bytes.to_alloc_vec()),
        Value::U16Array(items) => encode::<Array<Uint<16>>>(&narrow_all(items)?),
        Value::U32Array(items) => encode::<Array<Uint<32>>>(&items.iter().collect()),
        Value::U64Array(items) => encode::<Array<Uint<64>>>(&items.iter().collect()),
        Value::U128Array(items) => encode::<Array<Uint<128>>>(&items.iter().collect()),
        Value::I8Array(items) => encode::<Array<Int<8>>>(&narrow_all(items)?),
        Value::I16Array(items) => encode::<Array<Int<16>>>(&narrow_all(items)?),
        Value::I32Array(items) => encode::<Array<Int<32>>>(&items.iter().collect()),
        Value::I64Array(items) => encode::<Array<Int<64>>>(&items.iter().collect()),
        Value::I128Array(items) => encode::<Array<Int<128>>>(&items.iter().collect()),
        Value::Address(data) => encode::<AddressTuple>(&AddressTuple::from_address_data(data)?),
        Value::Bytes(bytes) => encode::<sol_data::Bytes>(&EvmBytes::from(bytes.to_alloc_vec())),
    };

    Ok(encoded)
}

fn decode_single(
    env: &Env,
    msg_type: MsgType,
    data: &[u8],
    validate: bool,
) -> Result<Value, PayloadError> {
    let value = match msg_type {
        MsgType::String => Value::String(String::from_str(
            env,
            &decode::<sol_data::String>(data, validate)?,
        )),
        MsgType::U8 => Value::U8(decode::<Uint<8>>(data, validate)?.into()),
        MsgType::U16 => Value::U16(decode::<Uint<16>>(data, validate)?.into()),
        MsgType::U32 => Value::U32(decode::<Uint<32>>(data, validate)?),
        MsgType::U64 => Value::U64(decode::<Uint<64>>(data, validate)?),
        MsgType::U128 => Value::U128(decode::<Uint<128>>(data, validate)?),
        MsgType::I8 => Value::I8(decode::<Int<8>>(data, validate)?.into()),
        MsgType::I16 => Value::I16(decode::<Int<16>>(data, validate)?.into()),
        MsgType::I32 => Value::I32(decode::<Int<32>>(data, validate)?),
        MsgType::I64 => Value::I64(decode::<Int<64>>(data, validate)?),
        MsgType::I128 => Value::I128(decode::<Int<128>>(data, validate)?),
        MsgType::StringArray => Value::StringArray(vec_from_iter(
            env,
            decode::<Array<sol_data::String>>(data, validate)?
                .iter()
                .map(|text| String::from_str(env, text)),
        )),
        MsgType::U8Array => Value::U8Array(Bytes::from_slice(
            env,
            &decode::<Array<Uint<8>>>(data, validate)?,
        )),
        MsgType::U16Array => Value::U16Array(vec_from_iter(
            env,
            decode::<Array<Uint<16>>>(data, validate)?
                .into_iter()
                .map(u32::from),
        )),
        MsgType::U32Array => Value::U32Array(vec_from_iter(
            env,
            decode::<Array<Uint<32>>>(data, validate)?,
        )),
        MsgType::U64Array => Value::U64Array(vec_from_iter(
            env,
            decode::<Array<Uint<64>>>(data, validate)?,
        )),
        MsgType::U128Array => Value::U128Array(vec_from_iter(
            env,
            decode::<Array<Uint<128>>>(data, validate)?,
        )),
        MsgType::I8Array => Value::I8Array(vec_from_iter(
            env,
            decode::<Array<Int<8>>>(data, validate)?
                .into_iter()
                .map(i32::from),
        )),
        MsgType::I16Array => Value::I16Array(vec_from_iter(
            env,
            decode::<Array<Int<16>>>(data, validate)?
                .into_iter()
                .map(i32::from),
        )),
        MsgType::I32Array => Value::I32Array(vec_from_iter(
            env,
            decode::<Array<Int<32>>>(data, validate)?,
        )),
        MsgType::I64Array => Value::I64Array(vec_from_iter(
            env,
            decode::<Array<Int<64>>>(data, validate)?,
        )),
        MsgType::I128Array => Value::I128Array(vec_from_iter(
            env,
            decode::<Array<Int<128>>>(data, validate)?,
        )),
        MsgType::Address => {
            Value::Address(decode::<AddressTuple>(data, validate)?.into_address_data(env))
        }
        MsgType::Bytes => Value::Bytes(Bytes::from_slice(
            env,
            &decode::<sol_data::Bytes>(data, validate)?,
        )),
    };

    Ok(value)
}

fn encode<T: SolType>(value: &T::RustType) -> AllocVec<u8> {
    T::abi_encode(value)
}

fn decode<T: SolType>(data: &[u8], validate: bool) -> Result<T::RustType, PayloadError> {
    Ok(T::abi_decode(data, validate)?)
}

fn vec_from_iter<T, I>(env: &Env, items: I) -> Vec<T>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
    I: IntoIterator<Item = T>,
{
    let mut vec = Vec::new(env);
    for item in items {
        vec.push_back(item);
    }
    vec
}

fn narrow<T: TryFrom<S>, S>(value: S) -> Result<T, PayloadError> {
    T::try_from(value).map_err(|_| PayloadError::ValueOutOfRange)
}

fn narrow_all<T, S>(items: &Vec<S>) -> Result<AllocVec<T>, PayloadError>
where
    T: TryFrom<S>,
    S: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    items.iter().map(narrow).collect()
}

fn to_alloc_string(text: &String) -> Result<AllocString, PayloadError> {
    let mut buffer = alloc::vec![0u8; text.len() as usize];
    text.copy_into_slice(&mut buffer);

    AllocString::from_utf8(buffer).map_err(|_| PayloadError::MalformedBuffer)
}

fn word(buffer: &[u8], at: usize) -> Result<&Word, PayloadError> {
    buffer
        .get(at..at + WORD_SIZE)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(PayloadError::MalformedBuffer)
}

fn offset(word: &Word) -> Result<usize, PayloadError> {
    let offset =
        u64::try_from(U256::from_be_bytes(*word)).map_err(|_| PayloadError::MalformedBuffer)?;

    usize::try_from(offset).map_err(|_| PayloadError::MalformedBuffer)
}

#[cfg(test)]
mod test {
    use super::{decode_params, decode_value, encode_params, encode_value, AddressTuple, WORD_SIZE};
    use crate::address::AddressData;
    use crate::error::PayloadError;
    use crate::types::{MsgType, Value};
    use alloy_primitives::{Address as EvmAddress, Bytes as EvmBytes};
    use alloy_sol_types::sol_data::{self, Array, Int, Uint};
    use alloy_sol_types::SolType;
    use hex_literal::hex;
    use omnichain_std::{assert_err, assert_ok};
    use soroban_sdk::{vec, Bytes, BytesN, Env, String};

    /// `to` item of an inbound transfer: `uint8[]` holding an EVM address, one byte per word.
    const RECIPIENT_ITEM: &str = "0000000000000000000000000000000000000000000000000000000000000020000000000000000000000000000000000000000000000000000000000000001400000000000000000000000000000000000000000000000000000000000000c000000000000000000000000000000000000000000000000000000000000000f100000000000000000000000000000000000000000000000000000000000000700000000000000000000000000000000000000000000000000000000000000061000000000000000000000000000000000000000000000000000000000000000600000000000000000000000000000000000000000000000000000000000000d200000000000000000000000000000000000000000000000000000000000000d70000000000000000000000000000000000000000000000000000000000000020000000000000000000000000000000000000000000000000000000000000008c0000000000000000000000000000000000000000000000000000000000000065000000000000000000000000000000000000000000000000000000000000008600000000000000000000000000000000000000000000000000000000000000d100000000000000000000000000000000000000000000000000000000000000c800000000000000000000000000000000000000000000000000000000000000ae00000000000000000000000000000000000000000000000000000000000000c5000000000000000000000000000000000000000000000000000000000000002000000000000000000000000000000000000000000000000000000000000000d9000000000000000000000000000000000000000000000000000000000000009e000000000000000000000000000000000000000000000000000000000000009f0000000000000000000000000000000000000000000000000000000000000014";
    const RECIPIENT: [u8; 20] = hex!("c0f1706106d2d7208c6586d1c8aec520d99e9f14");
    const AMOUNT_ITEM: [u8; 32] =
        hex!("0000000000000000000000000000000000000000000000000000000000000100");

    /// Encodes `$value` as a one-element Solidity parameter list of type `$sol_type`.
    macro_rules! params {
        ($sol_type:ty, $value:expr) => {
            <($sol_type,) as SolType>::abi_encode_params(&($value,))
        };
    }

    fn assert_matches_reference(env: &Env, value: Value, expected: std::vec::Vec<u8>) {
        assert_eq!(
            assert_ok!(encode_value(env, &value)).to_alloc_vec(),
            expected,
            "encoding of {:?}",
            value
        );
        assert_eq!(
            assert_ok!(decode_value(
                env,
                value.msg_type(),
                &Bytes::from_slice(env, &expected)
            )),
            value
        );
    }

    #[test]
    fn transfer_fixture_items_decode() {
        let env = Env::default();
        let recipient_item = Bytes::from_slice(&env, &hex::decode(RECIPIENT_ITEM).unwrap());

        assert_eq!(
            assert_ok!(decode_value(&env, MsgType::U8Array, &recipient_item)),
            Value::U8Array(Bytes::from_slice(&env, &RECIPIENT))
        );
        assert_eq!(
            assert_ok!(decode_value(
                &env,
                MsgType::U128,
                &Bytes::from_slice(&env, &AMOUNT_ITEM)
            )),
            Value::U128(256)
        );

        assert_eq!(
            assert_ok!(encode_value(
                &env,
                &Value::U8Array(Bytes::from_slice(&env, &RECIPIENT))
            )),
            recipient_item
        );
    }

    #[test]
    fn scalars_match_reference_encoder() {
        let env = Env::default();

        assert_matches_reference(&env, Value::U8(200), params!(Uint<8>, 200u8));
        assert_matches_reference(&env, Value::U16(65_535), params!(Uint<16>, 65_535u16));
        assert_matches_reference(&env, Value::U32(u32::MAX), params!(Uint<32>, u32::MAX));
        assert_matches_reference(&env, Value::U64(u64::MAX), params!(Uint<64>, u64::MAX));
        assert_matches_reference(&env, Value::U128(256), params!(Uint<128>, 256u128));
        assert_matches_reference(&env, Value::I8(-128), params!(Int<8>, -128i8));
        assert_matches_reference(&env, Value::I16(-300), params!(Int<16>, -300i16));
        assert_matches_reference(&env, Value::I32(i32::MAX), params!(Int<32>, i32::MAX));
        assert_matches_reference(&env, Value::I64(-5), params!(Int<64>, -5i64));
        assert_matches_reference(&env, Value::I128(i128::MIN), params!(Int<128>, i128::MIN));
    }

    #[test]
    fn dynamic_values_match_reference_encoder() {
        let env = Env::default();

        assert_matches_reference(
            &env,
            Value::String(String::from_str(&env, "receive_token")),
            params!(sol_data::String, std::string::String::from("receive_token")),
        );
        assert_matches_reference(
            &env,
            Value::String(String::from_str(&env, "")),
            params!(sol_data::String, std::string::String::new()),
        );
        assert_matches_reference(
            &env,
            Value::Bytes(Bytes::from_slice(&env, &[0xab; 33])),
            params!(sol_data::Bytes, EvmBytes::from(std::vec![0xab; 33])),
        );
        assert_matches_reference(
            &env,
            Value::StringArray(vec![
                &env,
                String::from_str(&env, "NEAR"),
                String::from_str(&env, ""),
                String::from_str(&env, "a string that is longer than one word"),
            ]),
            params!(
                Array<sol_data::String>,
                std::vec![
                    std::string::String::from("NEAR"),
                    std::string::String::new(),
                    std::string::String::from("a string that is longer than one word"),
                ]
            ),
        );
        assert_matches_reference(
            &env,
            Value::U16Array(vec![&env, 1u32, 65_535]),
            params!(Array<Uint<16>>, std::vec![1u16, 65_535]),
        );
        assert_matches_reference(
            &env,
            Value::U128Array(vec![&env, 0u128, u128::MAX]),
            params!(Array<Uint<128>>, std::vec![0u128, u128::MAX]),
        );
        assert_matches_reference(
            &env,
            Value::I8Array(vec![&env, -1i32, 127]),
            params!(Array<Int<8>>, std::vec![-1i8, 127]),
        );
        assert_matches_reference(
            &env,
            Value::I64Array(vec![&env]),
            params!(Array<Int<64>>, std::vec::Vec::<i64>::new()),
        );
        assert_matches_reference(
            &env,
            Value::U8Array(Bytes::from_slice(&env, &[1, 2, 3])),
            params!(Array<Uint<8>>, std::vec![1u8, 2, 3]),
        );
    }

    #[test]
    fn address_tuple_matches_reference_encoder() {
        let env = Env::default();

        let evm = AddressData {
            chain_type: 1,
            evm_address: BytesN::from_array(&env, &RECIPIENT),
            other_address: String::from_str(&env, ""),
        };
        assert_matches_reference(
            &env,
            Value::Address(evm),
            params!(
                AddressTuple,
                AddressTuple {
                    chainType: 1,
                    evmAddress: EvmAddress::from(RECIPIENT),
                    otherAddress: std::string::String::new(),
                }
            ),
        );

        let near = AddressData {
            chain_type: 3,
            evm_address: BytesN::from_array(&env, &[0; 20]),
            other_address: String::from_str(&env, "alice.near"),
        };
        assert_matches_reference(
            &env,
            Value::Address(near),
            params!(
                AddressTuple,
                AddressTuple {
                    chainType: 3,
                    evmAddress: EvmAddress::ZERO,
                    otherAddress: std::string::String::from("alice.near"),
                }
            ),
        );
    }

    #[test]
    fn sequence_round_trips_and_matches_reference_encoder() {
        let env = Env::default();
        let values = vec![
            &env,
            Value::String(String::from_str(&env, "NEAR")),
            Value::U128(256),
            Value::U32Array(vec![&env, 7u32, 8]),
            Value::I32(-1),
            Value::Bytes(Bytes::from_slice(&env, b"calldata")),
        ];
        let msg_types = [
            MsgType::String,
            MsgType::U128,
            MsgType::U32Array,
            MsgType::I32,
            MsgType::Bytes,
        ];

        let encoded = assert_ok!(encode_params(&env, &values));
        let reference = <(
            sol_data::String,
            Uint<128>,
            Array<Uint<32>>,
            Int<32>,
            sol_data::Bytes,
        ) as SolType>::abi_encode_params(&(
            std::string::String::from("NEAR"),
            256u128,
            std::vec![7u32, 8],
            -1i32,
            EvmBytes::from_static(b"calldata"),
        ));

        assert_eq!(encoded.to_alloc_vec(), reference);
        assert_eq!(assert_ok!(decode_params(&env, &msg_types, &encoded)), values);
    }

    #[test]
    fn sequence_with_non_canonical_block_is_malformed() {
        let env = Env::default();
        let values = vec![
            &env,
            Value::String(String::from_str(&env, "NEAR")),
            Value::U8(7),
        ];
        let encoded = assert_ok!(encode_params(&env, &values)).to_alloc_vec();

        // pad the string block with a non-zero byte after its data
        let mut dirty = encoded.clone();
        let last = dirty.len() - 1;
        dirty[last] = 0xff;

        assert_err!(
            decode_params(
                &env,
                &[MsgType::String, MsgType::U8],
                &Bytes::from_slice(&env, &dirty)
            ),
            PayloadError::MalformedBuffer
        );

        let mut unaligned = encoded;
        unaligned[WORD_SIZE - 1] = 0x41;
        assert_err!(
            decode_params(
                &env,
                &[MsgType::String, MsgType::U8],
                &Bytes::from_slice(&env, &unaligned)
            ),
            PayloadError::MalformedBuffer
        );
    }

    #[test]
    fn values_outside_their_width_are_rejected() {
        let env = Env::default();

        assert_err!(encode_value(&env, &Value::U8(256)), PayloadError::ValueOutOfRange);
        assert_err!(encode_value(&env, &Value::I8(128)), PayloadError::ValueOutOfRange);
        assert_err!(
            encode_value(&env, &Value::I16Array(vec![&env, 0i32, -32_769])),
            PayloadError::ValueOutOfRange
        );

        let wide = Bytes::from_slice(&env, &params!(Uint<16>, 300u16));
        assert_err!(
            decode_value(&env, MsgType::U8, &wide),
            PayloadError::ValueOutOfRange
        );
        let negative = Bytes::from_slice(&env, &params!(Int<64>, -1i64));
        assert_err!(
            decode_value(&env, MsgType::U64, &negative),
            PayloadError::ValueOutOfRange
        );
    }

    #[test]
    fn buffer_that_is_not_word_aligned_is_malformed() {
        let env = Env::default();
        let mut data = params!(Uint<128>, 256u128);
        data.push(0);

        assert_err!(
            decode_value(&env, MsgType::U128, &Bytes::from_slice(&env, &data)),
            PayloadError::MalformedBuffer
        );
        assert_err!(
            decode_value(&env, MsgType::U128, &Bytes::new(&env)),
            PayloadError::MalformedBuffer
        );
    }

    #[test]
    fn offsets_and_lengths_outside_the_buffer_are_malformed() {
        let env = Env::default();
        let valid = params!(sol_data::String, std::string::String::from("hello"));

        let mut offset_past_end = valid.clone();
        offset_past_end[WORD_SIZE - 1] = 0x60;
        assert_err!(
            decode_value(&env, MsgType::String, &Bytes::from_slice(&env, &offset_past_end)),
            PayloadError::MalformedBuffer
        );

        let mut unaligned_offset = valid.clone();
        unaligned_offset[WORD_SIZE - 1] = 0x21;
        assert_err!(
            decode_value(&env, MsgType::String, &Bytes::from_slice(&env, &unaligned_offset)),
            PayloadError::MalformedBuffer
        );

        let mut length_past_end = valid.clone();
        length_past_end[2 * WORD_SIZE - 1] = 0x41;
        assert_err!(
            decode_value(&env, MsgType::String, &Bytes::from_slice(&env, &length_past_end)),
            PayloadError::MalformedBuffer
        );

        let mut huge_length = valid;
        huge_length[WORD_SIZE..2 * WORD_SIZE].fill(0xff);
        assert_err!(
            decode_value(&env, MsgType::String, &Bytes::from_slice(&env, &huge_length)),
            PayloadError::MalformedBuffer
        );

        let mut array_past_end = params!(Array<Uint<64>>, std::vec![1u64, 2]);
        array_past_end[2 * WORD_SIZE - 1] = 3;
        assert_err!(
            decode_value(&env, MsgType::U64Array, &Bytes::from_slice(&env, &array_past_end)),
            PayloadError::MalformedBuffer
        );
    }

    #[test]
    fn missing_head_words_are_malformed() {
        let env = Env::default();
        let encoded = assert_ok!(encode_params(&env, &vec![&env, Value::U32(1)]));

        assert_err!(
            decode_params(&env, &[MsgType::U32, MsgType::U32], &encoded),
            PayloadError::MalformedBuffer
        );
    }
}
