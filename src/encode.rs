//! The canonical encoder and its size oracle.
use byteorder::{BigEndian, WriteBytesExt};

use crate::length::{self, MAJOR_ARRAY, MAJOR_BYTE_STRING, MAJOR_MAP, MAJOR_UTF8_STRING};
use crate::length::{TYPE_FALSE, TYPE_FLOAT, TYPE_NULL, TYPE_TRUE};
use crate::Value;

/// Encode `value` into its unique canonical byte sequence.
///
/// A `Value` is always canonical by construction — there is no non-
/// canonical way to represent one in this model — so encoding never fails.
/// Unlike `decode`, which enforces `MAX_DEPTH` against untrusted input,
/// encoding a `Value` already sitting in memory never fails on account of
/// its nesting depth.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_size(value) as usize);
    encode_into(&mut buf, value);
    buf
}

/// The exact number of bytes [`encode`] would produce for `value`, computed
/// without allocating or writing any bytes.
pub fn encoded_size(value: &Value) -> u64 {
    size_of(value)
}

fn encode_into(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => buf.push(TYPE_NULL),
        Value::True => buf.push(TYPE_TRUE),
        Value::False => buf.push(TYPE_FALSE),
        Value::ByteString(bytes) => {
            length::encode(buf, MAJOR_BYTE_STRING, bytes.len() as u64);
            buf.extend_from_slice(bytes);
        }
        Value::Utf8String(s) => {
            length::encode(buf, MAJOR_UTF8_STRING, s.len() as u64);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Float(f) => {
            buf.push(TYPE_FLOAT);
            buf.write_u64::<BigEndian>(canonical_bits(*f))
                .expect("writes into a Vec<u8> never fail");
        }
        Value::Array(elems) => {
            length::encode(buf, MAJOR_ARRAY, elems.len() as u64);
            for elem in elems {
                encode_into(buf, elem);
            }
        }
        Value::Map(entries) => {
            length::encode(buf, MAJOR_MAP, entries.len() as u64);
            for (key, val) in entries {
                length::encode(buf, MAJOR_UTF8_STRING, key.len() as u64);
                buf.extend_from_slice(key.as_bytes());
                encode_into(buf, val);
            }
        }
    }
}

fn size_of(value: &Value) -> u64 {
    match value {
        Value::Null | Value::True | Value::False => 1,
        Value::ByteString(bytes) => 1 + length::length_codec_bytes(bytes.len() as u64) as u64 + bytes.len() as u64,
        Value::Utf8String(s) => 1 + length::length_codec_bytes(s.len() as u64) as u64 + s.len() as u64,
        Value::Float(_) => 1 + 8,
        Value::Array(elems) => {
            1 + length::length_codec_bytes(elems.len() as u64) as u64
                + elems.iter().map(size_of).sum::<u64>()
        }
        Value::Map(entries) => {
            1 + length::length_codec_bytes(entries.len() as u64) as u64
                + entries
                    .iter()
                    .map(|(k, v)| {
                        1 + length::length_codec_bytes(k.len() as u64) as u64
                            + k.len() as u64
                            + size_of(v)
                    })
                    .sum::<u64>()
        }
    }
}

/// The bit pattern to write for a float, canonicalizing any NaN.
fn canonical_bits(f: f64) -> u64 {
    if f.is_nan() {
        crate::value::CANONICAL_NAN_BITS
    } else {
        f.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn encodes_literals() {
        assert_eq!(encode(&Value::Null), vec![0xF6]);
        assert_eq!(encode(&Value::True), vec![0xF5]);
        assert_eq!(encode(&Value::False), vec![0xF4]);
    }

    #[test]
    fn encodes_empty_array_and_map() {
        assert_eq!(encode(&Value::array(vec![])), vec![0x80]);
        assert_eq!(encode(&Value::map(BTreeMap::new())), vec![0xA0]);
    }

    #[test]
    fn encoded_size_matches_actual_output_length() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), Value::utf8_string("c"));
        let value = Value::array(vec![Value::utf8_string("a"), Value::map(map)]);
        assert_eq!(encode(&value).len() as u64, encoded_size(&value));
    }

    #[test]
    fn nan_always_encodes_to_canonical_bits() {
        let bits = {
            let bytes = encode(&Value::float(f64::from_bits(0x7FF8_0000_0000_0001)));
            u64::from_be_bytes(bytes[1..].try_into().unwrap())
        };
        assert_eq!(bits, crate::value::CANONICAL_NAN_BITS);
    }

    #[test]
    fn decode_then_encode_reproduces_original_bytes() {
        let bytes = [
            0x82, 0x61, b'a', 0xA1, 0x61, b'b', 0x61, b'c',
        ];
        let (value, consumed) = crate::decode::decode(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(encode(&value), bytes);
    }
}
