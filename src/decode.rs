//! The canonical decoder.
use std::collections::BTreeMap;

use byteorder::{BigEndian, ReadBytesExt};

use crate::depth::DepthGuard;
use crate::length::{self, MAJOR_ARRAY, MAJOR_BYTE_STRING, MAJOR_MAP, MAJOR_UTF8_STRING};
use crate::length::{TYPE_FALSE, TYPE_FLOAT, TYPE_NULL, TYPE_TRUE};
use crate::utf8;
use crate::value::CANONICAL_NAN_BITS;
use crate::{Error, Result, Value};

/// Decode one value from the front of `bytes`.
///
/// Returns the decoded value along with the number of bytes it consumed.
/// Trailing bytes after the value are left unconsumed; use
/// [`decode_exact`] when the whole input is expected to be a single value.
pub fn decode(bytes: &[u8]) -> Result<(Value, usize)> {
    let mut buf = bytes;
    let mut depth = DepthGuard::new();
    let value = read_value(&mut buf, &mut depth)?;
    let consumed = bytes.len() - buf.len();
    Ok((value, consumed))
}

/// Decode `bytes` as exactly one value, with no trailing bytes left over.
pub fn decode_exact(bytes: &[u8]) -> Result<Value> {
    let (value, consumed) = decode(bytes)?;
    if consumed != bytes.len() {
        return Err(Error::TrailingData);
    }
    Ok(value)
}

fn read_u8(buf: &mut &[u8]) -> Result<u8> {
    buf.read_u8().map_err(|_| Error::Eof)
}

fn read_bytes(buf: &mut &[u8], len: usize) -> Result<Vec<u8>> {
    if buf.len() < len {
        return Err(Error::Eof);
    }
    let (taken, rest) = buf.split_at(len);
    *buf = rest;
    Ok(taken.to_vec())
}

fn read_value(buf: &mut &[u8], depth: &mut DepthGuard) -> Result<Value> {
    let first = read_u8(buf)?;
    match first {
        TYPE_FALSE => return Ok(Value::False),
        TYPE_TRUE => return Ok(Value::True),
        TYPE_NULL => return Ok(Value::Null),
        TYPE_FLOAT => return read_float(buf),
        _ => {}
    }

    let major = first >> 5;
    let low5 = first & 0x1F;
    match major {
        MAJOR_BYTE_STRING => read_byte_string(buf, low5),
        MAJOR_UTF8_STRING => read_utf8_string(buf, low5),
        MAJOR_ARRAY => read_array(buf, low5, depth),
        MAJOR_MAP => read_map(buf, low5, depth),
        _ => Err(Error::Tag),
    }
}

fn read_float(buf: &mut &[u8]) -> Result<Value> {
    let bits = buf.read_u64::<BigEndian>().map_err(|_| Error::Eof)?;
    let f = f64::from_bits(bits);
    if f.is_nan() && bits != CANONICAL_NAN_BITS {
        return Err(Error::InvalidNaN);
    }
    Ok(Value::Float(f))
}

fn read_byte_string(buf: &mut &[u8], low5: u8) -> Result<Value> {
    let len = length::decode(low5, buf)? as usize;
    let bytes = read_bytes(buf, len)?;
    Ok(Value::ByteString(bytes))
}

fn read_utf8_string(buf: &mut &[u8], low5: u8) -> Result<Value> {
    let len = length::decode(low5, buf)? as usize;
    let bytes = read_bytes(buf, len)?;
    Ok(Value::Utf8String(bytes_to_string(bytes)?))
}

/// Validate `bytes` with our own UTF-8 DFA and move them into a `String`
/// without asking `std` to validate them a second time.
fn bytes_to_string(bytes: Vec<u8>) -> Result<String> {
    if !utf8::is_valid(&bytes) {
        return Err(Error::Utf8);
    }
    // SAFETY: `utf8::is_valid` just confirmed `bytes` is well-formed UTF-8
    // in its entirety.
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

fn read_array(buf: &mut &[u8], low5: u8, depth: &mut DepthGuard) -> Result<Value> {
    let len = length::decode(low5, buf)? as usize;
    // An array of N elements can never be encoded in fewer than N bytes
    // (every element, even `Null`, costs at least one byte), so this
    // rejects an oversized length claim before allocating for it.
    if buf.len() < len {
        return Err(Error::Eof);
    }
    depth.enter()?;
    let mut elems = Vec::with_capacity(len.min(buf.len()));
    for _ in 0..len {
        elems.push(read_value(buf, depth)?);
    }
    depth.exit();
    Ok(Value::Array(elems))
}

fn read_map(buf: &mut &[u8], low5: u8, depth: &mut DepthGuard) -> Result<Value> {
    let len = length::decode(low5, buf)? as usize;
    if buf.len() < len {
        return Err(Error::Eof);
    }
    depth.enter()?;
    let mut map = BTreeMap::new();
    let mut previous_key: Option<String> = None;
    for _ in 0..len {
        let key = read_map_key(buf)?;
        if let Some(prev) = &previous_key {
            if key.as_str() <= prev.as_str() {
                return Err(Error::CanonicOrder);
            }
        }
        let value = read_value(buf, depth)?;
        previous_key = Some(key.clone());
        map.insert(key, value);
    }
    depth.exit();
    Ok(Value::Map(map))
}

fn read_map_key(buf: &mut &[u8]) -> Result<String> {
    let first = read_u8(buf)?;
    if first >> 5 != MAJOR_UTF8_STRING {
        return Err(Error::Utf8Key);
    }
    let len = length::decode(first & 0x1F, buf)? as usize;
    let bytes = read_bytes(buf, len)?;
    bytes_to_string(bytes)
}
