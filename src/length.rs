//! Canonical minimum-width length codec.
//!
//! Unsigned sizes (string byte lengths, array element counts, map entry
//! counts) are always encoded in the narrowest of five forms. The high 3
//! bits of the type byte carry the major kind; the low 5 bits either hold
//! the size directly (0–23) or select one of four wider forms, each
//! requiring that size to not have fit in a narrower one.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{Error, Result};

pub(crate) const MAJOR_BYTE_STRING: u8 = 2;
pub(crate) const MAJOR_UTF8_STRING: u8 = 3;
pub(crate) const MAJOR_ARRAY: u8 = 4;
pub(crate) const MAJOR_MAP: u8 = 5;

/// Literal type bytes that bypass the length codec entirely.
pub(crate) const TYPE_FALSE: u8 = 0xF4;
pub(crate) const TYPE_TRUE: u8 = 0xF5;
pub(crate) const TYPE_NULL: u8 = 0xF6;
pub(crate) const TYPE_FLOAT: u8 = 0xFB;

/// Number of bytes a length prefix of size `n` needs *beyond* the type byte.
pub(crate) fn length_codec_bytes(n: u64) -> u8 {
    if n <= 23 {
        0
    } else if n <= u8::MAX as u64 {
        1
    } else if n <= u16::MAX as u64 {
        2
    } else if n <= u32::MAX as u64 {
        4
    } else {
        8
    }
}

/// Write a type byte (`major << 5 | width selector`) followed by the
/// canonical-width length bytes for `n`.
pub(crate) fn encode(buf: &mut Vec<u8>, major: u8, n: u64) {
    match length_codec_bytes(n) {
        0 => buf.push((major << 5) | (n as u8)),
        1 => {
            buf.push((major << 5) | 24);
            buf.push(n as u8);
        }
        2 => {
            buf.push((major << 5) | 25);
            buf.write_u16::<BigEndian>(n as u16)
                .expect("writes into a Vec<u8> never fail");
        }
        4 => {
            buf.push((major << 5) | 26);
            buf.write_u32::<BigEndian>(n as u32)
                .expect("writes into a Vec<u8> never fail");
        }
        _ => {
            buf.push((major << 5) | 27);
            buf.write_u64::<BigEndian>(n)
                .expect("writes into a Vec<u8> never fail");
        }
    }
}

/// Decode the length that follows a type byte whose low 5 bits are `low5`.
///
/// Fails with [`Error::CanonicLength`] if a wider form than necessary was
/// used, and with [`Error::Tag`] if `low5` is one of the unassigned values
/// 28–31.
pub(crate) fn decode(low5: u8, buf: &mut &[u8]) -> Result<u64> {
    match low5 {
        0..=23 => Ok(low5 as u64),
        24 => {
            let n = buf.read_u8().map_err(|_| Error::Eof)? as u64;
            if n <= 23 {
                Err(Error::CanonicLength)
            } else {
                Ok(n)
            }
        }
        25 => {
            let n = buf.read_u16::<BigEndian>().map_err(|_| Error::Eof)? as u64;
            if n <= u8::MAX as u64 {
                Err(Error::CanonicLength)
            } else {
                Ok(n)
            }
        }
        26 => {
            let n = buf.read_u32::<BigEndian>().map_err(|_| Error::Eof)? as u64;
            if n <= u16::MAX as u64 {
                Err(Error::CanonicLength)
            } else {
                Ok(n)
            }
        }
        27 => {
            let n = buf.read_u64::<BigEndian>().map_err(|_| Error::Eof)?;
            if n <= u32::MAX as u64 {
                Err(Error::CanonicLength)
            } else {
                Ok(n)
            }
        }
        _ => Err(Error::Tag),
    }
}
