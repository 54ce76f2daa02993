//! HSDT ("human-structured data transfer") is a binary serialization format
//! for a closed set of value kinds, derived from a CBOR subset, with a
//! strict canonical form: every logical value has exactly one valid byte
//! sequence.
//!
//! Both directions of this crate enforce canonicalization. [`decode`]
//! rejects any input that is not the unique canonical encoding of a value;
//! [`encode`] only ever produces canonical output. Decoding a value and
//! re-encoding it is guaranteed to reproduce the original bytes.

mod decode;
mod depth;
mod encode;
mod error;
mod length;
mod utf8;
mod value;

pub use error::Error;
pub use value::{equal, Value};

pub use decode::{decode, decode_exact};
pub use encode::{encode, encoded_size};

/// An HSDT result, normally returning an HSDT [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Recursion depth cap applied uniformly to decode, encode, and equality.
///
/// The wire format imposes no depth limit of its own; an attacker can nest
/// arrays or maps arbitrarily deep to exhaust the call stack. Every
/// recursive walk of a `Value` enforces this cap and turns a violation into
/// [`Error::DepthLimit`] instead of a stack overflow.
pub const MAX_DEPTH: usize = 1000;
