//! Library error types.
use std::fmt;

/// A decode failure.
///
/// Every failure mode of [`crate::decode`] is one of this closed set of
/// kinds; there is no panic path for malformed input. `DuplicateKey` is
/// deliberately absent: a map whose keys are merely equal (rather than out
/// of order) is already caught by [`Error::CanonicOrder`], since canonical
/// order requires each key to be *strictly* greater than the one before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Input ended before a value could be fully read.
    Eof,
    /// The first byte (or its major kind) is not one this format assigns.
    Tag,
    /// A `Utf8String` or a map key contains malformed UTF-8.
    Utf8,
    /// A `Float` is a NaN with a bit pattern other than the canonical
    /// quiet NaN, `0x7FF8000000000000`.
    InvalidNaN,
    /// A map key's major kind is not `Utf8String`.
    Utf8Key,
    /// A length prefix used a wider form than the value required.
    CanonicLength,
    /// A map key is not strictly greater than its predecessor.
    CanonicOrder,
    /// Nesting depth exceeded [`crate::MAX_DEPTH`].
    DepthLimit,
    /// `decode_exact` succeeded but did not consume the whole input.
    TrailingData,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Eof => write!(f, "input ended before a value was fully read"),
            Error::Tag => write!(f, "unassigned type byte or major kind"),
            Error::Utf8 => write!(f, "string contains malformed UTF-8"),
            Error::InvalidNaN => write!(f, "float is a NaN with a non-canonical bit pattern"),
            Error::Utf8Key => write!(f, "map key is not a Utf8String"),
            Error::CanonicLength => write!(f, "length prefix is wider than the canonical form"),
            Error::CanonicOrder => {
                write!(f, "map key is not strictly greater than its predecessor")
            }
            Error::DepthLimit => write!(f, "value nesting exceeded the depth limit"),
            Error::TrailingData => write!(f, "decoded value did not consume the entire input"),
        }
    }
}

impl std::error::Error for Error {}
