//! Streaming UTF-8 validation.
//!
//! This is Bjoern Hoehrmann's well-known byte-class-plus-transition-table
//! DFA (<https://bjoern.hoehrmann.de/utf-8/decoder/dfa/>): a 256-entry table
//! maps each input byte to one of twelve character classes, and a
//! 9-state transition table maps `(state, class)` to the next state. Only
//! two states are externally observable — [`State::Accept`] and
//! [`State::Reject`] — every raw table state in between means "well-formed
//! so far, but more bytes are needed to complete the sequence". Feeding a
//! well-formed byte sequence always ends back in `Accept`; overlong
//! encodings, surrogate halves, codepoints past `U+10FFFF`, and truncated
//! sequences all end in `Reject` (or never reach `Accept`).

const UTF8_ACCEPT: u8 = 0;
const UTF8_REJECT: u8 = 12;

#[rustfmt::skip]
const BYTE_CLASS: [u8; 256] = [
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, 0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, 9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,
    7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7, 7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,
    8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2, 2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3, 11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,
];

#[rustfmt::skip]
const STATE_TABLE: [u8; 108] = [
     0,12,24,36,60,96,84,12,12,12,48,72,
    12, 0,12,12,12,12,12, 0,12, 0,12,12,
    12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,24,12,12,12,12,
    12,24,12,12,12,12,12,12,12,24,12,12,
    12,12,12,12,12,12,12,12,12,12,12,12,
    12,36,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,12,12,12,12,12,
    12,12,12,12,12,12,12,12,12,12,12,12,
];

/// Observable validation state of the DFA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// The bytes fed so far form zero or more complete, well-formed
    /// codepoints, with no partial sequence outstanding.
    Accept,
    /// The bytes fed so far are definitely not well-formed UTF-8. This
    /// state is sticky: once reached, no further input changes it.
    Reject,
    /// A multi-byte sequence is in progress; more bytes are required
    /// before this can resolve to `Accept` or `Reject`.
    Incomplete,
}

/// A streaming UTF-8 validator: feed bytes one at a time, and read back
/// whether the sequence seen so far is valid, invalid, or still in
/// progress.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Validator {
    raw: u8,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self { raw: UTF8_ACCEPT }
    }

    /// Feed one more byte to the DFA.
    pub(crate) fn feed(&mut self, byte: u8) {
        let class = BYTE_CLASS[byte as usize];
        self.raw = STATE_TABLE[(self.raw + class) as usize];
    }

    pub(crate) fn state(&self) -> State {
        match self.raw {
            UTF8_ACCEPT => State::Accept,
            UTF8_REJECT => State::Reject,
            _ => State::Incomplete,
        }
    }
}

/// Validate that `bytes` is, in its entirety, well-formed UTF-8.
pub(crate) fn is_valid(bytes: &[u8]) -> bool {
    let mut validator = Validator::new();
    for &b in bytes {
        validator.feed(b);
        if validator.state() == State::Reject {
            return false;
        }
    }
    validator.state() == State::Accept
}
