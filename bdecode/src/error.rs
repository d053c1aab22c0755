use bytes::Bytes;
use snafu::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    //
    // Truncation errors.
    //

    // `Eof` (nothing to decode) is a special case of `Incomplete` (input ends mid-value).  Callers
    // decoding a sequence of values use it to detect a clean end of input.
    #[snafu(display("end of file"))]
    Eof,
    #[snafu(display("incomplete bencode data"))]
    Incomplete,

    //
    // Structural errors.
    //
    #[snafu(display("unknown prefix character at {offset}: '{}'", prefix.escape_ascii()))]
    Prefix { prefix: u8, offset: usize },

    #[snafu(display(
        "expect digit or ':' in byte string length at {offset}: '{}'",
        byte.escape_ascii(),
    ))]
    ByteStringLength { byte: u8, offset: usize },
    #[snafu(display("byte string size overflow: {size:?}"))]
    ByteStringSizeOverflow { size: Bytes },

    #[snafu(display("expect byte string dictionary key at {offset}: {type_name}"))]
    KeyType {
        type_name: &'static str,
        offset: usize,
    },

    #[snafu(display("nesting depth limit exceeded at {offset}: {max_depth}"))]
    DepthExceeded { max_depth: usize, offset: usize },

    //
    // Integer errors.
    //
    #[snafu(display("invalid integer: {integer:?}"))]
    Integer { integer: Bytes },
    #[snafu(display("expect strict integer at {offset}: {integer:?}"))]
    StrictInteger { integer: Bytes, offset: usize },
    #[snafu(display("{int_type_name} overflow: {integer:?}"))]
    IntegerOverflow {
        int_type_name: &'static str,
        integer: Bytes,
    },

    //
    // Top-level errors.
    //
    #[snafu(display("trailing data at {offset}: {size} bytes"))]
    TrailingData { offset: usize, size: usize },
}

impl Error {
    pub fn is_eof(&self) -> bool {
        self == &Error::Eof
    }

    pub fn is_incomplete(&self) -> bool {
        self == &Error::Incomplete
    }

    /// True if more input could have turned the failure into a success.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::Eof | Error::Incomplete)
    }
}
