//! Bencode Decoder
//!
//! Decodes the four bencode value kinds (integers, byte strings, lists, and dictionaries) from a
//! byte buffer into a value tree.
//!
//! ```
//! use bdecode::Value;
//!
//! let value = bdecode::decode(&b"d3:cow3:moo4:spam4:eggse"[..]).unwrap();
//! let dict = value.as_dictionary().unwrap();
//! assert_eq!(dict[&b"cow"[..]], Value::ByteString("moo".into()));
//! ```

pub mod borrow;
pub mod error;
pub mod own;
pub mod value;

mod bstr;
mod decode;
mod int;
mod json;
mod parse;

#[cfg(test)]
mod testing;

//
// Implementer's Notes:
//
// * The parser is a recursive descent driven by a per-call state machine.  Each call takes the
//   buffer and a start offset and returns the value together with the offset of the first
//   unconsumed byte; there is no shared cursor.
//
// * Integers are kept as the decimal text accumulated by the parser, so they are not limited to
//   64 bits.  Convert them with `Integer::parse` when a machine integer is needed.
//
// * The default options reproduce a lenient decoder: unrecognized bytes inside an integer are
//   skipped, and trailing bytes after the top-level value are ignored.  Both can be tightened
//   through `Options`.
//

pub use crate::bstr::OwnedBStr;
pub use crate::decode::{DEFAULT_MAX_DEPTH, Decoder, Options, Values, decode, decode_slice, parse};
pub use crate::error::Error;
pub use crate::int::Int;
pub use crate::json::Json;
pub use crate::value::Integer;

// Prefer `own` to `borrow`.
pub use crate::own::Value;
