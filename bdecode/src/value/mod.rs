mod int;

use std::collections::{BTreeMap, btree_map};
use std::fmt;
use std::vec;

use bytes::Bytes;

use crate::bstr::OwnedBStr;

pub use self::int::Integer;

#[derive(Clone, Eq, Hash, PartialEq)]
pub enum Value<B> {
    ByteString(B),
    Integer(Integer),
    List(List<B>),
    Dictionary(Dictionary<B>),
}

pub type List<B> = Vec<Value<B>>;
pub type ListIter<B> = vec::IntoIter<Value<B>>;

// Keys are kept sorted for lookup, not because the input is required to be.  A repeated key
// replaces the earlier entry.
pub type Dictionary<B> = BTreeMap<B, Value<B>>;
pub type DictionaryIter<B> = btree_map::IntoIter<B, Value<B>>;

/// Escapes non-ASCII bytes to produce `fmt::Debug` output.
pub(crate) struct EscapeAscii<'a>(pub(crate) &'a [u8]);

impl fmt::Debug for EscapeAscii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

struct DebugDictionary<'a, B>(&'a Dictionary<B>);

impl<B> fmt::Debug for DebugDictionary<'_, B>
where
    B: AsRef<[u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| (EscapeAscii(k.as_ref()), v)))
            .finish()
    }
}

impl<B> fmt::Debug for Value<B>
where
    B: AsRef<[u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByteString(bytes) => f
                .debug_tuple("ByteString")
                .field(&EscapeAscii(bytes.as_ref()))
                .finish(),
            Self::Integer(integer) => f.debug_tuple("Integer").field(integer).finish(),
            Self::List(list) => f.debug_tuple("List").field(list).finish(),
            Self::Dictionary(dict) => f
                .debug_tuple("Dictionary")
                .field(&DebugDictionary(dict))
                .finish(),
        }
    }
}

//
// Due to Rust's orphan rule, we cannot implement this:
// ```
// impl<B> TryFrom<Value<B>> for B { ... }
// ```
// It is implemented for each concrete `B` type in `borrow` and `own` instead.
//

impl<B> TryFrom<Value<B>> for Integer {
    type Error = Value<B>;

    fn try_from(value: Value<B>) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(integer) => Ok(integer),
            _ => Err(value),
        }
    }
}

impl<B> TryFrom<Value<B>> for List<B> {
    type Error = Value<B>;

    fn try_from(value: Value<B>) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list),
            _ => Err(value),
        }
    }
}

impl<B> TryFrom<Value<B>> for Dictionary<B> {
    type Error = Value<B>;

    fn try_from(value: Value<B>) -> Result<Self, Self::Error> {
        match value {
            Value::Dictionary(dict) => Ok(dict),
            _ => Err(value),
        }
    }
}

impl<B> Value<B>
where
    B: AsRef<[u8]>,
{
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ByteString(_) => "byte string",
            Self::Integer(_) => "integer",
            Self::List(_) => "list",
            Self::Dictionary(_) => "dictionary",
        }
    }

    pub fn as_byte_string(&self) -> Option<&[u8]> {
        match self {
            Self::ByteString(bytes) => Some(bytes.as_ref()),
            _ => None,
        }
    }

    pub fn as_byte_string_mut(&mut self) -> Option<&mut B> {
        match self {
            Self::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(integer) => Some(integer),
            _ => None,
        }
    }

    pub fn as_integer_mut(&mut self) -> Option<&mut Integer> {
        match self {
            Self::Integer(integer) => Some(integer),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List<B>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary<B>> {
        match self {
            Self::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_dictionary_mut(&mut self) -> Option<&mut Dictionary<B>> {
        match self {
            Self::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl<B> From<Value<&'_ [u8]>> for Value<B>
where
    B: OwnedBStr,
{
    fn from(value: Value<&'_ [u8]>) -> Self {
        value.to_own()
    }
}

impl Value<&'_ [u8]> {
    // We cannot implement `ToOwned` for `Value` unless we change `B` from `&[u8]` to `[u8]`.  It
    // seems like a good idea to avoid using the same name `to_owned`.
    pub fn to_own<B>(&self) -> Value<B>
    where
        B: OwnedBStr,
    {
        self.map_bytes(&mut B::from_bytes)
    }

    /// Converts to an owned tree whose byte strings share `buffer` rather than copying.
    ///
    /// Every byte string in `self` must be borrowed from `buffer`.
    pub(crate) fn to_shared(&self, buffer: &Bytes) -> Value<Bytes> {
        self.map_bytes(&mut |bytes: &[u8]| Bytes::from_shared(buffer, bytes))
    }

    fn map_bytes<B, F>(&self, f: &mut F) -> Value<B>
    where
        B: Ord,
        F: FnMut(&[u8]) -> B,
    {
        match self {
            Self::ByteString(bytes) => Value::ByteString(f(*bytes)),
            Self::Integer(integer) => Value::Integer(integer.clone()),
            Self::List(list) => Value::List(list.iter().map(|e| e.map_bytes(f)).collect()),
            Self::Dictionary(dict) => Value::Dictionary(
                dict.iter()
                    .map(|(k, v)| (f(*k), v.map_bytes(f)))
                    .collect(),
            ),
        }
    }
}
