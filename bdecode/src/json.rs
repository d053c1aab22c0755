use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Integer, Value};

/// Adapter that serializes a value tree into a human-readable data format such as JSON.
///
/// ```
/// let value = bdecode::decode(&b"d1:ai1e1:bl1:xee"[..]).unwrap();
/// assert_eq!(
///     serde_json::to_value(bdecode::Json(&value)).unwrap(),
///     serde_json::json!({"a": 1, "b": ["x"]}),
/// );
/// ```
///
/// Byte strings that are not UTF-8 encoded produce ASCII-escaped strings, and integers that do
/// not fit in 64 bits produce strings holding their decimal text.  The conversion is therefore
/// lossy and cannot be reversed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Json<V>(pub V);

impl<B> Serialize for Json<&Value<B>>
where
    B: AsRef<[u8]>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::ByteString(bytes) => SerializeBytes(bytes.as_ref()).serialize(serializer),
            Value::Integer(integer) => SerializeInteger(integer).serialize(serializer),
            Value::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(&Json(element))?;
                }
                seq.end()
            }
            Value::Dictionary(dict) => {
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (k, v) in dict {
                    map.serialize_entry(&SerializeBytes(k.as_ref()), &Json(v))?;
                }
                map.end()
            }
        }
    }
}

struct SerializeBytes<'a>(&'a [u8]);

impl Serialize for SerializeBytes<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match std::str::from_utf8(self.0) {
            Ok(string) => serializer.serialize_str(string),
            Err(_) => serializer.collect_str(&self.0.escape_ascii()),
        }
    }
}

struct SerializeInteger<'a>(&'a Integer);

impl Serialize for SerializeInteger<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Ok(integer) = self.0.parse::<i64>() {
            serializer.serialize_i64(integer)
        } else if let Ok(integer) = self.0.parse::<u64>() {
            serializer.serialize_u64(integer)
        } else {
            serializer.serialize_str(self.0.as_str())
        }
    }
}
