use crate::value::{Integer, Value};

pub(crate) fn vb(bytes: &[u8]) -> Value<&[u8]> {
    Value::ByteString(bytes)
}

pub(crate) fn vi(integer: i64) -> Value<&'static [u8]> {
    Value::Integer(integer.into())
}

/// Integer from its raw text, for values that lenient decoding can produce.
pub(crate) fn vt(text: &str) -> Value<&'static [u8]> {
    Value::Integer(Integer::from_text(text.to_string()))
}

pub(crate) fn vl<const N: usize>(items: [Value<&[u8]>; N]) -> Value<&[u8]> {
    Value::List(items.into())
}

pub(crate) fn vd<'a, const N: usize>(items: [(&'a [u8], Value<&'a [u8]>); N]) -> Value<&'a [u8]> {
    Value::Dictionary(items.into())
}

/// Encodes a value tree for round-trip tests.
///
/// Dictionary entries are written in key order, and integers are written as their text.
pub(crate) fn encode<B>(value: &Value<B>) -> Vec<u8>
where
    B: AsRef<[u8]>,
{
    let mut buffer = Vec::new();
    encode_to(value, &mut buffer);
    buffer
}

fn encode_to<B>(value: &Value<B>, buffer: &mut Vec<u8>)
where
    B: AsRef<[u8]>,
{
    match value {
        Value::ByteString(bytes) => encode_bytes(bytes.as_ref(), buffer),
        Value::Integer(integer) => {
            buffer.push(b'i');
            buffer.extend_from_slice(integer.as_str().as_bytes());
            buffer.push(b'e');
        }
        Value::List(list) => {
            buffer.push(b'l');
            for element in list {
                encode_to(element, buffer);
            }
            buffer.push(b'e');
        }
        Value::Dictionary(dict) => {
            buffer.push(b'd');
            for (k, v) in dict {
                encode_bytes(k.as_ref(), buffer);
                encode_to(v, buffer);
            }
            buffer.push(b'e');
        }
    }
}

fn encode_bytes(bytes: &[u8], buffer: &mut Vec<u8>) {
    buffer.extend_from_slice(bytes.len().to_string().as_bytes());
    buffer.push(b':');
    buffer.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use crate::decode_slice;

    use super::*;

    #[test]
    fn round_trip() {
        for testdata in [
            vi(0),
            vi(i64::MIN),
            vt("-123456789012345678901234567890"),
            vb(b""),
            vb(b"\x00\xff:e"),
            vl([]),
            vd([]),
            vl([vi(1), vl([vb(b"x"), vd([])]), vd([(b"k", vl([]))])]),
            vd([
                (b"", vb(b"")),
                (b"\xff", vi(-1)),
                (b"spam", vl([vb(b"a"), vb(b"b")])),
                (b"cow", vd([(b"moo", vi(2))])),
            ]),
        ] {
            let encoded = encode(&testdata);
            let decoded = decode_slice(&encoded).unwrap();
            assert_eq!(decoded, testdata);
            assert_eq!(encode(&decoded), encoded);
        }
    }

    #[test]
    fn round_trip_decoded() {
        // Re-encoding a decoded value yields a structurally equal value, even when the original
        // input was not canonical.
        let testcases: [&[u8]; 5] = [
            b"d4:spam1:a3:cow1:be",
            b"d1:ai1e1:ai2ee",
            b"i3.14e",
            b"i12-34e",
            b"li007ei-0ee",
        ];
        for testdata in testcases {
            let value = decode_slice(testdata).unwrap();
            let encoded = encode(&value);
            assert_eq!(decode_slice(&encoded).unwrap(), value);
        }
    }
}
