use std::any;
use std::fmt;
use std::num::IntErrorKind;

use bytes::Bytes;

use crate::error::Error;
use crate::int::Int;

/// Bencode integer, kept as decimal text.
///
/// BEP 3 specifies integers as having unlimited precision.  Rather than restricting them to a
/// machine integer type, we keep the text that the parser accumulated, and convert on demand.
///
/// In lenient mode, the text is whatever the parser accumulated between `i` and `e`, which may
/// be empty or a lone `-` for malformed input; `Integer::parse` rejects those.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Integer(String);

impl Integer {
    pub(crate) fn from_text(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    pub fn parse<I>(&self) -> Result<I, Error>
    where
        I: Int,
    {
        self.0.parse::<I>().map_err(|error| match error.kind() {
            IntErrorKind::NegOverflow | IntErrorKind::PosOverflow => Error::IntegerOverflow {
                int_type_name: any::type_name::<I>(),
                integer: Bytes::copy_from_slice(self.0.as_bytes()),
            },
            _ => Error::Integer {
                integer: Bytes::copy_from_slice(self.0.as_bytes()),
            },
        })
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_from_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for Integer {
                fn from(value: $int) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Integer::from(-42i64).parse::<i64>(), Ok(-42));
        assert_eq!(Integer::from(255u8).parse::<u8>(), Ok(255));
        assert_eq!(Integer::from(u64::MAX).parse::<u64>(), Ok(u64::MAX));

        assert_eq!(
            Integer::from(256u16).parse::<u8>(),
            Err(Error::IntegerOverflow {
                int_type_name: "u8",
                integer: Bytes::from_static(b"256"),
            }),
        );
        assert_eq!(
            Integer::from(-1i8).parse::<u32>(),
            Err(Error::Integer {
                integer: Bytes::from_static(b"-1"),
            }),
        );
        assert_eq!(
            Integer::from(i128::MIN).parse::<i64>(),
            Err(Error::IntegerOverflow {
                int_type_name: "i64",
                integer: Bytes::from(i128::MIN.to_string()),
            }),
        );

        for text in ["", "-"] {
            assert_eq!(
                Integer::from_text(text.to_string()).parse::<i64>(),
                Err(Error::Integer {
                    integer: Bytes::copy_from_slice(text.as_bytes()),
                }),
            );
        }
    }

    #[test]
    fn text() {
        let integer = Integer::from_text("-00123456789012345678901234567890".to_string());
        assert_eq!(integer.as_str(), "-00123456789012345678901234567890");
        assert_eq!(integer.to_string(), "-00123456789012345678901234567890");
        assert!(integer.is_negative());
        assert!(!Integer::from(0u8).is_negative());
    }
}
