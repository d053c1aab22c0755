use std::mem;

use bytes::Bytes;
use snafu::prelude::*;

use crate::borrow::{Dictionary, List, Value};
use crate::decode::Options;
use crate::error::{
    ByteStringLengthSnafu, ByteStringSizeOverflowSnafu, DepthExceededSnafu, Error, KeyTypeSnafu,
    PrefixSnafu, StrictIntegerSnafu,
};
use crate::value::Integer;

/// Recursive-descent parser over an in-memory buffer.
///
/// Each call to `parse_at` runs its own state machine from `State::Null` and returns the value
/// together with the offset of the first byte it did not consume.  Nested values are parsed by
/// recursive calls, so the only state shared between calls is the (immutable) buffer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Parser<'o> {
    options: &'o Options,
}

#[derive(Debug)]
enum State<'a> {
    Null,
    // Records the offset of the first byte of the integer body for strict validation.
    Integer { start: usize },
    StringLength,
    List(List<'a>),
    Dictionary(Dictionary<'a>),
}

impl<'o> Parser<'o> {
    pub(crate) fn new(options: &'o Options) -> Self {
        Self { options }
    }

    pub(crate) fn parse<'a>(
        &self,
        buffer: &'a [u8],
        from: usize,
    ) -> Result<(Value<'a>, usize), Error> {
        self.parse_at(buffer, from, 0)
    }

    /// Parses one value starting at `from`, where `depth` is the number of enclosing containers.
    fn parse_at<'a>(
        &self,
        buffer: &'a [u8],
        from: usize,
        depth: usize,
    ) -> Result<(Value<'a>, usize), Error> {
        let mut idx = from;
        let mut state = State::Null;
        // Accumulates the integer text or the byte string length digits.
        let mut current = String::new();

        while let Some(&c) = buffer.get(idx) {
            match &mut state {
                State::Null => {
                    match c {
                        b'i' => {
                            current.clear();
                            state = State::Integer { start: idx + 1 };
                        }
                        b'0'..=b'9' => {
                            current.clear();
                            current.push(char::from(c));
                            state = State::StringLength;
                        }
                        b'l' => {
                            self.ensure_depth(depth, idx)?;
                            state = State::List(List::new());
                        }
                        b'd' => {
                            self.ensure_depth(depth, idx)?;
                            state = State::Dictionary(Dictionary::new());
                        }
                        _ => {
                            return PrefixSnafu {
                                prefix: c,
                                offset: idx,
                            }
                            .fail();
                        }
                    }
                    idx += 1;
                }

                State::Integer { start } => {
                    match c {
                        // A sign anywhere in the body restarts the number.
                        b'-' => {
                            current.clear();
                            current.push('-');
                        }
                        b'0'..=b'9' => current.push(char::from(c)),
                        b'e' => {
                            if self.options.strict_integers {
                                ensure_strict_integer(&buffer[*start..idx], *start)?;
                            }
                            let integer = Integer::from_text(mem::take(&mut current));
                            return Ok((Value::Integer(integer), idx + 1));
                        }
                        _ => {
                            if !self.options.strict_integers {
                                tracing::trace!(
                                    byte = %c.escape_ascii(),
                                    offset = idx,
                                    "integer: skip unrecognized byte",
                                );
                            }
                        }
                    }
                    idx += 1;
                }

                State::StringLength => match c {
                    b'0'..=b'9' => {
                        current.push(char::from(c));
                        idx += 1;
                    }
                    b':' => {
                        let size = parse_size(&current)?;
                        return string_content(buffer, idx + 1, size);
                    }
                    _ => {
                        return ByteStringLengthSnafu {
                            byte: c,
                            offset: idx,
                        }
                        .fail();
                    }
                },

                State::List(list) => {
                    if c == b'e' {
                        return Ok((Value::List(mem::take(list)), idx + 1));
                    }
                    let (element, next) = self.parse_at(buffer, idx, depth + 1)?;
                    list.push(element);
                    idx = next;
                }

                State::Dictionary(dict) => {
                    if c == b'e' {
                        return Ok((Value::Dictionary(mem::take(dict)), idx + 1));
                    }
                    let (key, next) = self.parse_at(buffer, idx, depth + 1)?;
                    let key = match key {
                        Value::ByteString(key) => key,
                        _ => {
                            return KeyTypeSnafu {
                                type_name: key.type_name(),
                                offset: idx,
                            }
                            .fail();
                        }
                    };
                    let (value, next) = self.parse_at(buffer, next, depth + 1)?;
                    dict.insert(key, value);
                    idx = next;
                }
            }
        }

        // Nothing at all to read at the top level is a clean end of input.  Running out of input
        // anywhere else means the value was cut short.
        if depth == 0 && idx == from {
            Err(Error::Eof)
        } else {
            Err(Error::Incomplete)
        }
    }

    fn ensure_depth(&self, depth: usize, offset: usize) -> Result<(), Error> {
        let max_depth = self.options.max_depth;
        ensure!(depth < max_depth, DepthExceededSnafu { max_depth, offset });
        Ok(())
    }
}

/// Consumes exactly `size` bytes starting at `start`.
///
/// A zero-length byte string ends right after the `:` separator and consumes nothing further.
fn string_content(buffer: &[u8], start: usize, size: usize) -> Result<(Value<'_>, usize), Error> {
    let end = start.checked_add(size).ok_or(Error::Incomplete)?;
    let bytes = buffer.get(start..end).ok_or(Error::Incomplete)?;
    Ok((Value::ByteString(bytes), end))
}

fn parse_size(digits: &str) -> Result<usize, Error> {
    // `digits` is non-empty and contains only ASCII digits, so overflow is the only failure.
    digits.parse::<usize>().map_err(|_| {
        ByteStringSizeOverflowSnafu {
            size: Bytes::copy_from_slice(digits.as_bytes()),
        }
        .build()
    })
}

// Leading zeros are accepted; only the shape of the number is checked.
fn ensure_strict_integer(integer: &[u8], offset: usize) -> Result<(), Error> {
    ensure!(
        lazy_regex::regex_is_match!(r"(?x-u) ^ -? \d+ $ "B, integer),
        StrictIntegerSnafu {
            integer: Bytes::copy_from_slice(integer),
            offset,
        },
    );
    Ok(())
}
