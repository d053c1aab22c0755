use std::iter::FusedIterator;
use std::ops::Range;

use bytes::Bytes;
use snafu::prelude::*;

use crate::borrow;
use crate::error::{Error, TrailingDataSnafu};
use crate::own;
use crate::parse::Parser;

/// Decoding options.
///
/// The defaults are lenient: unrecognized bytes inside an integer are skipped, and bytes after
/// the top-level value are ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Maximum nesting depth of lists and dictionaries.
    pub max_depth: usize,
    /// Requires integer bodies to match `-?[0-9]+` exactly.
    pub strict_integers: bool,
    /// Rejects input that has bytes left after the top-level value.
    pub reject_trailing: bool,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_integers: false,
            reject_trailing: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Decoder {
    options: Options,
}

/// Parses one value starting at `from`.
///
/// Returns the value and the offset of the first byte after it.
pub fn parse(buffer: &[u8], from: usize) -> Result<(borrow::Value<'_>, usize), Error> {
    Decoder::default().parse(buffer, from)
}

/// Decodes the value at the start of `source`.
///
/// Byte strings in the result share the buffer converted from `source`.
pub fn decode<S>(source: S) -> Result<own::Value, Error>
where
    S: Into<Bytes>,
{
    Decoder::default().decode(source)
}

/// Decodes the value at the start of `buffer`, borrowing byte strings from it.
pub fn decode_slice(buffer: &[u8]) -> Result<borrow::Value<'_>, Error> {
    Decoder::default().decode_slice(buffer)
}

impl Decoder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn parse<'a>(
        &self,
        buffer: &'a [u8],
        from: usize,
    ) -> Result<(borrow::Value<'a>, usize), Error> {
        Parser::new(&self.options).parse(buffer, from)
    }

    pub fn decode<S>(&self, source: S) -> Result<own::Value, Error>
    where
        S: Into<Bytes>,
    {
        let buffer = source.into();
        let value = self.decode_slice(&buffer)?;
        Ok(value.to_shared(&buffer))
    }

    pub fn decode_slice<'a>(&self, buffer: &'a [u8]) -> Result<borrow::Value<'a>, Error> {
        let (value, next) = self
            .parse(buffer, 0)
            .inspect_err(|error| tracing::debug!(%error, "decode"))?;
        self.check_trailing(buffer, next)?;
        Ok(value)
    }

    fn check_trailing(&self, buffer: &[u8], next: usize) -> Result<(), Error> {
        let size = buffer.len() - next;
        if size == 0 {
            return Ok(());
        }
        ensure!(
            !self.options.reject_trailing,
            TrailingDataSnafu { offset: next, size },
        );
        tracing::debug!(offset = next, size, "decode: ignore trailing data");
        Ok(())
    }

    /// Iterates over the values laid end to end in `buffer`.
    pub fn iter<'d, 'a>(&'d self, buffer: &'a [u8]) -> Values<'d, 'a> {
        Values {
            parser: Parser::new(&self.options),
            buffer,
            offset: 0,
            done: false,
        }
    }
}

/// Iterator over consecutive top-level values.
///
/// Each item carries the span of the value in the buffer.  Iteration ends at the end of the
/// buffer or after the first error.
#[derive(Clone, Debug)]
pub struct Values<'d, 'a> {
    parser: Parser<'d>,
    buffer: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Values<'_, 'a> {
    /// Offset of the next value to be decoded.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet decoded.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.offset..]
    }
}

impl<'a> Iterator for Values<'_, 'a> {
    type Item = Result<(borrow::Value<'a>, Range<usize>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parser.parse(self.buffer, self.offset) {
            Ok((value, next)) => {
                let span = self.offset..next;
                self.offset = next;
                Some(Ok((value, span)))
            }
            Err(Error::Eof) => {
                self.done = true;
                None
            }
            Err(error) => {
                tracing::debug!(offset = self.offset, %error, "decode");
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Values<'_, '_> {}
