mod format;
mod tracing;

use std::fs;
use std::io::{self, Error, Read, Write};
use std::path::PathBuf;

use bytes::Bytes;
use clap::{Args, Parser};

use bdecode::{DEFAULT_MAX_DEPTH, Decoder, Options};

use crate::format::Format;
use crate::tracing::TracingConfig;

#[derive(Debug, Parser)]
#[command(version, about = "Decode bencode data")]
struct Bdecodeutl {
    #[command(flatten, next_display_order = 100)]
    tracing: TracingConfig,

    #[command(flatten, next_display_order = 50)]
    decode: DecodeConfig,

    #[arg(short, long, value_enum, default_value_t = Format::Debug, help = "Output format")]
    format: Format,
    #[arg(long, help = "Decode every value laid end to end in the input")]
    all: bool,

    #[arg(help = "Input file; read from stdin when omitted")]
    input: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
struct DecodeConfig {
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        help = "Maximum list and dictionary nesting",
    )]
    max_depth: usize,
    #[arg(long, help = "Reject integers that are not `-?[0-9]+`")]
    strict_integers: bool,
    #[arg(long, help = "Reject bytes after the top-level value")]
    reject_trailing: bool,
}

impl DecodeConfig {
    fn to_options(&self) -> Options {
        Options {
            max_depth: self.max_depth,
            strict_integers: self.strict_integers,
            reject_trailing: self.reject_trailing,
        }
    }
}

impl Bdecodeutl {
    fn execute(&self) -> Result<(), Error> {
        let input = self.read_input()?;
        let decoder = Decoder::new(self.decode.to_options());
        let mut writer = io::stdout().lock();
        if self.all {
            self.decode_all(&decoder, &input, &mut writer)
        } else {
            let value = decoder.decode(input).map_err(|error| {
                ::tracing::warn!(%error, "decode");
                Error::other(error)
            })?;
            self.format.write(&value, &mut writer)
        }
    }

    fn decode_all<W>(&self, decoder: &Decoder, input: &[u8], mut writer: W) -> Result<(), Error>
    where
        W: Write,
    {
        let mut count = 0usize;
        for result in decoder.iter(input) {
            let (value, span) = result.map_err(|error| {
                ::tracing::warn!(%error, count, "decode");
                Error::other(error)
            })?;
            ::tracing::debug!(?span, "decode");
            self.format.write(&value, &mut writer)?;
            count += 1;
        }
        ::tracing::info!(count, "decode all");
        Ok(())
    }

    fn read_input(&self) -> Result<Bytes, Error> {
        let input = match &self.input {
            Some(path) => fs::read(path)?,
            None => {
                let mut input = Vec::new();
                io::stdin().read_to_end(&mut input)?;
                input
            }
        };
        ::tracing::debug!(size = input.len(), "read input");
        Ok(input.into())
    }
}

fn main() -> Result<(), Error> {
    let bdecodeutl = Bdecodeutl::parse();
    bdecodeutl.tracing.init();
    bdecodeutl.execute()
}
