use std::io::{Error, Write};

use clap::ValueEnum;

use bdecode::Json;
use bdecode::value::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Format {
    Debug,
    Json,
}

impl Format {
    pub(crate) fn write<B, W>(&self, value: &Value<B>, mut writer: W) -> Result<(), Error>
    where
        B: AsRef<[u8]>,
        W: Write,
    {
        match self {
            Self::Debug => writeln!(writer, "{value:#?}"),
            Self::Json => {
                serde_json::to_writer_pretty(&mut writer, &Json(value))?;
                writeln!(writer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(format: Format, testdata: &[u8]) -> String {
        let value = bdecode::decode_slice(testdata).unwrap();
        let mut output = Vec::new();
        format.write(&value, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn json() {
        assert_eq!(
            write(Format::Json, b"d3:cow3:moo4:spaml1:ai-1eee"),
            "{\n  \"cow\": \"moo\",\n  \"spam\": [\n    \"a\",\n    -1\n  ]\n}\n",
        );
    }

    #[test]
    fn debug() {
        assert_eq!(write(Format::Debug, b"i42e"), "Integer(\n    42,\n)\n");
    }
}
