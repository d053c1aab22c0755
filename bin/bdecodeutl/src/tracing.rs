use std::io::{self, Stderr};

use clap::{ArgAction, Args};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

#[derive(Args, Clone, Debug)]
pub(crate) struct TracingConfig {
    #[arg(
        long,
        short = 'v',
        action = ArgAction::Count,
        global = true,
        help = "Make tracing output more verbose",
    )]
    verbose: u8,
    #[arg(
        long,
        action = ArgAction::Count,
        global = true,
        help = "Make tracing output less verbose",
    )]
    silent: u8,

    #[arg(long, global = true, help = "Enable colored tracing output")]
    color: bool,
}

// Levels are relative to the default `WARN`, which shows decode failures only.
const OFF: i16 = -2;
const ERROR: i16 = -1;
const WARN: i16 = 0;
const INFO: i16 = 1;
const DEBUG: i16 = 2;
const TRACE: i16 = 3;

const WRITER: fn() -> Stderr = io::stderr;

impl TracingConfig {
    pub(crate) fn init(&self) {
        let layer = fmt::layer()
            .compact()
            .with_ansi(self.color)
            .with_file(self.level() >= TRACE)
            .with_line_number(self.level() >= TRACE)
            .with_target(self.level() >= DEBUG)
            .with_writer(WRITER)
            .with_filter(self.env_filter());
        tracing_subscriber::registry().with(layer).init();
    }

    fn level(&self) -> i16 {
        i16::from(self.verbose).saturating_sub(i16::from(self.silent))
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level_filter().into())
            .from_env_lossy()
    }

    fn level_filter(&self) -> LevelFilter {
        match self.level() {
            level if level <= OFF => LevelFilter::OFF,
            ERROR => LevelFilter::ERROR,
            WARN => LevelFilter::WARN,
            INFO => LevelFilter::INFO,
            DEBUG => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(verbose: u8, silent: u8) -> TracingConfig {
        TracingConfig {
            verbose,
            silent,
            color: false,
        }
    }

    #[test]
    fn level_filter() {
        assert_eq!(config(0, 0).level_filter(), LevelFilter::WARN);
        assert_eq!(config(1, 0).level_filter(), LevelFilter::INFO);
        assert_eq!(config(2, 0).level_filter(), LevelFilter::DEBUG);
        assert_eq!(config(3, 0).level_filter(), LevelFilter::TRACE);
        assert_eq!(config(9, 0).level_filter(), LevelFilter::TRACE);
        assert_eq!(config(0, 1).level_filter(), LevelFilter::ERROR);
        assert_eq!(config(0, 2).level_filter(), LevelFilter::OFF);
        assert_eq!(config(1, 9).level_filter(), LevelFilter::OFF);
    }
}
