//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use fibdev_core::MAX_INDEX;
use fibdev_device::Whence;

/// fibdev: query the exclusive-session Fibonacci device.
#[derive(Parser, Debug)]
#[command(name = "fibdev", version, about)]
pub struct AppConfig {
    /// Seek offset selecting the Fibonacci index.
    #[arg(
        short = 'k',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        env = "FIBDEV_OFFSET"
    )]
    pub offset: i64,

    /// Seek origin: start, current, or end (end maps to 500 - offset).
    #[arg(long, value_enum, default_value_t = WhenceArg::Start)]
    pub whence: WhenceArg,

    /// Engine to read with: table or fast.
    #[arg(long, default_value = "table", env = "FIBDEV_ENGINE")]
    pub engine: String,

    /// Read every index from 0 to --max, one line each.
    #[arg(long)]
    pub sweep: bool,

    /// Last index visited by --sweep.
    #[arg(long, default_value_t = MAX_INDEX)]
    pub max: u64,

    /// Check a sweep output file against reference values.
    #[arg(long, value_name = "FILE")]
    pub verify: Option<PathBuf>,

    /// Output file path for --sweep.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Seek origin as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WhenceArg {
    /// Absolute index.
    Start,
    /// Relative to the cursor (0 for a fresh session).
    Current,
    /// Counted back from the last index.
    End,
}

impl From<WhenceArg> for Whence {
    fn from(arg: WhenceArg) -> Self {
        match arg {
            WhenceArg::Start => Whence::Start,
            WhenceArg::Current => Whence::Current,
            WhenceArg::End => Whence::End,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibdev").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.offset, 0);
        assert_eq!(config.whence, WhenceArg::Start);
        assert_eq!(config.engine, "table");
        assert_eq!(config.max, MAX_INDEX);
        assert!(!config.sweep);
        assert!(config.verify.is_none());
    }

    #[test]
    fn negative_offset() {
        let config = parse(&["-k", "-10", "--whence", "end"]);
        assert_eq!(config.offset, -10);
        assert_eq!(Whence::from(config.whence), Whence::End);
    }

    #[test]
    fn sweep_flags() {
        let config = parse(&["--sweep", "--max", "20", "-o", "out"]);
        assert!(config.sweep);
        assert_eq!(config.max, 20);
        assert_eq!(config.output, Some(PathBuf::from("out")));
    }
}
