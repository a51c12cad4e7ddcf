//! CLI definitions.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use tracecmp::CompareConfig;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "tracecmp")]
#[command(about = "Compare an emulator CPU trace against a known-good reference log")]
#[command(version)]
pub struct Cli {
    /// Trace produced by the emulator under test (.zst is decompressed)
    #[arg(value_name = "EMULATOR_LOG")]
    pub emulator: PathBuf,

    /// Known-good reference trace, e.g. nestest.log (.zst is decompressed)
    #[arg(value_name = "REFERENCE_LOG")]
    pub reference: PathBuf,

    /// Compare only the first N characters of each line once address and
    /// opcode agree (ignores trailing cycle counts, PPU timing, ...).
    /// Must be at least 1; omit it to compare whole lines
    #[arg(long, value_name = "N")]
    pub truncate: Option<NonZeroUsize>,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

impl Cli {
    #[must_use]
    pub const fn compare_config(&self) -> CompareConfig {
        CompareConfig {
            truncate: match self.truncate {
                Some(len) => Some(len.get()),
                None => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_two_paths() {
        let cli = Cli::try_parse_from(["tracecmp", "emu.log", "nestest.log"]).unwrap();
        assert_eq!(cli.emulator, PathBuf::from("emu.log"));
        assert_eq!(cli.reference, PathBuf::from("nestest.log"));
        assert_eq!(cli.compare_config(), CompareConfig::full());
    }

    #[test]
    fn test_truncate() {
        let cli =
            Cli::try_parse_from(["tracecmp", "--truncate", "73", "emu.log", "nestest.log"]).unwrap();
        assert_eq!(cli.compare_config(), CompareConfig::truncated(73));
    }

    #[test]
    fn test_one_path_is_usage_error() {
        let err = Cli::try_parse_from(["tracecmp", "emu.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_three_paths_is_usage_error() {
        let err = Cli::try_parse_from(["tracecmp", "a.log", "b.log", "c.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_zero_truncate_is_usage_error() {
        let err = Cli::try_parse_from(["tracecmp", "--truncate", "0", "emu.log", "nestest.log"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_verbose_conflicts_with_silent() {
        let err = Cli::try_parse_from(["tracecmp", "-v", "-s", "a.log", "b.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
