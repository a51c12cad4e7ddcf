//! Lockstep trace comparison.
//!
//! Compares an emulator's instruction trace against a reference log (for
//! example `nestest.log`) line by line. Each line carries an address and an
//! opcode as its first two whitespace-separated fields; anything after that
//! (registers, cycle counts, PPU timing) is compared verbatim, optionally
//! only up to a configured column.

mod compare;
mod parse;

pub use compare::{TraceComparator, check_line, compare_files};
pub use parse::{TraceReader, TraceSource, fragment, open_trace};

/// Address and opcode fields of a trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine<'a> {
    /// First field: where the instruction was fetched from.
    pub address: &'a str,
    /// Second field: opcode byte or mnemonic.
    pub opcode: &'a str,
}

/// Which of the two traces a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceSide {
    /// Trace produced by the emulator under test.
    Emulator,
    /// Known-good reference trace.
    Reference,
}

impl std::fmt::Display for TraceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emulator => write!(f, "emulator"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

/// Configuration for trace comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareConfig {
    /// Compare only the first `n` characters of each line in the
    /// full-line check. `None` compares whole lines.
    ///
    /// Useful while trailing fields such as `CYC:` or PPU timing are not
    /// yet emulated.
    pub truncate: Option<usize>,
}

impl CompareConfig {
    /// Compare whole lines.
    #[must_use]
    pub const fn full() -> Self {
        Self { truncate: None }
    }

    /// Compare only the first `len` characters of each line.
    #[must_use]
    pub const fn truncated(len: usize) -> Self {
        Self {
            truncate: Some(len),
        }
    }
}

/// Result of a successful comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Number of emulator lines compared.
    pub lines: usize,
    /// Lines that were byte-identical to the reference.
    pub identical: usize,
}

impl TraceSummary {
    /// Lines that differed from the reference but passed because the
    /// difference lay past the truncation column.
    #[must_use]
    pub const fn suppressed(&self) -> usize {
        self.lines - self.identical
    }
}
