use thiserror::Error;

use crate::trace::TraceSide;

/// Comparison errors.
///
/// Every variant ends the run at the first occurrence. Line numbers are
/// 1-based; `expected` is always the reference side and `actual` the
/// emulator side.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Address mismatch on line {line}: {expected} expected, but saw {actual}.")]
    AddressMismatch {
        line: usize,
        expected: String,
        actual: String,
    },
    #[error("Opcode mismatch on line {line}: {expected} expected, but saw {actual}.")]
    OpcodeMismatch {
        line: usize,
        expected: String,
        actual: String,
    },
    #[error("Line mismatch on line {line}:\nExpected: {expected}\nSaw:      {actual}")]
    LineMismatch {
        line: usize,
        expected: String,
        actual: String,
    },
    #[error("Reference trace ended before line {line} of the emulator trace")]
    ReferenceExhausted { line: usize },
    #[error("Malformed {trace} line {line}: expected an address and an opcode")]
    MalformedLine { line: usize, trace: TraceSide },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 1-based line number of the divergence, if this error has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::AddressMismatch { line, .. }
            | Self::OpcodeMismatch { line, .. }
            | Self::LineMismatch { line, .. }
            | Self::ReferenceExhausted { line }
            | Self::MalformedLine { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }

    /// Whether this error is a divergence between the traces rather than
    /// a failure to read them.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Self::AddressMismatch { .. } | Self::OpcodeMismatch { .. } | Self::LineMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
