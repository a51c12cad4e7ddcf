use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, info_span};

use super::{CompareConfig, TraceLine, TraceReader, TraceSide, TraceSummary, fragment, open_trace};
use crate::{Error, Result};

/// Check one pair of lines.
///
/// `line` is the 1-based line number used in error reports. Identical lines
/// pass immediately. Otherwise the address is checked first, then the
/// opcode, then the configured fragment of the whole line, so a line
/// mismatch is only reported once the instruction identity already agrees.
///
/// # Errors
///
/// Returns the first mismatch found, or [`Error::MalformedLine`] if a
/// differing line lacks an address or opcode field.
pub fn check_line(
    line: usize,
    emulator: &str,
    reference: &str,
    config: &CompareConfig,
) -> Result<()> {
    if emulator == reference {
        return Ok(());
    }
    debug!(line, "lines differ");

    let expected = TraceLine::parse(reference).ok_or(Error::MalformedLine {
        line,
        trace: TraceSide::Reference,
    })?;
    let actual = TraceLine::parse(emulator).ok_or(Error::MalformedLine {
        line,
        trace: TraceSide::Emulator,
    })?;

    if expected.address != actual.address {
        return Err(Error::AddressMismatch {
            line,
            expected: expected.address.to_string(),
            actual: actual.address.to_string(),
        });
    }
    if expected.opcode != actual.opcode {
        return Err(Error::OpcodeMismatch {
            line,
            expected: expected.opcode.to_string(),
            actual: actual.opcode.to_string(),
        });
    }

    let expected = fragment(reference, config.truncate);
    let actual = fragment(emulator, config.truncate);
    if expected != actual {
        return Err(Error::LineMismatch {
            line,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Compares an emulator trace against a reference trace in lockstep.
///
/// The Nth emulator line is only ever compared with the Nth reference line.
/// The run ends successfully when the emulator trace is exhausted; reference
/// lines left over at that point are not examined.
pub struct TraceComparator<E, R> {
    emulator: TraceReader<E>,
    reference: TraceReader<R>,
    config: CompareConfig,
}

impl<E: BufRead, R: BufRead> TraceComparator<E, R> {
    #[must_use]
    pub const fn new(emulator: E, reference: R, config: CompareConfig) -> Self {
        Self {
            emulator: TraceReader::new(emulator),
            reference: TraceReader::new(reference),
            config,
        }
    }

    /// Run the comparison to the first divergence or the end of the
    /// emulator trace. Both inputs are dropped when this returns.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch, [`Error::ReferenceExhausted`] if the
    /// reference ends early, or an IO error from either input.
    pub fn compare(mut self) -> Result<TraceSummary> {
        let _span = info_span!("compare", truncate = ?self.config.truncate).entered();
        let mut summary = TraceSummary::default();

        while let Some(emulator) = self.emulator.next_line()? {
            let line = summary.lines + 1;
            let Some(reference) = self.reference.next_line()? else {
                return Err(Error::ReferenceExhausted { line });
            };
            if emulator == reference {
                summary.identical += 1;
            } else {
                check_line(line, emulator, reference, &self.config)?;
            }
            summary.lines += 1;
        }

        info!(
            lines = summary.lines,
            identical = summary.identical,
            suppressed = summary.suppressed(),
            "traces match"
        );
        Ok(summary)
    }
}

/// Compare two trace files.
///
/// The emulator trace is opened before the reference trace; `.zst` files
/// are decompressed transparently.
///
/// # Errors
///
/// Returns an IO error if either file cannot be opened, otherwise whatever
/// [`TraceComparator::compare`] returns.
pub fn compare_files(
    emulator: &Path,
    reference: &Path,
    config: &CompareConfig,
) -> Result<TraceSummary> {
    let _span = info_span!(
        "compare_files",
        emulator = %emulator.display(),
        reference = %reference.display()
    )
    .entered();
    let emulator = open_trace(emulator)?;
    let reference = open_trace(reference)?;
    TraceComparator::new(emulator, reference, *config).compare()
}
