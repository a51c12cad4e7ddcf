use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::TraceLine;
use crate::Result;

impl<'a> TraceLine<'a> {
    /// Split a trace line into its address and opcode fields.
    ///
    /// Returns `None` if the line has fewer than two whitespace-separated
    /// fields. Remaining fields are ignored.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let address = fields.next()?;
        let opcode = fields.next()?;
        Some(TraceLine { address, opcode })
    }
}

/// The part of a line that takes part in the full-line check.
///
/// With `Some(len)`, the first `len` characters; never splits a character.
#[must_use]
pub fn fragment(line: &str, truncate: Option<usize>) -> &str {
    match truncate {
        Some(len) => line
            .char_indices()
            .nth(len)
            .map_or(line, |(end, _)| &line[..end]),
        None => line,
    }
}

/// Reads a trace one line at a time, without line terminators.
pub struct TraceReader<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> TraceReader<R> {
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
        }
    }

    /// Read the next line, stripping a trailing `\n` or `\r\n`.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an IO error if reading fails or the line is not valid UTF-8.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = self
            .buf
            .strip_suffix('\n')
            .map_or(self.buf.as_str(), |line| line.strip_suffix('\r').unwrap_or(line));
        Ok(Some(line))
    }
}

/// A trace file, optionally zstd-compressed.
pub enum TraceSource {
    Plain(BufReader<File>),
    Zstd(BufReader<zstd::stream::read::Decoder<'static, BufReader<File>>>),
}

impl Read for TraceSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(reader) => reader.read(buf),
            Self::Zstd(reader) => reader.read(buf),
        }
    }
}

impl BufRead for TraceSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Plain(reader) => reader.fill_buf(),
            Self::Zstd(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::Plain(reader) => reader.consume(amt),
            Self::Zstd(reader) => reader.consume(amt),
        }
    }
}

/// Open a trace file for reading.
///
/// Paths ending in `.zst` are decompressed on the fly.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened or the zstd stream
/// header is invalid.
pub fn open_trace(path: &Path) -> Result<TraceSource> {
    let file = File::open(path)?;
    let compressed = path.extension().and_then(|e| e.to_str()) == Some("zst");
    debug!(path = %path.display(), compressed, "opened trace");
    if compressed {
        let decoder = zstd::stream::read::Decoder::new(file)?;
        Ok(TraceSource::Zstd(BufReader::new(decoder)))
    } else {
        Ok(TraceSource::Plain(BufReader::new(file)))
    }
}
