//! tracecmp - lockstep CPU trace comparison
//!
//! Validates an emulator's instruction trace against a known-good reference
//! log, one line at a time, and reports the first point of divergence.
//!
//! # Example
//!
//! ```ignore
//! use tracecmp::{CompareConfig, compare_files};
//!
//! let config = CompareConfig { truncate: Some(73) };
//! let summary = compare_files("emu.log".as_ref(), "nestest.log".as_ref(), &config)?;
//! println!("{} lines matched", summary.lines);
//! ```

mod error;
pub mod trace;

pub use error::{Error, Result};
pub use trace::{
    CompareConfig, TraceComparator, TraceLine, TraceReader, TraceSide, TraceSource, TraceSummary,
    check_line, compare_files, fragment, open_trace,
};
