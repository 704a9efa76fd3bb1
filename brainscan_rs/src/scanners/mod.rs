//! Per-file signal extractors.
//!
//! Every scanner is a pure function over file text; the `scan_*` wrappers
//! only add the read. Read failures propagate, nothing is skipped silently.

pub mod code;
pub mod component;
pub mod perf_signals;
pub(crate) mod regexes;
pub mod self_scan;
pub mod ts_signals;

use std::fs;
use std::path::Path;

use crate::error::{BrainError, Result};

pub use code::{scan_code, summarize_code};
pub use component::{scan_component, summarize_component};
pub use perf_signals::scan_perf_signals;
pub use self_scan::{scan_self, summarize_self};
pub use ts_signals::scan_ts_signals;

/// Read a whole file as UTF-8.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BrainError::io(path, e))
}
