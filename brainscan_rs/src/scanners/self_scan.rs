//! The brain file measured with its own yardstick: size, line shape, a rough
//! function count, TODO/FIXME markers and the TypeScript counters.

use std::path::Path;

use tracing::debug;

use super::read_text;
use super::regexes::{count, regex_fixme, regex_function_like, regex_todo};
use super::ts_signals::scan_ts_signals;
use crate::config::BrainConfig;
use crate::error::Result;
use crate::types::SelfStats;

/// `Ok(None)` when the file is absent; that is a soft skip, not an error.
pub fn scan_self(config: &BrainConfig, path: &Path) -> Result<Option<SelfStats>> {
    if !path.exists() {
        debug!("self source {} not found; skipping self scan", path.display());
        return Ok(None);
    }
    let src = read_text(path)?;
    Ok(Some(summarize_self(config.relative(path), &src)))
}

pub fn summarize_self(path: String, src: &str) -> SelfStats {
    // split on `\r?\n`: a trailing newline yields a final empty line
    let lines: Vec<&str> = src
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let max_line_len = lines
        .iter()
        .map(|line| line.encode_utf16().count())
        .max()
        .unwrap_or(0);

    SelfStats {
        path,
        bytes: src.len(),
        lines: lines.len(),
        max_line_len,
        function_like_count: count(regex_function_like(), src),
        todo_count: count(regex_todo(), src),
        fixme_count: count(regex_fixme(), src),
        ts_signals: scan_ts_signals(src),
    }
}
