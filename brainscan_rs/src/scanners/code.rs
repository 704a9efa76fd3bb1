//! Generic script scanner for `.js`, `.mjs`, `.ts`, `.tsx` and `.vue` files.

use std::path::Path;

use super::perf_signals::scan_perf_signals;
use super::read_text;
use super::regexes::{
    captures, count, regex_export_decl, regex_import_from, regex_vuetify_create,
};
use super::ts_signals::scan_ts_signals;
use crate::config::BrainConfig;
use crate::error::Result;
use crate::types::CodeSummary;

pub fn scan_code(config: &BrainConfig, path: &Path) -> Result<CodeSummary> {
    let src = read_text(path)?;
    Ok(summarize_code(config.relative(path), &src))
}

pub fn summarize_code(file: String, src: &str) -> CodeSummary {
    CodeSummary {
        file,
        imports: captures(regex_import_from(), src),
        export_count: count(regex_export_decl(), src),
        vuetify_create: regex_vuetify_create().is_match(src),
        ts_signals: scan_ts_signals(src),
        perf_signals: scan_perf_signals(src),
    }
}
