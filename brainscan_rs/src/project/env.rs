//! Environment key names from `.env*` files at the project root.
//!
//! Only the names are collected; values never leave the file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{BrainError, Result};
use crate::scanners::read_text;
use crate::scanners::regexes::{captures, regex_env_key};

const ENV_PREFIX: &str = ".env";

/// Deduplicated `KEY` names from every `KEY=value` line, first-seen order.
pub fn read_env_keys(root: &Path) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| BrainError::io(root, e))? {
        let entry = entry.map_err(|e| BrainError::io(root, e))?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with(ENV_PREFIX) && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();

    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for path in candidates {
        let content = read_text(&path)?;
        for key in captures(regex_env_key(), &content) {
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
    }
    Ok(keys)
}
