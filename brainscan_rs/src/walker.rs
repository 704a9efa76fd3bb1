//! Source tree walker.
//!
//! Depth-first over the source root: a folder node is emitted, filled with
//! its children, then the walk moves on to the next sibling. The result
//! carries the node tree together with the two classified file lists, so the
//! walker has no side channel and can be tested against a temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::config::{BrainConfig, relative_to};
use crate::error::{BrainError, Result};
use crate::scanners::regexes::regex_code_file;
use crate::types::{FileNode, FolderNode, TreeNode};

/// Output of a walk. File lists hold absolute paths in walk order.
#[derive(Debug, Default)]
pub struct WalkResult {
    pub tree: Vec<TreeNode>,
    /// `.vue` files.
    pub component_files: Vec<PathBuf>,
    /// `.js`, `.mjs`, `.ts`, `.tsx` and `.vue` files.
    pub code_files: Vec<PathBuf>,
}

impl WalkResult {
    /// Files and folders under the root.
    pub fn node_count(&self) -> usize {
        self.tree.iter().map(TreeNode::count).sum()
    }
}

/// Walk `config.src_dir`, recording paths relative to `config.root`.
pub fn walk_source(config: &BrainConfig) -> Result<WalkResult> {
    walk(&config.root, &config.src_dir, &config.skip_dirs)
}

/// Walk `dir`, skipping entries named in `skip`. Any stat or read failure
/// aborts the walk.
pub fn walk(root: &Path, dir: &Path, skip: &[String]) -> Result<WalkResult> {
    let mut result = WalkResult::default();
    let mut tree = Vec::new();
    walk_dir(root, dir, skip, &mut tree, &mut result)?;
    result.tree = tree;
    debug!(
        "walked {}: {} nodes, {} components, {} code files",
        dir.display(),
        result.node_count(),
        result.component_files.len(),
        result.code_files.len()
    );
    Ok(result)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    skip: &[String],
    nodes: &mut Vec<TreeNode>,
    result: &mut WalkResult,
) -> Result<()> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BrainError::io(dir, e))? {
        entries.push(entry.map_err(|e| BrainError::io(dir, e))?);
    }
    // byte-wise name order keeps reruns on an unchanged tree identical
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if skip.iter().any(|s| *s == name) {
            continue;
        }

        let full = entry.path();
        // follows symlinks; a dangling one fails the run
        let meta = fs::metadata(&full).map_err(|e| BrainError::io(&full, e))?;
        let rel = relative_to(root, &full);

        if meta.is_dir() {
            let mut children = Vec::new();
            walk_dir(root, &full, skip, &mut children, result)?;
            nodes.push(TreeNode::Folder(FolderNode {
                folder: rel,
                children,
            }));
        } else {
            let modified = meta.modified().map_err(|e| BrainError::io(&full, e))?;
            let mtime_iso = iso_timestamp(modified);
            nodes.push(TreeNode::File(FileNode {
                file: rel,
                mtime_iso,
            }));
            if name.ends_with(".vue") {
                result.component_files.push(full.clone());
            }
            if regex_code_file().is_match(&name) {
                result.code_files.push(full);
            }
        }
    }
    Ok(())
}

/// `2025-01-31T09:15:00.123Z`
pub fn iso_timestamp(time: impl Into<DateTime<Utc>>) -> String {
    time.into().to_rfc3339_opts(SecondsFormat::Millis, true)
}
