//! Report assembly and persistence.
//!
//! Two JSON snapshots plus a text tree, all under the memory directory:
//!
//! - [`AnalysisReport`] → `frontendMemory.json`
//! - [`StructureReport`] → `structure.json`
//! - `treeView` → `structure.txt` (with a trailing newline)
//!
//! Every write replaces the previous file; nothing is merged or versioned.

pub mod tree_view;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BrainConfig;
use crate::error::{BrainError, Result};
use crate::project::FrameworkUsage;
use crate::score::SfcTyping;
use crate::types::{
    CodeSummary, ComponentSummary, PerfSignals, SelfStats, TreeNode, TsSignals, TsconfigFlags,
};
use crate::walker::iso_timestamp;

pub use tree_view::{render_tree_view, tree_view_lines};

/// Start/end of a run. Identical in both snapshots of the same run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWindow {
    pub started_iso: String,
    pub ended_iso: String,
    pub duration_ms: u64,
}

impl ScanWindow {
    /// Both instants are cut to whole milliseconds first, so `durationMs`
    /// always equals `endedIso - startedIso`.
    pub fn new(started: DateTime<Utc>, ended: DateTime<Utc>) -> Self {
        let started_ms = started.timestamp_millis();
        let ended_ms = ended.timestamp_millis();
        Self {
            started_iso: iso_timestamp(to_millis(started)),
            ended_iso: iso_timestamp(to_millis(ended)),
            duration_ms: u64::try_from(ended_ms - started_ms).unwrap_or(0),
        }
    }
}

fn to_millis(time: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(time.timestamp_millis()).unwrap_or(time)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub components_scanned: usize,
    pub files_scanned: usize,
    pub env_vars: Vec<String>,
    pub tsconfigs: Vec<TsconfigFlags>,
    pub ts_totals: TsSignals,
    pub perf_presence: PerfSignals,
    pub vue_sfc: SfcTyping,
    pub vuetify: FrameworkUsage,
    pub ts_hygiene_score: u8,
    pub suggestions: Vec<String>,
    #[serde(rename = "self")]
    pub self_stats: Option<SelfStats>,
}

/// Root object of `frontendMemory.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub vue: Vec<ComponentSummary>,
    pub code: Vec<CodeSummary>,
    pub scan: ScanWindow,
}

/// Root object of `structure.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub scan: ScanWindow,
    pub tree: Vec<TreeNode>,
    pub tree_view: String,
}

impl StructureReport {
    pub fn new(scan: ScanWindow, tree: Vec<TreeNode>, tree_view_lines: &[String]) -> Self {
        Self {
            scan,
            tree,
            tree_view: tree_view_lines.join("\n"),
        }
    }
}

/// Where a run wrote its snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPaths {
    pub frontend_memory: PathBuf,
    pub structure_json: PathBuf,
    pub structure_txt: PathBuf,
}

fn to_pretty<T: Serialize>(what: &'static str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| BrainError::Json { what, source })
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| BrainError::io(path, e))
}

/// Serialize both reports, then write all three files, creating the memory
/// directory if needed.
pub fn persist(
    config: &BrainConfig,
    analysis: &AnalysisReport,
    structure: &StructureReport,
) -> Result<PersistedPaths> {
    let memory_json = to_pretty("analysis report", analysis)?;
    let structure_json = to_pretty("structure report", structure)?;

    fs::create_dir_all(&config.memory_dir).map_err(|e| BrainError::io(&config.memory_dir, e))?;

    let paths = PersistedPaths {
        frontend_memory: config.frontend_memory_path(),
        structure_json: config.structure_json_path(),
        structure_txt: config.structure_txt_path(),
    };
    write(&paths.frontend_memory, &memory_json)?;
    write(&paths.structure_json, &structure_json)?;
    write(&paths.structure_txt, &format!("{}\n", structure.tree_view))?;

    info!("snapshots written to {}", config.memory_dir.display());
    Ok(paths)
}
