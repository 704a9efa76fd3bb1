//! The scan pipeline.
//!
//! One linear, blocking pass:
//! precondition → walk → per-file scans → project inputs → aggregate/score →
//! assemble → write. Every step before the write must succeed, so a failed
//! run never leaves a partial snapshot behind.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::BrainConfig;
use crate::error::{BrainError, Result};
use crate::project::{detect_framework, read_env_keys, read_tsconfigs};
use crate::report::{
    AnalysisReport, PersistedPaths, ScanWindow, StructureReport, Summary, persist, tree_view_lines,
};
use crate::scanners::{scan_code, scan_component, scan_self};
use crate::score::{aggregate, hygiene_score, suggestions};

/// A finished, not yet persisted, scan.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: AnalysisReport,
    pub structure: StructureReport,
    /// Header plus one line per tree node.
    pub tree_lines: Vec<String>,
}

/// A scan that has been written to disk.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub analysis: AnalysisReport,
    pub structure: StructureReport,
    pub tree_lines: Vec<String>,
    pub written: PersistedPaths,
}

/// Scan and score without touching the memory directory.
pub fn analyze(config: &BrainConfig) -> Result<Analysis> {
    if !config.src_dir.is_dir() {
        return Err(BrainError::MissingSourceRoot(config.src_dir.clone()));
    }

    let started = Utc::now();
    info!("scanning {}", config.src_dir.display());

    let walked = crate::walker::walk_source(config)?;
    let components = walked
        .component_files
        .iter()
        .map(|path| scan_component(config, path))
        .collect::<Result<Vec<_>>>()?;
    let code = walked
        .code_files
        .iter()
        .map(|path| scan_code(config, path))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "scanned {} components, {} code files",
        components.len(),
        code.len()
    );

    let env_vars = read_env_keys(&config.root)?;
    let tsconfigs = read_tsconfigs(&config.root, &config.tsconfig_candidates);
    let vuetify = detect_framework(config, &components);
    let self_stats = scan_self(config, &config.self_source)?;

    let agg = aggregate(&components, &code);
    let score = hygiene_score(&agg.ts_totals, agg.sfc_typing.define_props_typed_count);
    let suggestions = suggestions(&agg, self_stats.as_ref(), config.self_line_threshold)
        .iter()
        .map(|s| s.message().to_string())
        .collect();

    let scan = ScanWindow::new(started, Utc::now());

    let report = AnalysisReport {
        summary: Summary {
            components_scanned: components.len(),
            files_scanned: code.len(),
            env_vars,
            tsconfigs,
            ts_totals: agg.ts_totals,
            perf_presence: agg.perf_presence,
            vue_sfc: agg.sfc_typing,
            vuetify,
            ts_hygiene_score: score,
            suggestions,
            self_stats,
        },
        vue: components,
        code,
        scan: scan.clone(),
    };

    let tree_lines = tree_view_lines(&root_label(&config.src_dir), &walked.tree);
    let structure = StructureReport::new(scan, walked.tree, &tree_lines);

    Ok(Analysis {
        report,
        structure,
        tree_lines,
    })
}

/// Scan, score and overwrite the snapshots.
pub fn run(config: &BrainConfig) -> Result<RunOutcome> {
    let Analysis {
        report,
        structure,
        tree_lines,
    } = analyze(config)?;
    let written = persist(config, &report, &structure)?;
    Ok(RunOutcome {
        analysis: report,
        structure,
        tree_lines,
        written,
    })
}

fn root_label(src_dir: &Path) -> String {
    src_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| src_dir.display().to_string())
}
