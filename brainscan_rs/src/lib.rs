//! # brainscan
//!
//! **Frontend self-awareness snapshot** - a single-pass, lexical introspection
//! engine for Vue + TypeScript source trees.
//!
//! Every run walks the project's `src/` directory, pulls structural and
//! code-quality signals out of each file with plain pattern matching (no AST,
//! no type checker), folds them into repository-wide totals, computes a
//! bounded TypeScript hygiene score with suggestions, and writes:
//!
//! - `ADD/memory/frontendMemory.json` - the full analysis report
//! - `ADD/memory/structure.json` - the file tree plus its text rendering
//! - `ADD/memory/structure.txt` - the text rendering alone
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use brainscan::{BrainConfig, runner};
//!
//! let config = BrainConfig::new(".");
//! let outcome = runner::run(&config).unwrap();
//! println!("score: {}", outcome.analysis.summary.ts_hygiene_score);
//! ```
//!
//! ## Scanning without writing
//!
//! ```rust,no_run
//! use brainscan::{BrainConfig, runner};
//!
//! let analysis = runner::analyze(&BrainConfig::new(".")).unwrap();
//! for suggestion in &analysis.report.summary.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Paths and knobs threaded through every component.
///
/// Defaults reproduce the fixed `src/` + `ADD/` layout; an optional
/// `.brainscan/config.toml` and CLI flags override them.
pub mod config;

/// Error taxonomy (fatal precondition vs propagated I/O).
pub mod error;

/// Recursive source-tree walker returning the node tree and classified files.
pub mod walker;

/// Per-file signal extractors.
///
/// # Submodules
///
/// - [`scanners::ts_signals`] - TypeScript construct/anti-pattern counters
/// - [`scanners::perf_signals`] - runtime performance API presence flags
/// - [`scanners::component`] - Vue single-file component scanner
/// - [`scanners::code`] - generic JS/TS/Vue code scanner
/// - [`scanners::self_scan`] - the brain file scanning itself
pub mod scanners;

/// Project-level inputs that live outside `src/`: `.env*` keys, tsconfig
/// flags, and the Vuetify plugin/tag cross-check.
pub mod project;

/// Aggregation, hygiene score and suggestions.
pub mod score;

/// Report assembly, text tree rendering and persistence.
pub mod report;

/// End-to-end pipeline: precondition → walk → scan → aggregate → persist.
pub mod runner;

/// Human-readable console overview printed after a run.
pub mod console;

/// Command-line arguments for the `brainscan` binary.
pub mod cli;

/// Data model shared by scanners, aggregator and reports.
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

/// Run configuration.
pub use config::BrainConfig;

/// Library error type and result alias.
pub use error::{BrainError, Result};

/// Persisted root objects.
pub use report::{AnalysisReport, StructureReport};

/// Per-file records and signal sets.
pub use types::{
    CodeSummary, ComponentSummary, PerfSignals, SelfStats, TreeNode, TsSignals, TsconfigFlags,
};
