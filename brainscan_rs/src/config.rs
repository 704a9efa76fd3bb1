//! Configuration for a brainscan run.
//!
//! Everything the pipeline touches on disk is derived from one explicit
//! project root, so several roots can be scanned from one process and tests
//! can point the pipeline at a temp dir. An optional
//! `.brainscan/config.toml` under the root overrides the defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_SRC_DIR: &str = "src";
pub const DEFAULT_MEMORY_DIR: &str = "ADD/memory";
pub const DEFAULT_SELF_SOURCE: &str = "ADD/brain.ts";
pub const DEFAULT_SELF_LINE_THRESHOLD: usize = 400;

pub const FRONTEND_MEMORY_FILE: &str = "frontendMemory.json";
pub const STRUCTURE_JSON_FILE: &str = "structure.json";
pub const STRUCTURE_TXT_FILE: &str = "structure.txt";

/// Directory names never descended into (matched on the bare entry name).
pub const SKIP_DIRS: &[&str] = &["node_modules", ".git", "dist", "coverage"];

/// Checked in order, relative to the project root.
pub const TSCONFIG_CANDIDATES: &[&str] = &["tsconfig.json", "tsconfig.app.json", "tsconfig.add.json"];

/// Checked in order, relative to `<src>/plugins`.
pub const VUETIFY_PLUGIN_CANDIDATES: &[&str] = &["vuetify.ts", "vuetify.js"];

const CONFIG_DIR: &str = ".brainscan";
const CONFIG_FILE: &str = "config.toml";

/// Resolved run configuration. All paths are joined onto `root`.
#[derive(Debug, Clone)]
pub struct BrainConfig {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub memory_dir: PathBuf,
    pub self_source: PathBuf,
    pub plugin_candidates: Vec<PathBuf>,
    pub tsconfig_candidates: Vec<String>,
    pub skip_dirs: Vec<String>,
    pub self_line_threshold: usize,
}

impl BrainConfig {
    /// Defaults for the fixed `src/` + `ADD/` layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let src_dir = root.join(DEFAULT_SRC_DIR);
        Self {
            plugin_candidates: plugin_candidates(&src_dir),
            memory_dir: root.join(DEFAULT_MEMORY_DIR),
            self_source: root.join(DEFAULT_SELF_SOURCE),
            tsconfig_candidates: TSCONFIG_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            skip_dirs: SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            self_line_threshold: DEFAULT_SELF_LINE_THRESHOLD,
            src_dir,
            root,
        }
    }

    /// Defaults plus whatever `<root>/.brainscan/config.toml` overrides.
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let config = Self::new(root);
        let file = FileConfig::load(&config.root);
        config.with_file_config(&file)
    }

    pub fn with_file_config(mut self, file: &FileConfig) -> Self {
        if let Some(src) = &file.src_dir {
            self = self.with_src_dir(src);
        }
        if let Some(memory) = &file.memory_dir {
            self.memory_dir = self.root.join(memory);
        }
        if let Some(self_source) = &file.self_source {
            self.self_source = self.root.join(self_source);
        }
        for extra in &file.extra_skip_dirs {
            if !self.skip_dirs.contains(extra) {
                self.skip_dirs.push(extra.clone());
            }
        }
        if let Some(threshold) = file.self_line_threshold {
            self.self_line_threshold = threshold;
        }
        self
    }

    /// Point the scan at another source dir; plugin candidates follow it.
    pub fn with_src_dir(mut self, src: impl AsRef<Path>) -> Self {
        self.src_dir = self.root.join(src);
        self.plugin_candidates = plugin_candidates(&self.src_dir);
        self
    }

    pub fn frontend_memory_path(&self) -> PathBuf {
        self.memory_dir.join(FRONTEND_MEMORY_FILE)
    }

    pub fn structure_json_path(&self) -> PathBuf {
        self.memory_dir.join(STRUCTURE_JSON_FILE)
    }

    pub fn structure_txt_path(&self) -> PathBuf {
        self.memory_dir.join(STRUCTURE_TXT_FILE)
    }

    /// `path` relative to the project root, as persisted in reports.
    pub fn relative(&self, path: &Path) -> String {
        relative_to(&self.root, path)
    }
}

/// `path` with `root` stripped; unrelated paths are returned whole.
pub(crate) fn relative_to(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn plugin_candidates(src_dir: &Path) -> Vec<PathBuf> {
    let plugins = src_dir.join("plugins");
    VUETIFY_PLUGIN_CANDIDATES
        .iter()
        .map(|name| plugins.join(name))
        .collect()
}

/// On-disk overrides from `.brainscan/config.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub src_dir: Option<String>,
    pub memory_dir: Option<String>,
    pub self_source: Option<String>,
    /// Appended to the built-in skip set.
    pub extra_skip_dirs: Vec<String>,
    pub self_line_threshold: Option<usize>,
}

impl FileConfig {
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_follow_fixed_layout() {
        let config = BrainConfig::new("/proj");
        assert_eq!(config.src_dir, PathBuf::from("/proj/src"));
        assert_eq!(
            config.frontend_memory_path(),
            PathBuf::from("/proj/ADD/memory/frontendMemory.json")
        );
        assert_eq!(config.self_source, PathBuf::from("/proj/ADD/brain.ts"));
        assert_eq!(
            config.plugin_candidates,
            vec![
                PathBuf::from("/proj/src/plugins/vuetify.ts"),
                PathBuf::from("/proj/src/plugins/vuetify.js"),
            ]
        );
        assert_eq!(config.self_line_threshold, 400);
        assert!(config.skip_dirs.iter().any(|d| d == "node_modules"));
    }

    #[test]
    fn relative_strips_root() {
        let config = BrainConfig::new("/proj");
        let rel = config.relative(Path::new("/proj/src/App.vue"));
        assert_eq!(PathBuf::from(rel), PathBuf::from("src/App.vue"));
        assert_eq!(
            relative_to(Path::new("/proj"), Path::new("/elsewhere/a.ts")),
            "/elsewhere/a.ts"
        );
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = BrainConfig::load(temp.path());
        assert_eq!(config.src_dir, temp.path().join("src"));
    }

    #[test]
    fn config_file_overrides_layout() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".brainscan");
        std::fs::create_dir_all(&dir).expect("create .brainscan");
        std::fs::write(
            dir.join("config.toml"),
            r#"
src_dir = "app"
memory_dir = "out/memory"
extra_skip_dirs = ["generated", "dist"]
self_line_threshold = 900
"#,
        )
        .expect("write config");

        let config = BrainConfig::load(temp.path());
        assert_eq!(config.src_dir, temp.path().join("app"));
        assert_eq!(config.memory_dir, temp.path().join("out/memory"));
        assert_eq!(
            config.plugin_candidates[0],
            temp.path().join("app/plugins/vuetify.ts")
        );
        assert_eq!(config.self_line_threshold, 900);
        assert_eq!(
            config.skip_dirs.iter().filter(|d| d.as_str() == "dist").count(),
            1
        );
        assert!(config.skip_dirs.contains(&"generated".to_string()));
    }

    #[test]
    fn invalid_config_file_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".brainscan");
        std::fs::create_dir_all(&dir).expect("create .brainscan");
        std::fs::write(dir.join("config.toml"), "src_dir = [").expect("write config");

        let file = FileConfig::load(temp.path());
        assert!(file.src_dir.is_none());
    }
}
