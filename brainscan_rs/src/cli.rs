use std::path::PathBuf;

use clap::Parser;

use crate::config::BrainConfig;

#[derive(Parser, Debug)]
#[command(name = "brainscan")]
#[command(about = "Frontend self-awareness snapshot for Vue + TypeScript projects")]
#[command(version)]
pub struct Cli {
    /// Project root (the directory that contains `src/` and `ADD/`)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Source directory to scan, relative to the root
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Directory the snapshots are written to, relative to the root
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// File the self-scan measures, relative to the root
    #[arg(long)]
    pub self_source: Option<PathBuf>,

    /// Only print where the snapshots were saved
    #[arg(long, short)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// File config first, flags on top.
    pub fn into_config(self) -> BrainConfig {
        let mut config = BrainConfig::load(self.root);
        if let Some(src) = self.src {
            config = config.with_src_dir(src);
        }
        if let Some(out) = self.out {
            config.memory_dir = config.root.join(out);
        }
        if let Some(self_source) = self.self_source {
            config.self_source = config.root.join(self_source);
        }
        config
    }
}
