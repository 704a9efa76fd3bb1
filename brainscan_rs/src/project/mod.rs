//! Inputs read from outside the scanned source tree.

pub mod env;
pub mod framework;
pub mod tsconfig;

pub use env::read_env_keys;
pub use framework::{FrameworkUsage, collect_framework_tags, detect_framework, detect_plugin};
pub use tsconfig::{read_tsconfigs, summarize_tsconfig};
