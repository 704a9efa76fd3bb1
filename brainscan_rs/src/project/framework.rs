//! Vuetify usage cross-check.
//!
//! Two independent facts: whether a plugin-init module exists, and which
//! `V*`-style tags the components use. Tags without a plugin is a
//! misconfiguration and is reported as its own flag.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BrainConfig;
use crate::scanners::regexes::regex_framework_tag;
use crate::types::ComponentSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkUsage {
    /// Relative path of the first plugin candidate found.
    pub plugin_path: Option<String>,
    /// Deduplicated `V[A-Z]*` tags, first-seen order.
    pub used_tags: Vec<String>,
    pub plugin_detected: bool,
    /// Tags in use but no plugin file.
    pub misconfigured: bool,
}

/// First candidate that exists on disk.
pub fn detect_plugin(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}

/// Template tags following the framework's `VBtn` naming convention.
pub fn collect_framework_tags(components: &[ComponentSummary]) -> Vec<String> {
    let mut seen = HashSet::new();
    components
        .iter()
        .flat_map(|c| c.template_tags.iter())
        .filter(|tag| regex_framework_tag().is_match(tag))
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

pub fn detect_framework(config: &BrainConfig, components: &[ComponentSummary]) -> FrameworkUsage {
    let plugin = detect_plugin(&config.plugin_candidates);
    framework_usage(config, plugin.as_deref(), collect_framework_tags(components))
}

fn framework_usage(
    config: &BrainConfig,
    plugin: Option<&Path>,
    used_tags: Vec<String>,
) -> FrameworkUsage {
    let plugin_detected = plugin.is_some();
    FrameworkUsage {
        plugin_path: plugin.map(|p| config.relative(p)),
        misconfigured: !plugin_detected && !used_tags.is_empty(),
        plugin_detected,
        used_tags,
    }
}
