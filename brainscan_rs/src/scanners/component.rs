//! Vue single-file component scanner.
//!
//! Works on the raw `.vue` text: template tags, imports, `defineEmits` /
//! `defineProps` arguments and the typing style of the component. The three
//! typing booleans are detected independently; a file may set any mix of them.

use std::path::Path;

use super::read_text;
use super::regexes::{
    captures, regex_define_emits, regex_define_props, regex_define_props_runtime,
    regex_define_props_typed, regex_import_from, regex_script_lang_ts_setup,
    regex_script_setup_lang_ts, regex_template_tag,
};
use crate::config::BrainConfig;
use crate::error::Result;
use crate::types::ComponentSummary;

/// Read and summarize one `.vue` file.
pub fn scan_component(config: &BrainConfig, path: &Path) -> Result<ComponentSummary> {
    let src = read_text(path)?;
    Ok(summarize_component(config.relative(path), &src))
}

pub fn summarize_component(file: String, src: &str) -> ComponentSummary {
    ComponentSummary {
        file,
        template_tags: captures(regex_template_tag(), src),
        imports: captures(regex_import_from(), src),
        emits: captures(regex_define_emits(), src),
        props: captures(regex_define_props(), src),
        vue_script_setup_ts: is_script_setup_ts(src),
        define_props_typed: regex_define_props_typed().is_match(src),
        define_props_runtime: regex_define_props_runtime().is_match(src),
    }
}

/// `<script setup lang="ts">` with the attributes in either order.
fn is_script_setup_ts(src: &str) -> bool {
    regex_script_lang_ts_setup().is_match(src) || regex_script_setup_lang_ts().is_match(src)
}
