use std::iter::Sum;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// One entry of the source tree. Serialized untagged, so a folder is
/// `{"folder": .., "children": [..]}` and a file is `{"file": .., "mtimeIso": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Folder(FolderNode),
    File(FileNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Path relative to the project root.
    pub folder: String,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Path relative to the project root.
    pub file: String,
    pub mtime_iso: String,
}

impl TreeNode {
    /// Number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        match self {
            Self::Folder(folder) => 1 + folder.children.iter().map(TreeNode::count).sum::<usize>(),
            Self::File(_) => 1,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.folder,
            Self::File(file) => &file.file,
        }
    }
}

/// Signals pulled from one Vue single-file component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub file: String,
    /// Opening-tag names in order of appearance, duplicates kept.
    pub template_tags: Vec<String>,
    pub imports: Vec<String>,
    /// Raw argument text of each `defineEmits(...)`.
    pub emits: Vec<String>,
    /// Raw argument text of each `defineProps(...)`.
    pub props: Vec<String>,
    pub vue_script_setup_ts: bool,
    /// `defineProps<T>()` detected
    pub define_props_typed: bool,
    /// `defineProps({...})` detected
    pub define_props_runtime: bool,
}

/// Signals pulled from one script-like file (`.js`, `.mjs`, `.ts`, `.tsx`, `.vue`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSummary {
    pub file: String,
    pub imports: Vec<String>,
    pub export_count: usize,
    pub vuetify_create: bool,
    pub ts_signals: TsSignals,
    pub perf_signals: PerfSignals,
}

/// Occurrence counts of TypeScript constructs and escape hatches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsSignals {
    pub any_count: usize,
    pub ts_ignore_count: usize,
    pub ts_expect_error_count: usize,
    /// `!!`
    pub non_null_assertion_count: usize,
    pub as_const_count: usize,
    pub satisfies_count: usize,
    pub readonly_count: usize,
    pub enum_count: usize,
    pub interface_count: usize,
    pub type_alias_count: usize,
    /// rough `<T>` heuristic
    pub generic_angles_count: usize,
    pub union_count: usize,
    pub intersection_count: usize,
}

impl AddAssign<&TsSignals> for TsSignals {
    fn add_assign(&mut self, rhs: &TsSignals) {
        self.any_count += rhs.any_count;
        self.ts_ignore_count += rhs.ts_ignore_count;
        self.ts_expect_error_count += rhs.ts_expect_error_count;
        self.non_null_assertion_count += rhs.non_null_assertion_count;
        self.as_const_count += rhs.as_const_count;
        self.satisfies_count += rhs.satisfies_count;
        self.readonly_count += rhs.readonly_count;
        self.enum_count += rhs.enum_count;
        self.interface_count += rhs.interface_count;
        self.type_alias_count += rhs.type_alias_count;
        self.generic_angles_count += rhs.generic_angles_count;
        self.union_count += rhs.union_count;
        self.intersection_count += rhs.intersection_count;
    }
}

impl<'a> Sum<&'a TsSignals> for TsSignals {
    fn sum<I: Iterator<Item = &'a TsSignals>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, signals| {
            acc += signals;
            acc
        })
    }
}

/// Presence of runtime performance APIs. Used per file and, OR-ed together,
/// as the repository-wide presence block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfSignals {
    pub performance_now: bool,
    pub request_idle_callback: bool,
    pub intersection_observer: bool,
    pub console_time: bool,
    pub dynamic_import: bool,
}

impl PerfSignals {
    pub fn union(self, other: PerfSignals) -> PerfSignals {
        PerfSignals {
            performance_now: self.performance_now || other.performance_now,
            request_idle_callback: self.request_idle_callback || other.request_idle_callback,
            intersection_observer: self.intersection_observer || other.intersection_observer,
            console_time: self.console_time || other.console_time,
            dynamic_import: self.dynamic_import || other.dynamic_import,
        }
    }
}

/// Known fields of one tsconfig file. Absent keys are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsconfigFlags {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unused_locals: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unused_parameters: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_fallthrough_cases_in_switch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unchecked_side_effect_imports: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_lib_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_define_for_class_fields: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// The brain file measured with its own scanners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfStats {
    pub path: String,
    pub bytes: usize,
    pub lines: usize,
    pub max_line_len: usize,
    pub function_like_count: usize,
    pub todo_count: usize,
    pub fixme_count: usize,
    pub ts_signals: TsSignals,
}
