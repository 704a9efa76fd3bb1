use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::types::TsconfigFlags;

fn load_tsconfig(path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            debug!("skipping unparseable {}: {}", path.display(), err);
            None
        }
    }
}

/// Known fields of every candidate that exists and parses, in candidate order.
/// Unreadable or malformed files are skipped without a trace in the report.
pub fn read_tsconfigs(root: &Path, candidates: &[String]) -> Vec<TsconfigFlags> {
    candidates
        .iter()
        .filter_map(|rel| {
            let tsconfig = load_tsconfig(&root.join(rel))?;
            Some(summarize_tsconfig(rel, &tsconfig))
        })
        .collect()
}

pub fn summarize_tsconfig(rel: &str, tsconfig: &Value) -> TsconfigFlags {
    let compiler = tsconfig.get("compilerOptions").unwrap_or(&Value::Null);
    let flag = |key: &str| compiler.get(key).and_then(Value::as_bool);
    let text = |value: Option<&Value>| value.and_then(Value::as_str).map(str::to_string);

    TsconfigFlags {
        path: rel.to_string(),
        extends: text(tsconfig.get("extends")),
        strict: flag("strict"),
        no_unused_locals: flag("noUnusedLocals"),
        no_unused_parameters: flag("noUnusedParameters"),
        no_fallthrough_cases_in_switch: flag("noFallthroughCasesInSwitch"),
        no_unchecked_side_effect_imports: flag("noUncheckedSideEffectImports"),
        skip_lib_check: flag("skipLibCheck"),
        use_define_for_class_fields: flag("useDefineForClassFields"),
        module_resolution: text(compiler.get("moduleResolution")),
        types: compiler.get("types").and_then(Value::as_array).map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        }),
    }
}
