use std::sync::OnceLock;

use regex::Regex;

// Patterns are written with JavaScript escapes and translated on compile.
// `\w` is spelled `[A-Za-z0-9_]` throughout: the counts are defined over
// ASCII identifiers.

const JS_SPACE: &str = r"[\s\x{FEFF}]";
const JS_WORD_BOUNDARY: &str = r"(?-u:\b)";

/// JavaScript `\s` also matches U+FEFF, so a byte-order mark counts as
/// leading whitespace. JavaScript `\b` only knows ASCII word characters.
fn js_flavor(pattern: &str) -> String {
    pattern
        .replace(r"\s", JS_SPACE)
        .replace(r"\b", JS_WORD_BOUNDARY)
}

fn regex(pattern: &str) -> Regex {
    Regex::new(&js_flavor(pattern)).expect("valid regex literal")
}

macro_rules! cached {
    ($name:ident, $pattern:expr) => {
        pub(crate) fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| regex($pattern))
        }
    };
}

// --- walker ---
cached!(regex_code_file, r#"\.(?:m?js|tsx?|vue)$"#);

// --- imports / exports ---
cached!(regex_import_from, r#"(?m)^\s*import\s+.*?from\s+['"](.*?)['"]"#);
cached!(
    regex_export_decl,
    r#"(?m)^\s*export\s+(?:default|const|function|class)\b"#
);
cached!(regex_vuetify_create, r#"createVuetify\s*\("#);

// --- Vue SFC ---
cached!(regex_template_tag, r#"<([A-Za-z0-9_-]+)(\s|>)"#);
cached!(regex_define_emits, r#"defineEmits\(([^)]*)\)"#);
cached!(regex_define_props, r#"defineProps\(([^)]*)\)"#);
cached!(
    regex_script_lang_ts_setup,
    r#"(?i)<script[^>]*\blang\s*=\s*["']ts["'][^>]*\bsetup\b"#
);
cached!(
    regex_script_setup_lang_ts,
    r#"(?i)<script[^>]*\bsetup\b[^>]*\blang\s*=\s*["']ts["']"#
);
cached!(regex_define_props_typed, r#"defineProps\s*<[^>]+>\s*\("#);
cached!(regex_define_props_runtime, r#"defineProps\s*\(\s*\{"#);

// --- TypeScript signals ---
cached!(regex_any, r#"\bany\b"#);
cached!(regex_ts_ignore, r#"//\s*@ts-ignore\b"#);
cached!(regex_ts_expect_error, r#"//\s*@ts-expect-error\b"#);
cached!(regex_double_bang, r#"!!"#);
cached!(regex_as_const, r#"\bas\s+const\b"#);
cached!(regex_satisfies, r#"\bsatisfies\b"#);
cached!(regex_readonly, r#"\breadonly\b"#);
cached!(regex_enum, r#"\benum\s+[A-Za-z0-9_]+"#);
cached!(regex_interface, r#"\binterface\s+[A-Za-z0-9_]+"#);
cached!(regex_type_alias, r#"\btype\s+[A-Za-z0-9_]+\s*="#);
cached!(
    regex_generic_angles,
    r#"<\s*[A-Z][A-Za-z0-9_]*(\s*,\s*[A-Z][A-Za-z0-9_]*)*\s*>"#
);
cached!(regex_union, r#"[^|]\s\|\s[^|]"#);
cached!(regex_intersection, r#"\s&\s"#);

// --- performance signals ---
cached!(regex_performance_now, r#"\bperformance\.now\s*\("#);
cached!(regex_request_idle_callback, r#"\brequestIdleCallback\s*\("#);
cached!(regex_intersection_observer, r#"\bIntersectionObserver\b"#);
cached!(regex_console_time, r#"\bconsole\.(time|timeEnd)\s*\("#);
cached!(regex_dynamic_import, r#"\bimport\s*\(\s*['"].*?['"]\s*\)"#);

// --- self scan ---
cached!(
    regex_function_like,
    r#"\b(function\b|\(\)\s*=>|=>\s*\{|function\s*[A-Za-z0-9_]+\s*\()"#
);
cached!(regex_todo, r#"(?i)//\s*TODO\b"#);
cached!(regex_fixme, r#"(?i)//\s*FIXME\b"#);

// --- project files ---
cached!(regex_env_key, r#"(?m)^\s*([A-Z0-9_]+)\s*="#);
cached!(regex_framework_tag, r#"^V[A-Z]"#);

/// Non-overlapping match count, left to right.
pub(crate) fn count(re: &Regex, src: &str) -> usize {
    re.find_iter(src).count()
}

/// First capture group of every match, in order.
pub(crate) fn captures(re: &Regex, src: &str) -> Vec<String> {
    re.captures_iter(src)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        let all: [fn() -> &'static Regex; 34] = [
            regex_code_file,
            regex_import_from,
            regex_export_decl,
            regex_vuetify_create,
            regex_template_tag,
            regex_define_emits,
            regex_define_props,
            regex_script_lang_ts_setup,
            regex_script_setup_lang_ts,
            regex_define_props_typed,
            regex_define_props_runtime,
            regex_any,
            regex_ts_ignore,
            regex_ts_expect_error,
            regex_double_bang,
            regex_as_const,
            regex_satisfies,
            regex_readonly,
            regex_enum,
            regex_interface,
            regex_type_alias,
            regex_generic_angles,
            regex_union,
            regex_intersection,
            regex_performance_now,
            regex_request_idle_callback,
            regex_intersection_observer,
            regex_console_time,
            regex_dynamic_import,
            regex_function_like,
            regex_todo,
            regex_fixme,
            regex_env_key,
            regex_framework_tag,
        ];
        for re in all {
            let _ = re().as_str();
        }
    }

    #[test]
    fn escapes_follow_javascript() {
        assert_eq!(
            js_flavor(r"^\s*import\b"),
            r"^[\s\x{FEFF}]*import(?-u:\b)"
        );
        assert_eq!(js_flavor(r"\.(?:m?js|tsx?|vue)$"), r"\.(?:m?js|tsx?|vue)$");
    }

    #[test]
    fn byte_order_mark_is_leading_whitespace() {
        let src = "\u{FEFF}import { createApp } from 'vue'\n";
        assert_eq!(captures(regex_import_from(), src), vec!["vue"]);
        assert_eq!(count(regex_export_decl(), "\u{FEFF}export default {}"), 1);
        assert_eq!(captures(regex_env_key(), "\u{FEFF}API_URL=x\n"), vec!["API_URL"]);
    }

    #[test]
    fn word_boundary_is_ascii_only() {
        // `é` is not a word character for the boundary
        assert_eq!(count(regex_any(), "const éany = 1"), 1);
        assert_eq!(count(regex_satisfies(), "x satisfiesé"), 1);
        assert_eq!(count(regex_todo(), "// TODOé"), 1);
        assert_eq!(count(regex_any(), "company"), 0);
    }

    #[test]
    fn import_capture_is_lazy() {
        let src = "import { a } from 'vue'; const b = 'x'\nimport C from \"./C.vue\"\n";
        assert_eq!(captures(regex_import_from(), src), vec!["vue", "./C.vue"]);
    }

    #[test]
    fn code_file_extensions() {
        let re = regex_code_file();
        for name in ["a.js", "a.mjs", "a.ts", "a.tsx", "a.vue"] {
            assert!(re.is_match(name), "{name}");
        }
        for name in ["a.jsx", "a.cjs", "a.d.css", "a.json", "a.vue.bak"] {
            assert!(!re.is_match(name), "{name}");
        }
    }
}
