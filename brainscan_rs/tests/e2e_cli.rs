//! End-to-End CLI Tests for brainscan

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn brainscan() -> Command {
    cargo_bin_cmd!("brainscan")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
    fs::write(path, content).expect("write file");
}

/// Small Vue + TS project: one typed component, one plain TS file.
fn vue_project() -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    write(
        root,
        "src/components/Button.vue",
        "<template>\n  <button>{{ label }}</button>\n</template>\n<script setup lang=\"ts\">\ndefineProps<{ label: string }>()\n</script>\n",
    );
    write(
        root,
        "src/main.ts",
        "import { createApp } from 'vue'\nexport const routes = [] as const\nconst Page = () => import('./Page.vue')\n",
    );
    write(root, ".env.local", "VITE_API=https://example.test\n");
    temp
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        brainscan()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("brainscan"))
            .stdout(predicate::str::contains("--root"))
            .stdout(predicate::str::contains("--quiet"));
    }

    #[test]
    fn shows_version() {
        brainscan()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Scan Runs
// ============================================

mod scan {
    use super::*;

    #[test]
    fn missing_src_exits_with_one() {
        let temp = TempDir::new().expect("temp dir");
        brainscan()
            .arg("--root")
            .arg(temp.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("src/ not found"));
        assert!(!temp.path().join("ADD/memory").exists());
    }

    #[test]
    fn writes_three_snapshots() {
        let temp = vue_project();
        brainscan()
            .arg("--root")
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("frontendMemory.json"))
            .stdout(predicate::str::contains("PROJECT OVERVIEW"))
            .stdout(predicate::str::contains("No Vuetify usage detected"));

        let memory = temp.path().join("ADD/memory");
        let report: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(memory.join("frontendMemory.json")).expect("memory"),
        )
        .expect("memory json");
        let summary = &report["summary"];
        assert_eq!(summary["componentsScanned"], 1);
        assert_eq!(summary["filesScanned"], 2);
        assert_eq!(summary["envVars"][0], "VITE_API");
        // 100 + typed props*2 + as const*1
        assert_eq!(summary["tsHygieneScore"], 100);
        assert_eq!(summary["perfPresence"]["dynamicImport"], true);
        assert_eq!(report["scan"]["startedIso"].as_str().map(str::len), Some(24));

        let structure: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(memory.join("structure.json")).expect("structure"),
        )
        .expect("structure json");
        assert_eq!(structure["scan"], report["scan"]);

        // header + components/, Button.vue, main.ts
        let txt = fs::read_to_string(memory.join("structure.txt")).expect("txt");
        assert_eq!(txt.lines().count(), 4);
        assert!(txt.starts_with("📁 src/\n"));
        assert!(txt.ends_with('\n'));
        assert_eq!(structure["treeView"].as_str(), Some(txt.trim_end_matches('\n')));
    }

    #[test]
    fn quiet_skips_overview() {
        let temp = vue_project();
        brainscan()
            .arg("--root")
            .arg(temp.path())
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved:"))
            .stdout(predicate::str::contains("PROJECT OVERVIEW").not());
    }

    #[test]
    fn warns_on_vuetify_tags_without_plugin() {
        let temp = vue_project();
        write(
            temp.path(),
            "src/App.vue",
            "<template><VApp><VMain></VMain></VApp></template>\n",
        );
        brainscan()
            .arg("--root")
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Vuetify-like tags detected (VApp, VMain) but no vuetify plugin found.",
            ));
    }

    #[test]
    fn custom_out_dir() {
        let temp = vue_project();
        brainscan()
            .arg("--root")
            .arg(temp.path())
            .args(["--out", "snapshots", "-q"])
            .assert()
            .success();
        assert!(temp.path().join("snapshots/structure.txt").exists());
        assert!(!temp.path().join("ADD/memory").exists());
    }

    #[test]
    fn config_file_adds_skip_dirs() {
        let temp = vue_project();
        write(temp.path(), "src/generated/api.ts", "let x: any\n");
        write(
            temp.path(),
            ".brainscan/config.toml",
            "extra_skip_dirs = [\"generated\"]\n",
        );
        brainscan()
            .arg("--root")
            .arg(temp.path())
            .arg("-q")
            .assert()
            .success();
        let txt = fs::read_to_string(temp.path().join("ADD/memory/structure.txt")).expect("txt");
        assert!(!txt.contains("generated"));
    }
}
