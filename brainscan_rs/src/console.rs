//! Console overview printed after a run.
//!
//! Lines are built first and printed afterwards, so the layout can be tested
//! without capturing stdout. Styling comes from the `console` crate and is
//! dropped automatically when stdout is not a terminal.

use console::style;

use crate::config::BrainConfig;
use crate::runner::RunOutcome;

/// Saved paths, then (unless `quiet`) the full overview.
pub fn overview_lines(outcome: &RunOutcome, config: &BrainConfig, quiet: bool) -> Vec<String> {
    let summary = &outcome.analysis.summary;
    let scan = &outcome.analysis.scan;
    let written = &outcome.written;

    let mut lines = vec![
        format!("🧠 Saved: {}", config.relative(&written.frontend_memory)),
        format!("🌳 Saved: {}", config.relative(&written.structure_json)),
        format!("🗺️  Saved: {}", config.relative(&written.structure_txt)),
    ];
    if quiet {
        return lines;
    }

    lines.push(String::new());
    lines.push("======================================".to_string());
    lines.push(style("           PROJECT OVERVIEW           ").bold().to_string());
    lines.push("======================================".to_string());
    lines.extend(outcome.tree_lines.iter().cloned());
    lines.push(format!(
        "\nScan: {} → {}  ({} ms)",
        scan.started_iso, scan.ended_iso, scan.duration_ms
    ));

    let t = &summary.ts_totals;
    lines.push(section("TypeScript Hygiene"));
    lines.push(format!("Score: {}/100", score_style(summary.ts_hygiene_score)));
    lines.push(format!(
        "any:{}  @ts-ignore:{}  @ts-expect-error:{}  !!:{}",
        t.any_count, t.ts_ignore_count, t.ts_expect_error_count, t.non_null_assertion_count
    ));
    lines.push(format!(
        "as const:{}  satisfies:{}  interfaces:{}  types:{}",
        t.as_const_count, t.satisfies_count, t.interface_count, t.type_alias_count
    ));

    let sfc = &summary.vue_sfc;
    lines.push(section("Vue SFC Typing"));
    lines.push(format!(
        "script setup lang=ts: {} | defineProps<T>: {} | runtime defineProps: {}",
        sfc.script_setup_ts_count, sfc.define_props_typed_count, sfc.define_props_runtime_count
    ));

    let perf = &summary.perf_presence;
    lines.push(section("Perf Signals (any present?)"));
    lines.push(format!(
        "performance.now:{}  requestIdleCallback:{}  IntersectionObserver:{}  console.time:{}  dynamic import():{}",
        perf.performance_now,
        perf.request_idle_callback,
        perf.intersection_observer,
        perf.console_time,
        perf.dynamic_import
    ));

    if let Some(me) = &summary.self_stats {
        lines.push(section("Brain (self)"));
        lines.push(format!(
            "{}  lines:{}  bytes:{}  maxLine:{}  funcs~:{}  TODO:{}  FIXME:{}",
            me.path,
            me.lines,
            me.bytes,
            me.max_line_len,
            me.function_like_count,
            me.todo_count,
            me.fixme_count
        ));
    }

    if !summary.suggestions.is_empty() {
        lines.push(section("Suggestions"));
        lines.extend(summary.suggestions.iter().map(|s| format!("• {s}")));
    }

    let vuetify = &summary.vuetify;
    lines.push(String::new());
    if vuetify.misconfigured {
        lines.push(
            style(format!(
                "⚠️ Vuetify-like tags detected ({}) but no vuetify plugin found.",
                vuetify.used_tags.join(", ")
            ))
            .yellow()
            .to_string(),
        );
    } else if let Some(plugin) = &vuetify.plugin_path {
        lines.push(
            style(format!("✅ Vuetify plugin detected at {plugin}"))
                .green()
                .to_string(),
        );
    } else {
        lines.push("ℹ️ No Vuetify usage detected - all good.".to_string());
    }

    lines
}

pub fn print_overview(outcome: &RunOutcome, config: &BrainConfig, quiet: bool) {
    for line in overview_lines(outcome, config, quiet) {
        println!("{line}");
    }
}

fn section(title: &str) -> String {
    format!("\n--- {} ---", style(title).cyan())
}

fn score_style(score: u8) -> String {
    match score {
        80..=100 => style(score).green().to_string(),
        50..=79 => style(score).yellow().to_string(),
        _ => style(score).red().to_string(),
    }
}
