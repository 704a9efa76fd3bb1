//! Repository-wide aggregation and the TypeScript hygiene score.
//!
//! The score is a fixed linear formula clamped to 0-100:
//!
//! ```text
//! 100 - (any*8 + @ts-ignore*10 + @ts-expect-error*4 + !!*3)
//!     + (defineProps<T> components*2 + satisfies*2 + as const*1)
//! ```
//!
//! # Example
//!
//! ```rust
//! use brainscan::score::hygiene_score;
//! use brainscan::TsSignals;
//!
//! let totals = TsSignals { any_count: 2, ..Default::default() };
//! assert_eq!(hygiene_score(&totals, 0), 84);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{CodeSummary, ComponentSummary, PerfSignals, SelfStats, TsSignals};

pub const PENALTY_ANY: i64 = 8;
pub const PENALTY_TS_IGNORE: i64 = 10;
pub const PENALTY_TS_EXPECT_ERROR: i64 = 4;
pub const PENALTY_NON_NULL: i64 = 3;

pub const REWARD_DEFINE_PROPS_TYPED: i64 = 2;
pub const REWARD_SATISFIES: i64 = 2;
pub const REWARD_AS_CONST: i64 = 1;

pub const MAX_SCORE: i64 = 100;

/// Typing style adoption across components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SfcTyping {
    pub script_setup_ts_count: usize,
    pub define_props_typed_count: usize,
    pub define_props_runtime_count: usize,
}

/// Everything the scorer needs, folded from the per-file records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub ts_totals: TsSignals,
    pub perf_presence: PerfSignals,
    pub sfc_typing: SfcTyping,
}

pub fn aggregate(components: &[ComponentSummary], code: &[CodeSummary]) -> Aggregate {
    Aggregate {
        ts_totals: code.iter().map(|c| &c.ts_signals).sum(),
        perf_presence: code
            .iter()
            .fold(PerfSignals::default(), |acc, c| acc.union(c.perf_signals)),
        sfc_typing: SfcTyping {
            script_setup_ts_count: components.iter().filter(|c| c.vue_script_setup_ts).count(),
            define_props_typed_count: components.iter().filter(|c| c.define_props_typed).count(),
            define_props_runtime_count: components
                .iter()
                .filter(|c| c.define_props_runtime)
                .count(),
        },
    }
}

fn weighted(count: usize, weight: i64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX).saturating_mul(weight)
}

/// Bounded 0-100 score; saturating so huge counts still clamp cleanly.
pub fn hygiene_score(totals: &TsSignals, typed_props_components: usize) -> u8 {
    let negatives = weighted(totals.any_count, PENALTY_ANY)
        .saturating_add(weighted(totals.ts_ignore_count, PENALTY_TS_IGNORE))
        .saturating_add(weighted(totals.ts_expect_error_count, PENALTY_TS_EXPECT_ERROR))
        .saturating_add(weighted(totals.non_null_assertion_count, PENALTY_NON_NULL));

    let positives = weighted(typed_props_components, REWARD_DEFINE_PROPS_TYPED)
        .saturating_add(weighted(totals.satisfies_count, REWARD_SATISFIES))
        .saturating_add(weighted(totals.as_const_count, REWARD_AS_CONST));

    let raw = MAX_SCORE.saturating_sub(negatives).saturating_add(positives);
    raw.clamp(0, MAX_SCORE) as u8
}

/// Fixed improvement hints, evaluated in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    ReplaceAny,
    AvoidTsIgnore,
    AvoidDoubleBang,
    UseTypedProps,
    UseDynamicImport,
    UseIntersectionObserver,
    SplitBrainFile,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ReplaceAny => "Replace `any` with generics or discriminated unions.",
            Self::AvoidTsIgnore => {
                "Avoid `@ts-ignore`; prefer proper typing or `@ts-expect-error` with rationale."
            }
            Self::AvoidDoubleBang => {
                "Avoid `!!`; narrow types via guards, `in`, or user-defined type predicates."
            }
            Self::UseTypedProps => "Use `defineProps<T>()` for typed props in SFCs.",
            Self::UseDynamicImport => {
                "Consider dynamic `import()` for code-splitting large routes/components."
            }
            Self::UseIntersectionObserver => {
                "Use `IntersectionObserver` for lazy rendering of lists/images when appropriate."
            }
            Self::SplitBrainFile => {
                "Brain file is getting large - consider modularizing scanners into `ADD/scanners/*`."
            }
        }
    }
}

/// Every rule is checked; each adds at most one suggestion.
pub fn suggestions(
    agg: &Aggregate,
    self_stats: Option<&SelfStats>,
    self_line_threshold: usize,
) -> Vec<Suggestion> {
    let totals = &agg.ts_totals;
    let rules = [
        (totals.any_count > 0, Suggestion::ReplaceAny),
        (totals.ts_ignore_count > 0, Suggestion::AvoidTsIgnore),
        (totals.non_null_assertion_count > 0, Suggestion::AvoidDoubleBang),
        (
            agg.sfc_typing.define_props_typed_count == 0,
            Suggestion::UseTypedProps,
        ),
        (!agg.perf_presence.dynamic_import, Suggestion::UseDynamicImport),
        (
            !agg.perf_presence.intersection_observer,
            Suggestion::UseIntersectionObserver,
        ),
        (
            self_stats.is_some_and(|s| s.lines > self_line_threshold),
            Suggestion::SplitBrainFile,
        ),
    ];
    rules
        .into_iter()
        .filter_map(|(hit, suggestion)| hit.then_some(suggestion))
        .collect()
}
