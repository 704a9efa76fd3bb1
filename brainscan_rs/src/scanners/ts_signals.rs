//! TypeScript construct and escape-hatch counters.
//!
//! Each counter is the number of non-overlapping matches of one fixed
//! pattern over the whole text. The union/intersection heuristics are plain
//! token-adjacency checks and are kept that way: the hygiene score is
//! defined against these exact counts.

use super::regexes::{
    count, regex_any, regex_as_const, regex_double_bang, regex_enum, regex_generic_angles,
    regex_interface, regex_intersection, regex_readonly, regex_satisfies, regex_ts_expect_error,
    regex_ts_ignore, regex_type_alias, regex_union,
};
use crate::types::TsSignals;

pub fn scan_ts_signals(src: &str) -> TsSignals {
    TsSignals {
        any_count: count(regex_any(), src),
        ts_ignore_count: count(regex_ts_ignore(), src),
        ts_expect_error_count: count(regex_ts_expect_error(), src),
        non_null_assertion_count: count(regex_double_bang(), src),
        as_const_count: count(regex_as_const(), src),
        satisfies_count: count(regex_satisfies(), src),
        readonly_count: count(regex_readonly(), src),
        enum_count: count(regex_enum(), src),
        interface_count: count(regex_interface(), src),
        type_alias_count: count(regex_type_alias(), src),
        generic_angles_count: count(regex_generic_angles(), src),
        union_count: count(regex_union(), src),
        intersection_count: count(regex_intersection(), src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(scan_ts_signals(""), TsSignals::default());
        assert_eq!(
            scan_ts_signals("const label = 'hello'\n"),
            TsSignals::default()
        );
    }

    #[test]
    fn any_is_word_bounded() {
        let src = "let a: any = 1\nconst company = anyway(b as any)\n";
        assert_eq!(scan_ts_signals(src).any_count, 2);
    }

    #[test]
    fn appending_a_match_adds_exactly_one() {
        let base = "function f(x: number) { return x }\n";
        let cases: [(&str, fn(&TsSignals) -> usize); 13] = [
            ("let y: any\n", |s| s.any_count),
            ("// @ts-ignore\n", |s| s.ts_ignore_count),
            ("//@ts-expect-error\n", |s| s.ts_expect_error_count),
            ("const ok = !!flag\n", |s| s.non_null_assertion_count),
            ("const o = { a: 1 } as const\n", |s| s.as_const_count),
            ("const c = {} satisfies Config\n", |s| s.satisfies_count),
            ("readonly id: string\n", |s| s.readonly_count),
            ("enum Color { Red }\n", |s| s.enum_count),
            ("interface Props { a: string }\n", |s| s.interface_count),
            ("type Id = string\n", |s| s.type_alias_count),
            ("const m = new Map<Key>()\n", |s| s.generic_angles_count),
            ("let u: A | B\n", |s| s.union_count),
            ("let i: A & B\n", |s| s.intersection_count),
        ];
        for (extra, field) in cases {
            let before = field(&scan_ts_signals(base));
            let after = field(&scan_ts_signals(&format!("{base}{extra}")));
            assert_eq!(before, 0, "{extra}");
            assert_eq!(after, 1, "{extra}");
        }
    }

    #[test]
    fn comment_markers_need_line_comment() {
        let src = "/* @ts-ignore */\n// @ts-ignore\n//   @ts-expect-error next\n";
        let signals = scan_ts_signals(src);
        assert_eq!(signals.ts_ignore_count, 1);
        assert_eq!(signals.ts_expect_error_count, 1);
    }

    #[test]
    fn double_bang_counts_pairs() {
        let signals = scan_ts_signals("const a = !!b; const c = !!!d;");
        assert_eq!(signals.non_null_assertion_count, 2);
    }

    #[test]
    fn satisfies_readonly_and_generics() {
        let src = "const cfg = {} satisfies Config\nreadonly items: Map<Key, Value>\nref<T>()\nlist<string>\n";
        let signals = scan_ts_signals(src);
        assert_eq!(signals.satisfies_count, 1);
        assert_eq!(signals.readonly_count, 1);
        assert_eq!(signals.generic_angles_count, 2);
    }

    #[test]
    fn union_and_intersection_are_naive() {
        let signals = scan_ts_signals("type A = B | C\nconst x = a || b\ntype D = E & F\n");
        assert_eq!(signals.union_count, 1);
        assert_eq!(signals.intersection_count, 1);

        // adjacent unions share the middle token, so the second one is missed
        let chained = scan_ts_signals("type T = a | b | c");
        assert_eq!(chained.union_count, 1);

        // bitwise-and with spaces still counts as an intersection
        assert_eq!(scan_ts_signals("const m = x & 1").intersection_count, 1);
    }
}
