//! Property-based tests for the converters.
//!
//! These tests use proptest to verify invariants around:
//! - 0-based to 1-based region conversion
//! - rule ID whitespace collapsing
//! - output determinism
//! - decoder robustness on arbitrary input

use crate::{ast_grep, ripgrep, rule_id, serialize};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Strategies
// ============================================================================

/// Submatch offsets within a line, `start <= end`.
fn arb_submatch() -> impl Strategy<Value = (i64, i64)> {
    (0i64..4096, 0i64..256).prop_map(|(start, len)| (start, start + len))
}

fn arb_position() -> impl Strategy<Value = (i64, i64)> {
    (0i64..100_000, 0i64..1_000)
}

/// Arguments with arbitrary ASCII whitespace sprinkled in.
fn arb_args() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-z\\-.*$= \t\r\n]{0,12}").unwrap(),
        0..6,
    )
}

fn rg_match_line(path: &str, line_number: i64, subs: &[(i64, i64)]) -> String {
    let submatches: Vec<_> = subs
        .iter()
        .map(|(start, end)| json!({"match": {"text": "m"}, "start": start, "end": end}))
        .collect();
    json!({
        "type": "match",
        "data": {
            "path": {"text": path},
            "lines": {"text": "line"},
            "line_number": line_number,
            "submatches": submatches,
        }
    })
    .to_string()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn rg_columns_are_offsets_plus_one(
        line_number in 1i64..1_000_000,
        subs in prop::collection::vec(arb_submatch(), 0..8),
    ) {
        let input = rg_match_line("src/lib.rs", line_number, &subs);
        let log = ripgrep::convert(input.as_bytes(), &[]).unwrap();
        let results = &log.runs[0].results;

        prop_assert_eq!(results.len(), subs.len());
        for (r, (start, end)) in results.iter().zip(&subs) {
            let region = r.locations[0].physical_location.region;
            prop_assert_eq!(region.start_column, start + 1);
            prop_assert_eq!(region.end_column, end + 1);
            prop_assert_eq!(region.start_line, line_number);
            prop_assert_eq!(region.end_line, line_number);
        }
    }

    #[test]
    fn ast_grep_positions_are_plus_one(
        start in arb_position(),
        end in arb_position(),
    ) {
        let input = json!([{
            "text": "x",
            "file": "a.ts",
            "range": {
                "start": {"line": start.0, "column": start.1},
                "end": {"line": end.0, "column": end.1},
            }
        }])
        .to_string();
        let log = ast_grep::convert(input.as_bytes(), &[]).unwrap();
        let region = log.runs[0].results[0].locations[0].physical_location.region;

        prop_assert_eq!(region.start_line, start.0 + 1);
        prop_assert_eq!(region.start_column, start.1 + 1);
        prop_assert_eq!(region.end_line, end.0 + 1);
        prop_assert_eq!(region.end_column, end.1 + 1);
    }

    #[test]
    fn rg_rule_id_is_collapsed_invocation(args in arb_args()) {
        let input = rg_match_line("a", 1, &[(0, 1)]);
        let log = ripgrep::convert(input.as_bytes(), &args).unwrap();
        let id = &log.runs[0].results[0].rule_id;

        prop_assert_eq!(id, &rule_id::synthesize("rg", &args));
        prop_assert!(id.starts_with("rg "));
        prop_assert!(!id.contains("  "));
        prop_assert!(!id.contains(['\t', '\r', '\n']));
    }

    #[test]
    fn rule_id_collapse_is_idempotent(args in arb_args()) {
        let once = rule_id::synthesize("ast-grep", &args);
        let rest = once.strip_prefix("ast-grep ").unwrap_or_default();
        let twice = rule_id::synthesize("ast-grep", &[rest.to_string()]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn conversion_is_deterministic(
        subs in prop::collection::vec(arb_submatch(), 0..4),
        args in arb_args(),
    ) {
        let input = rg_match_line("x.go", 7, &subs);
        let a = serialize(&ripgrep::convert(input.as_bytes(), &args).unwrap()).unwrap();
        let b = serialize(&ripgrep::convert(input.as_bytes(), &args).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = ripgrep::parse_matches(&data);
        let _ = ast_grep::parse_matches(&data);
    }
}
