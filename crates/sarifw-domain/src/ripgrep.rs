//! `rg --json` adapter.
//!
//! ripgrep writes one JSON object per line, tagged by `type`. Only `match`
//! events become results; `begin`, `end`, `context` and `summary` are skipped.
//! Each submatch becomes its own result so every hit on a line gets its own
//! navigation target.

use serde::Deserialize;
use serde_json::{Map, Value};

use sarifw_types::{
    SarifDriver, SarifLevel, SarifLocation, SarifLog, SarifMessage, SarifRegion, SarifResult,
    SarifRun, SarifTool, ids,
};

use crate::{ConvertError, nullable, rule_id};

const EVENT_MATCH: &str = "match";

/// Payload of a `match` event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RgMatch {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub path: RgText,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub lines: RgText,
    /// 1-based.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub line_number: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub submatches: Vec<RgSubmatch>,
}

/// ripgrep's `{"text": ...}` wrapper. Non-UTF-8 data arrives as `bytes`
/// instead and is left empty here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RgText {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RgSubmatch {
    #[serde(rename = "match", default, deserialize_with = "nullable::or_default")]
    pub matched: RgText,
    /// 0-based byte offset into the line.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub start: i64,
    /// 0-based exclusive byte offset into the line.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub end: i64,
}

/// Decode the `match` events of a JSON-lines stream, in stream order.
///
/// Blank lines are skipped. Any other line that is not a JSON object fails
/// the whole stream; there is no partial recovery.
pub fn parse_matches(stdout: &[u8]) -> Result<Vec<RgMatch>, ConvertError> {
    let mut matches = Vec::new();

    for (idx, line) in stdout.split(|b| *b == b'\n').enumerate() {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let decode_err = |source: serde_json::Error| ConvertError::DecodeLine {
            tool: ids::DRIVER_RIPGREP,
            line: idx + 1,
            source,
        };

        let mut event: Map<String, Value> = serde_json::from_slice(line).map_err(decode_err)?;
        if event.get("type").and_then(Value::as_str) != Some(EVENT_MATCH) {
            continue;
        }

        let data = event.remove("data").unwrap_or(Value::Null);
        let m = Option::<RgMatch>::deserialize(data)
            .map_err(decode_err)?
            .unwrap_or_default();
        matches.push(m);
    }

    Ok(matches)
}

/// One result per submatch of a match event.
pub fn submatch_results<'a>(
    m: &'a RgMatch,
    rule_id: &'a str,
) -> impl Iterator<Item = SarifResult> + 'a {
    m.submatches.iter().map(move |sub| SarifResult {
        rule_id: rule_id.to_string(),
        level: SarifLevel::Info,
        message: SarifMessage::new(sub.matched.text.clone()),
        locations: vec![SarifLocation::new(
            m.path.text.clone(),
            SarifRegion {
                start_line: m.line_number,
                start_column: sub.start.saturating_add(1),
                end_line: m.line_number,
                end_column: sub.end.saturating_add(1),
            },
        )],
    })
}

/// Build the SARIF document for a set of decoded match events.
pub fn to_sarif(matches: &[RgMatch], args: &[String]) -> SarifLog {
    // ripgrep has no rule concept, so every result shares the invocation's ID.
    let rule_id = rule_id::synthesize(ids::COMMAND_RG, args);

    let results = matches
        .iter()
        .flat_map(|m| submatch_results(m, &rule_id))
        .collect();

    SarifLog::single_run(SarifRun {
        tool: SarifTool {
            driver: SarifDriver::with_catch_all_rule(
                ids::DRIVER_RIPGREP,
                ids::RULE_DESCRIPTION_RIPGREP,
            ),
        },
        results,
    })
}

/// Decode captured `rg --json` output into a SARIF document.
pub fn convert(stdout: &[u8], args: &[String]) -> Result<SarifLog, ConvertError> {
    let matches = parse_matches(stdout)?;
    Ok(to_sarif(&matches, args))
}
