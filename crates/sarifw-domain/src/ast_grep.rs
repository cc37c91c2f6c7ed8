//! `ast-grep --json` adapter.
//!
//! ast-grep prints a single JSON array, so the document either decodes as a
//! whole or the conversion fails. Each match object becomes exactly one
//! result spanning the whole matched node.

use serde::Deserialize;

use sarifw_types::{
    SarifDriver, SarifLevel, SarifLocation, SarifLog, SarifMessage, SarifRegion, SarifResult,
    SarifRun, SarifTool, ids,
};

use crate::{ConvertError, nullable, rule_id};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AstGrepMatch {
    /// Present when the match came from a rule (`ast-grep scan`).
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub rule_id: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub severity: String,
    /// The matched source text.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub range: AstGrepRange,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub file: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub lines: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub char_count: AstGrepCharCount,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub language: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AstGrepRange {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub byte_offset: AstGrepByteOffset,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub start: AstGrepPosition,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub end: AstGrepPosition,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AstGrepByteOffset {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub start: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub end: i64,
}

/// 0-based line and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AstGrepPosition {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub line: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub column: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AstGrepCharCount {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub leading: i64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub trailing: i64,
}

/// Decode the JSON array ast-grep prints. A top-level `null` or `null`
/// elements decode as empty.
pub fn parse_matches(stdout: &[u8]) -> Result<Vec<AstGrepMatch>, ConvertError> {
    let matches: Option<Vec<Option<AstGrepMatch>>> =
        serde_json::from_slice(stdout).map_err(|source| ConvertError::Decode {
            tool: ids::DRIVER_AST_GREP,
            source,
        })?;

    Ok(matches
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Map one match to a result, filling in defaults for anything the match
/// left empty.
pub fn to_result(m: &AstGrepMatch, args: &[String]) -> SarifResult {
    let rule_id = if m.rule_id.is_empty() {
        rule_id::synthesize(ids::COMMAND_AST_GREP, args)
    } else {
        m.rule_id.clone()
    };
    let message = if m.message.is_empty() {
        m.text.clone()
    } else {
        m.message.clone()
    };
    let level = if m.severity.is_empty() {
        SarifLevel::Info
    } else {
        SarifLevel::from(m.severity.as_str())
    };

    SarifResult {
        rule_id,
        level,
        message: SarifMessage::new(message),
        locations: vec![SarifLocation::new(
            m.file.clone(),
            SarifRegion {
                start_line: m.range.start.line.saturating_add(1),
                start_column: m.range.start.column.saturating_add(1),
                end_line: m.range.end.line.saturating_add(1),
                end_column: m.range.end.column.saturating_add(1),
            },
        )],
    }
}

pub fn to_sarif(matches: &[AstGrepMatch], args: &[String]) -> SarifLog {
    SarifLog::single_run(SarifRun {
        tool: SarifTool {
            driver: SarifDriver::with_catch_all_rule(
                ids::DRIVER_AST_GREP,
                ids::RULE_DESCRIPTION_AST_GREP,
            ),
        },
        results: matches.iter().map(|m| to_result(m, args)).collect(),
    })
}

/// Decode captured `ast-grep --json` output into a SARIF document.
pub fn convert(stdout: &[u8], args: &[String]) -> Result<SarifLog, ConvertError> {
    let matches = parse_matches(stdout)?;
    Ok(to_sarif(&matches, args))
}
