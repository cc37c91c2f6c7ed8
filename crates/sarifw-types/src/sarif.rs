//! The SARIF 2.1.0 subset sarifw emits.
//!
//! Field names and field order are part of the output contract. Empty
//! sequences are always serialized so a run with no findings still carries
//! `"results":[]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
pub const SARIF_VERSION: &str = "2.1.0";

/// Root SARIF document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifLog {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

impl SarifLog {
    /// A document holding exactly one run, which is all sarifw ever produces.
    pub fn single_run(run: SarifRun) -> Self {
        Self {
            schema: SARIF_SCHEMA.to_string(),
            version: SARIF_VERSION.to_string(),
            runs: vec![run],
        }
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifDriver {
    pub name: String,
    pub rules: Vec<SarifRule>,
}

impl SarifDriver {
    /// Driver that declares a single catch-all rule named after the tool.
    pub fn with_catch_all_rule(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: vec![SarifRule {
                id: name.to_string(),
                name: name.to_string(),
                short_description: SarifMessage::new(description),
            }],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRule {
    pub id: String,
    pub name: String,
    pub short_description: SarifMessage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifMessage {
    pub text: String,
}

impl SarifMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub level: SarifLevel,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

impl SarifLocation {
    pub fn new(uri: impl Into<String>, region: SarifRegion) -> Self {
        Self {
            physical_location: SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation { uri: uri.into() },
                region,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

/// File reference. The URI is whatever the tool reported; it is neither
/// normalized nor checked for existence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarifArtifactLocation {
    pub uri: String,
}

/// 1-based inclusive span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: i64,
    pub start_column: i64,
    pub end_line: i64,
    pub end_column: i64,
}

/// Result severity.
///
/// The wrapped tools are free to report any severity string, so anything that
/// is not one of the well-known values is carried through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SarifLevel {
    Error,
    Warning,
    #[default]
    Info,
    Note,
    Other(String),
}

impl SarifLevel {
    pub fn as_str(&self) -> &str {
        match self {
            SarifLevel::Error => "error",
            SarifLevel::Warning => "warning",
            SarifLevel::Info => "info",
            SarifLevel::Note => "note",
            SarifLevel::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for SarifLevel {
    fn from(value: &str) -> Self {
        match value {
            "error" => SarifLevel::Error,
            "warning" => SarifLevel::Warning,
            "info" => SarifLevel::Info,
            "note" => SarifLevel::Note,
            other => SarifLevel::Other(other.to_string()),
        }
    }
}

impl From<String> for SarifLevel {
    fn from(value: String) -> Self {
        SarifLevel::from(value.as_str())
    }
}

impl fmt::Display for SarifLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SarifLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SarifLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SarifLevel::from(s))
    }
}
