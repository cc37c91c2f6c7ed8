use serde::{Deserialize, Serialize};

/// `.sarifw.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SarifwConfigV1 {
    /// Directory the temporary `*.sarif` files are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Editor command line; the SARIF file path is appended as the last argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}
