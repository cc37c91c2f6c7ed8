//! Pure conversion of tool output into SARIF (no IO).
//!
//! Input: the captured stdout of `rg --json` or `ast-grep --json` plus the
//! arguments the tool was invoked with.
//! Output: a single-run SARIF document.

#![forbid(unsafe_code)]

pub mod ast_grep;
pub mod ripgrep;
pub mod rule_id;

mod error;
mod nullable;
mod tool;

#[cfg(test)]
mod proptest;

pub use error::ConvertError;
pub use tool::ToolKind;

use sarifw_types::SarifLog;

/// Encode a document as compact JSON.
pub fn serialize(log: &SarifLog) -> Result<String, ConvertError> {
    log.to_json().map_err(ConvertError::Serialize)
}
