use thiserror::Error;

/// Failures surfaced by dispatch and conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The first argument named a tool sarifw does not wrap.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    /// One line of a JSON-lines stream could not be decoded.
    #[error("failed to parse {tool} output at line {line}")]
    DecodeLine {
        tool: &'static str,
        /// 1-based line number within the captured stdout.
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A whole-document JSON payload could not be decoded.
    #[error("failed to parse {tool} output")]
    Decode {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize SARIF")]
    Serialize(#[source] serde_json::Error),
}
