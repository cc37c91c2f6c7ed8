use sarifw_types::{SarifLog, ids};

use crate::{ConvertError, ast_grep, ripgrep};

/// The tools sarifw knows how to wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    /// `rg`: JSON-lines events.
    Ripgrep,
    /// `sg` / `ast-grep`: one JSON array.
    AstGrep,
}

impl ToolKind {
    /// Select a tool by the command name the user typed.
    pub fn from_command(name: &str) -> Result<Self, ConvertError> {
        match name {
            ids::COMMAND_RG => Ok(ToolKind::Ripgrep),
            ids::COMMAND_SG | ids::COMMAND_AST_GREP => Ok(ToolKind::AstGrep),
            other => Err(ConvertError::UnsupportedCommand(other.to_string())),
        }
    }

    /// Executable to spawn.
    pub fn program(self) -> &'static str {
        match self {
            ToolKind::Ripgrep => ids::PROGRAM_RG,
            ToolKind::AstGrep => ids::PROGRAM_AST_GREP,
        }
    }

    /// Name reported as the SARIF driver.
    pub fn driver_name(self) -> &'static str {
        match self {
            ToolKind::Ripgrep => ids::DRIVER_RIPGREP,
            ToolKind::AstGrep => ids::DRIVER_AST_GREP,
        }
    }

    /// The user's arguments with the JSON output flag appended.
    pub fn invocation_args(self, args: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(args.len() + 1);
        out.extend_from_slice(args);
        out.push(ids::JSON_FLAG.to_string());
        out
    }

    /// Convert captured stdout. `args` are the user's arguments, without the
    /// JSON flag.
    pub fn convert(self, stdout: &[u8], args: &[String]) -> Result<SarifLog, ConvertError> {
        match self {
            ToolKind::Ripgrep => ripgrep::convert(stdout, args),
            ToolKind::AstGrep => ast_grep::convert(stdout, args),
        }
    }
}
