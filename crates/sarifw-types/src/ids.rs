//! Stable identifiers for the wrapped tools.
//!
//! `COMMAND_*` is what the user types, `PROGRAM_*` is what gets spawned and
//! `DRIVER_*` is what lands in `tool.driver.name` of the emitted run.

// ripgrep
pub const COMMAND_RG: &str = "rg";
pub const PROGRAM_RG: &str = "rg";
pub const DRIVER_RIPGREP: &str = "ripgrep";
pub const RULE_DESCRIPTION_RIPGREP: &str = "Pattern matched by ripgrep";

// ast-grep
pub const COMMAND_SG: &str = "sg";
pub const COMMAND_AST_GREP: &str = "ast-grep";
pub const PROGRAM_AST_GREP: &str = "ast-grep";
pub const DRIVER_AST_GREP: &str = "ast-grep";
pub const RULE_DESCRIPTION_AST_GREP: &str = "Pattern matched by ast-grep";

/// Flag appended to every tool invocation to force machine-readable output.
pub const JSON_FLAG: &str = "--json";
