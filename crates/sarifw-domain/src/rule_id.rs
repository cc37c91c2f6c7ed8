//! Rule IDs for matches that do not carry their own.

use regex::Regex;
use std::sync::LazyLock;

// ASCII whitespace only: tab, newline, form feed, carriage return, space.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("whitespace pattern is valid"));

/// Build a rule ID from the command name and its arguments.
///
/// The pieces are joined with single spaces and every whitespace run is then
/// collapsed to one space, so the ID does not depend on how the arguments
/// were spaced. Leading and trailing whitespace is collapsed, not trimmed.
pub fn synthesize(command: &str, args: &[String]) -> String {
    let joined = format!("{command} {}", args.join(" "));
    WHITESPACE_RUN.replace_all(&joined, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joins_command_and_args() {
        assert_eq!(synthesize("rg", &args(&["foo", "src"])), "rg foo src");
    }

    #[test]
    fn collapses_whitespace_inside_args() {
        assert_eq!(
            synthesize("rg", &args(&["foo  \t bar", "src\n"])),
            "rg foo bar src "
        );
    }

    #[test]
    fn no_args_keeps_trailing_space() {
        assert_eq!(synthesize("ast-grep", &[]), "ast-grep ");
    }

    #[test]
    fn empty_args_collapse_into_one_space() {
        assert_eq!(synthesize("rg", &args(&["", "", "x"])), "rg x");
    }

    #[test]
    fn non_ascii_whitespace_is_kept() {
        assert_eq!(synthesize("rg", &args(&["a\u{a0}b"])), "rg a\u{a0}b");
    }
}
