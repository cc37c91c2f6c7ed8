//! Shared test utilities for the sarifw workspace.
//!
//! Captured tool output fixtures live here so the app and CLI tests agree on
//! what `rg --json` and `ast-grep --json` look like, and so the CLI tests can
//! put stand-in binaries on `PATH`.

use serde_json::Value;
use std::path::{Path, PathBuf};

pub mod fixtures {
    /// `rg --json foo` over two files: one line with two hits, one with one.
    pub const RG_STREAM: &str = concat!(
        r#"{"type":"begin","data":{"path":{"text":"src/a.rs"}}}"#,
        "\n",
        r#"{"type":"match","data":{"path":{"text":"src/a.rs"},"lines":{"text":"foo(foo)\n"},"line_number":3,"absolute_offset":20,"submatches":[{"match":{"text":"foo"},"start":0,"end":3},{"match":{"text":"foo"},"start":4,"end":7}]}}"#,
        "\n",
        r#"{"type":"end","data":{"path":{"text":"src/a.rs"},"binary_offset":null,"stats":{"matched_lines":1,"matches":2}}}"#,
        "\n",
        r#"{"type":"begin","data":{"path":{"text":"src/b.rs"}}}"#,
        "\n",
        r#"{"type":"match","data":{"path":{"text":"src/b.rs"},"lines":{"text":"let x = foo;\n"},"line_number":10,"absolute_offset":97,"submatches":[{"match":{"text":"foo"},"start":8,"end":11}]}}"#,
        "\n",
        r#"{"type":"end","data":{"path":{"text":"src/b.rs"},"binary_offset":null,"stats":{"matched_lines":1,"matches":1}}}"#,
        "\n",
        r#"{"data":{"elapsed_total":{"human":"0.002s","nanos":2000000,"secs":0},"stats":{"matched_lines":2,"matches":3}},"type":"summary"}"#,
        "\n",
    );

    /// What `rg --json` prints when nothing matches: just the summary.
    pub const RG_NO_MATCHES: &str = concat!(
        r#"{"data":{"elapsed_total":{"human":"0.001s","nanos":1000000,"secs":0},"stats":{"matched_lines":0,"matches":0}},"type":"summary"}"#,
        "\n",
    );

    /// A stream where the second line is plain text.
    pub const RG_MALFORMED: &str = concat!(
        r#"{"type":"begin","data":{"path":{"text":"src/a.rs"}}}"#,
        "\n",
        "this is not json\n",
    );

    /// `ast-grep run -p 'console.log($A)' --json`: two pattern matches.
    pub const AST_GREP_ARRAY: &str = r#"[
{"text":"console.log(a)","range":{"byteOffset":{"start":12,"end":26},"start":{"line":1,"column":2},"end":{"line":1,"column":16}},"file":"src/app.ts","lines":"  console.log(a)","charCount":{"leading":2,"trailing":0},"language":"TypeScript"},
{"text":"console.log(\n  b\n)","range":{"byteOffset":{"start":40,"end":58},"start":{"line":4,"column":0},"end":{"line":6,"column":1}},"file":"src/app.ts","lines":"console.log(\n  b\n)","charCount":{"leading":0,"trailing":0},"language":"TypeScript"}
]
"#;

    /// `ast-grep scan --json`: one match reported by a rule.
    pub const AST_GREP_SCAN: &str = r#"[{"ruleId":"no-console","severity":"warning","message":"Unexpected console statement","note":null,"text":"console.log(a)","range":{"byteOffset":{"start":12,"end":26},"start":{"line":1,"column":2},"end":{"line":1,"column":16}},"file":"src/app.ts","lines":"  console.log(a)","charCount":{"leading":2,"trailing":0},"language":"TypeScript"}]"#;
}

/// Parse SARIF text, panicking with the offending text on failure.
pub fn parse_sarif(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("invalid SARIF JSON ({e}):\n{text}"))
}

/// The `results` array of the first run.
pub fn results(sarif: &Value) -> &[Value] {
    sarif["runs"][0]["results"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_else(|| panic!("SARIF has no runs[0].results:\n{sarif}"))
}

/// Install an executable named `name` in `dir` that prints `stdout`, records
/// its arguments (one per line) to `<name>.args` next to itself, and exits
/// with `exit_code`.
#[cfg(unix)]
pub fn install_fake_tool(dir: &Path, name: &str, stdout: &str, exit_code: i32) -> PathBuf {
    install_fake_tool_with_stderr(dir, name, stdout, "", exit_code)
}

/// Like [`install_fake_tool`], but the tool also writes `stderr` to its
/// standard error.
#[cfg(unix)]
pub fn install_fake_tool_with_stderr(
    dir: &Path,
    name: &str,
    stdout: &str,
    stderr: &str,
    exit_code: i32,
) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join(name);
    let stdout_payload = dir.join(format!("{name}.stdout"));
    let stderr_payload = dir.join(format!("{name}.stderr"));
    std::fs::write(&stdout_payload, stdout).expect("write fake tool stdout");
    std::fs::write(&stderr_payload, stderr).expect("write fake tool stderr");

    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$0.args\"\ncat '{}' >&2\ncat '{}'\nexit {}\n",
        stderr_payload.display(),
        stdout_payload.display(),
        exit_code
    );
    std::fs::write(&bin, script).expect("write fake tool");
    let mut perms = std::fs::metadata(&bin).expect("stat fake tool").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&bin, perms).expect("chmod fake tool");
    bin
}

/// Arguments the fake tool at `bin` was last invoked with.
pub fn recorded_args(bin: &Path) -> Vec<String> {
    let path = PathBuf::from(format!("{}.args", bin.display()));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}

/// `PATH` with `dir` prepended.
pub fn path_with(dir: &Path) -> std::ffi::OsString {
    let mut paths = vec![dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).expect("join PATH")
}
