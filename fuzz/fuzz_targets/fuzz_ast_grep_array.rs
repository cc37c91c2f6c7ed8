//! Fuzz target for the `ast-grep --json` array decoder.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ast_grep_array
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(matches) = sarifw_domain::ast_grep::parse_matches(data) else {
        return;
    };
    // Large positions must not overflow into a panic.
    let log = sarifw_domain::ast_grep::to_sarif(&matches, &["-p".to_string()]);
    let _ = sarifw_domain::serialize(&log);
});
