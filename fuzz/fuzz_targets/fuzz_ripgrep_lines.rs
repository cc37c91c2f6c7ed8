//! Fuzz target for the `rg --json` line decoder.
//!
//! Goal: decoding and conversion should **never panic** on any input.
//! Errors are expected for most inputs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ripgrep_lines
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(log) = sarifw_domain::ripgrep::convert(data, &[]) {
        // Whatever decoded must also serialize.
        let _ = sarifw_domain::serialize(&log);
    }
});
