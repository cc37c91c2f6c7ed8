//! Use case orchestration for sarifw.
//!
//! This crate provides the application layer: spawning the wrapped tool, handing its output to the
//! pure converters in `sarifw-domain`, and putting the resulting SARIF somewhere a human can see
//! it. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod convert;
mod exec;
mod output;

pub use convert::{ConvertInput, ConvertOutput, run_convert};
pub use exec::{CapturedOutput, SystemRunner, ToolRunner};
pub use output::{open_in_editor, write_sarif_file};
