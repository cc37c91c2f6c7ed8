//! Subprocess capture.
//!
//! A nonzero exit is not a failure here: both wrapped tools exit 1 when they
//! find nothing. Callers get the captured stdout and the status and decide.

use log::{debug, warn};
use std::process::{Command, ExitStatus, Stdio};

#[derive(Clone, Debug, Default)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    /// `None` when the process could not be started at all.
    pub status: Option<ExitStatus>,
}

impl CapturedOutput {
    pub fn launched(&self) -> bool {
        self.status.is_some()
    }
}

/// Runs a wrapped tool to completion.
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String]) -> CapturedOutput;
}

/// Spawns real processes. stdout is captured; stderr goes straight to ours.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> CapturedOutput {
        debug!("running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output();

        match output {
            Ok(output) => {
                if !output.status.success() {
                    debug!("{program} exited with {}", output.status);
                }
                CapturedOutput {
                    stdout: output.stdout,
                    status: Some(output.status),
                }
            }
            Err(err) => {
                // Carry on with empty output; the converter decides whether that is an error.
                warn!("failed to run {program}: {err}");
                CapturedOutput::default()
            }
        }
    }
}
