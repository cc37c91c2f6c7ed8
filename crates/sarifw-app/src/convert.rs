//! The `convert` use case: run a wrapped tool and turn its output into SARIF.

use log::info;
use sarifw_domain::ToolKind;

use crate::exec::ToolRunner;

/// Input for the convert use case.
#[derive(Clone, Copy, Debug)]
pub struct ConvertInput<'a> {
    /// Command name the user typed (`rg`, `sg`, `ast-grep`).
    pub command: &'a str,
    /// Arguments forwarded verbatim to the tool.
    pub args: &'a [String],
}

/// Output from the convert use case.
#[derive(Clone, Debug)]
pub struct ConvertOutput {
    pub tool: ToolKind,
    /// Compact SARIF JSON.
    pub sarif: String,
    pub results: usize,
}

/// Dispatch on the command name, run the tool through `runner`, convert.
///
/// Unsupported commands fail before anything is spawned.
pub fn run_convert(
    input: ConvertInput<'_>,
    runner: &dyn ToolRunner,
) -> anyhow::Result<ConvertOutput> {
    let tool = ToolKind::from_command(input.command)?;

    let captured = runner.run(tool.program(), &tool.invocation_args(input.args));

    let log = tool.convert(&captured.stdout, input.args)?;
    let results = log.runs.iter().map(|run| run.results.len()).sum();
    info!("{}: {} result(s)", tool.driver_name(), results);

    let sarif = sarifw_domain::serialize(&log)?;

    Ok(ConvertOutput {
        tool,
        sarif,
        results,
    })
}
