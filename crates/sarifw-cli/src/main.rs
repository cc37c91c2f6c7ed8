//! CLI entry point for sarifw.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `sarifw-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use sarifw_app::{ConvertInput, SystemRunner, open_in_editor, run_convert, write_sarif_file};
use sarifw_settings::{Overrides, ResolvedConfig, SarifwConfigV1};

#[derive(Parser, Debug)]
#[command(
    name = "sarifw",
    version,
    about = "Run rg or ast-grep and turn the matches into SARIF",
    after_help = "Examples:\n  sarifw rg TODO src\n  sarifw --stdout sg run -p 'console.log($A)'"
)]
struct Cli {
    /// Path to sarifw config TOML.
    #[arg(long, default_value = sarifw_settings::DEFAULT_CONFIG_PATH)]
    config: Utf8PathBuf,

    /// Directory the SARIF file is written to [default: .sarifw/].
    #[arg(long, env = sarifw_settings::ENV_OUTPUT_DIR)]
    output_dir: Option<String>,

    /// Editor command used to open the SARIF file [default: code].
    #[arg(long, env = sarifw_settings::ENV_EDITOR)]
    editor: Option<String>,

    /// Print the SARIF document to stdout instead of writing a file.
    #[arg(long, conflicts_with = "no_open")]
    stdout: bool,

    /// Write the SARIF file and print its path without opening an editor.
    #[arg(long)]
    no_open: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging.
    #[arg(short, long)]
    quiet: bool,

    /// Tool to run (rg, sg or ast-grep) followed by its arguments, passed
    /// through unchanged.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    invocation: Vec<String>,
}

impl Cli {
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        // RUST_LOG directives apply on top of the -v level.
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(err) = run(&cli) {
        eprintln!("sarifw error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    // Everything after the command name belongs to the tool, even flags
    // sarifw itself understands.
    let Some((command, args)) = cli.invocation.split_first() else {
        anyhow::bail!("missing command");
    };

    let output = run_convert(ConvertInput { command, args }, &SystemRunner)?;

    if cli.stdout {
        println!("{}", output.sarif);
        return Ok(());
    }

    let path = write_sarif_file(&config.output_dir, &output.sarif)
        .with_context(|| format!("write SARIF to {}", config.output_dir))?;

    if cli.no_open {
        println!("{path}");
        return Ok(());
    }

    open_in_editor(&config.editor, &path)
}

fn load_config(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    // Missing file is allowed (defaults apply); anything else unreadable is not.
    let cfg = match std::fs::read_to_string(&cli.config) {
        Ok(text) if text.trim().is_empty() => SarifwConfigV1::default(),
        Ok(text) => sarifw_settings::parse_config_toml(&text)
            .with_context(|| format!("parse config {}", cli.config))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}; using defaults", cli.config);
            SarifwConfigV1::default()
        }
        Err(err) => {
            return Err(anyhow::Error::new(err).context(format!("read config {}", cli.config)));
        }
    };

    let overrides = Overrides {
        output_dir: cli.output_dir.clone(),
        editor: cli.editor.clone(),
    };
    sarifw_settings::resolve_config(cfg, overrides).context("resolve config")
}
