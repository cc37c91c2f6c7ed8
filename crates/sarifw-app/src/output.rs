//! Where the SARIF ends up: a kept temp file and, optionally, an editor.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use std::io::Write;
use std::process::Command;

/// Write `sarif` to a new, uniquely named `*.sarif` file inside `dir`.
///
/// `dir` (and its parents) are created when missing. The file is kept after
/// return; cleaning it up is the user's business.
pub fn write_sarif_file(dir: &Utf8Path, sarif: &str) -> anyhow::Result<Utf8PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create directory: {}", dir))?;

    let mut file = tempfile::Builder::new()
        .prefix("")
        .suffix(".sarif")
        .tempfile_in(dir)
        .with_context(|| format!("create sarif file in: {}", dir))?;
    file.write_all(sarif.as_bytes())
        .with_context(|| format!("write sarif: {}", file.path().display()))?;

    let (_, path) = file.keep().context("keep sarif file")?;
    let path = Utf8PathBuf::from_path_buf(path)
        .map_err(|p| anyhow::anyhow!("sarif path is not UTF-8: {}", p.display()))?;

    info!("tmp: {}", path);
    Ok(path)
}

/// Open `path` with `editor`, a shell-style command line such as `code --wait`.
///
/// The editor inherits our stdio and is awaited. A nonzero exit is an error.
pub fn open_in_editor(editor: &str, path: &Utf8Path) -> anyhow::Result<()> {
    let words =
        shlex::split(editor).with_context(|| format!("parse editor command: {editor:?}"))?;
    let Some((program, extra)) = words.split_first() else {
        bail!("editor command is empty");
    };

    debug!("launching editor: {} {:?} {}", program, extra, path);
    let status = Command::new(program)
        .args(extra)
        .arg(path)
        .status()
        .with_context(|| format!("launch editor: {program}"))?;

    if !status.success() {
        bail!("editor {program} exited with {status}");
    }
    Ok(())
}
