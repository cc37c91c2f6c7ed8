use crate::{DEFAULT_EDITOR, DEFAULT_OUTPUT_DIR, model::SarifwConfigV1};
use camino::Utf8PathBuf;

/// Values that win over the config file (CLI flags, environment).
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub output_dir: Option<String>,
    pub editor: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub output_dir: Utf8PathBuf,
    pub editor: String,
}

pub fn resolve_config(cfg: SarifwConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let output_dir = non_blank(overrides.output_dir)
        .or(non_blank(cfg.output_dir))
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    let editor = non_blank(overrides.editor)
        .or(cfg.editor)
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
    if editor.trim().is_empty() {
        anyhow::bail!("editor command is empty");
    }

    Ok(ResolvedConfig {
        output_dir: Utf8PathBuf::from(output_dir),
        editor,
    })
}

// An empty string means "not set" rather than "the current directory".
fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
