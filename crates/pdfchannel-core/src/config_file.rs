use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub extraction: Option<ExtractionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Backend to use when none is given on the command line ("lopdf",
    /// "mupdf").
    pub backend: Option<String>,
    /// Refuse inputs larger than this many megabytes. Enforced by the
    /// host before the bytes reach the channel.
    pub max_input_mb: Option<u32>,
}

/// Platform config directory path: `<config_dir>/pdfchannel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pdfchannel").join("config.toml"))
}

/// Load config by cascading CWD `.pdfchannel.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".pdfchannel.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        extraction: Some(ExtractionConfig {
            backend: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.backend.clone())
                .or_else(|| base.extraction.as_ref().and_then(|e| e.backend.clone())),
            max_input_mb: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.max_input_mb)
                .or_else(|| base.extraction.as_ref().and_then(|e| e.max_input_mb)),
        }),
    }
}
