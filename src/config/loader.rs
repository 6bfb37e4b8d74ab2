//! Config file loading

use crate::config::EngineConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION_KEY: &str = "report-format";

/// Load engine settings from `config_path`, or from a config file discovered
/// in `search_dir` when no path is given.
///
/// An explicitly provided file that cannot be parsed is an error. A broken
/// auto-discovered file only logs a warning and yields the defaults.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<EngineConfig> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(EngineConfig::default());
    };

    let parsed = read_config_file(&config_file);
    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(EngineConfig::default())
        }
    }
}

fn read_config_file(config_file: &Path) -> Result<EngineConfig> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    }
}

/// Parse TOML config, accepting either top-level keys or a nested
/// `[report-format]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<EngineConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION_KEY) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<EngineConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION_KEY) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates =
        ["report-format.toml", ".report-format.toml", "report-format.yml", "report-format.yaml"];

    candidates.iter().map(|c| search_dir.join(c)).find(|path| path.exists())
}
