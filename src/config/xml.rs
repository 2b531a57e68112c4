//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing default file means "use defaults"; a missing explicit file is an error.
//!
//! Unknown XML fields are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{CONFIG_ENV_VAR, default_config_path};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(default, deserialize_with = "de_u32_trimmed_opt")]
    max_attempts: Option<u32>,
    tmpdir: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

// Numbers arrive as element text; tolerate surrounding whitespace/newlines.
fn de_u32_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("max_attempts '{s}': {e}"))),
    }
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim).filter(|t| !t.is_empty()).map(PathBuf::from)
}

// Map XmlConfig -> Config, starting from defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(n) = parsed.max_attempts {
        if n == 0 {
            bail!("max_attempts must be at least 1");
        }
        cfg.max_attempts = n;
    }
    if let Some(dir) = non_empty_path(parsed.tmpdir.as_deref()) {
        cfg.tmpdir = dir;
    }
    if let Some(s) = parsed.log_level.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    cfg.log_file = non_empty_path(parsed.log_file.as_deref());

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid config xml '{}'", path.display()))
}

/// Load the config from `$TEMPNAME_CONFIG` or the platform default location.
///
/// Returns Ok(None) when no explicit file is configured and the default file
/// does not exist.
pub fn load_config() -> Result<Option<Config>> {
    let explicit = env::var_os(CONFIG_ENV_VAR).is_some_and(|v| !v.is_empty());
    let Some(path) = default_config_path() else {
        debug!("No config directory available; using defaults");
        return Ok(None);
    };

    if !path.exists() {
        if explicit {
            bail!(
                "{CONFIG_ENV_VAR} points to '{}', which does not exist",
                path.display()
            );
        }
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }

    debug!(path = %path.display(), "Loading config");
    load_config_from_xml_path(&path).map(Some)
}
