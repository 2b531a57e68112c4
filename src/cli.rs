//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Flags mirror mktemp(1) where one exists (-d, -u, -p).
//! - --debug is a shorthand for --log-level debug.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_TEMPLATE;
use crate::config::types::{Config, LogLevel};

/// Create a unique temporary file or directory and print its path.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Create unique temporary files and directories from XXXXXX templates"
)]
pub struct Args {
    /// Template ending in XXXXXX. Defaults to "tmp.XXXXXX" inside the temp directory.
    #[arg(value_name = "TEMPLATE", value_hint = ValueHint::AnyPath)]
    pub template: Option<String>,

    /// Create a directory instead of a file.
    #[arg(short = 'd', long)]
    pub directory: bool,

    /// Print a name without creating anything (unsafe: the name may be taken later).
    #[arg(short = 'u', long)]
    pub dry_run: bool,

    /// Interpret a relative TEMPLATE relative to DIR.
    #[arg(short = 'p', long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub tmpdir: Option<PathBuf>,

    /// Override the retry budget (at least 1).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_name = "LVL",
        value_parser = clap::value_parser!(LogLevel),
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where tempname looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.tmpdir {
            cfg.tmpdir = dir.clone();
        }
        if let Some(n) = self.max_attempts {
            cfg.max_attempts = n;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }

    /// Template the generator should receive.
    ///
    /// - No TEMPLATE: `tmp.XXXXXX` under the configured temp directory.
    /// - TEMPLATE with `--tmpdir`: joined onto the directory unless already absolute.
    /// - TEMPLATE alone: used exactly as given (relative to the working directory).
    ///
    /// Fails when the directory is not valid UTF-8, since templates are text.
    pub fn resolved_template(&self, cfg: &Config) -> Result<String> {
        match (&self.template, &self.tmpdir) {
            (None, _) => join_template(&cfg.tmpdir, DEFAULT_TEMPLATE),
            (Some(t), Some(dir)) if !Path::new(t).is_absolute() => join_template(dir, t),
            (Some(t), _) => Ok(t.clone()),
        }
    }
}

fn join_template(dir: &Path, template: &str) -> Result<String> {
    let dir = dir.to_str().ok_or_else(|| {
        anyhow!(
            "temporary directory '{}' is not valid UTF-8; pass an explicit TEMPLATE",
            dir.display()
        )
    })?;
    Ok(Path::new(dir).join(template).to_string_lossy().into_owned())
}

pub fn parse() -> Args {
    Args::parse()
}
