//! Application orchestrator.
//! Loads/merges config, initializes logging, resolves the template and runs
//! the requested generation.

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use tempname::cli::Args;
use tempname::config::{CONFIG_ENV_VAR, default_config_path, load_config};
use tempname::hints::explain;
use tempname::output as out;
use tempname::{Config, TempNameError, TempNameGenerator};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Config file values first, then CLI overrides (CLI wins).
    let mut cfg = load_config()?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    // Hold the guard until we return so buffered file logs are flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)?;
    debug!(?args, ?cfg, "Starting tempname");

    let template = args.resolved_template(&cfg)?;
    // main prints the user-facing message; keep the structured record below WARN.
    let created = generate(&args, &cfg, &template).map_err(|e| {
        debug!(code = e.code(), kind = e.kind(), %template, error = %e, "Generation failed");
        anyhow!(explain(&e))
    })?;

    out::print_user(&created);
    Ok(())
}

fn generate(args: &Args, cfg: &Config, template: &str) -> Result<String, TempNameError> {
    let mut generator = TempNameGenerator::os().with_max_attempts(cfg.max_attempts);

    if args.dry_run {
        let name = generator.generate_name(template)?;
        info!(name = %name, "Dry-run: generated name without creating it");
        return Ok(name);
    }

    let path = if args.directory {
        generator.generate_unique_directory(template)?
    } else {
        // The handle is closed on drop; the caller only needs the path.
        let (path, _file) = generator.generate_unique_file(template)?;
        path
    };
    info!(path = %path.display(), directory = args.directory, "Created");
    Ok(path.display().to_string())
}

fn print_config_location() {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        out::print_user(&std::path::Path::new(&explicit).display().to_string());
        out::print_info(&format!("Set explicitly via {CONFIG_ENV_VAR}."));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_user(&p.display().to_string());
            if !p.exists() {
                out::print_info("No config file exists there yet; built-in defaults are used.");
            }
        }
        None => out::print_warn("Could not determine a default config path."),
    }
}
