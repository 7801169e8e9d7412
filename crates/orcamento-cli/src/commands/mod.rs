//! CLI subcommands.

pub mod codes;
pub mod config;
pub mod report;
pub mod serve;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use orcamento_core::models::config::OrcamentoConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orcamento")
        .join("config.json")
}

/// Resolve the config file path from the `--config` flag.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the explicit config file, the default one if it exists, or defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<OrcamentoConfig> {
    if let Some(path) = explicit {
        let path = Path::new(path);
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(OrcamentoConfig::from_file(path)?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(OrcamentoConfig::from_file(&path)?)
    } else {
        Ok(OrcamentoConfig::default())
    }
}

/// Read cart text from a file, or from stdin when no file (or `-`) is given.
pub fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            debug!("Reading cart from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading cart from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write command output to a file or stdout.
pub fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        print!("{}", content);
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
