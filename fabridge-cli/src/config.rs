use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_fabridge_home, fabridge_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Used when `--format` is not given: starling, revolut, freeagent or auto.
    pub default_format: Option<String>,
    /// Where converted files go; next to the input when unset.
    pub output_dir: Option<PathBuf>,
    /// tracing filter used when RUST_LOG is unset.
    pub log_level: String,
    pub preview_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: None,
            output_dir: None,
            log_level: "info".to_string(),
            preview_limit: 20,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(fabridge_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Defaults when `p` does not exist.
pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_fabridge_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
