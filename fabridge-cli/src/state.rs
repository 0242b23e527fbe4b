use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$FABRIDGE_HOME`, or `~/.fabridge`.
pub fn fabridge_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FABRIDGE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".fabridge"))
}

pub fn ensure_fabridge_home() -> Result<PathBuf> {
    let dir = fabridge_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
