use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$EXTRATO_HOME`, else `~/.extrato`.
pub fn extrato_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("EXTRATO_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set (or set EXTRATO_HOME)")?;
    Ok(PathBuf::from(home).join(".extrato"))
}

pub fn ensure_extrato_home() -> Result<PathBuf> {
    let dir = extrato_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
