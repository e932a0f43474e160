//! Configuration module for Pokedex-RS
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Candidate settings file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("pokedex-rs/settings.yml"));
    }
    paths
}

/// Find the settings file: `$POKEDEX_SETTINGS_PATH` first, then the default paths
pub fn locate() -> Option<PathBuf> {
    std::env::var("POKEDEX_SETTINGS_PATH")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.exists())
        .or_else(|| default_paths().into_iter().find(|p| p.exists()))
}

/// Load settings from `path` or use defaults, then apply environment overrides
pub fn load_from(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}
