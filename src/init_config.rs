// init_config.rs
// Handles loading the startup WorldConfig from world_config.toml. Hosts that
// manage configuration themselves never touch this; everything here falls
// back to defaults instead of failing.

use std::fs;
use std::path::Path;

use crate::config::WorldConfig;

pub const DEFAULT_CONFIG_PATH: &str = "world_config.toml";

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WorldConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: WorldConfig = toml::from_str(&content)?;
    Ok(config)
}

pub fn load_default() -> Result<WorldConfig, Box<dyn std::error::Error>> {
    load_from_file(DEFAULT_CONFIG_PATH)
}

/// Startup configuration: the TOML file when present and valid, defaults
/// otherwise.
pub fn load_or_default() -> WorldConfig {
    match load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("No usable {DEFAULT_CONFIG_PATH} ({e}); using defaults");
            WorldConfig::default()
        }
    }
}
