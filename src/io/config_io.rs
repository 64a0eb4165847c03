use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read config.toml from the data directory.
///
/// Config is optional chrome; a missing or unparsable file falls back to
/// defaults the same way the persisted slots do.
pub fn read_config(dir: &Path) -> Config {
    let path = dir.join("config.toml");
    let Ok(text) = fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&text).unwrap_or_default()
}
