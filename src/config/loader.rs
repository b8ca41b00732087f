// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, MergeCheckError, Result};
use std::path::{Path, PathBuf};

use super::schema::MergeChecksConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &[
    "merge-checks.toml",
    ".merge-checks.toml",
    ".config/merge-checks.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    // XDG config directory
    let config_dir = dirs::config_dir()?;
    let user_config = config_dir.join("merge-checks").join("config.toml");
    user_config.exists().then_some(user_config)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<MergeChecksConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(MergeChecksConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<MergeChecksConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(MergeCheckError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        MergeCheckError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<MergeChecksConfig> {
    let config: MergeChecksConfig = toml::from_str(content).map_err(|e| {
        MergeCheckError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    config.validate()?;
    Ok(config)
}
