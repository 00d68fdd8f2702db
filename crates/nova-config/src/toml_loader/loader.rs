//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use nova_common::ConfigError;
use tracing::{info, warn};

use crate::schema::NovaConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. If validation fails a warning is
/// logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<NovaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: NovaConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config with potentially invalid values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/nova/config.toml`. If the file does not exist, a
/// default config file is written and defaults are returned.
pub fn load_default() -> Result<NovaConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(NovaConfig::default())
        }
        Err(e) => Err(e),
    }
}
