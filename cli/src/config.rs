// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use tokio::fs;

use impact_brief_core::{APP_NAME, Config};

const BRIEF_CONFIG_ENV: &str = "BRIEF_CONFIG";

/// Resolve and parse the configuration.
///
/// Resolution order: `--config` flag, then the `BRIEF_CONFIG` environment
/// variable, then the default path. A missing default file yields the
/// defaults (the dashboard is fully functional on built-in data); an
/// unreadable or unparsable file is an error.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(BRIEF_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!("no config file found, using defaults");
            let mut config = Config::default();
            config.normalize()?;
            return Ok(config);
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    config.normalize()?;
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
