// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The name of the brief application.
pub const APP_NAME: &str = "brief";

const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
const DEFAULT_CHART_ANIMATION_MS: u64 = 750;
const DEFAULT_NARROW_BREAKPOINT: u16 = 80;

/// Configuration for the brief application.
///
/// Every field is optional in the file; a missing config file yields the
/// defaults and the dashboard stays fully functional on built-in data.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging.
    pub debug: bool,

    /// How long a toast stays on screen, in milliseconds.
    pub toast_duration_ms: u64,

    /// How long chart bars take to grow to full size, in milliseconds.
    pub chart_animation_ms: u64,

    /// Terminal width at or below which the sidebar collapses into an overlay.
    pub narrow_breakpoint: u16,

    /// Directory for storing application state.
    pub state_dir: Option<PathBuf>,

    /// Optional timeline dataset file overriding the built-in tables.
    pub timeline: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            chart_animation_ms: DEFAULT_CHART_ANIMATION_MS,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            state_dir: None,
            timeline: None,
        }
    }
}

impl Config {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn chart_animation(&self) -> Duration {
        Duration::from_millis(self.chart_animation_ms)
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize timeline dataset path
        if let Some(a) = &self.timeline {
            self.timeline =
                Some(expand_path(a).map_err(|e| format!("Failed to expand timeline path: {e}"))?);
        }

        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        Ok(())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}
