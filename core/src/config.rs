// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{ConflictDetector, Error, MAX_CUSTOM_STEPS, RecurrenceResolver};

/// The name of the calgrid application.
pub const APP_NAME: &str = "calgrid";

/// The file events are kept in, relative to the data directory.
const EVENTS_FILE: &str = "events.json";

/// Configuration for the calgrid application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Path to the events file.
    #[serde(default)]
    pub events_path: Option<PathBuf>,

    /// Cap on the steps taken when resolving a custom recurrence.
    #[serde(default = "default_max_custom_steps")]
    pub max_custom_steps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_path: None,
            max_custom_steps: MAX_CUSTOM_STEPS,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        if self.max_custom_steps == 0 {
            return Err(Error::Config("max_custom_steps must be at least 1".into()));
        }

        match &self.events_path {
            Some(a) => {
                self.events_path = Some(
                    expand_path(a)
                        .map_err(|e| Error::Config(format!("Failed to expand events path: {e}")))?,
                )
            }

            None => match get_data_dir() {
                Ok(a) => self.events_path = Some(a.join(APP_NAME).join(EVENTS_FILE)),
                Err(e) => tracing::warn!("Failed to get data directory: {e}"),
            },
        };

        Ok(())
    }

    pub fn resolver(&self) -> RecurrenceResolver {
        RecurrenceResolver::new(self.max_custom_steps)
    }

    pub fn detector(&self) -> ConflictDetector {
        ConflictDetector::new(self.resolver())
    }
}

fn default_max_custom_steps() -> u32 {
    MAX_CUSTOM_STEPS
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config("Invalid path".into()))?;

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

    let data_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_DATA_HOME/", "${XDG_DATA_HOME}/"]
    } else {
        &[r"%APPDATA%\", "%APPDATA%/"]
    };
    for prefix in data_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_data_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Config("User-specific home directory not found".into()))
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Config("User-specific config directory not found".into()))
}

fn get_data_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| Error::Config("User-specific data directory not found".into()))
}
