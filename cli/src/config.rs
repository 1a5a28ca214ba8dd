// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use calgrid_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const CALGRID_CONFIG_ENV: &str = "CALGRID_CONFIG";

/// Resolves and reads the configuration file.
///
/// The file is taken from `path`, then the `CALGRID_CONFIG` environment variable, then
/// `$XDG_CONFIG_HOME/calgrid/config.toml`. Only an explicitly given file must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALGRID_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        let exists = fs::try_exists(&config)
            .await
            .map_err(|e| format!("Failed to check config file at {}: {}", config.display(), e))?;
        if !exists {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            let mut core = CoreConfig::default();
            core.normalize()?;
            return Ok(core);
        }
        config
    };

    let mut core = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .core;
    core.normalize()?;
    Ok(core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
