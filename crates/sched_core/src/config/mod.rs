use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "SCHEDCLI_CONFIG_PATH";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How many ranked tasks the default listing prints. Falls back to the
    /// built-in top-5 cutoff when unset.
    #[serde(default)]
    pub top_tasks: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

pub fn config_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::io("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("schedcli")
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::io("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("schedcli")
            .join(CONFIG_FILE_NAME))
    }
}

/// A missing config file is the default config; an unreadable one also falls
/// back to defaults but carries the error so the caller can warn.
pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    let config: Config = serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_input(format!("invalid JSON in {}: {}", path.display(), err))
    })?;

    if config.top_tasks == Some(0) {
        return Err(AppError::invalid_input(format!(
            "top_tasks must be at least 1 in {}",
            path.display()
        )));
    }

    Ok(config)
}
