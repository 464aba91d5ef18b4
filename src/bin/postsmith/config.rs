use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::{debug, info};

use postsmith::config::{default_config, read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok().and_then(|p| p.parent().map(PathBuf::from));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir();

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

fn default_log_location() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("postsmith").join("log").join("postsmith.log"))
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let mut config = match cfg_path.or_else(get_config_path) {
        Some(config_path) => {
            debug!("Reading config from {}", config_path.display());
            read_config(&config_path)?
        }
        None => {
            info!("No {} found, using the built-in configuration", CFG_FILE_NAME);
            default_config().context("Built-in configuration is invalid")?
        }
    };

    if let Some(ref mut log) = config.log {
        if log.location.is_none() {
            log.location = default_log_location();
        }
        match log.location {
            Some(ref location) => debug!("Log enabled. Files will be written in {}", location.display()),
            None => debug!("Log enabled without a cache directory. Using the console only"),
        }
    }

    Ok(config)
}
