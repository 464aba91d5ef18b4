use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use chrono::{Datelike, Local};
use serde::Deserialize;

/// Configuration used when no `postsmith.toml` can be found.
pub const SAMPLE_CONFIG: &str = include_str!("../postsmith.toml");

#[derive(Deserialize, Debug, Clone)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub post_template: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Site {
    pub name: String,
    pub affiliate_url: String,
    pub hero_image: String,
    pub copyright_year: Option<i32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Patcher {
    pub default_image: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub paths: Paths,
    pub site: Site,
    pub patcher: Option<Patcher>,
    /// Extra slug -> image file entries, layered over the built-in table
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    pub log: Option<Log>,
}

impl Config {
    pub fn copyright_year(&self) -> i32 {
        self.site.copyright_year.unwrap_or_else(|| Local::now().year())
    }

    pub fn default_image(&self) -> Option<&str> {
        self.patcher.as_ref().map(|p| p.default_image.as_str())
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };

    if !str_path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().and_then(|p| p.to_str()).ok_or_else(|| {
        io::Error::new(ErrorKind::NotFound, "Unable to resolve the executable directory")
    })?;
    Ok(PathBuf::from(str_path.replace("${exe_dir}", exe_dir)))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir)?,
        post_template: cfg.paths.post_template.map(parse_path).transpose()?,
    };

    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path).transpose()?;
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

pub fn default_config() -> io::Result<Config> {
    parse_config(SAMPLE_CONFIG)
}
