use config::FileFormat;
use directories::ProjectDirs;
use piekit::color::{Color, ColorSpec, NamedColor};
use piekit::slice::DataPoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub colors: Vec<ColorSpec>,
    #[serde(default = "default_background")]
    pub background: ColorSpec,
    #[serde(default = "default_true")]
    pub touches_enabled: bool,
    #[serde(default = "default_true")]
    pub show_percentage: bool,
}

fn default_background() -> ColorSpec {
    ColorSpec::Named(NamedColor::White)
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            colors: Vec::new(),
            background: default_background(),
            touches_enabled: true,
            show_percentage: true,
        }
    }
}

impl Config {
    pub fn colors(&self) -> Vec<Color> {
        self.colors.iter().map(ColorSpec::color).collect()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "piekit", "pieview").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => get_config_path(),
    }
}

/// Reads the chart description from `path` (or the per-user config file),
/// with `PIEVIEW_*` environment variables layered on top.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = resolve_path(path)?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(path.is_some()))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("PIEVIEW")
}

/// The bundled example chart with `env` layered on top.
fn layered_sample(env: config::Environment) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The bundled example chart.
pub fn sample_config() -> Config {
    config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .build()
        .and_then(|s| s.try_deserialize())
        .unwrap_or_else(|e| {
            log::error!("Bundled config is invalid: {}", e);
            Config::default()
        })
}

/// Loads the chart description, falling back to the bundled example when no
/// file exists yet or the file cannot be read. `PIEVIEW_*` variables still
/// apply over the example when there is no file.
pub fn load_or_sample(path: Option<&Path>) -> Config {
    if let Ok(p) = resolve_path(path)
        && !p.exists()
    {
        log::info!("No config at {}, using the sample chart", p.display());
        return layered_sample(environment()).unwrap_or_else(|e| {
            log::error!("Failed to apply environment to the sample chart: {}", e);
            sample_config()
        });
    }

    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            sample_config()
        }
    }
}

pub fn write_default_config(path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path =
        resolve_path(path).map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
