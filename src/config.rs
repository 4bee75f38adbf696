use crate::consts;
use crate::game::Bounds;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Dimensions of the playing field
    pub(crate) bounds: Bounds,

    /// Length the snake uncoils to after spawning; at least 1
    pub(crate) starting_length: u32,

    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    /// File to write diagnostic logs to, if any
    pub(crate) log_file: Option<PathBuf>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("torsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or contained an invalid value.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            bounds: Bounds::from(consts::LEVEL_SIZE),
            starting_length: consts::STARTING_LENGTH,
            tick_period: consts::TICK_PERIOD,
            log_file: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawConfig {
    width: u16,
    height: u16,
    starting_length: u32,
    delay_ms: u64,
    log_file: Option<PathBuf>,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        RawConfig {
            width: consts::LEVEL_SIZE.width,
            height: consts::LEVEL_SIZE.height,
            starting_length: consts::STARTING_LENGTH,
            delay_ms: consts::TICK_PERIOD_MS,
            log_file: None,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        let side = 1..=consts::MAX_LEVEL_SIDE;
        if !side.contains(&value.width) {
            return Err(InvalidConfig::Width(value.width));
        }
        if !side.contains(&value.height) {
            return Err(InvalidConfig::Height(value.height));
        }
        if value.starting_length == 0 {
            return Err(InvalidConfig::StartingLength);
        }
        if value.delay_ms == 0 {
            return Err(InvalidConfig::Delay);
        }
        Ok(Config {
            bounds: Bounds {
                width: value.width,
                height: value.height,
            },
            starting_length: value.starting_length,
            tick_period: Duration::from_millis(value.delay_ms),
            log_file: value.log_file,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("width must be between 1 and {max}, got {0}", max = consts::MAX_LEVEL_SIDE)]
    Width(u16),
    #[error("height must be between 1 and {max}, got {0}", max = consts::MAX_LEVEL_SIDE)]
    Height(u16),
    #[error("starting-length must be at least 1")]
    StartingLength,
    #[error("delay-ms must be at least 1")]
    Delay,
}
