//! Cycles configuration.
//!
//! Loaded from `~/.cycles/config.toml`. Every key is optional; a missing file
//! means all defaults.
//!
//! The power used by a command is resolved through a chain:
//!
//! 1. `--power <p>`: explicit per-command override
//! 2. `CYCLES_POWER` env var: process/session level
//! 3. `power` in `~/.cycles/config.toml`
//! 4. [`Power::SQUARE`]

use std::{env, fs, io, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::model::{Power, PowerError};

/// Errors from loading configuration or resolving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{key} must be at least 1")]
    ZeroCapacity { key: &'static str },

    #[error("CYCLES_POWER is not a number: '{0}'")]
    PowerNotANumber(String),

    #[error(transparent)]
    Power(#[from] PowerError),
}

/// Cycles configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// The digit power used when `--power` and `CYCLES_POWER` are absent.
    pub power: Power,

    /// How many calculations history keeps.
    pub history_capacity: usize,

    /// How many numbers favorites keeps.
    pub favorites_capacity: usize,

    /// Default upper bound for `search` and `stats`.
    pub search_ceiling: u64,

    /// Default upper bound for `records`.
    pub records_ceiling: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power: Power::SQUARE,
            history_capacity: 50,
            favorites_capacity: 20,
            search_ceiling: 100,
            records_ceiling: 100,
        }
    }
}

impl Config {
    /// Load config from `~/.cycles/config.toml`, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The config file path: `~/.cycles/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".cycles").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                key: "history-capacity",
            });
        }
        if self.favorites_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                key: "favorites-capacity",
            });
        }
        Ok(())
    }

    /// Resolve the power for a command from the resolution chain.
    pub fn resolve_power(&self, explicit: Option<u32>) -> Result<Power, ConfigError> {
        let from_env = env::var("CYCLES_POWER").ok();
        self.resolve_power_with(explicit, from_env.as_deref())
    }

    fn resolve_power_with(
        &self,
        explicit: Option<u32>,
        from_env: Option<&str>,
    ) -> Result<Power, ConfigError> {
        // 1. Explicit --power flag.
        if let Some(p) = explicit {
            return Ok(Power::new(p)?);
        }

        // 2. CYCLES_POWER environment variable.
        if let Some(raw) = from_env.map(str::trim)
            && !raw.is_empty()
        {
            let p = raw
                .parse::<u32>()
                .map_err(|_| ConfigError::PowerNotANumber(raw.to_string()))?;
            return Ok(Power::new(p)?);
        }

        // 3. Config file (already defaulted to squares when absent).
        Ok(self.power)
    }
}
