//! Settings for the command line front end.
//!
//! Loaded from the YAML file named by `CHECKERS_CONFIG_PATH` when that
//! variable is set and the file exists; otherwise defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::game_state::checkers_rules::STANDARD_RULE_SET_NAME;
use crate::persistence::game_store::StorageError;

pub const CONFIG_PATH_ENV: &str = "CHECKERS_CONFIG_PATH";

const CACHE_DIR_NAME: &str = "checkers_cache";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding saved games and the global settings file.
    pub cache_dir: PathBuf,
    /// Rule set used by `new-game` when none is given.
    pub default_rule_set: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: std::env::temp_dir().join(CACHE_DIR_NAME),
            default_rule_set: STANDARD_RULE_SET_NAME.to_owned(),
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults if it is `None` or missing.
    pub fn load(path: Option<&Path>) -> Result<Self, StorageError> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|source| StorageError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `CHECKERS_CONFIG_PATH`, if any.
    pub fn from_env() -> Result<Self, StorageError> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load(path.as_deref())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
