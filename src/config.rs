use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::inventory::classifier::{default_rules, ClassificationRule};

/// Points at a config file, overriding the per-user default location.
pub const CONFIG_ENV: &str = "VBOX_INVENTORY_CONFIG";

const DEFAULT_VBOXMANAGE: &str = "VBoxManage";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Example:
///
/// ```yaml
/// vboxmanage: /usr/local/bin/VBoxManage
/// rules:
///   - pattern: controlplane
///     group: master
///   - pattern: node
///     group: worker
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// VBoxManage binary, looked up on PATH unless absolute.
    pub vboxmanage: String,
    /// Classification rules, first match wins.
    pub rules: Vec<ClassificationRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vboxmanage: DEFAULT_VBOXMANAGE.to_string(),
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Load from `$VBOX_INVENTORY_CONFIG`, else the user config dir, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), default_config_path().as_deref())
    }

    /// Only an explicitly named file can fail the run. A broken per-user
    /// file is reported and ignored so the inventory still answers.
    fn load_from(explicit: Option<&Path>, per_user: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match per_user {
            Some(path) if path.is_file() => Self::from_file(path).or_else(|e| {
                warn!("Ignoring {}, using defaults", e);
                Ok(Self::default())
            }),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to a unit value, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vbox-inventory").join("config.yaml"))
}
