//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/katas/katas.toml`
//! 3. Explicit config file (`--config <PATH>`)
//! 4. Environment variables: `KATAS_*` prefix, `__` between section and key

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::ZeroBasePolicy;

/// Settings for the `pow` exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PowConfig {
    /// Treatment of zero raised to a negative power
    pub zero_base: ZeroBasePolicy,
}

/// Which tree representation `bst` builds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TreeStorage {
    /// Owned `Box` children, built recursively
    #[default]
    Boxed,
    /// Generational arena with index links, built iteratively
    Arena,
}

impl fmt::Display for TreeStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStorage::Boxed => write!(f, "boxed"),
            TreeStorage::Arena => write!(f, "arena"),
        }
    }
}

/// Settings for the `bst` exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeConfig {
    pub storage: TreeStorage,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub pow: RawPowConfig,
    pub tree: RawTreeConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawPowConfig {
    pub zero_base: Option<ZeroBasePolicy>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawTreeConfig {
    pub storage: Option<TreeStorage>,
}

/// Unified configuration for katas.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub pow: PowConfig,
    pub tree: TreeConfig,
}

/// Get the XDG config directory for katas.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "katas").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("katas.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            pow: PowConfig {
                zero_base: overlay.pow.zero_base.unwrap_or(self.pow.zero_base),
            },
            tree: TreeConfig {
                storage: overlay.tree.storage.unwrap_or(self.tree.storage),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global
    ///   file it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/katas/katas.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `KATAS_*` prefix
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("explicit config: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply KATAS_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let source = Environment::with_prefix("KATAS")
            .prefix_separator("_")
            .separator("__");
        Self::apply_overrides(settings, source)
    }

    fn apply_overrides(mut settings: Self, source: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(config_err)?;

        if let Some(val) = lookup(&config, "pow.zero_base")? {
            settings.pow.zero_base = parse_enum("pow.zero_base", &val)?;
        }
        if let Some(val) = lookup(&config, "tree.storage")? {
            settings.tree.storage = parse_enum("tree.storage", &val)?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

// Unset keys are None; any other lookup failure is an error
fn lookup(config: &Config, key: &str) -> Result<Option<String>, ApplicationError> {
    match config.get_string(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

// Enum values from the environment arrive as bare strings
fn parse_enum<T: for<'de> Deserialize<'de>>(key: &str, value: &str) -> Result<T, ApplicationError> {
    let value = value.trim().to_lowercase();
    let de: StrDeserializer<'_, ValueError> = value.as_str().into_deserializer();
    T::deserialize(de).map_err(|e| ApplicationError::Config {
        message: format!("{key} = {value:?}: {e}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
