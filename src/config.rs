use std::path::Path;

use crate::error::ConfigError;
use crate::observer::ObserverParams;

/// Settings of the interactive driver.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// List the legal actions in each prompt.
    pub show_legal_actions: bool,
    /// Show `action(row,file,rank)` labels instead of bare action numbers.
    pub show_action_labels: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            show_legal_actions: true,
            show_action_labels: false,
        }
    }
}

/// Settings of the random consistency simulation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_games: usize,
    /// Seed for both random players; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub params: ObserverParams,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub play: PlayConfig,
    pub simulation: SimulationConfig,
    pub observer: ObserverConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Observer params are not checked here; the observer rejects them when it
    /// is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.num_games == 0 {
            return Err(ConfigError::Validation(
                "simulation.num_games must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
