//! # Engine Configuration
//!
//! Settings for the pricing engine and the HTTP server that exposes it.
//! Values are read from a YAML file whose path is given by the
//! `HOMESERVICES_CONFIG` environment variable. Every section is optional;
//! missing sections and a missing file both fall back to defaults.
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 3000
//!   allowedOrigin: http://localhost:8080
//! pricing:
//!   rounding: nearestWhole
//!   currencySymbol: "₦"
//! rooms:
//!   minimumPolicy: allowZero
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::RoomKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "HOMESERVICES_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// How the final price is rounded. Applied once, after every multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingPolicy {
    #[default]
    None,
    NearestWhole,
}

impl RoundingPolicy {
    pub fn apply(&self, amount: f64) -> f64 {
        match self {
            RoundingPolicy::None => amount,
            RoundingPolicy::NearestWhole => amount.round(),
        }
    }
}

/// Lowest room count a cleaning configuration may hold per room kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomMinimumPolicy {
    /// Bedroom, bathroom, kitchen and living room never drop below 1
    #[default]
    RequiredRoomsAtLeastOne,
    /// Every room kind may be 0
    AllowZero,
}

impl RoomMinimumPolicy {
    pub fn minimum_for(&self, room: RoomKind) -> u32 {
        match self {
            RoomMinimumPolicy::RequiredRoomsAtLeastOne if room.is_required() => 1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingConfig {
    pub rounding: RoundingPolicy,
    pub currency_symbol: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingPolicy::None,
            currency_symbol: "₦".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomConfig {
    pub minimum_policy: RoomMinimumPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
    pub rooms: RoomConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the file named by `HOMESERVICES_CONFIG`.
    /// Falls back to defaults when the variable is unset or the file is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_or_default(Path::new(&path)),
            None => {
                info!("{} not set, using default engine config", CONFIG_PATH_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
