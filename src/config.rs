//! file: config.rs
//! author: Jacob Xie
//! date: 2026/10/18 14:48:30 Sunday
//! brief: game configuration loaded from JSON

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{BlockTemplate, PlayerConfig};

pub const CONFIG_ENV_VAR: &str = "JUMPER_CONFIG";

const DEFAULT_ROAD_LENGTH: usize = 50;
const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub road_length: usize,
    pub seed: Option<u64>,
    pub block: Option<BlockTemplate>,
    pub player: Option<PlayerConfig>,
    pub start_menu: bool,
    pub steps_label: bool,
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            road_length: DEFAULT_ROAD_LENGTH,
            seed: None,
            block: Some(BlockTemplate::default()),
            player: Some(PlayerConfig::default()),
            start_menu: true,
            steps_label: true,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path} at {at}: {source}")]
    Parse {
        path: PathBuf,
        at: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl GameConfig {
    /// Reads the file named by `JUMPER_CONFIG`, or returns defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    pub fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let config: GameConfig = serde_path_to_error::deserialize(&mut deserializer).map_err(
            |error| {
                let at = error.path().to_string();
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    at,
                    source: error.into_inner(),
                }
            },
        )?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(player) = &self.player {
            if player.jump_time_ms == 0 {
                return Err(ConfigError::Invalid {
                    field: "player.jump_time_ms",
                    reason: "must be greater than zero".to_string(),
                });
            }
            if !player.jump_height.is_finite() {
                return Err(ConfigError::Invalid {
                    field: "player.jump_height",
                    reason: format!("expected a finite number, got {}", player.jump_height),
                });
            }
        }
        if let Some(block) = &self.block {
            if !block.size.is_finite() || block.size <= 0.0 {
                return Err(ConfigError::Invalid {
                    field: "block.size",
                    reason: format!("expected a positive number, got {}", block.size),
                });
            }
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
