//! Runtime configuration, read from `CHASE_*` environment variables.

use std::path::PathBuf;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::{DEFAULT_GHOST_COUNT, DEFAULT_LIVES, DEFAULT_PACMAN_SPEED, TILE_SIZE};
use crate::error::ConfigError;
use crate::game::GameSettings;

/// Prefix shared by every configuration variable, e.g. `CHASE_LIVES`.
pub const ENV_PREFIX: &str = "CHASE_";

/// Validated runner configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ghost_count: usize,
    /// Pac-Man's speed in pixels per tick.
    pub pacman_speed: f32,
    pub lives: u32,
    pub seed: u64,
    /// Stop after this many ticks. Runs until game over when unset.
    pub max_ticks: Option<u64>,
    /// Pace ticks at the real tick rate instead of running as fast as possible.
    pub realtime: bool,
    /// Character board to play instead of the classic one.
    pub level: Option<PathBuf>,
}

/// Configuration as deserialized, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_ghost_count")]
    ghost_count: usize,
    #[serde(default = "default_pacman_speed")]
    pacman_speed: f32,
    #[serde(default = "default_lives")]
    lives: u32,
    #[serde(default)]
    seed: u64,
    max_ticks: Option<u64>,
    #[serde(default)]
    realtime: bool,
    level: Option<PathBuf>,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        // A step of a whole tile or more could jump straight over a wall.
        if !raw.pacman_speed.is_finite() || raw.pacman_speed <= 0.0 || raw.pacman_speed >= TILE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "pacman_speed must be in (0, {TILE_SIZE}), got {}",
                raw.pacman_speed
            )));
        }
        if raw.lives == 0 {
            return Err(ConfigError::Invalid("lives must be at least 1".into()));
        }

        Ok(Config {
            ghost_count: raw.ghost_count,
            pacman_speed: raw.pacman_speed,
            lives: raw.lives,
            seed: raw.seed,
            max_ticks: raw.max_ticks,
            realtime: raw.realtime,
            level: raw.level,
        })
    }
}

impl Config {
    /// The provider chain configuration is read from.
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads and validates configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let raw: RawConfig = figment.extract().map_err(Box::new)?;
        Config::try_from(raw)
    }
}

impl From<&Config> for GameSettings {
    fn from(config: &Config) -> Self {
        GameSettings {
            ghost_count: config.ghost_count,
            pacman_speed: config.pacman_speed,
            lives: config.lives,
            seed: config.seed,
        }
    }
}

fn default_ghost_count() -> usize {
    DEFAULT_GHOST_COUNT
}

fn default_pacman_speed() -> f32 {
    DEFAULT_PACMAN_SPEED
}

fn default_lives() -> u32 {
    DEFAULT_LIVES
}
