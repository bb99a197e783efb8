//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::WorldParameters;

/// File name used for persisted configuration.
const CONFIG_FILE: &str = "voxmap.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Size and roughness of the generated volume.
    pub world: WorldParameters,
    /// Tile prototype settings.
    pub tile: TileConfig,
    /// Player placement settings.
    pub player: PlayerConfig,
    /// Tile pool settings.
    pub pool: PoolConfig,
    /// Random draw settings.
    pub generation: GenerationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Tile prototype configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TileConfig {
    /// World-space size of one tile along X, Y, and Z.
    pub unit: [f32; 3],
}

/// Player placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Height above the top of the generated volume the player spawns at.
    pub clearance: f32,
}

/// Tile pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of tiles created up front, before the first generation.
    pub prewarm: usize,
}

/// Random draw configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for the draw RNG. `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Noise offsets are drawn uniformly from `[-offset_range, offset_range]`.
    pub offset_range: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            unit: [1.0, 1.0, 1.0],
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { clearance: 5.0 }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { prewarm: 10_000 }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            offset_range: 1024.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl TileConfig {
    /// Reject zero, negative, or non-finite tile dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit.iter().all(|u| u.is_finite() && *u > 0.0) {
            Ok(())
        } else {
            Err(ConfigError::InvalidTileUnit(self.unit))
        }
    }
}

impl PlayerConfig {
    /// Reject a NaN or infinite clearance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("player.clearance", self.clearance)
    }
}

impl GenerationConfig {
    /// Reject a NaN or infinite offset range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("generation.offset_range", self.offset_range)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Default directory for `voxmap.ron`: the platform config dir, or the
/// working directory when none is available.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("voxmap"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save / Reload ---

impl Config {
    /// Validate every section that feeds the generation pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.tile.validate()?;
        self.player.validate()?;
        self.generation.validate()
    }

    /// Load config from the given directory, or create a default config file.
    ///
    /// Loaded values are validated; out-of-range parameters fail here rather
    /// than in the middle of a generation run.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `voxmap.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}
