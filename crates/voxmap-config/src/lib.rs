//! Configuration system for voxmap.
//!
//! Holds the world generation parameters and their documented bounds, persists
//! settings to disk as RON, applies CLI overrides via clap, and notifies
//! subscribers when the live world parameters change.

mod cli;
mod config;
mod error;
mod params;
mod settings;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GenerationConfig, PlayerConfig, PoolConfig, TileConfig,
    default_config_dir,
};
pub use error::ConfigError;
pub use params::{DIMENSION_BOUNDS, SCALE_BOUNDS, WorldParameters};
pub use settings::{ConfigEvent, WorldSettings};
