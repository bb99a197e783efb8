//! Command-line argument parsing for voxmap.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Regenerations performed when `--runs` is not given.
const DEFAULT_RUNS: u32 = 1;

/// voxmap command-line arguments.
///
/// CLI values override settings loaded from `voxmap.ron`.
#[derive(Parser, Debug)]
#[command(name = "voxmap", about = "Procedural voxel terrain generator")]
pub struct CliArgs {
    /// Number of voxel layers along Y.
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of voxel columns along X.
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of voxel columns along Z.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Lower bound for the noise scale.
    #[arg(long)]
    pub min_scale: Option<f32>,

    /// Upper bound for the noise scale.
    #[arg(long)]
    pub max_scale: Option<f32>,

    /// Seed for the random draws (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of tiles to create before the first run.
    #[arg(long)]
    pub prewarm: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of regenerations to run.
    #[arg(long, default_value_t = DEFAULT_RUNS)]
    pub runs: u32,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            height: None,
            width: None,
            depth: None,
            min_scale: None,
            max_scale: None,
            seed: None,
            prewarm: None,
            log_level: None,
            runs: DEFAULT_RUNS,
            config: None,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// The result is not validated here; call [`Config::validate`] afterwards.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(d) = args.depth {
            self.world.depth = d;
        }
        if let Some(min) = args.min_scale {
            self.world.min_scale = min;
        }
        if let Some(max) = args.max_scale {
            self.world.max_scale = max;
        }
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(n) = args.prewarm {
            self.pool.prewarm = n;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(32),
            max_scale: Some(64.0),
            seed: Some(7),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.width, 32);
        assert_eq!(config.world.max_scale, 64.0);
        assert_eq!(config.generation.seed, Some(7));
        // Non-overridden fields retain defaults
        assert_eq!(config.world.height, 8);
        assert_eq!(config.pool.prewarm, 10_000);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args =
            CliArgs::try_parse_from(["voxmap", "--height", "16", "--min-scale", "12.5", "--runs", "3"])
                .unwrap();
        assert_eq!(args.height, Some(16));
        assert_eq!(args.min_scale, Some(12.5));
        assert_eq!(args.runs, 3);
        assert!(args.width.is_none());
    }

    #[test]
    fn test_default_matches_empty_command_line() {
        let parsed = CliArgs::try_parse_from(["voxmap"]).unwrap();
        let built = CliArgs::default();
        assert_eq!(built.runs, 1);
        assert_eq!(parsed.runs, built.runs);
        assert_eq!(parsed.height, built.height);
        assert_eq!(parsed.config, built.config);
    }

    #[test]
    fn test_override_can_produce_invalid_config() {
        let mut config = Config::default();
        let args = CliArgs {
            depth: Some(4),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert!(config.validate().is_err());
    }
}
