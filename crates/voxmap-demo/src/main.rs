//! Headless voxmap driver.
//!
//! Loads `voxmap.ron`, applies command-line overrides, and regenerates the
//! world `--runs` times. The first run happens on its own; later runs
//! alternate between a manual request and a small width change so both
//! triggers are exercised.
//!
//! Run with: `cargo run -p voxmap-demo -- --runs 4 --seed 7`

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use voxmap_config::{CliArgs, Config, DIMENSION_BOUNDS, WorldSettings, default_config_dir};
use voxmap_world::{HeadlessPlayer, Orchestrator};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|err| {
        eprintln!("Failed to load config from {}: {err}", config_dir.display());
        Config::default()
    });
    config.apply_cli_overrides(&args);
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {err}");
        return ExitCode::from(2);
    }

    voxmap_log::init_logging(None, cfg!(debug_assertions), Some(&config));
    info!(config_dir = %config_dir.display(), "voxmap starting");

    let mut settings = match WorldSettings::new(config.world) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Invalid world parameters: {err}");
            return ExitCode::from(2);
        }
    };
    let mut world = match Orchestrator::from_config(&config, HeadlessPlayer::default()) {
        Ok(world) => world.with_events(settings.subscribe()),
        Err(err) => {
            eprintln!("Failed to build world: {err}");
            return ExitCode::from(2);
        }
    };
    info!(seed = world.draw_seed(), "Replay with --seed");

    for run in 0..args.runs {
        if run > 0 {
            nudge(&mut settings, run);
        }
        match world.tick() {
            Some(report) => info!(
                run = report.run,
                surviving = report.surviving(),
                triangles = report.triangles,
                spawn = ?report.spawn,
                "Run complete"
            ),
            None => info!(run, "Nothing to regenerate"),
        }
    }

    if let Some(collider) = world.collider() {
        info!(
            min = ?collider.bounds.min,
            max = ?collider.bounds.max,
            triangles = collider.triangle_count,
            "Final collider"
        );
    }
    ExitCode::SUCCESS
}

/// Odd runs ask for a fresh world with the same parameters; even runs grow or
/// shrink the width by one column.
fn nudge(settings: &mut WorldSettings, run: u32) {
    if run % 2 == 1 {
        settings.request_regeneration();
        return;
    }
    let result = settings.modify(|p| {
        p.width = if p.width < *DIMENSION_BOUNDS.end() {
            p.width + 1
        } else {
            p.width - 1
        };
    });
    if let Err(err) = result {
        tracing::warn!("Width change rejected: {err}");
    }
}
