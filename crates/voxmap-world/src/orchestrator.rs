//! The regeneration pipeline.
//!
//! A run always executes, in order: reset, generate, cull, combine, place
//! player. Every run reads one snapshot of the world parameters taken at its
//! start, so a parameter change that arrives mid-run only affects the next
//! run. Triggers come from two places: a changed parameter snapshot, and a
//! manual request. Both are collapsed into a single pending run that
//! [`Orchestrator::tick`] executes.

use std::time::Instant;

use crossbeam_channel::Receiver;
use glam::Vec3;
use voxmap_config::{Config, ConfigError, ConfigEvent, WorldParameters};
use voxmap_mesh::{CombinedMesh, MeshAnchor, MeshCollider, TilePrototype, VisibilityCuller};
use voxmap_terrain::{DrawSource, GenerationDraws, HeightFieldGenerator, HeightNoise, PerlinNoise};
use voxmap_voxel::{Grid, TilePool};

use crate::error::RegenError;
use crate::player::{DEFAULT_CLEARANCE, PlayerBody, spawn_position};
use crate::report::RegenerationReport;
use crate::state::RegenState;

/// Owns every piece of generated state and sequences rebuilding it.
pub struct Orchestrator<P: PlayerBody> {
    state: RegenState,
    /// Latest accepted parameters.
    params: WorldParameters,
    /// Parameters of the last completed run.
    completed: Option<WorldParameters>,
    /// A manual request is waiting.
    requested: bool,
    events: Option<Receiver<ConfigEvent>>,
    pool: TilePool,
    grid: Grid,
    heightfield: HeightFieldGenerator,
    culler: VisibilityCuller,
    anchor: MeshAnchor,
    prototype: TilePrototype,
    draws: DrawSource,
    player: P,
    clearance: f32,
    spawn_point: Vec3,
    runs: u64,
    last_report: Option<RegenerationReport>,
}

impl<P: PlayerBody> Orchestrator<P> {
    /// Create an orchestrator with an empty pool and no world generated yet.
    ///
    /// The first [`tick`](Self::tick) generates a world without any request.
    pub fn new(
        params: WorldParameters,
        prototype: TilePrototype,
        noise: impl HeightNoise + 'static,
        player: P,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            state: RegenState::Idle,
            params,
            completed: None,
            requested: false,
            events: None,
            pool: TilePool::new(),
            grid: Grid::new(),
            heightfield: HeightFieldGenerator::new(noise),
            culler: VisibilityCuller::new(),
            anchor: MeshAnchor::new(),
            prototype,
            draws: DrawSource::from_entropy(),
            player,
            clearance: DEFAULT_CLEARANCE,
            spawn_point: Vec3::ZERO,
            runs: 0,
            last_report: None,
        })
    }

    /// Build an orchestrator from a loaded [`Config`].
    ///
    /// The pool is pre-warmed and the draw source is seeded from the config,
    /// or from entropy when no seed is set.
    pub fn from_config(config: &Config, player: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let draws = match config.generation.seed {
            Some(seed) => DrawSource::seeded(seed),
            None => DrawSource::from_entropy(),
        }
        .with_offset_range(config.generation.offset_range);
        tracing::info!(seed = draws.seed(), "Draw source ready");

        Ok(Self::new(
            config.world,
            TilePrototype::cube(Vec3::from(config.tile.unit)),
            PerlinNoise::default(),
            player,
        )?
        .with_draws(draws)
        .with_clearance(config.player.clearance)
        .with_prewarm(config.pool.prewarm))
    }

    /// Replace the source of per-run random draws.
    pub fn with_draws(mut self, draws: DrawSource) -> Self {
        self.draws = draws;
        self
    }

    /// Height above the volume the player is placed at.
    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = clearance;
        self
    }

    /// Create `count` tiles up front.
    pub fn with_prewarm(mut self, count: usize) -> Self {
        self.pool.prewarm(count);
        self
    }

    /// Listen for parameter changes and manual requests on `events`.
    pub fn with_events(mut self, events: Receiver<ConfigEvent>) -> Self {
        self.events = Some(events);
        self
    }

    // --- Triggers ---

    /// Accept new parameters.
    ///
    /// Invalid parameters are rejected and the current ones kept. Returns
    /// `Ok(true)` if a run is now pending because the parameters differ from
    /// those of the last completed run.
    pub fn set_parameters(&mut self, params: WorldParameters) -> Result<bool, ConfigError> {
        params.validate()?;
        self.params = params;
        let changed = self.completed != Some(params);
        tracing::debug!(?params, changed, "World parameters updated");
        Ok(changed)
    }

    /// Queue a regeneration with the current parameters.
    pub fn request_regeneration(&mut self) {
        self.requested = true;
    }

    /// Returns `true` if the next [`tick`](Self::tick) will run the pipeline.
    pub fn needs_regeneration(&self) -> bool {
        self.requested || self.completed != Some(self.params)
    }

    /// Drain pending events and run the pipeline once if anything asked for it.
    ///
    /// Returns the report of the run, or `None` if nothing was pending.
    pub fn tick(&mut self) -> Option<&RegenerationReport> {
        self.drain_events();
        if !self.needs_regeneration() {
            return None;
        }
        match self.regenerate() {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    fn drain_events(&mut self) {
        let Some(events) = &self.events else {
            return;
        };
        let mut latest = None;
        let mut requested = false;
        for event in events.try_iter() {
            match event {
                ConfigEvent::WorldChanged(params) => latest = Some(params),
                ConfigEvent::RegenerateRequested => requested = true,
            }
        }

        if let Some(params) = latest
            && let Err(err) = self.set_parameters(params)
        {
            tracing::warn!("Ignoring world change: {err}");
        }
        if requested {
            self.request_regeneration();
        }
    }

    // --- Pipeline ---

    /// Run the pipeline now with freshly drawn scale and offsets.
    pub fn regenerate(&mut self) -> Result<&RegenerationReport, RegenError> {
        self.ensure_idle()?;
        let draws = self.draws.draw(&self.params);
        Ok(self.run(draws))
    }

    /// Run the pipeline now with the given draws.
    ///
    /// Identical parameters and draws always produce the identical world.
    pub fn regenerate_with(
        &mut self,
        draws: GenerationDraws,
    ) -> Result<&RegenerationReport, RegenError> {
        self.ensure_idle()?;
        Ok(self.run(draws))
    }

    fn ensure_idle(&mut self) -> Result<(), RegenError> {
        if self.state == RegenState::Idle {
            Ok(())
        } else {
            self.requested = true;
            Err(RegenError::Busy(self.state))
        }
    }

    fn run(&mut self, draws: GenerationDraws) -> &RegenerationReport {
        let start = Instant::now();
        let params = self.params;
        let unit = self.prototype.unit;
        self.requested = false;

        self.advance(RegenState::Resetting);
        self.anchor.discard();
        let released = self.grid.release_all(&mut self.pool);

        self.advance(RegenState::Generating);
        let generated = self
            .heightfield
            .generate(&params, &draws, unit, &mut self.pool, &mut self.grid);

        self.advance(RegenState::Culling);
        let culled = self.culler.cull(&mut self.grid, &mut self.pool);

        self.advance(RegenState::Combining);
        let mesh = self.anchor.rebuild(&self.grid, &self.prototype);
        let (vertices, triangles) = (mesh.vertex_count(), mesh.triangle_count());

        self.advance(RegenState::PlacingPlayer);
        let spawn = spawn_position(&params, unit, self.clearance);
        self.player.set_movement_enabled(false);
        self.player.set_position(spawn);
        self.spawn_point = spawn;
        self.player.set_movement_enabled(true);

        self.advance(RegenState::Idle);
        self.completed = Some(params);
        self.runs += 1;

        let report = RegenerationReport {
            run: self.runs,
            params,
            draws,
            released,
            generated,
            culled,
            vertices,
            triangles,
            pool_created: self.pool.created(),
            pool_available: self.pool.available(),
            spawn,
            elapsed: start.elapsed(),
        };
        tracing::info!(
            run = report.run,
            width = params.width,
            height = params.height,
            depth = params.depth,
            scale = draws.scale,
            generated,
            culled,
            surviving = report.surviving(),
            vertices,
            pool_created = report.pool_created,
            elapsed_ms = report.elapsed.as_secs_f64() * 1000.0,
            "World regenerated"
        );
        self.last_report.insert(report)
    }

    fn advance(&mut self, to: RegenState) {
        debug_assert_eq!(self.state.next(), to, "pipeline stage skipped");
        tracing::trace!(from = ?self.state, ?to, "Pipeline stage");
        self.state = to;
    }

    // --- Accessors ---

    /// Current pipeline stage. Always `Idle` between calls.
    pub fn state(&self) -> RegenState {
        self.state
    }

    /// Latest accepted parameters.
    pub fn params(&self) -> WorldParameters {
        self.params
    }

    /// The tiles surviving the last run.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The tile pool.
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// The combined mesh of the last run.
    pub fn mesh(&self) -> Option<&CombinedMesh> {
        self.anchor.mesh()
    }

    /// The collider of the last run, absent when the world is empty.
    pub fn collider(&self) -> Option<&MeshCollider> {
        self.anchor.collider()
    }

    /// Where the player was last placed.
    pub fn spawn_point(&self) -> Vec3 {
        self.spawn_point
    }

    /// Seed of the draw source, for replaying a session.
    pub fn draw_seed(&self) -> u64 {
        self.draws.seed()
    }

    /// Report of the last completed run.
    pub fn last_report(&self) -> Option<&RegenerationReport> {
        self.last_report.as_ref()
    }

    /// The player body.
    pub fn player(&self) -> &P {
        &self.player
    }
}
