//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the model and is the single entry point for every
//! inbound event. Completely headless: it performs no I/O and draws no random
//! numbers, returning `HostRequest`s instead, which enables deterministic
//! testing and replay.

use glam::DVec2;
use tracing::{info, trace};

use bulwark_core::commands::SimEvent;
use bulwark_core::config::GameConfig;
use bulwark_core::constants::CONFIRM_KEY;
use bulwark_core::enums::{GamePhase, TimerKind};
use bulwark_core::events::HostRequest;
use bulwark_core::state::{GameStateSnapshot, Model};

use crate::systems;
use crate::systems::phase::LevelStatus;
use crate::world_setup;

/// The simulation engine. Owns the model and the configuration it was built with.
pub struct SimulationEngine {
    config: GameConfig,
    model: Model,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SimulationEngine {
    /// Create an engine on the start screen.
    pub fn new(config: GameConfig) -> Self {
        let model = Model::new(&config);
        Self { config, model }
    }

    /// Apply one event and return the follow-up work for the host.
    ///
    /// Events that the current phase does not accept are ignored.
    pub fn update(&mut self, event: SimEvent) -> Vec<HostRequest> {
        let phase = self.model.phase;
        match (phase, event) {
            (GamePhase::StartScreen | GamePhase::LevelEnd, SimEvent::KeyPress { code })
                if code == CONFIRM_KEY =>
            {
                world_setup::start_level(&mut self.model, &self.config)
            }
            (GamePhase::Playing, SimEvent::FrameTick { elapsed_ms }) => self.step(elapsed_ms),
            (
                GamePhase::Playing,
                SimEvent::TimerFired {
                    timer: TimerKind::NextLaunchCountdown(frames),
                },
            ) => {
                systems::countdown::arm(&mut self.model, frames);
                Vec::new()
            }
            (GamePhase::Playing, SimEvent::LaunchNuke { order }) => {
                systems::launch::launch_nuke(&mut self.model, &self.config, order);
                Vec::new()
            }
            (GamePhase::Playing, SimEvent::PointerClick { x, y }) => {
                let target = DVec2::new(f64::from(x), f64::from(y));
                systems::launch::fire_player_missile(&mut self.model, &self.config, target);
                Vec::new()
            }
            (
                GamePhase::BonusPoints,
                SimEvent::TimerFired {
                    timer: TimerKind::BonusTick,
                },
            ) => systems::bonus::tick(&mut self.model, &self.config.tuning),
            (phase, event) => {
                trace!(?phase, ?event, "event ignored");
                Vec::new()
            }
        }
    }

    /// Current model (read-only).
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.model.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Model plus display-only derived fields.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.model, &self.config.tuning)
    }

    /// Mutable model access for tests that stage precise scenarios.
    #[cfg(test)]
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// One physics frame.
    ///
    /// The end-of-level check runs first, against the state the previous
    /// frame left behind. The remaining sub-steps run in this order, each on
    /// the output of the one before; explosions created during the frame
    /// have radius 0 until the next frame ages them, so a cascade advances
    /// one generation per frame.
    fn step(&mut self, elapsed_ms: f64) -> Vec<HostRequest> {
        match systems::phase::evaluate(&self.model) {
            LevelStatus::GameOver => {
                self.model.phase = GamePhase::GameOver;
                info!(
                    level = self.model.level,
                    score = self.model.score,
                    "game over"
                );
                return Vec::new();
            }
            LevelStatus::LevelOver => {
                return systems::bonus::begin(&mut self.model, &self.config.tuning);
            }
            LevelStatus::InProgress => {}
        }

        let tuning = &self.config.tuning;
        let model = &mut self.model;
        model.time.advance(elapsed_ms);

        // 1. Age explosions
        systems::explosions::run(&mut model.explosions, tuning);
        // 2. Move missiles and nukes
        systems::movement::run(model);
        // 3. Nukes caught by existing explosions
        let intercepted = systems::interception::run(model);
        // 4. Missiles reaching their target
        let detonated = systems::detonation::run(model, tuning.detonation_epsilon);
        model.score += u64::from(intercepted + detonated) * tuning.nuke_destroyed_reward;
        // 5-6. Cities and silos inside any explosion
        systems::ground_damage::run(model);
        // 7. Launch pacing
        let requests = systems::countdown::run(model, tuning);

        trace!(
            frame = model.time.frame,
            nukes = model.nukes.len(),
            missiles = model.missiles.len(),
            explosions = model.explosions.len(),
            "frame"
        );
        requests
    }
}
