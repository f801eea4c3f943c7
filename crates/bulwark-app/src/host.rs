//! Headless host: owns the random source and the timers.
//!
//! The engine is a pure transition function. Everything non-deterministic
//! it needs (launch delays, launch origins and columns) is drawn here from a
//! seeded ChaCha stream, so a seed plus an input script replays exactly.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

use bulwark_core::commands::SimEvent;
use bulwark_core::config::GameConfig;
use bulwark_core::constants::{PLAYFIELD_WIDTH, TARGET_COLUMNS};
use bulwark_core::enums::{GamePhase, TimerKind};
use bulwark_core::events::HostRequest;
use bulwark_core::state::{GameStateSnapshot, Model};
use bulwark_sim::SimulationEngine;

/// An event waiting on the virtual clock.
#[derive(Debug, Clone)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    event: SimEvent,
}

/// Drives a [`SimulationEngine`] without a window or a wall clock.
pub struct Host {
    engine: SimulationEngine,
    rng: ChaCha8Rng,
    clock_ms: u64,
    frame_interval_ms: u64,
    frames: u64,
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Host {
    pub fn new(config: GameConfig, seed: u64, frame_interval_ms: u64) -> Self {
        Self {
            engine: SimulationEngine::new(config),
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock_ms: 0,
            frame_interval_ms,
            frames: 0,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Deliver `event` and answer every request it produces.
    ///
    /// Random draws are answered immediately, which can chain further
    /// requests; bonus ticks wait on the virtual clock.
    pub fn send(&mut self, event: SimEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for request in self.engine.update(event) {
                trace!(?request, "host request");
                match request {
                    HostRequest::ScheduleRandomDelay { min, max } => {
                        let frames = self.rng.gen_range(min.min(max)..=min.max(max));
                        queue.push_back(SimEvent::TimerFired {
                            timer: TimerKind::NextLaunchCountdown(frames),
                        });
                    }
                    HostRequest::ScheduleLaunch => {
                        let from_x = self.rng.gen_range(0..=PLAYFIELD_WIDTH as i32);
                        let column = self.rng.gen_range(1..=TARGET_COLUMNS);
                        match SimEvent::launch(from_x, column) {
                            Ok(event) => queue.push_back(event),
                            Err(err) => warn!(%err, "dropping launch draw"),
                        }
                    }
                    HostRequest::ScheduleBonusTick { delay_ms } => {
                        self.schedule(
                            delay_ms,
                            SimEvent::TimerFired {
                                timer: TimerKind::BonusTick,
                            },
                        );
                    }
                }
            }
        }
    }

    /// Advance one frame: fire due timers, then tick the engine.
    pub fn frame(&mut self) {
        self.clock_ms += self.frame_interval_ms;
        self.frames += 1;

        while let Some(event) = self.pop_due() {
            self.send(event);
        }
        self.send(SimEvent::frame(self.frame_interval_ms as f64));
    }

    fn schedule(&mut self, delay_ms: u64, event: SimEvent) {
        self.pending.push(Scheduled {
            due_ms: self.clock_ms + delay_ms,
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }

    /// Earliest due timer, ties broken by scheduling order.
    fn pop_due(&mut self) -> Option<SimEvent> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= self.clock_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.seq))?;
        Some(self.pending.remove(index).event)
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn model(&self) -> &Model {
        self.engine.model()
    }

    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        self.engine.snapshot()
    }

    /// Virtual milliseconds since the host started.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Frames delivered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Timers still waiting on the clock.
    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Host {
        Host::new(GameConfig::default(), 42, 16)
    }

    #[test]
    fn test_confirm_resolves_launch_and_delay() {
        let mut host = host();
        host.send(SimEvent::confirm());

        let model = host.model();
        assert_eq!(host.phase(), GamePhase::Playing);
        assert_eq!(model.nukes.len(), 1);
        assert_eq!(model.nukes_left_to_launch, 9);
        assert!((10..=100).contains(&model.countdown), "countdown {}", model.countdown);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_countdown_expiry_launches_again() {
        let mut host = host();
        host.send(SimEvent::confirm());
        let countdown = host.model().countdown;

        for _ in 0..countdown {
            host.frame();
        }
        assert_eq!(host.model().nukes_left_to_launch, 8);
        assert!(host.model().countdown >= 1);
    }

    #[test]
    fn test_bonus_ticks_wait_on_clock() {
        let mut config = GameConfig::default();
        config.tuning.nukes_base = 0;
        let mut host = Host::new(config, 42, 16);
        host.send(SimEvent::confirm());
        assert_eq!(host.model().nukes_left_to_launch, 0);

        // One nuke: let it land, burn out, and the level close.
        for _ in 0..5_000 {
            if host.phase() == GamePhase::BonusPoints {
                break;
            }
            host.frame();
        }
        assert_eq!(host.phase(), GamePhase::BonusPoints);
        assert_eq!(host.pending_timers(), 1);
        let began = host.clock_ms();

        // 100 ms at 16 ms per frame: the first tick lands on the 7th frame.
        for _ in 0..6 {
            host.frame();
        }
        assert_eq!(host.model().missiles_scored, 0);
        host.frame();
        assert_eq!(host.model().missiles_scored, 1);
        assert_eq!(host.clock_ms() - began, 112);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = host();
        let mut b = host();
        a.send(SimEvent::confirm());
        b.send(SimEvent::confirm());
        for _ in 0..300 {
            a.frame();
            b.frame();
        }
        assert_eq!(a.model(), b.model());
    }
}
