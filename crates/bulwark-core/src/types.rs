//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in playfield units.
/// x = right, y = down (the top edge is y = 0, the ground is near the bottom).
pub type Position = DVec2;

/// Displacement applied to a missile once per frame (playfield units per frame).
pub type Velocity = DVec2;

/// Frame clock for the playing phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of physics steps run so far.
    pub frame: u64,
    /// Sum of the host-reported frame durations. Diagnostic only: the step
    /// advances a fixed increment per call no matter what the host reports.
    pub host_elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one physics step.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.frame += 1;
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.host_elapsed_ms += elapsed_ms;
        }
    }
}

/// Constant-speed velocity pointing from `from` toward `to`.
///
/// Returns zero when the two points coincide.
pub fn heading_velocity(from: Position, to: Position, speed: f64) -> Velocity {
    (to - from).normalize_or_zero() * speed
}
