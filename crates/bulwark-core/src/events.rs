//! Follow-up requests the engine hands back to the host.
//!
//! The engine never performs I/O or draws random numbers itself. It asks the
//! host to do so, and the host answers with a later [`crate::commands::SimEvent`].

use serde::{Deserialize, Serialize};

/// Work the host must schedule after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostRequest {
    /// Draw a delay uniformly in `[min, max]` frames and answer with
    /// `TimerFired(NextLaunchCountdown(drawn))`.
    ScheduleRandomDelay { min: u32, max: u32 },
    /// Draw a launch origin and target column and answer with `LaunchNuke`.
    ScheduleLaunch,
    /// Answer with `TimerFired(BonusTick)` after `delay_ms`.
    ScheduleBonusTick { delay_ms: u64 },
}
