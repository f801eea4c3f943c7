//! Inter-launch pacing.
//!
//! The host draws a random delay and fires it back as
//! `NextLaunchCountdown`; the engine counts it down one frame at a time and
//! asks for the next launch when it runs out.

use bulwark_core::config::Tuning;
use bulwark_core::events::HostRequest;
use bulwark_core::state::Model;

/// Arm the countdown with a freshly drawn delay. A zero draw still waits one frame.
pub fn arm(model: &mut Model, frames: u32) {
    model.countdown = frames.max(1);
}

/// Requests issued whenever an enemy launch is due.
pub fn launch_requests(tuning: &Tuning) -> Vec<HostRequest> {
    vec![
        HostRequest::ScheduleLaunch,
        HostRequest::ScheduleRandomDelay {
            min: tuning.launch_delay_min,
            max: tuning.launch_delay_max,
        },
    ]
}

/// Decrement an armed countdown. On the frame it reaches 0, and while nukes
/// remain for this level, request a launch and a new delay.
pub fn run(model: &mut Model, tuning: &Tuning) -> Vec<HostRequest> {
    if model.countdown == 0 {
        return Vec::new();
    }
    model.countdown -= 1;
    if model.countdown > 0 || model.nukes_left_to_launch == 0 {
        return Vec::new();
    }
    launch_requests(tuning)
}
