//! End-of-level and end-of-game detection.

use bulwark_core::state::Model;

/// Outcome of the once-per-frame check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    InProgress,
    LevelOver,
    GameOver,
}

/// Evaluate the model as the previous frame left it.
///
/// Game over wins over level over. Player missiles still in flight do not
/// hold a level open.
pub fn evaluate(model: &Model) -> LevelStatus {
    let quiet = model.explosions.is_empty();
    if model.cities.is_empty() && quiet {
        LevelStatus::GameOver
    } else if model.nukes.is_empty() && quiet && model.nukes_left_to_launch == 0 {
        LevelStatus::LevelOver
    } else {
        LevelStatus::InProgress
    }
}
