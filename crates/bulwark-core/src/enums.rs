//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm.
    #[default]
    StartScreen,
    /// A level is in progress.
    Playing,
    /// Remaining silo missiles and surviving cities are converted to score.
    BonusPoints,
    /// Bonus summary shown, waiting for confirm to start the next level.
    LevelEnd,
    /// All cities lost. Terminal.
    GameOver,
}

/// Who fired a missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileCategory {
    /// Defensive missile fired from a silo.
    Player,
    /// Enemy missile falling from the top edge.
    Enemy,
}

/// Display-only silo caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseCaption {
    Low,
    Out,
}

/// One-shot timers the host fires back into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// A random inter-launch delay (in frames) has been drawn.
    NextLaunchCountdown(u32),
    /// Bonus sequencing should award its next unit.
    BonusTick,
}
