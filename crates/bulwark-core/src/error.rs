//! Contract errors raised by collaborators building events for the engine.

use thiserror::Error;

/// A malformed event payload, rejected before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Target column outside the ground slot table.
    #[error("target column {0} is outside 1..=9")]
    InvalidColumn(u8),

    /// Enemy launch origin off the top edge.
    #[error("launch origin x = {0} is outside the playfield")]
    LaunchOriginOutOfBounds(i32),

    /// Pointer coordinate outside the playfield.
    #[error("coordinate ({x}, {y}) is outside the playfield")]
    CoordinateOutOfBounds { x: i32, y: i32 },
}
