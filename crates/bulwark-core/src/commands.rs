//! Inbound events delivered by the host to the simulation.
//!
//! Payloads are validated by the constructors here; the engine trusts what
//! it receives.

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIRM_KEY, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TARGET_COLUMNS};
use crate::enums::TimerKind;
use crate::error::CommandError;

/// Every event the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Per-frame clock tick. `elapsed_ms` is what the host measured; the
    /// physics step advances a fixed increment regardless.
    FrameTick { elapsed_ms: f64 },
    /// A host-scheduled timer expired.
    TimerFired { timer: TimerKind },
    /// A requested enemy launch, with the host's random draws.
    LaunchNuke { order: LaunchOrder },
    /// Pointer click in playfield coordinates.
    PointerClick { x: i32, y: i32 },
    /// Key press by key code.
    KeyPress { code: u32 },
}

impl SimEvent {
    /// Frame tick with the host-measured frame time.
    pub fn frame(elapsed_ms: f64) -> Self {
        SimEvent::FrameTick { elapsed_ms }
    }

    /// The confirm key.
    pub fn confirm() -> Self {
        SimEvent::KeyPress { code: CONFIRM_KEY }
    }

    /// Pointer click, rejected when it lands outside the playfield.
    pub fn click(x: i32, y: i32) -> Result<Self, CommandError> {
        let inside = (0.0..=PLAYFIELD_WIDTH).contains(&(x as f64))
            && (0.0..=PLAYFIELD_HEIGHT).contains(&(y as f64));
        if !inside {
            return Err(CommandError::CoordinateOutOfBounds { x, y });
        }
        Ok(SimEvent::PointerClick { x, y })
    }

    /// Enemy launch order, validated through [`LaunchOrder::new`].
    pub fn launch(from_x: i32, to_column: u8) -> Result<Self, CommandError> {
        Ok(SimEvent::LaunchNuke {
            order: LaunchOrder::new(from_x, to_column)?,
        })
    }
}

/// Origin and target column of one enemy missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLaunchOrder", into = "RawLaunchOrder")]
pub struct LaunchOrder {
    from_x: i32,
    to_column: u8,
}

/// Wire shape of [`LaunchOrder`]; deserialization goes through validation.
#[derive(Serialize, Deserialize)]
struct RawLaunchOrder {
    from_x: i32,
    to_column: u8,
}

impl TryFrom<RawLaunchOrder> for LaunchOrder {
    type Error = CommandError;

    fn try_from(raw: RawLaunchOrder) -> Result<Self, Self::Error> {
        LaunchOrder::new(raw.from_x, raw.to_column)
    }
}

impl From<LaunchOrder> for RawLaunchOrder {
    fn from(order: LaunchOrder) -> Self {
        Self {
            from_x: order.from_x,
            to_column: order.to_column,
        }
    }
}

impl LaunchOrder {
    /// Build an order. `from_x` must lie on the top edge and `to_column`
    /// must name one of the nine ground slots.
    pub fn new(from_x: i32, to_column: u8) -> Result<Self, CommandError> {
        if !(0.0..=PLAYFIELD_WIDTH).contains(&(from_x as f64)) {
            return Err(CommandError::LaunchOriginOutOfBounds(from_x));
        }
        if !(1..=TARGET_COLUMNS).contains(&to_column) {
            return Err(CommandError::InvalidColumn(to_column));
        }
        Ok(Self { from_x, to_column })
    }

    pub fn from_x(&self) -> i32 {
        self.from_x
    }

    pub fn to_column(&self) -> u8 {
        self.to_column
    }
}
