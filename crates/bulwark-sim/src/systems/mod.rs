//! Systems that operate on the model.
//!
//! Systems are plain functions over `&mut Model` (or `&Model` for read-only).
//! They do not own state. The physics step calls them in a fixed order;
//! see [`crate::engine::SimulationEngine`].

pub mod bonus;
pub mod countdown;
pub mod detonation;
pub mod explosions;
pub mod ground_damage;
pub mod interception;
pub mod launch;
pub mod movement;
pub mod phase;
pub mod snapshot;
