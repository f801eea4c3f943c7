//! Simulation engine for BULWARK.
//!
//! Owns the model, maps each inbound event to the next state, and returns
//! the follow-up work the host has to schedule. Deterministic given the
//! sequence of events, including the host's random draws.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::SimulationEngine;
