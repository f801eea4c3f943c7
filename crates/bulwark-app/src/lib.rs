//! BULWARK headless host.
//!
//! Stands in for the rendering and input layers: it owns the random source,
//! answers the engine's host requests, keeps a virtual clock for delayed
//! timers, and can play the defender itself.

pub mod autopilot;
pub mod host;
pub mod session;
pub mod settings;

pub use bulwark_core as core;
