//! Simulation constants and tuning defaults.
//!
//! These seed [`crate::config::GameConfig::default`]; the engine itself only
//! reads tuning through the config it was built with.

// --- Playfield ---

/// Playfield width. Enemy launches originate in `[0, PLAYFIELD_WIDTH]`.
pub const PLAYFIELD_WIDTH: f64 = 800.0;

/// Playfield height.
pub const PLAYFIELD_HEIGHT: f64 = 400.0;

/// y coordinate of the launch silos.
pub const BASE_Y: f64 = 330.0;

/// y coordinate of cities and of every ground target slot.
pub const GROUND_Y: f64 = 340.0;

/// Default silo x coordinates, left to right.
pub const BASE_XS: [f64; 3] = [40.0, 400.0, 760.0];

/// Default city x coordinates, left to right.
pub const CITY_XS: [f64; 6] = [120.0, 200.0, 280.0, 520.0, 600.0, 680.0];

/// Spacing used by the fallback target formula for columns outside the slot table.
pub const TARGET_FALLBACK_SPACING: f64 = 80.0;

// --- Input ---

/// Key code that confirms / advances between screens.
pub const CONFIRM_KEY: u32 = 13;

// --- Missiles ---

/// Missiles loaded into every silo at level start.
pub const BASE_MISSILE_STOCK: u32 = 10;

/// Player missile speed (units per frame).
pub const PLAYER_MISSILE_SPEED: f64 = 8.0;

/// Enemy missile speed on level 1 (units per frame).
pub const ENEMY_BASE_SPEED: f64 = 0.4;

/// Enemy speed added per level after the first.
pub const ENEMY_SPEED_PER_LEVEL: f64 = 0.05;

/// A missile closer than this to its target detonates.
pub const DETONATION_EPSILON: f64 = 4.0;

// --- Explosions ---

/// Age added to every explosion each frame (100-frame lifetime).
pub const EXPLOSION_AGE_STEP: f64 = 0.01;

/// Radius of an explosion at the peak of its lifetime.
pub const EXPLOSION_MAX_RADIUS: f64 = 30.0;

// --- Waves ---

/// Nukes per level are `NUKES_BASE + level`.
pub const NUKES_BASE: u32 = 9;

/// Lower bound (frames) of the delay between enemy launches.
pub const LAUNCH_DELAY_MIN: u32 = 10;

/// Upper bound (frames) of the delay between enemy launches.
pub const LAUNCH_DELAY_MAX: u32 = 100;

/// Number of ground target columns an enemy missile can aim at.
pub const TARGET_COLUMNS: u8 = 9;

// --- Scoring ---

/// Points per enemy missile destroyed.
pub const NUKE_DESTROYED_REWARD: u64 = 25;

/// Bonus points per missile left in a silo at level end.
pub const MISSILE_BONUS: u64 = 5;

/// Bonus points per city surviving a level.
pub const CITY_BONUS: u64 = 100;

/// Bonus tick interval while silo missiles are being counted (ms).
pub const BONUS_TICK_MS: u64 = 100;

/// Bonus tick interval once only cities remain to be counted (ms).
pub const BONUS_TICK_SLOW_MS: u64 = 500;

// --- Display ---

/// Silos holding at most this many missiles show a LOW caption.
pub const LOW_MISSILE_THRESHOLD: u32 = 3;
