//! Immutable layout and tuning data handed to the engine.
//!
//! Level reset reads the silo and city tables from here instead of from
//! shared globals, so a host can load alternative layouts.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// Everything the engine needs to know that is not game state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub layout: Layout,
    pub tuning: Tuning,
}

/// Fixed placement of silos, cities and enemy target slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Silo positions; a silo's id is its index here.
    pub bases: Vec<Position>,
    /// Cities present on the first level.
    pub cities: Vec<Position>,
    /// Enemy target slots; column `n` maps to `target_slots[n - 1]`.
    pub target_slots: Vec<Position>,
    /// Ground line used by the fallback target formula.
    pub ground_y: f64,
}

impl Default for Layout {
    fn default() -> Self {
        let bases: Vec<Position> = BASE_XS.iter().map(|&x| DVec2::new(x, BASE_Y)).collect();
        let cities: Vec<Position> = CITY_XS.iter().map(|&x| DVec2::new(x, GROUND_Y)).collect();

        let mut slot_xs: Vec<f64> = BASE_XS.iter().chain(CITY_XS.iter()).copied().collect();
        slot_xs.sort_by(f64::total_cmp);
        let target_slots = slot_xs.into_iter().map(|x| DVec2::new(x, GROUND_Y)).collect();

        Self {
            bases,
            cities,
            target_slots,
            ground_y: GROUND_Y,
        }
    }
}

impl Layout {
    /// Ground point an enemy missile aimed at `column` flies toward.
    ///
    /// Columns are 1-based. A column missing from the slot table is a host
    /// contract violation: debug builds panic, release builds fall back to
    /// `x = column * 80` on the ground line.
    pub fn target_point(&self, column: u8) -> Position {
        debug_assert!(
            column >= 1 && usize::from(column) <= self.target_slots.len(),
            "target column {column} outside slot table of {}",
            self.target_slots.len()
        );
        match usize::from(column)
            .checked_sub(1)
            .and_then(|i| self.target_slots.get(i))
        {
            Some(slot) => *slot,
            None => fallback_target(column, self.ground_y),
        }
    }
}

/// Ground point for a column with no slot: `x = column * 80`.
pub(crate) fn fallback_target(column: u8, ground_y: f64) -> Position {
    DVec2::new(f64::from(column) * TARGET_FALLBACK_SPACING, ground_y)
}

/// Gameplay tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub missile_stock: u32,
    pub player_missile_speed: f64,
    pub enemy_base_speed: f64,
    pub enemy_speed_per_level: f64,
    pub detonation_epsilon: f64,
    pub explosion_age_step: f64,
    pub explosion_max_radius: f64,
    pub nukes_base: u32,
    pub launch_delay_min: u32,
    pub launch_delay_max: u32,
    pub nuke_destroyed_reward: u64,
    pub missile_bonus: u64,
    pub city_bonus: u64,
    pub bonus_tick_ms: u64,
    pub bonus_tick_slow_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            missile_stock: BASE_MISSILE_STOCK,
            player_missile_speed: PLAYER_MISSILE_SPEED,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_level: ENEMY_SPEED_PER_LEVEL,
            detonation_epsilon: DETONATION_EPSILON,
            explosion_age_step: EXPLOSION_AGE_STEP,
            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            nukes_base: NUKES_BASE,
            launch_delay_min: LAUNCH_DELAY_MIN,
            launch_delay_max: LAUNCH_DELAY_MAX,
            nuke_destroyed_reward: NUKE_DESTROYED_REWARD,
            missile_bonus: MISSILE_BONUS,
            city_bonus: CITY_BONUS,
            bonus_tick_ms: BONUS_TICK_MS,
            bonus_tick_slow_ms: BONUS_TICK_SLOW_MS,
        }
    }
}

impl Tuning {
    /// Enemy missile speed on `level` (1-based).
    pub fn enemy_speed(&self, level: u32) -> f64 {
        self.enemy_base_speed + self.enemy_speed_per_level * f64::from(level.saturating_sub(1))
    }

    /// Number of enemy missiles launched during `level`.
    pub fn nukes_for_level(&self, level: u32) -> u32 {
        self.nukes_base + level
    }
}
