//! Bonus sequencing: one silo missile or one city converted to score per tick.

use tracing::{debug, info};

use bulwark_core::config::Tuning;
use bulwark_core::enums::GamePhase;
use bulwark_core::events::HostRequest;
use bulwark_core::state::Model;

/// Prepare the model for bonus counting and request the first tick.
pub fn begin(model: &mut Model, tuning: &Tuning) -> Vec<HostRequest> {
    model.phase = GamePhase::BonusPoints;
    model.missiles_scored = 0;
    info!(
        level = model.level,
        missiles = model.missiles_in_silos(),
        cities = model.cities.len(),
        "level cleared, counting bonus"
    );
    vec![HostRequest::ScheduleBonusTick {
        delay_ms: tuning.bonus_tick_ms,
    }]
}

/// Award one unit of bonus.
///
/// Silo missiles go first, taken from the lowest-numbered silo that still
/// holds any. Once every silo is empty, cities are moved one at a time to
/// the scored list. When the last city has been scored the phase becomes
/// `LevelEnd` and no further tick is requested.
pub fn tick(model: &mut Model, tuning: &Tuning) -> Vec<HostRequest> {
    if let Some(base) = model
        .bases
        .iter_mut()
        .filter(|b| b.can_launch())
        .min_by_key(|b| b.id)
    {
        base.take_missile();
        model.missiles_scored += 1;
        model.score += tuning.missile_bonus;
        debug!(base = base.id, score = model.score, "missile bonus");

        let delay_ms = if model.missiles_in_silos() > 0 {
            tuning.bonus_tick_ms
        } else {
            tuning.bonus_tick_slow_ms
        };
        return vec![HostRequest::ScheduleBonusTick { delay_ms }];
    }

    if !model.cities.is_empty() {
        let city = model.cities.remove(0);
        model.scored_cities.push(city);
        model.score += tuning.city_bonus;
        debug!(score = model.score, "city bonus");

        if !model.cities.is_empty() {
            return vec![HostRequest::ScheduleBonusTick {
                delay_ms: tuning.bonus_tick_slow_ms,
            }];
        }
    }

    model.phase = GamePhase::LevelEnd;
    info!(level = model.level, score = model.score, "level complete");
    Vec::new()
}
