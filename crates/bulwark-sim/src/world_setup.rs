//! Level setup: fresh silos, carried-over cities, a new enemy supply.

use tracing::{info, warn};

use bulwark_core::components::{Base, City};
use bulwark_core::config::GameConfig;
use bulwark_core::enums::GamePhase;
use bulwark_core::events::HostRequest;
use bulwark_core::state::Model;

use crate::systems::countdown;

/// Build the silo roster for a new level from the layout table.
pub fn spawn_bases(config: &GameConfig) -> Vec<Base> {
    config
        .layout
        .bases
        .iter()
        .enumerate()
        .map(|(id, &position)| Base::new(id, position, config.tuning.missile_stock))
        .collect()
}

/// Cities that take part in the next level.
///
/// The first level uses the full layout. Later levels use the cities scored
/// during the previous bonus count (plus any not yet counted).
fn next_city_roster(model: &mut Model, config: &GameConfig) -> Vec<City> {
    if model.level == 0 {
        return config.layout.cities.iter().map(|&p| City::new(p)).collect();
    }
    let mut cities = std::mem::take(&mut model.scored_cities);
    cities.append(&mut model.cities);
    cities
}

/// Reset the model for the next level and return the initial launch requests.
///
/// Score and the frame clock carry over; missiles, nukes, explosions,
/// silos and the countdown are reset.
pub fn start_level(model: &mut Model, config: &GameConfig) -> Vec<HostRequest> {
    let level = model.level + 1;
    let cities = next_city_roster(model, config);
    if cities.is_empty() {
        warn!(level, "starting level without cities; game over on first frame");
    }

    *model = Model {
        phase: GamePhase::Playing,
        time: model.time,
        level,
        score: model.score,
        bases: spawn_bases(config),
        cities,
        nukes_left_to_launch: config.tuning.nukes_for_level(level),
        ..Default::default()
    };

    info!(
        level,
        cities = model.cities.len(),
        nukes = model.nukes_left_to_launch,
        "level started"
    );
    countdown::launch_requests(&config.tuning)
}
