//! Player and enemy missile launches.

use glam::DVec2;
use tracing::debug;

use bulwark_core::commands::LaunchOrder;
use bulwark_core::components::Missile;
use bulwark_core::config::GameConfig;
use bulwark_core::enums::MissileCategory;
use bulwark_core::state::Model;
use bulwark_core::types::Position;

/// Fire from the silo nearest to `target` that still holds missiles.
///
/// Returns the id of the silo that fired, or `None` when every silo is empty
/// (the click is then a no-op). Ties go to the lower silo id.
pub fn fire_player_missile(model: &mut Model, config: &GameConfig, target: Position) -> Option<usize> {
    let base = model
        .bases
        .iter_mut()
        .filter(|b| b.can_launch())
        .min_by(|a, b| {
            a.position
                .distance_squared(target)
                .total_cmp(&b.position.distance_squared(target))
        })?;

    base.take_missile();
    let missile = Missile::launch(
        MissileCategory::Player,
        base.position,
        target,
        config.tuning.player_missile_speed,
    );
    debug!(
        base = base.id,
        left = base.missiles_remaining,
        x = target.x,
        y = target.y,
        "player missile launched"
    );
    let id = base.id;
    model.missiles.push(missile);
    Some(id)
}

/// Launch one nuke from the top edge toward the ordered ground column.
///
/// Returns false, changing nothing, once the level's supply is exhausted.
pub fn launch_nuke(model: &mut Model, config: &GameConfig, order: LaunchOrder) -> bool {
    if model.nukes_left_to_launch == 0 {
        return false;
    }
    model.nukes_left_to_launch -= 1;

    let from = DVec2::new(f64::from(order.from_x()), 0.0);
    let to = config.layout.target_point(order.to_column());
    let speed = config.tuning.enemy_speed(model.level);
    model
        .nukes
        .push(Missile::launch(MissileCategory::Enemy, from, to, speed));

    debug!(
        from_x = order.from_x(),
        column = order.to_column(),
        left = model.nukes_left_to_launch,
        "nuke launched"
    );
    true
}
