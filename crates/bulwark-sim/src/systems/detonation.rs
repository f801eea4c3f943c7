//! Missiles arriving at their target detonate.

use glam::DVec2;

use bulwark_core::components::{Explosion, Missile};
use bulwark_core::state::Model;

/// Detonate every nuke and player missile closer than `epsilon` to its
/// target, or already past it. Returns the number of nukes detonated.
pub fn run(model: &mut Model, epsilon: f64) -> u32 {
    let (arrived_nukes, nukes) = split_arrived(std::mem::take(&mut model.nukes), epsilon);
    let (arrived_missiles, missiles) =
        split_arrived(std::mem::take(&mut model.missiles), epsilon);

    model.nukes = nukes;
    model.missiles = missiles;
    model.explosions.extend(
        arrived_nukes
            .iter()
            .chain(arrived_missiles.iter())
            .map(|m| Explosion::new(m.position)),
    );
    arrived_nukes.len() as u32
}

/// Partition into (detonating, still flying).
fn split_arrived(missiles: Vec<Missile>, epsilon: f64) -> (Vec<Missile>, Vec<Missile>) {
    missiles
        .into_iter()
        .partition(|m| m.distance_to_target() < epsilon || overshot(m))
}

/// A moving missile whose heading no longer points at its target has flown
/// past it. Happens when a step lands exactly `epsilon` short.
fn overshot(missile: &Missile) -> bool {
    missile.velocity != DVec2::ZERO
        && (missile.target_point - missile.position).dot(missile.velocity) <= 0.0
}
