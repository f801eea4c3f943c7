//! Explosion aging: grow, shrink, expire.

use bulwark_core::components::{explosion_size, Explosion};
use bulwark_core::config::Tuning;

/// Age every explosion by one frame, recompute its radius, and drop the
/// ones whose age now exceeds 1.0.
pub fn run(explosions: &mut Vec<Explosion>, tuning: &Tuning) {
    for explosion in explosions.iter_mut() {
        explosion.age += tuning.explosion_age_step;
        explosion.radius = explosion_size(explosion.age) * tuning.explosion_max_radius;
    }
    explosions.retain(|e| !e.is_expired());
}
