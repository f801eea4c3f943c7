//! Cities and silos caught in a blast.

use tracing::debug;

use bulwark_core::components::inside_any;
use bulwark_core::state::Model;

/// Remove cities inside any explosion and empty any silo inside one.
/// Silos stay on the field; they just cannot launch any more.
pub fn run(model: &mut Model) {
    let explosions = &model.explosions;

    let before = model.cities.len();
    model.cities.retain(|city| !inside_any(explosions, city.position));
    let lost = before - model.cities.len();
    if lost > 0 {
        debug!(lost, remaining = model.cities.len(), "cities destroyed");
    }

    for base in model.bases.iter_mut() {
        if base.missiles_remaining > 0 && inside_any(explosions, base.position) {
            debug!(base = base.id, lost = base.missiles_remaining, "silo destroyed");
            base.missiles_remaining = 0;
        }
    }
}
