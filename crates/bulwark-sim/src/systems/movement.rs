//! Kinematic integration.
//!
//! Missiles fly at constant velocity: position += velocity once per frame.

use bulwark_core::state::Model;

/// Move every player missile and nuke by its velocity.
pub fn run(model: &mut Model) {
    for missile in model.missiles.iter_mut().chain(model.nukes.iter_mut()) {
        missile.position += missile.velocity;
    }
}
