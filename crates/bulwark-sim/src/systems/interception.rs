//! Nukes caught inside explosions that existed before this frame's detonations.

use bulwark_core::components::{inside_any, Explosion, Missile};
use bulwark_core::state::Model;

/// Convert every nuke inside an existing blast into a new explosion at its
/// current position. Returns the number of nukes destroyed.
///
/// New explosions start at radius 0, so they cannot catch anything until
/// they are aged on a later frame.
pub fn run(model: &mut Model) -> u32 {
    let (caught, flying): (Vec<Missile>, Vec<Missile>) = std::mem::take(&mut model.nukes)
        .into_iter()
        .partition(|nuke| inside_any(&model.explosions, nuke.position));

    model.nukes = flying;
    model
        .explosions
        .extend(caught.iter().map(|nuke| Explosion::new(nuke.position)));
    caught.len() as u32
}
