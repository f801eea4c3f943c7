//! A simple built-in defender.
//!
//! Each frame it looks for the lowest incoming nuke it has not already
//! fired at, leads it by the flight time of a player missile plus the time
//! an explosion needs to grow, and clicks there.

use glam::DVec2;

use bulwark_core::components::Missile;
use bulwark_core::config::GameConfig;
use bulwark_core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use bulwark_core::state::Model;
use bulwark_core::types::Position;

/// Frames an explosion needs to reach a useful radius.
const BLOOM_FRAMES: f64 = 20.0;
/// Longest lead the planner will consider.
const MAX_LEAD_FRAMES: u32 = 600;
/// Never aim this close to the ground; the blast would hit our own cities.
const GROUND_MARGIN: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Frames between shots.
    reload_frames: u32,
    cooldown: u32,
    /// Nukes already fired at. Nukes carry no id, so each is remembered by
    /// its path and where it was when the shot went out.
    covered: Vec<Covered>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Autopilot {
    pub fn new(reload_frames: u32) -> Self {
        Self {
            reload_frames,
            cooldown: 0,
            covered: Vec::new(),
        }
    }

    /// Click to make this frame, if any.
    pub fn plan(&mut self, model: &Model, config: &GameConfig) -> Option<(i32, i32)> {
        let now = model.time.frame;
        self.covered
            .retain(|c| model.nukes.iter().any(|n| c.tracks(n, now)));

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let mut threats: Vec<&Missile> = model
            .nukes
            .iter()
            .filter(|n| !self.covered.iter().any(|c| c.tracks(n, now)))
            .collect();
        threats.sort_by(|a, b| b.position.y.total_cmp(&a.position.y));

        for nuke in threats {
            let Some(aim) = lead_point(model, config, nuke) else {
                continue;
            };
            self.covered.push(Covered {
                path: (nuke.launch_point, nuke.target_point),
                position: nuke.position,
                frame: now,
            });
            self.cooldown = self.reload_frames;
            return Some((aim.x.round() as i32, aim.y.round() as i32));
        }
        None
    }
}

/// Nukes on one path launch at least one launch delay apart, so they are
/// several pixels apart along it.
const TRACK_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone)]
struct Covered {
    path: (Position, Position),
    position: Position,
    frame: u64,
}

impl Covered {
    /// Whether `nuke` is the one fired at, projected forward to `now`.
    fn tracks(&self, nuke: &Missile, now: u64) -> bool {
        if (nuke.launch_point, nuke.target_point) != self.path {
            return false;
        }
        let elapsed = now.saturating_sub(self.frame) as f64;
        let expected = self.position + nuke.velocity * elapsed;
        nuke.position.distance(expected) < TRACK_TOLERANCE
    }
}

/// Where to click so a player missile meets `nuke` with a grown explosion.
fn lead_point(model: &Model, config: &GameConfig, nuke: &Missile) -> Option<Position> {
    let speed = config.tuning.player_missile_speed;
    if speed <= 0.0 {
        return None;
    }
    let floor = config.layout.ground_y - GROUND_MARGIN;

    (1..=MAX_LEAD_FRAMES).find_map(|frame| {
        let t = f64::from(frame);
        let ahead = nuke.position + nuke.velocity * t;
        if ahead.y > floor {
            return None;
        }
        let base = nearest_loaded_base(model, ahead)?;
        let arrival = base.distance(ahead) / speed + BLOOM_FRAMES;
        (arrival <= t).then(|| clamp_to_field(ahead))
    })
}

/// Mirrors the engine's silo choice: nearest silo with stock.
fn nearest_loaded_base(model: &Model, target: Position) -> Option<Position> {
    model
        .bases
        .iter()
        .filter(|b| b.can_launch())
        .map(|b| b.position)
        .min_by(|a, b| a.distance_squared(target).total_cmp(&b.distance_squared(target)))
}

fn clamp_to_field(p: Position) -> Position {
    p.clamp(DVec2::ZERO, DVec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::enums::MissileCategory;

    fn model_with_nuke(from: Position, to: Position) -> (Model, GameConfig) {
        let config = GameConfig::default();
        let mut model = Model::new(&config);
        model.nukes.push(Missile::launch(
            MissileCategory::Enemy,
            from,
            to,
            config.tuning.enemy_speed(1),
        ));
        (model, config)
    }

    #[test]
    fn test_leads_incoming_nuke() {
        let (model, config) = model_with_nuke(DVec2::new(400.0, 0.0), DVec2::new(400.0, 340.0));
        let mut pilot = Autopilot::default();

        let (x, y) = pilot.plan(&model, &config).expect("a shot");
        assert_eq!(x, 400);
        assert!(y > 0, "aim must lead the nuke, got {y}");
        assert!(f64::from(y) <= config.layout.ground_y - GROUND_MARGIN);
    }

    #[test]
    fn test_does_not_fire_twice_at_same_nuke() {
        let (model, config) = model_with_nuke(DVec2::new(400.0, 0.0), DVec2::new(400.0, 340.0));
        let mut pilot = Autopilot::new(0);

        assert!(pilot.plan(&model, &config).is_some());
        assert!(pilot.plan(&model, &config).is_none());
    }

    #[test]
    fn test_fires_at_each_nuke_sharing_a_path() {
        let (mut model, config) =
            model_with_nuke(DVec2::new(400.0, 0.0), DVec2::new(400.0, 340.0));
        let mut follower = model.nukes[0].clone();
        model.nukes[0].position = DVec2::new(400.0, 40.0);
        follower.position = DVec2::new(400.0, 10.0);
        model.nukes.push(follower);
        let mut pilot = Autopilot::new(0);

        let (_, first) = pilot.plan(&model, &config).expect("shot at the leader");
        let (_, second) = pilot.plan(&model, &config).expect("shot at the follower");
        assert!(first > second, "leader is lower, so its aim point is lower");
        assert!(pilot.plan(&model, &config).is_none());

        // The leader lands unhurt; the follower is still covered.
        model.nukes.remove(0);
        assert!(pilot.plan(&model, &config).is_none());

        // A new nuke on the same path is a fresh target.
        let mut newcomer = model.nukes[0].clone();
        newcomer.position = DVec2::new(400.0, 0.0);
        model.nukes.push(newcomer);
        assert!(pilot.plan(&model, &config).is_some());
    }

    #[test]
    fn test_holds_fire_while_reloading() {
        let (mut model, config) =
            model_with_nuke(DVec2::new(400.0, 0.0), DVec2::new(400.0, 340.0));
        model.nukes.push(Missile::launch(
            MissileCategory::Enemy,
            DVec2::new(100.0, 0.0),
            DVec2::new(120.0, 340.0),
            config.tuning.enemy_speed(1),
        ));
        let mut pilot = Autopilot::new(2);

        assert!(pilot.plan(&model, &config).is_some());
        assert!(pilot.plan(&model, &config).is_none());
        assert!(pilot.plan(&model, &config).is_none());
        assert!(pilot.plan(&model, &config).is_some());
    }

    #[test]
    fn test_no_shot_without_missiles() {
        let (mut model, config) =
            model_with_nuke(DVec2::new(400.0, 0.0), DVec2::new(400.0, 340.0));
        for base in &mut model.bases {
            base.missiles_remaining = 0;
        }
        assert!(Autopilot::default().plan(&model, &config).is_none());
    }
}
