//! The model aggregate and the snapshot handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::components::{Base, City, Explosion, Missile};
use crate::config::{GameConfig, Tuning};
use crate::enums::{BaseCaption, GamePhase};
use crate::types::{Position, SimTime};

/// Complete simulation state. Owned exclusively by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub phase: GamePhase,
    pub time: SimTime,
    /// Current level, 0 until the first level starts.
    pub level: u32,
    pub score: u64,
    /// Player missiles in flight.
    pub missiles: Vec<Missile>,
    /// Enemy missiles in flight.
    pub nukes: Vec<Missile>,
    pub explosions: Vec<Explosion>,
    pub bases: Vec<Base>,
    /// Cities still standing.
    pub cities: Vec<City>,
    /// Cities already converted to bonus points this level.
    pub scored_cities: Vec<City>,
    pub nukes_left_to_launch: u32,
    /// Frames until the next enemy launch; 0 when not armed.
    pub countdown: u32,
    /// Silo missiles converted to bonus points this level.
    pub missiles_scored: u32,
}

impl Model {
    /// Title-screen model showing the full default layout.
    pub fn new(config: &GameConfig) -> Self {
        let stock = config.tuning.missile_stock;
        Self {
            bases: config
                .layout
                .bases
                .iter()
                .enumerate()
                .map(|(id, &pos)| Base::new(id, pos, stock))
                .collect(),
            cities: config.layout.cities.iter().map(|&p| City::new(p)).collect(),
            ..Default::default()
        }
    }

    /// Standing plus already-scored cities.
    pub fn city_total(&self) -> usize {
        self.cities.len() + self.scored_cities.len()
    }

    pub fn missiles_in_silos(&self) -> u32 {
        self.bases.iter().map(|b| b.missiles_remaining).sum()
    }
}

/// Complete state broadcast to the renderer after each update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub model: Model,
    pub bases: Vec<BaseView>,
    pub bonus: BonusSummary,
}

/// Silo with its display caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseView {
    pub id: usize,
    pub position: Position,
    pub missiles_remaining: u32,
    pub caption: Option<BaseCaption>,
}

impl From<&Base> for BaseView {
    fn from(base: &Base) -> Self {
        Self {
            id: base.id,
            position: base.position,
            missiles_remaining: base.missiles_remaining,
            caption: base.caption(),
        }
    }
}

/// Running bonus tally for the level-end screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSummary {
    pub missiles_scored: u32,
    pub cities_scored: u32,
    pub missile_points: u64,
    pub city_points: u64,
}

impl BonusSummary {
    pub fn from_model(model: &Model, tuning: &Tuning) -> Self {
        let cities_scored = model.scored_cities.len() as u32;
        Self {
            missiles_scored: model.missiles_scored,
            cities_scored,
            missile_points: u64::from(model.missiles_scored) * tuning.missile_bonus,
            city_points: u64::from(cities_scored) * tuning.city_bonus,
        }
    }

    pub fn total(&self) -> u64 {
        self.missile_points + self.city_points
    }
}
