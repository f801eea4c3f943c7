//! Entities held by the model.

use serde::{Deserialize, Serialize};

use crate::constants::LOW_MISSILE_THRESHOLD;
use crate::enums::{BaseCaption, MissileCategory};
use crate::types::{heading_velocity, Position, Velocity};

/// Launch silo with a finite missile stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    /// Index into the layout's silo table. Also the bonus counting order.
    pub id: usize,
    pub position: Position,
    /// Never increases within a level; forced to 0 when the silo is hit.
    pub missiles_remaining: u32,
}

impl Base {
    pub fn new(id: usize, position: Position, missiles: u32) -> Self {
        Self {
            id,
            position,
            missiles_remaining: missiles,
        }
    }

    pub fn can_launch(&self) -> bool {
        self.missiles_remaining > 0
    }

    /// Take one missile out of the silo. Returns false when empty.
    pub fn take_missile(&mut self) -> bool {
        if self.missiles_remaining == 0 {
            return false;
        }
        self.missiles_remaining -= 1;
        true
    }

    /// Caption shown under the silo.
    pub fn caption(&self) -> Option<BaseCaption> {
        match self.missiles_remaining {
            0 => Some(BaseCaption::Out),
            n if n <= LOW_MISSILE_THRESHOLD => Some(BaseCaption::Low),
            _ => None,
        }
    }
}

/// A city. It either stands or has been removed from the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub position: Position,
}

impl City {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// A missile in flight, moving at constant velocity from launch to target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub position: Position,
    pub launch_point: Position,
    pub target_point: Position,
    /// Fixed at launch: direction(target - launch) * speed.
    pub velocity: Velocity,
    pub category: MissileCategory,
}

impl Missile {
    pub fn launch(category: MissileCategory, from: Position, to: Position, speed: f64) -> Self {
        Self {
            position: from,
            launch_point: from,
            target_point: to,
            velocity: heading_velocity(from, to, speed),
            category,
        }
    }

    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(self.target_point)
    }

    pub fn is_enemy(&self) -> bool {
        self.category == MissileCategory::Enemy
    }
}

/// A growing-then-shrinking blast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Position,
    /// Fraction of the lifetime elapsed, in `[0, 1]` while the explosion lives.
    pub age: f64,
    pub radius: f64,
}

impl Explosion {
    /// A fresh blast. It has radius 0 until the next aging pass.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            age: 0.0,
            radius: 0.0,
        }
    }

    /// Whether `point` lies strictly inside the blast.
    pub fn contains(&self, point: Position) -> bool {
        self.position.distance(point) < self.radius
    }

    pub fn is_expired(&self) -> bool {
        self.age > 1.0
    }
}

/// Triangular easing: 0 → 1 over the first half of the lifetime, 1 → 0 over the second.
pub fn explosion_size(age: f64) -> f64 {
    let t = age.clamp(0.0, 1.0);
    if t < 0.5 {
        t * 2.0
    } else {
        (1.0 - t) * 2.0
    }
}

/// Whether `point` lies inside any of `explosions`.
pub fn inside_any(explosions: &[Explosion], point: Position) -> bool {
    explosions.iter().any(|e| e.contains(point))
}
