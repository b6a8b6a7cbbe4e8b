//! ECS components for hecs entities, plus the engine-owned player record.
//!
//! Components are plain data structs with no behaviour. Each entity kind is
//! a kind marker plus the capability components its systems need:
//! movable (`Seeker`, `Velocity`), damageable (`Health`), collectable
//! (`Collectable`) and expiring (`Lifetime`).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::StyleClass;

/// Continuous position in arena units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Straight-line velocity in arena units per millisecond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// What the entity looks like on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub ch: char,
    pub style: StyleClass,
}

/// Liveness flag. Once false the entity is inert and is despawned by the
/// cleanup phase of the same tick; it is never set back to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Self(true)
    }
}

/// Movable: walks toward the player at a fixed speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Seeker {
    /// Arena units per millisecond.
    pub speed: f64,
}

/// Damageable: integer hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

/// Collectable: score awarded when the player touches it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectable {
    pub value: u64,
}

/// Expiring: milliseconds left before the entity deactivates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_ms: f64,
}

/// Marks an entity as a hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks an entity as a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks an entity as a score pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;

/// The single player. Owned by the engine rather than stored in the ECS
/// world: it is created once per run and only ever reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec2,
    pub hp: i32,
    pub max_hp: i32,
    /// Last non-zero movement direction (unit vector); auto-attack aim.
    pub facing: DVec2,
    /// Simulated time of the last auto-attack (ms).
    pub last_attack_ms: f64,
    pub invincible: bool,
    pub invincible_remaining_ms: f64,
}

impl Player {
    /// Fresh player at `position` facing right.
    pub fn new(position: DVec2, max_hp: i32) -> Self {
        Self {
            position,
            hp: max_hp,
            max_hp,
            facing: DVec2::X,
            last_attack_ms: 0.0,
            invincible: false,
            invincible_remaining_ms: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
