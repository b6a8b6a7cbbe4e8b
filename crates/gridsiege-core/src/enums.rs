//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, not yet started.
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
    /// Torn down; terminal for this engine instance.
    Destroyed,
}

impl GamePhase {
    /// Whether the host should keep delivering ticks.
    pub fn is_scheduled(self) -> bool {
        self == GamePhase::Playing
    }
}

/// Style class of a grid cell. The host maps each class to a colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleClass {
    /// Background cell.
    #[default]
    Empty,
    Player,
    Hostile,
    Projectile,
    Pickup,
}

/// Entity kind, in render layer order (back to front).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Pickup,
    Projectile,
    Hostile,
    Player,
}

impl EntityKind {
    /// Default glyph for the kind.
    pub fn glyph(self) -> char {
        match self {
            EntityKind::Pickup => '$',
            EntityKind::Projectile => '*',
            EntityKind::Hostile => 'x',
            EntityKind::Player => '@',
        }
    }

    pub fn style(self) -> StyleClass {
        match self {
            EntityKind::Pickup => StyleClass::Pickup,
            EntityKind::Projectile => StyleClass::Projectile,
            EntityKind::Hostile => StyleClass::Hostile,
            EntityKind::Player => StyleClass::Player,
        }
    }
}

/// Arena edge a hostile enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}
