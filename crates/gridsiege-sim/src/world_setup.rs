//! Entity spawn factories.
//!
//! Creates hostile, projectile, and pickup entities with the capability
//! bundles their systems query for.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridsiege_core::components::*;
use gridsiege_core::config::GameConfig;
use gridsiege_core::enums::{Edge, EntityKind};
use gridsiege_core::types::ArenaSize;

fn glyph_of(kind: EntityKind) -> Glyph {
    Glyph {
        ch: kind.glyph(),
        style: kind.style(),
    }
}

/// Spawn a hostile at `position` (clamped into the arena).
pub fn spawn_hostile(world: &mut World, config: &GameConfig, position: DVec2) -> hecs::Entity {
    world.spawn((
        Hostile,
        Position(config.arena.clamp(position)),
        glyph_of(EntityKind::Hostile),
        Active::default(),
        Seeker {
            speed: config.hostile_speed,
        },
        Health {
            hp: config.hostile_hp,
        },
    ))
}

/// Spawn a projectile at `origin` travelling along `direction`.
/// `direction` is normalized here; a zero direction falls back to +x.
pub fn spawn_projectile(
    world: &mut World,
    config: &GameConfig,
    origin: DVec2,
    direction: DVec2,
) -> hecs::Entity {
    let heading = direction.try_normalize().unwrap_or(DVec2::X);
    world.spawn((
        Projectile,
        Position(config.arena.clamp(origin)),
        glyph_of(EntityKind::Projectile),
        Active::default(),
        Velocity(heading * config.projectile_speed),
        Lifetime {
            remaining_ms: config.projectile_lifetime_ms,
        },
    ))
}

/// Spawn a pickup worth `config.pickup_value` at `position`.
pub fn spawn_pickup(world: &mut World, config: &GameConfig, position: DVec2) -> hecs::Entity {
    world.spawn((
        Pickup,
        Position(config.arena.clamp(position)),
        glyph_of(EntityKind::Pickup),
        Active::default(),
        Collectable {
            value: config.pickup_value,
        },
    ))
}

/// Pick an edge uniformly, then a uniform point along it.
pub fn random_edge_position(rng: &mut ChaCha8Rng, arena: ArenaSize) -> (Edge, DVec2) {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let along_x = uniform_on(rng, arena.max_x());
    let along_y = uniform_on(rng, arena.max_y());

    let position = match edge {
        Edge::Top => DVec2::new(along_x, 0.0),
        Edge::Bottom => DVec2::new(along_x, arena.max_y()),
        Edge::Left => DVec2::new(0.0, along_y),
        Edge::Right => DVec2::new(arena.max_x(), along_y),
    };
    (edge, position)
}

/// Uniform sample on `[0, max]`; a degenerate one-cell axis yields 0.
fn uniform_on(rng: &mut ChaCha8Rng, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(0.0..=max)
    } else {
        0.0
    }
}
