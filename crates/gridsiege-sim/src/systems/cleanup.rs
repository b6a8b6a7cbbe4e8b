//! Cleanup system: the only place entities leave the world.

use hecs::{Entity, World};

use gridsiege_core::components::Active;

/// Despawn every entity whose `Active` flag is false.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, active) in world.query_mut::<&Active>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
