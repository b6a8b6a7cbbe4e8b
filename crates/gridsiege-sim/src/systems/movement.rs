//! Movement system.
//!
//! Player input, hostile seek, and projectile travel. Every position is
//! clamped to the arena after it moves; projectiles deactivate instead of
//! leaving it.

use glam::DVec2;
use hecs::World;

use gridsiege_core::components::*;
use gridsiege_core::config::GameConfig;
use gridsiege_core::input::KeyState;
use gridsiege_core::types::ArenaSize;

/// Count down the player's invincibility window.
pub fn tick_invincibility(player: &mut Player, dt_ms: f64) {
    if !player.invincible {
        return;
    }
    player.invincible_remaining_ms -= dt_ms;
    if player.invincible_remaining_ms <= 0.0 {
        player.invincible_remaining_ms = 0.0;
        player.invincible = false;
    }
}

/// Move the player from the sampled key state. Diagonals are normalized
/// before scaling, and a non-zero input becomes the new facing.
pub fn move_player(player: &mut Player, keys: &KeyState, dt_ms: f64, config: &GameConfig) {
    let Some(dir) = keys.direction().try_normalize() else {
        return;
    };
    player.position = config
        .arena
        .clamp(player.position + dir * config.player_speed * dt_ms);
    player.facing = dir;
}

/// Walk every active hostile toward the player.
pub fn move_hostiles(world: &mut World, target: DVec2, dt_ms: f64, config: &GameConfig) {
    for (_entity, (pos, seeker, active)) in
        world.query_mut::<(&mut Position, &Seeker, &Active)>()
    {
        if !active.0 {
            continue;
        }
        pos.0 = seek_step(pos.0, target, seeker.speed * dt_ms, config.seek_epsilon, config.arena);
    }
}

/// One seek step. Holds position inside `epsilon` of the target.
pub fn seek_step(from: DVec2, target: DVec2, step: f64, epsilon: f64, arena: ArenaSize) -> DVec2 {
    let to_target = target - from;
    let distance = to_target.length();
    if distance <= epsilon {
        return from;
    }
    arena.clamp(from + to_target / distance * step)
}

/// Advance projectiles along their velocity and age them. A projectile
/// whose next position would leave the arena stops at its last in-bounds
/// position and deactivates.
pub fn move_projectiles(world: &mut World, dt_ms: f64, arena: ArenaSize) {
    for (_entity, (pos, vel, lifetime, active)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Lifetime, &mut Active)>()
    {
        if !active.0 {
            continue;
        }
        let next = pos.0 + vel.0 * dt_ms;
        if arena.contains(next) {
            pos.0 = next;
        } else {
            active.0 = false;
        }

        lifetime.remaining_ms -= dt_ms;
        if lifetime.remaining_ms <= 0.0 {
            active.0 = false;
        }
    }
}
