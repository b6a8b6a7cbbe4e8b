//! Collision system: per-axis proximity checks between entity groups.
//!
//! Three passes run in a fixed order each tick: player × hostile,
//! projectile × hostile, player × pickup. Side effects apply immediately;
//! an entity deactivated by an earlier pass is skipped by later ones.

use glam::DVec2;
use hecs::{Entity, World};

use gridsiege_core::components::*;
use gridsiege_core::config::GameConfig;
use gridsiege_core::events::GameEvent;
use gridsiege_core::types::within_axis_threshold;

use crate::score::ScoreState;
use crate::world_setup;

/// Run all three collision passes.
pub fn run(
    world: &mut World,
    player: &mut Player,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    player_vs_hostiles(world, player, config, events);
    projectiles_vs_hostiles(world, config, score, events);
    player_vs_pickups(world, player, config, score, events);
}

/// Contact damage. While invincible the player ignores contact entirely;
/// a hit starts the invincibility window and knocks the hostile away.
pub fn player_vs_hostiles(
    world: &mut World,
    player: &mut Player,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    if player.invincible {
        return;
    }

    for (_entity, (pos, active, _hostile)) in
        world.query_mut::<(&mut Position, &Active, &Hostile)>()
    {
        if !active.0 || !within_axis_threshold(player.position, pos.0, config.hit_threshold) {
            continue;
        }

        player.hp -= config.contact_damage;
        player.invincible = true;
        player.invincible_remaining_ms = config.invincibility_ms;

        let away = (pos.0 - player.position)
            .try_normalize()
            .unwrap_or(player.facing);
        pos.0 = config.arena.clamp(pos.0 + away * config.knockback_distance);

        events.push(GameEvent::PlayerHit { hp: player.hp });
        tracing::debug!(hp = player.hp, "player hit");
        break;
    }
}

/// Each projectile checks hostiles in query order and stops at the first
/// overlap. A kill awards the reward once and drops one pickup.
pub fn projectiles_vs_hostiles(
    world: &mut World,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let mut hostiles: Vec<(Entity, DVec2)> = world
        .query_mut::<(&Position, &Active, &Hostile)>()
        .into_iter()
        .filter(|(_, (_, active, _))| active.0)
        .map(|(entity, (pos, _, _))| (entity, pos.0))
        .collect();

    if hostiles.is_empty() {
        return;
    }

    let projectiles: Vec<(Entity, DVec2)> = world
        .query_mut::<(&Position, &Active, &Projectile)>()
        .into_iter()
        .filter(|(_, (_, active, _))| active.0)
        .map(|(entity, (pos, _, _))| (entity, pos.0))
        .collect();

    let mut drops: Vec<DVec2> = Vec::new();

    for (projectile, projectile_pos) in projectiles {
        let Some(index) = hostiles
            .iter()
            .position(|(_, pos)| within_axis_threshold(projectile_pos, *pos, config.hit_threshold))
        else {
            continue;
        };
        let (hostile, hostile_pos) = hostiles[index];

        if let Ok(mut active) = world.get::<&mut Active>(projectile) {
            active.0 = false;
        }

        let killed = match world.get::<&mut Health>(hostile) {
            Ok(mut health) => {
                health.hp -= 1;
                health.hp <= 0
            }
            Err(_) => false,
        };

        if killed {
            if let Ok(mut active) = world.get::<&mut Active>(hostile) {
                active.0 = false;
            }
            hostiles.remove(index);

            score.score = score.score.saturating_add(config.kill_reward);
            score.hostiles_killed += 1;
            drops.push(hostile_pos);
            events.push(GameEvent::HostileKilled {
                x: hostile_pos.x,
                y: hostile_pos.y,
            });
            tracing::debug!(x = hostile_pos.x, y = hostile_pos.y, "hostile killed");

            if hostiles.is_empty() {
                break;
            }
        }
    }

    for position in drops {
        world_setup::spawn_pickup(world, config, position);
    }
}

/// Collect every active pickup within reach.
pub fn player_vs_pickups(
    world: &mut World,
    player: &Player,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (pos, collectable, active, _pickup)) in
        world.query_mut::<(&Position, &Collectable, &mut Active, &Pickup)>()
    {
        if !active.0 || !within_axis_threshold(player.position, pos.0, config.pickup_threshold) {
            continue;
        }
        active.0 = false;
        score.score = score.score.saturating_add(collectable.value);
        score.pickups_collected += 1;
        events.push(GameEvent::PickupCollected {
            value: collectable.value,
        });
    }
}
