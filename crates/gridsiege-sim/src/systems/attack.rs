//! Player auto-attack.
//!
//! A fixed cooldown gates a parameter-free attack: one projectile along the
//! player's facing, launched slightly ahead so it is not hidden under the
//! player glyph.

use hecs::World;

use gridsiege_core::components::Player;
use gridsiege_core::config::GameConfig;

use crate::world_setup;

/// Fire if the cooldown has elapsed. Returns the spawned projectile.
pub fn run(
    world: &mut World,
    player: &mut Player,
    elapsed_ms: f64,
    config: &GameConfig,
) -> Option<hecs::Entity> {
    if elapsed_ms - player.last_attack_ms < config.attack_cooldown_ms {
        return None;
    }
    player.last_attack_ms = elapsed_ms;

    let origin = player.position + player.facing * config.projectile_launch_offset;
    Some(world_setup::spawn_projectile(
        world,
        config,
        origin,
        player.facing,
    ))
}
