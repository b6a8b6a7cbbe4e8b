//! Spawn director: wave clock and hostile spawn cadence.
//!
//! Two independent timers advance by `dt`: the wave timer escalates
//! difficulty every `wave_duration_ms`, the spawn timer gates new hostiles
//! at `spawn_interval(wave)` while the population stays under the soft cap.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gridsiege_core::components::{Active, Hostile};
use gridsiege_core::config::GameConfig;
use gridsiege_core::events::GameEvent;

use crate::world_setup;

/// Spawn interval for a wave: linear decrease per wave, floored.
pub fn spawn_interval_ms(config: &GameConfig, wave: u32) -> f64 {
    let reduction = f64::from(wave.saturating_sub(1)) * config.spawn_interval_step_ms;
    (config.base_spawn_interval_ms - reduction).max(config.min_spawn_interval_ms)
}

/// Population cap for a wave: linear increase per wave.
pub fn max_population(config: &GameConfig, wave: u32) -> u32 {
    config
        .base_population_cap
        .saturating_add(wave.saturating_sub(1).saturating_mul(config.population_cap_step))
}

/// Hostile count above which spawning pauses.
pub fn soft_cap(config: &GameConfig, wave: u32) -> u32 {
    max_population(config, wave).saturating_mul(config.soft_cap_factor)
}

/// Wave and spawn timers for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Current wave, starting at 1.
    pub wave: u32,
    pub wave_timer_ms: f64,
    pub spawn_timer_ms: f64,
    /// Hostiles spawned since the current wave began.
    pub spawned_this_wave: u32,
    pub total_spawned: u32,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self {
            wave: 1,
            wave_timer_ms: 0.0,
            spawn_timer_ms: 0.0,
            spawned_this_wave: 0,
            total_spawned: 0,
        }
    }
}

impl SpawnDirector {
    /// Advance both timers by `dt_ms`, spawning at most one hostile.
    ///
    /// The spawn check runs against the wave that was current when the tick
    /// began; the wave rollover (and per-wave counter reset) follows it.
    pub fn run(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        dt_ms: f64,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) {
        self.spawn_timer_ms += dt_ms;
        if self.spawn_timer_ms >= spawn_interval_ms(config, self.wave)
            && active_hostiles(world) < soft_cap(config, self.wave)
        {
            let (edge, position) = world_setup::random_edge_position(rng, config.arena);
            world_setup::spawn_hostile(world, config, position);
            self.spawn_timer_ms = 0.0;
            self.spawned_this_wave += 1;
            self.total_spawned += 1;
            tracing::trace!(?edge, x = position.x, y = position.y, "hostile spawned");
        }

        self.wave_timer_ms += dt_ms;
        if self.wave_timer_ms >= config.wave_duration_ms {
            self.wave += 1;
            self.wave_timer_ms = 0.0;
            self.spawned_this_wave = 0;
            events.push(GameEvent::WaveAdvanced { wave: self.wave });
            tracing::debug!(
                wave = self.wave,
                interval_ms = spawn_interval_ms(config, self.wave),
                cap = max_population(config, self.wave),
                "wave advanced"
            );
        }
    }
}

/// Active hostiles currently in the world.
pub fn active_hostiles(world: &World) -> u32 {
    let mut query = world.query::<(&Active, &Hostile)>();
    let count = query.iter().filter(|(_, (active, _))| active.0).count();
    count as u32
}
