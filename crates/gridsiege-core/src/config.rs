//! Construction-time configuration.
//!
//! `GameConfig` is fixed once an engine is built; there is no runtime
//! mutation. Every field defaults to the matching constant, so partial JSON
//! files are valid.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::ArenaSize;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("arena must be at least 1x1, got {width}x{height}")]
    EmptyArena { width: u16, height: u16 },
    #[error("arena sides are limited to {max} cells, got {width}x{height}")]
    ArenaTooLarge { width: u16, height: u16, max: u16 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("min_spawn_interval_ms ({min}) exceeds base_spawn_interval_ms ({base})")]
    SpawnIntervalFloorAboveBase { min: f64, base: f64 },
    #[error("player_max_hp must be positive, got {0}")]
    NoHitPoints(i32),
    #[error("hostile_hp must be positive, got {0}")]
    NoHostileHitPoints(i32),
    #[error("base_population_cap must be positive")]
    ZeroPopulationCap,
}

/// All tuning knobs of a game instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaSize,
    pub seed: u64,

    pub player_max_hp: i32,
    pub player_speed: f64,
    pub attack_cooldown_ms: f64,
    pub projectile_launch_offset: f64,
    pub invincibility_ms: f64,
    pub blink_period_ms: f64,

    pub hostile_speed: f64,
    pub hostile_hp: i32,
    pub seek_epsilon: f64,
    pub contact_damage: i32,
    pub knockback_distance: f64,

    pub projectile_speed: f64,
    pub projectile_lifetime_ms: f64,

    pub kill_reward: u64,
    pub pickup_value: u64,

    pub hit_threshold: f64,
    pub pickup_threshold: f64,

    pub wave_duration_ms: f64,
    pub base_spawn_interval_ms: f64,
    pub min_spawn_interval_ms: f64,
    pub spawn_interval_step_ms: f64,
    pub base_population_cap: u32,
    pub population_cap_step: u32,
    pub soft_cap_factor: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ArenaSize::new(ARENA_WIDTH, ARENA_HEIGHT),
            seed: DEFAULT_SEED,
            player_max_hp: PLAYER_MAX_HP,
            player_speed: PLAYER_SPEED,
            attack_cooldown_ms: ATTACK_COOLDOWN_MS,
            projectile_launch_offset: PROJECTILE_LAUNCH_OFFSET,
            invincibility_ms: INVINCIBILITY_MS,
            blink_period_ms: BLINK_PERIOD_MS,
            hostile_speed: HOSTILE_SPEED,
            hostile_hp: HOSTILE_HP,
            seek_epsilon: SEEK_EPSILON,
            contact_damage: CONTACT_DAMAGE,
            knockback_distance: KNOCKBACK_DISTANCE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime_ms: PROJECTILE_LIFETIME_MS,
            kill_reward: KILL_REWARD,
            pickup_value: PICKUP_VALUE,
            hit_threshold: HIT_THRESHOLD,
            pickup_threshold: PICKUP_THRESHOLD,
            wave_duration_ms: WAVE_DURATION_MS,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            base_population_cap: BASE_POPULATION_CAP,
            population_cap_step: POPULATION_CAP_STEP,
            soft_cap_factor: SOFT_CAP_FACTOR,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.width == 0 || self.arena.height == 0 {
            return Err(ConfigError::EmptyArena {
                width: self.arena.width,
                height: self.arena.height,
            });
        }
        if self.arena.width > MAX_ARENA_SIDE || self.arena.height > MAX_ARENA_SIDE {
            return Err(ConfigError::ArenaTooLarge {
                width: self.arena.width,
                height: self.arena.height,
                max: MAX_ARENA_SIDE,
            });
        }
        if self.player_max_hp <= 0 {
            return Err(ConfigError::NoHitPoints(self.player_max_hp));
        }
        if self.hostile_hp <= 0 {
            return Err(ConfigError::NoHostileHitPoints(self.hostile_hp));
        }

        let positive = [
            ("player_speed", self.player_speed),
            ("attack_cooldown_ms", self.attack_cooldown_ms),
            ("invincibility_ms", self.invincibility_ms),
            ("blink_period_ms", self.blink_period_ms),
            ("hostile_speed", self.hostile_speed),
            ("seek_epsilon", self.seek_epsilon),
            ("projectile_speed", self.projectile_speed),
            ("projectile_lifetime_ms", self.projectile_lifetime_ms),
            ("hit_threshold", self.hit_threshold),
            ("pickup_threshold", self.pickup_threshold),
            ("wave_duration_ms", self.wave_duration_ms),
            ("base_spawn_interval_ms", self.base_spawn_interval_ms),
            ("min_spawn_interval_ms", self.min_spawn_interval_ms),
        ];
        for (field, value) in positive {
            // NaN fails this comparison too.
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("projectile_launch_offset", self.projectile_launch_offset),
            ("knockback_distance", self.knockback_distance),
            ("spawn_interval_step_ms", self.spawn_interval_step_ms),
            ("contact_damage", f64::from(self.contact_damage)),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.min_spawn_interval_ms > self.base_spawn_interval_ms {
            return Err(ConfigError::SpawnIntervalFloorAboveBase {
                min: self.min_spawn_interval_ms,
                base: self.base_spawn_interval_ms,
            });
        }
        if self.base_population_cap == 0 {
            return Err(ConfigError::ZeroPopulationCap);
        }
        Ok(())
    }
}

/// Failure to load a config file's contents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
