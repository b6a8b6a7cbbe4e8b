//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `GameConfig::default()`. All distances are
//! in arena units (one unit = one grid cell), all times in milliseconds.

// --- Arena ---

/// Arena width in cells.
pub const ARENA_WIDTH: u16 = 30;

/// Arena height in cells.
pub const ARENA_HEIGHT: u16 = 15;

/// Largest accepted arena side, in cells.
pub const MAX_ARENA_SIDE: u16 = 1024;

// --- Player ---

/// Starting (and maximum) player hit points.
pub const PLAYER_MAX_HP: i32 = 100;

/// Player speed in arena units per millisecond (10 cells/s).
pub const PLAYER_SPEED: f64 = 0.01;

/// Interval between auto-attacks (ms).
pub const ATTACK_COOLDOWN_MS: f64 = 800.0;

/// Distance ahead of the player at which a projectile is launched.
pub const PROJECTILE_LAUNCH_OFFSET: f64 = 1.0;

/// Damage-immunity window after taking a hit (ms).
pub const INVINCIBILITY_MS: f64 = 500.0;

/// Blink half-period of the player glyph while invincible (real-time ms).
pub const BLINK_PERIOD_MS: f64 = 100.0;

// --- Hostiles ---

/// Hostile seek speed in arena units per millisecond (3 cells/s).
pub const HOSTILE_SPEED: f64 = 0.003;

/// Hit points a freshly spawned hostile starts with.
pub const HOSTILE_HP: i32 = 1;

/// Below this distance a hostile holds position instead of seeking.
pub const SEEK_EPSILON: f64 = 0.5;

/// Hit points removed from the player per contact.
pub const CONTACT_DAMAGE: i32 = 10;

/// Displacement applied to a hostile that lands a hit.
pub const KNOCKBACK_DISTANCE: f64 = 2.0;

// --- Projectiles ---

/// Projectile speed in arena units per millisecond (20 cells/s).
pub const PROJECTILE_SPEED: f64 = 0.02;

/// Projectile lifetime (ms).
pub const PROJECTILE_LIFETIME_MS: f64 = 1500.0;

// --- Pickups and score ---

/// Score awarded per hostile kill.
pub const KILL_REWARD: u64 = 10;

/// Score value carried by a dropped pickup.
pub const PICKUP_VALUE: u64 = 5;

// --- Collision thresholds (per-axis) ---

/// Player × Hostile and Projectile × Hostile proximity threshold.
pub const HIT_THRESHOLD: f64 = 0.8;

/// Player × Pickup proximity threshold.
pub const PICKUP_THRESHOLD: f64 = 1.5;

// --- Spawn director ---

/// Duration of one wave (ms).
pub const WAVE_DURATION_MS: f64 = 20_000.0;

/// Spawn interval during wave 1 (ms).
pub const BASE_SPAWN_INTERVAL_MS: f64 = 2_000.0;

/// Spawn interval floor (ms).
pub const MIN_SPAWN_INTERVAL_MS: f64 = 400.0;

/// Spawn interval reduction per wave (ms).
pub const SPAWN_INTERVAL_STEP_MS: f64 = 200.0;

/// Population cap during wave 1.
pub const BASE_POPULATION_CAP: u32 = 5;

/// Population cap increase per wave.
pub const POPULATION_CAP_STEP: u32 = 2;

/// Multiplier applied to the population cap before it blocks spawning.
pub const SOFT_CAP_FACTOR: u32 = 2;

// --- HUD ---

/// Number of segments in the HUD health bar.
pub const HEALTH_BAR_SEGMENTS: usize = 10;

// --- Determinism ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
