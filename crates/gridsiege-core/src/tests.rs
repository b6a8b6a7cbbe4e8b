#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::LifecycleCommand;
    use crate::config::{ConfigError, ConfigLoadError, GameConfig};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::{KeyState, MoveKey, PhysicalKey};
    use crate::state::{FrameReport, HudView};
    use crate::types::{within_axis_threshold, ArenaSize};

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arena, ArenaSize::new(30, 15));
        assert_eq!(config.player_max_hp, 100);
        assert_eq!(config.contact_damage, 10);
        assert!((config.invincibility_ms - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_json_config_falls_back_to_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 7, "arena": { "width": 40, "height": 20 } }"#)
            .expect("partial config should load");
        assert_eq!(config.seed, 7);
        assert_eq!(config.arena, ArenaSize::new(40, 20));
        assert_eq!(config.player_max_hp, GameConfig::default().player_max_hp);
    }

    #[test]
    fn test_config_rejects_empty_arena() {
        let config = GameConfig {
            arena: ArenaSize::new(0, 10),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyArena {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_config_rejects_oversized_arena() {
        let config = GameConfig {
            arena: ArenaSize::new(40_000, 10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooLarge { width: 40_000, .. })
        ));

        let largest = GameConfig {
            arena: ArenaSize::new(1024, 1024),
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_non_positive_speed() {
        let config = GameConfig {
            hostile_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "hostile_speed",
                ..
            })
        ));

        let config = GameConfig {
            player_speed: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "NaN speed must be rejected");
    }

    #[test]
    fn test_config_rejects_floor_above_base_interval() {
        let config = GameConfig {
            min_spawn_interval_ms: 5_000.0,
            base_spawn_interval_ms: 1_000.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnIntervalFloorAboveBase { .. })
        ));
    }

    #[test]
    fn test_config_rejects_negative_knockback() {
        let config = GameConfig {
            knockback_distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "knockback_distance",
                ..
            })
        ));
    }

    #[test]
    fn test_config_from_bad_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Json(_)));

        let err = GameConfig::from_json(r#"{ "player_max_hp": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::NoHitPoints(0))
        ));
    }

    // ---- Arena geometry ----

    #[test]
    fn test_arena_center_is_floored() {
        let arena = ArenaSize::new(30, 15);
        assert_eq!(arena.center(), DVec2::new(15.0, 7.0));
    }

    #[test]
    fn test_arena_clamp_and_contains() {
        let arena = ArenaSize::new(30, 15);
        let clamped = arena.clamp(DVec2::new(-3.0, 99.0));
        assert_eq!(clamped, DVec2::new(0.0, 14.0));
        assert!(arena.contains(clamped));
        assert!(!arena.contains(DVec2::new(29.5, 0.0)));
    }

    #[test]
    fn test_cell_of_floors_and_rejects_off_grid() {
        let arena = ArenaSize::new(30, 15);
        assert_eq!(arena.cell_of(DVec2::new(3.9, 4.1)), Some((3, 4)));
        assert_eq!(arena.cell_of(DVec2::new(29.99, 14.99)), Some((29, 14)));
        assert_eq!(arena.cell_of(DVec2::new(-0.1, 2.0)), None);
        assert_eq!(arena.cell_of(DVec2::new(30.0, 2.0)), None);
    }

    #[test]
    fn test_axis_threshold_is_strict_per_axis() {
        let a = DVec2::new(5.0, 5.0);
        assert!(within_axis_threshold(a, DVec2::new(5.7, 4.3), 0.8));
        assert!(!within_axis_threshold(a, DVec2::new(5.8, 5.0), 0.8));
        // Diagonal distance > threshold still counts: axis-aligned box test.
        assert!(within_axis_threshold(a, DVec2::new(5.75, 5.75), 0.8));
    }

    // ---- HUD ----

    #[test]
    fn test_health_bar_full_and_partial() {
        let mut hud = HudView {
            wave: 1,
            score: 0,
            hp: 100,
            max_hp: 100,
        };
        assert_eq!(hud.health_bar(), "██████████");

        hud.hp = 90;
        assert_eq!(hud.health_segments(), 9);

        // Ceiling-rounded: 81% shows 9 blocks, 1% shows one.
        hud.hp = 81;
        assert_eq!(hud.health_segments(), 9);
        hud.hp = 1;
        assert_eq!(hud.health_bar(), "█░░░░░░░░░");
    }

    #[test]
    fn test_health_bar_empty_when_dead() {
        let hud = HudView {
            wave: 3,
            score: 40,
            hp: -10,
            max_hp: 100,
        };
        assert_eq!(hud.health_segments(), 0);
        assert_eq!(hud.health_bar().chars().count(), 10);
        assert_eq!(hud.wave_text(), "Wave: 3");
        assert_eq!(hud.score_text(), "Score: 40");
    }

    // ---- Input ----

    #[test]
    fn test_both_key_sets_map_to_same_direction() {
        let arrows = KeyState::with_pressed(&[PhysicalKey::ArrowUp, PhysicalKey::ArrowLeft]);
        let wasd = KeyState::with_pressed(&[PhysicalKey::W, PhysicalKey::A]);
        assert_eq!(arrows.direction(), DVec2::new(-1.0, -1.0));
        assert_eq!(arrows.direction(), wasd.direction());
        assert!(wasd.is_held(MoveKey::Up));
        assert!(!wasd.is_held(MoveKey::Down));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keys = KeyState::with_pressed(&[PhysicalKey::D, PhysicalKey::ArrowLeft]);
        assert_eq!(keys.direction(), DVec2::ZERO);
        keys.set(PhysicalKey::ArrowLeft, false);
        assert_eq!(keys.direction(), DVec2::X);
        keys.release_all();
        assert_eq!(keys.direction(), DVec2::ZERO);
    }

    // ---- Serde ----

    #[test]
    fn test_lifecycle_command_tagged_serde() {
        let json = serde_json::to_string(&LifecycleCommand::Pause).unwrap();
        assert_eq!(json, r#"{"type":"Pause"}"#);
        let back: LifecycleCommand = serde_json::from_str(r#"{"type":"Reset"}"#).unwrap();
        assert_eq!(back, LifecycleCommand::Reset);
    }

    #[test]
    fn test_frame_report_serializes_events() {
        let report = FrameReport {
            phase: GamePhase::GameOver,
            tick: 12,
            writes: Vec::new(),
            hud: None,
            events: vec![GameEvent::ShowGameOver { wave: 4, score: 120 }],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""type":"ShowGameOver""#));
        let back: FrameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(!back.ticked());
    }

    #[test]
    fn test_render_layer_order() {
        assert!(EntityKind::Pickup < EntityKind::Projectile);
        assert!(EntityKind::Projectile < EntityKind::Hostile);
        assert!(EntityKind::Hostile < EntityKind::Player);
    }

    #[test]
    fn test_only_playing_is_scheduled() {
        assert!(GamePhase::Playing.is_scheduled());
        for phase in [
            GamePhase::Idle,
            GamePhase::Paused,
            GamePhase::GameOver,
            GamePhase::Destroyed,
        ] {
            assert!(!phase.is_scheduled(), "{phase:?} should not be scheduled");
        }
    }
}
