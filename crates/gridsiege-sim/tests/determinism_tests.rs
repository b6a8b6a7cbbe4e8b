//! Whole-engine runs through the public API: identical seeds and inputs
//! must reproduce identical frames.

use gridsiege_sim::core::commands::LifecycleCommand;
use gridsiege_sim::core::components::Position;
use gridsiege_sim::core::config::GameConfig;
use gridsiege_sim::core::enums::GamePhase;
use gridsiege_sim::core::input::{KeyState, PhysicalKey};
use gridsiege_sim::GameEngine;

const FRAME_MS: f64 = 16.0;

fn scripted_keys(frame: u32) -> KeyState {
    match (frame / 90) % 6 {
        0 => KeyState::with_pressed(&[PhysicalKey::ArrowLeft]),
        1 => KeyState::with_pressed(&[PhysicalKey::W, PhysicalKey::D]),
        2 => KeyState::new(),
        3 => KeyState::with_pressed(&[PhysicalKey::ArrowDown]),
        4 => KeyState::with_pressed(&[PhysicalKey::A, PhysicalKey::D]),
        _ => KeyState::with_pressed(&[PhysicalKey::S, PhysicalKey::ArrowRight]),
    }
}

/// Run a scripted session and return every frame report as JSON.
fn record(seed: u64, frames: u32) -> Vec<String> {
    let config = GameConfig {
        seed,
        ..Default::default()
    };
    let mut engine = GameEngine::new(config).expect("default config is valid");
    engine.queue_command(LifecycleCommand::Start);

    let mut out = Vec::with_capacity(frames as usize);
    for i in 0..frames {
        match i {
            600 => engine.queue_command(LifecycleCommand::Pause),
            650 => engine.queue_command(LifecycleCommand::Resume),
            _ => {}
        }
        let report = engine.frame(f64::from(i) * FRAME_MS, &scripted_keys(i));
        out.push(serde_json::to_string(&report).expect("report serializes"));
    }
    out
}

#[test]
fn test_same_seed_same_frames() {
    let a = record(7, 3_000);
    let b = record(7, 3_000);
    assert_eq!(a.len(), b.len());
    for (i, (fa, fb)) in a.iter().zip(&b).enumerate() {
        assert_eq!(fa, fb, "frame {i} diverged");
    }
}

#[test]
fn test_different_seeds_diverge() {
    let a = record(1, 3_000);
    let b = record(2, 3_000);
    assert_ne!(a, b, "spawn positions should depend on the seed");
}

#[test]
fn test_long_run_invariants() {
    let mut engine = GameEngine::default();
    let arena = engine.config().arena;
    engine.queue_command(LifecycleCommand::Start);

    let mut last_wave = 1;
    for i in 0..20_000u32 {
        let report = engine.frame(f64::from(i) * FRAME_MS, &scripted_keys(i));

        assert!(arena.contains(engine.player().position));
        let mut query = engine.world().query::<&Position>();
        for (_, pos) in query.iter() {
            assert!(arena.contains(pos.0), "{:?} out of bounds at frame {i}", pos.0);
        }
        drop(query);

        let wave = engine.director().wave;
        assert!(wave >= last_wave, "wave went backwards at frame {i}");
        last_wave = wave;

        if let Some(hud) = &report.hud {
            assert!(hud.health_segments() <= 10);
            assert_eq!(hud.wave, wave);
        }
        if report.phase == GamePhase::GameOver {
            let stats = engine.last_run().expect("game over records stats");
            assert_eq!(stats.wave_reached, wave);
            assert_eq!(stats.score, engine.score().score);
            break;
        }
    }
}
