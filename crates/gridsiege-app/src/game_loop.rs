//! Game loop: polls terminal events, drives one engine frame per display
//! refresh, and presents the resulting report.
//!
//! Lifecycle commands travel over the engine's command channel, the same
//! path window chrome would use. Movement keys are sampled into a
//! `KeyState` once per frame.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

use gridsiege_core::commands::LifecycleCommand;
use gridsiege_core::config::GameConfig;
use gridsiege_core::enums::GamePhase;
use gridsiege_core::events::GameEvent;
use gridsiege_sim::host::Presenter;
use gridsiege_sim::GameEngine;

use crate::state::{lifecycle_for, map_key, HeldKeys, HostAction};
use crate::terminal::{
    game_over_lines, Layout, TerminalHud, TerminalOverlay, TerminalSession, TerminalSurface,
    PAUSE_LINES, TITLE_LINES,
};

/// Nominal frame period (~60 Hz).
const FRAME_DURATION: Duration = Duration::from_micros(16_667);

/// Host options that are not part of the simulation config.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Hold window for terminals that never report key releases.
    pub key_hold_ms: f64,
}

/// Focus handling: losing focus pauses, regaining it resumes only a pause
/// that focus loss caused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FocusPause {
    paused_by_focus: bool,
}

impl FocusPause {
    pub fn on_focus_lost(&mut self, phase: GamePhase) -> Option<LifecycleCommand> {
        if phase == GamePhase::Playing {
            self.paused_by_focus = true;
            return Some(LifecycleCommand::Pause);
        }
        None
    }

    /// `phase` may still read `Playing` while the focus-loss `Pause` is
    /// queued; the `Resume` is queued behind it.
    pub fn on_focus_gained(&mut self, phase: GamePhase) -> Option<LifecycleCommand> {
        let resume = self.paused_by_focus
            && matches!(phase, GamePhase::Playing | GamePhase::Paused);
        self.paused_by_focus = false;
        resume.then_some(LifecycleCommand::Resume)
    }

    /// Any explicit pause toggle hands control back to the player.
    pub fn clear(&mut self) {
        self.paused_by_focus = false;
    }
}

/// Whether a frame's events leave stale banner text on the arena.
pub fn needs_full_redraw(events: &[GameEvent]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, GameEvent::PauseOverlay { visible: false }))
}

/// Run until the player quits. Restores the terminal on every exit path.
pub fn run(config: GameConfig, options: LoopOptions) -> anyhow::Result<()> {
    let layout = Layout::new(config.arena);
    let mut engine = GameEngine::new(config)?;
    let commands = engine.command_sender();

    let mut session = TerminalSession::enter()?;
    session.draw_chrome(&layout)?;
    session.draw_banner(&layout, &TITLE_LINES)?;

    let mut presenter = Presenter::new();
    presenter.attach_surface(Box::new(TerminalSurface::new(layout)));
    presenter.attach_hud(Box::new(TerminalHud::new(layout)));
    presenter.attach_overlay(Box::new(TerminalOverlay::new(layout)));

    let mut held = HeldKeys::new(session.reports_release(), options.key_hold_ms);
    let mut focus = FocusPause::default();
    let clock = Instant::now();
    let mut next_frame = clock;

    tracing::info!(
        width = layout.arena.width,
        height = layout.arena.height,
        reports_release = held.reports_release(),
        "game loop started"
    );

    loop {
        // 1. Drain terminal events until the frame is due
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let now_ms = elapsed_ms(clock);
            let phase = engine.phase();
            match event::read()? {
                Event::Key(key) => {
                    let Some(action) = map_key(&key) else {
                        continue;
                    };
                    if let HostAction::Move(physical) = action {
                        held.record(physical, key.kind, now_ms);
                        continue;
                    }
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if action == HostAction::TogglePause {
                        focus.clear();
                    }
                    if let Some(command) = lifecycle_for(action, phase) {
                        send(&commands, command);
                    }
                }
                Event::FocusLost => {
                    held.release_all();
                    if let Some(command) = focus.on_focus_lost(phase) {
                        send(&commands, command);
                    }
                }
                Event::FocusGained => {
                    if let Some(command) = focus.on_focus_gained(phase) {
                        send(&commands, command);
                    }
                }
                Event::Resize(_, _) => {
                    session.draw_chrome(&layout)?;
                    engine.request_full_redraw();
                    presenter.repaint(engine.differ());
                    redraw_banner(&mut session, &layout, &engine)?;
                }
                _ => {}
            }
        }

        // 2. One engine frame
        let now_ms = elapsed_ms(clock);
        let keys = held.sample(now_ms);
        let report = engine.frame(now_ms, &keys);

        if report.phase == GamePhase::Destroyed {
            tracing::info!(tick = report.tick, "quit requested");
            break;
        }

        // 3. Present; a fresh run or a hidden banner needs every cell again
        let restarted = report.tick == 1 && report.ticked();
        if restarted || needs_full_redraw(&report.events) {
            engine.request_full_redraw();
        }
        presenter.present(&report);

        // 4. Pace to the display rate without a catch-up spiral
        next_frame += FRAME_DURATION;
        let now = Instant::now();
        if now > next_frame + FRAME_DURATION * 2 {
            next_frame = now;
        }
    }

    if let Some(stats) = engine.last_run() {
        tracing::info!(
            wave = stats.wave_reached,
            score = stats.score,
            best = engine.best_score(),
            "session finished"
        );
    }
    Ok(())
}

fn elapsed_ms(clock: Instant) -> f64 {
    clock.elapsed().as_secs_f64() * 1000.0
}

fn send(commands: &mpsc::Sender<LifecycleCommand>, command: LifecycleCommand) {
    if commands.send(command).is_err() {
        tracing::warn!(?command, "engine command channel closed");
    }
}

fn redraw_banner(
    session: &mut TerminalSession,
    layout: &Layout,
    engine: &GameEngine,
) -> std::io::Result<()> {
    match engine.phase() {
        GamePhase::Idle => session.draw_banner(layout, &TITLE_LINES),
        GamePhase::Paused => session.draw_banner(layout, &PAUSE_LINES),
        GamePhase::GameOver => {
            let stats = engine.last_run().unwrap_or_default();
            let lines = game_over_lines(stats.wave_reached, stats.score);
            session.draw_banner(layout, &[lines[0].as_str(), lines[1].as_str()])
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsiege_core::input::KeyState;

    #[test]
    fn test_focus_loss_pauses_and_gain_resumes() {
        let mut focus = FocusPause::default();
        assert_eq!(
            focus.on_focus_lost(GamePhase::Playing),
            Some(LifecycleCommand::Pause)
        );
        assert_eq!(
            focus.on_focus_gained(GamePhase::Paused),
            Some(LifecycleCommand::Resume)
        );
        assert_eq!(focus.on_focus_gained(GamePhase::Paused), None);
    }

    #[test]
    fn test_focus_gain_keeps_player_pause() {
        let mut focus = FocusPause::default();
        assert_eq!(focus.on_focus_lost(GamePhase::Paused), None);
        assert_eq!(focus.on_focus_gained(GamePhase::Paused), None);

        focus.on_focus_lost(GamePhase::Playing);
        focus.clear();
        assert_eq!(focus.on_focus_gained(GamePhase::Paused), None);
    }

    #[test]
    fn test_focus_loss_outside_play_is_ignored() {
        let mut focus = FocusPause::default();
        assert_eq!(focus.on_focus_lost(GamePhase::Idle), None);
        assert_eq!(focus.on_focus_lost(GamePhase::GameOver), None);
    }

    #[test]
    fn test_hidden_pause_banner_requests_redraw() {
        assert!(needs_full_redraw(&[GameEvent::PauseOverlay { visible: false }]));
        assert!(!needs_full_redraw(&[GameEvent::PauseOverlay { visible: true }]));
        assert!(!needs_full_redraw(&[GameEvent::WaveAdvanced { wave: 2 }]));
    }

    #[test]
    fn test_focus_round_trip_through_engine_channel() {
        let mut engine = GameEngine::default();
        let commands = engine.command_sender();
        let mut focus = FocusPause::default();
        send(&commands, LifecycleCommand::Start);
        engine.frame(0.0, &KeyState::new());

        if let Some(command) = focus.on_focus_lost(engine.phase()) {
            send(&commands, command);
        }
        assert_eq!(engine.frame(16.0, &KeyState::new()).phase, GamePhase::Paused);

        if let Some(command) = focus.on_focus_gained(engine.phase()) {
            send(&commands, command);
        }
        let report = engine.frame(5_000.0, &KeyState::new());
        assert_eq!(report.phase, GamePhase::Playing);
        assert!(needs_full_redraw(&report.events));
    }

    #[test]
    fn test_focus_flicker_within_one_frame_keeps_playing() {
        let mut engine = GameEngine::default();
        let commands = engine.command_sender();
        let mut focus = FocusPause::default();
        send(&commands, LifecycleCommand::Start);
        engine.frame(0.0, &KeyState::new());

        // Both events arrive before the next frame, so the phase still
        // reads Playing for each.
        let phase = engine.phase();
        if let Some(command) = focus.on_focus_lost(phase) {
            send(&commands, command);
        }
        assert_eq!(
            focus.on_focus_gained(phase),
            Some(LifecycleCommand::Resume)
        );
        send(&commands, LifecycleCommand::Resume);

        let report = engine.frame(16.0, &KeyState::new());
        assert_eq!(report.phase, GamePhase::Playing);
        assert!(needs_full_redraw(&report.events), "pause banner must be cleared");
    }

    #[test]
    fn test_frame_duration_is_about_60hz() {
        let hz = 1.0 / FRAME_DURATION.as_secs_f64();
        assert!((hz - 60.0).abs() < 0.1);
    }
}
