//! Host-side input state: key mapping and the held-key tracker fed to the
//! engine every frame.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use gridsiege_core::commands::LifecycleCommand;
use gridsiege_core::enums::GamePhase;
use gridsiege_core::input::{KeyState, PhysicalKey};

/// Default hold window for terminals that never report key releases.
/// Must outlast the OS auto-repeat delay or held keys stutter.
pub const DEFAULT_KEY_HOLD_MS: f64 = 300.0;

/// What a key press means to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Move(PhysicalKey),
    /// Enter: start from the title screen, restart after game over.
    Confirm,
    TogglePause,
    Reset,
    Quit,
}

/// Map a terminal key event to a host action.
pub fn map_key(event: &KeyEvent) -> Option<HostAction> {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(HostAction::Quit);
    }
    let action = match event.code {
        KeyCode::Up => HostAction::Move(PhysicalKey::ArrowUp),
        KeyCode::Down => HostAction::Move(PhysicalKey::ArrowDown),
        KeyCode::Left => HostAction::Move(PhysicalKey::ArrowLeft),
        KeyCode::Right => HostAction::Move(PhysicalKey::ArrowRight),
        KeyCode::Enter => HostAction::Confirm,
        KeyCode::Esc => HostAction::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => HostAction::Move(PhysicalKey::W),
            'a' => HostAction::Move(PhysicalKey::A),
            's' => HostAction::Move(PhysicalKey::S),
            'd' => HostAction::Move(PhysicalKey::D),
            'p' => HostAction::TogglePause,
            'r' => HostAction::Reset,
            'q' => HostAction::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// The lifecycle command a host action requests in the given phase.
/// `None` when the action has no meaning there.
pub fn lifecycle_for(action: HostAction, phase: GamePhase) -> Option<LifecycleCommand> {
    match (action, phase) {
        (HostAction::Confirm, GamePhase::Idle) => Some(LifecycleCommand::Start),
        (HostAction::Confirm, GamePhase::GameOver) => Some(LifecycleCommand::Reset),
        (HostAction::TogglePause, GamePhase::Playing) => Some(LifecycleCommand::Pause),
        (HostAction::TogglePause, GamePhase::Paused) => Some(LifecycleCommand::Resume),
        (HostAction::Reset, GamePhase::Playing | GamePhase::Paused | GamePhase::GameOver) => {
            Some(LifecycleCommand::Reset)
        }
        (HostAction::Quit, _) => Some(LifecycleCommand::Destroy),
        _ => None,
    }
}

/// Tracks which movement keys are held.
///
/// With release reporting a key is held from its press until its release.
/// Without it, every press or auto-repeat keeps the key held for
/// `hold_ms` after the most recent one.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    reports_release: bool,
    hold_ms: f64,
    last_seen_ms: [Option<f64>; PhysicalKey::ALL.len()],
    keys: KeyState,
}

impl HeldKeys {
    pub fn new(reports_release: bool, hold_ms: f64) -> Self {
        Self {
            reports_release,
            hold_ms,
            last_seen_ms: [None; PhysicalKey::ALL.len()],
            keys: KeyState::new(),
        }
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Record a movement key event at host time `now_ms`.
    pub fn record(&mut self, key: PhysicalKey, kind: KeyEventKind, now_ms: f64) {
        let slot = slot_of(key);
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.keys.set(key, true);
                self.last_seen_ms[slot] = Some(now_ms);
            }
            KeyEventKind::Release => {
                self.keys.set(key, false);
                self.last_seen_ms[slot] = None;
            }
        }
    }

    /// Key state to hand the engine for the frame at `now_ms`.
    pub fn sample(&mut self, now_ms: f64) -> KeyState {
        if !self.reports_release {
            for (i, key) in PhysicalKey::ALL.iter().enumerate() {
                if let Some(seen) = self.last_seen_ms[i] {
                    if now_ms - seen > self.hold_ms {
                        self.keys.set(*key, false);
                        self.last_seen_ms[i] = None;
                    }
                }
            }
        }
        self.keys
    }

    /// Drop every held key, e.g. when focus is lost.
    pub fn release_all(&mut self) {
        self.keys.release_all();
        self.last_seen_ms = [None; PhysicalKey::ALL.len()];
    }
}

fn slot_of(key: PhysicalKey) -> usize {
    PhysicalKey::ALL
        .iter()
        .position(|k| *k == key)
        .unwrap_or_default()
}
