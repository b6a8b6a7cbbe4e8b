//! Events emitted by the simulation for overlays and UI feedback.

use serde::{Deserialize, Serialize};

/// Outbound signals produced during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Show the game-over overlay.
    ShowGameOver { wave: u32, score: u64 },
    /// Show or hide the pause overlay.
    PauseOverlay { visible: bool },
    /// Player took contact damage.
    PlayerHit { hp: i32 },
    /// A hostile's hit points reached zero.
    HostileKilled { x: f64, y: f64 },
    /// Player collected a pickup.
    PickupCollected { value: u64 },
    /// Wave counter advanced.
    WaveAdvanced { wave: u32 },
}

impl GameEvent {
    /// Overlay requests are the only events the UI collaborator must act on.
    pub fn is_overlay(&self) -> bool {
        matches!(
            self,
            GameEvent::ShowGameOver { .. } | GameEvent::PauseOverlay { .. }
        )
    }
}
