//! Lifecycle commands sent from the host to the engine.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// The complete control surface of a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifecycleCommand {
    /// `idle → playing`: fresh run.
    Start,
    /// `playing → paused`: stop ticking, keep all state.
    Pause,
    /// `paused → playing`: continue, with the time base reset.
    Resume,
    /// Tear down and start a fresh run.
    Reset,
    /// Stop for good. Terminal for this instance.
    Destroy,
}
