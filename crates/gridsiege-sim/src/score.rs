//! Running score state for the current run.
//!
//! Stored in `GameEngine`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use gridsiege_core::state::RunStats;
use gridsiege_core::types::SimTime;

/// Score and tallies accumulated by the collision system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub hostiles_killed: u32,
    pub pickups_collected: u32,
}

impl ScoreState {
    /// Freeze the tallies into end-of-run statistics.
    pub fn finalize(&self, wave_reached: u32, time: &SimTime) -> RunStats {
        RunStats {
            wave_reached,
            score: self.score,
            hostiles_killed: self.hostiles_killed,
            pickups_collected: self.pickups_collected,
            survived_ms: time.elapsed_ms,
            ticks: time.tick,
        }
    }
}
