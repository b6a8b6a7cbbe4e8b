//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Arena dimensions in cells. Continuous positions live in
/// `[0, width-1] × [0, height-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSize {
    pub width: u16,
    pub height: u16,
}

impl ArenaSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Largest valid x coordinate.
    pub fn max_x(&self) -> f64 {
        f64::from(self.width) - 1.0
    }

    /// Largest valid y coordinate.
    pub fn max_y(&self) -> f64 {
        f64::from(self.height) - 1.0
    }

    /// Clamp a continuous position into the arena.
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x.clamp(0.0, self.max_x()), p.y.clamp(0.0, self.max_y()))
    }

    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.max_x()).contains(&p.x) && (0.0..=self.max_y()).contains(&p.y)
    }

    /// Player start cell: the arena centre, floored.
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (f64::from(self.width) / 2.0).floor(),
            (f64::from(self.height) / 2.0).floor(),
        )
    }

    /// Discretize a continuous position to a grid cell, or `None` if it
    /// falls off the grid.
    pub fn cell_of(&self, p: DVec2) -> Option<(u16, u16)> {
        let cx = p.x.floor();
        let cy = p.y.floor();
        if cx < 0.0 || cy < 0.0 || cx >= f64::from(self.width) || cy >= f64::from(self.height) {
            return None;
        }
        Some((cx as u16, cy as u16))
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Simulation clock, advanced by the per-frame `dt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run in the current game.
    pub tick: u64,
    /// Simulated time elapsed in the current game (ms).
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}

/// Per-axis proximity test used by every collision pair.
pub fn within_axis_threshold(a: DVec2, b: DVec2, threshold: f64) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}
