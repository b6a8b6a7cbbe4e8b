//! Frame report: everything the host needs to present after each frame.

use serde::{Deserialize, Serialize};

use crate::constants::HEALTH_BAR_SEGMENTS;
use crate::enums::{GamePhase, StyleClass};
use crate::events::GameEvent;

/// One grid cell: a glyph and a style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: char,
    pub style: StyleClass,
}

impl Cell {
    /// Background cell.
    pub const EMPTY: Cell = Cell {
        glyph: ' ',
        style: StyleClass::Empty,
    };

    pub fn new(glyph: char, style: StyleClass) -> Self {
        Self { glyph, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// A single surface write issued by the render differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWrite {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

/// HUD text, published after every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub wave: u32,
    pub score: u64,
    pub hp: i32,
    pub max_hp: i32,
}

impl HudView {
    pub fn wave_text(&self) -> String {
        format!("Wave: {}", self.wave)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Filled segments out of `HEALTH_BAR_SEGMENTS`, ceiling-rounded.
    pub fn health_segments(&self) -> usize {
        if self.max_hp <= 0 || self.hp <= 0 {
            return 0;
        }
        let ratio = f64::from(self.hp) / f64::from(self.max_hp);
        let filled = (ratio * HEALTH_BAR_SEGMENTS as f64).ceil() as usize;
        filled.min(HEALTH_BAR_SEGMENTS)
    }

    /// Fixed-width block bar, e.g. `██████████` at full health.
    pub fn health_bar(&self) -> String {
        let filled = self.health_segments();
        let mut bar = String::with_capacity(HEALTH_BAR_SEGMENTS * 3);
        bar.extend(std::iter::repeat('█').take(filled));
        bar.extend(std::iter::repeat('░').take(HEALTH_BAR_SEGMENTS - filled));
        bar
    }
}

/// End-of-run statistics, finalised on game over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub wave_reached: u32,
    pub score: u64,
    pub hostiles_killed: u32,
    pub pickups_collected: u32,
    pub survived_ms: f64,
    pub ticks: u64,
}

/// Result of one host frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub phase: GamePhase,
    /// Ticks run so far in the current game.
    pub tick: u64,
    /// Changed cells only.
    pub writes: Vec<CellWrite>,
    /// Present whenever a tick ran this frame.
    pub hud: Option<HudView>,
    pub events: Vec<GameEvent>,
}

impl FrameReport {
    pub fn ticked(&self) -> bool {
        self.hud.is_some()
    }
}
