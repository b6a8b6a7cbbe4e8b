//! HUD system: builds the HUD view. Read-only.

use gridsiege_core::components::Player;
use gridsiege_core::state::HudView;

use crate::score::ScoreState;

pub fn build_hud(wave: u32, score: &ScoreState, player: &Player) -> HudView {
    HudView {
        wave,
        score: score.score,
        hp: player.hp,
        max_hp: player.max_hp,
    }
}
