//! Host-side collaborator interfaces.
//!
//! The engine never talks to a surface directly: each frame it returns a
//! `FrameReport`, and the `Presenter` forwards that report to whichever
//! collaborators are attached. A missing collaborator turns its part of
//! the report into a no-op; the simulation keeps advancing regardless.

use gridsiege_core::events::GameEvent;
use gridsiege_core::state::{Cell, CellWrite, FrameReport, HudView};

use crate::systems::render::RenderDiffer;

/// Addressable W×H grid of cells.
pub trait RenderSurface {
    fn set_cell(&mut self, x: u16, y: u16, cell: Cell);

    /// Called once after a batch of writes.
    fn flush(&mut self) {}
}

/// Three independent HUD text outputs.
pub trait HudSink {
    fn set_wave(&mut self, text: &str);
    fn set_score(&mut self, text: &str);
    fn set_health(&mut self, bar: &str);
}

/// Overlay requests toward the UI.
pub trait OverlaySink {
    fn show_game_over(&mut self, wave: u32, score: u64);
    fn set_pause_visible(&mut self, visible: bool);
}

/// Forwards frame reports to the attached collaborators.
#[derive(Default)]
pub struct Presenter {
    surface: Option<Box<dyn RenderSurface>>,
    hud: Option<Box<dyn HudSink>>,
    overlay: Option<Box<dyn OverlaySink>>,
    last_hud: Option<HudView>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the render surface. The caller should follow
    /// with `GameEngine::request_full_redraw` so the new surface receives
    /// every cell, not only the next diff.
    pub fn attach_surface(&mut self, surface: Box<dyn RenderSurface>) {
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<Box<dyn RenderSurface>> {
        self.surface.take()
    }

    /// Attach (or replace) the HUD sink. The last published HUD is replayed
    /// into it immediately.
    pub fn attach_hud(&mut self, mut hud: Box<dyn HudSink>) {
        if let Some(view) = &self.last_hud {
            publish_hud(hud.as_mut(), view);
        }
        self.hud = Some(hud);
    }

    pub fn attach_overlay(&mut self, overlay: Box<dyn OverlaySink>) {
        self.overlay = Some(overlay);
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Present one frame report.
    pub fn present(&mut self, report: &FrameReport) {
        self.write_cells(&report.writes);

        if let Some(view) = &report.hud {
            if let Some(hud) = self.hud.as_mut() {
                publish_hud(hud.as_mut(), view);
            }
            self.last_hud = Some(view.clone());
        }

        if let Some(overlay) = self.overlay.as_mut() {
            for event in report.events.iter().filter(|e| e.is_overlay()) {
                match *event {
                    GameEvent::ShowGameOver { wave, score } => overlay.show_game_over(wave, score),
                    GameEvent::PauseOverlay { visible } => overlay.set_pause_visible(visible),
                    _ => {}
                }
            }
        }
    }
}

impl Presenter {
    /// Send cell writes straight to the surface, outside a frame report.
    /// Used to repaint a surface whose content was wiped.
    pub fn write_cells(&mut self, writes: &[CellWrite]) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if writes.is_empty() {
            return;
        }
        for write in writes {
            surface.set_cell(write.x, write.y, write.cell);
        }
        surface.flush();
    }

    /// Re-publish the last HUD, if any.
    pub fn replay_hud(&mut self) {
        if let (Some(hud), Some(view)) = (self.hud.as_mut(), &self.last_hud) {
            publish_hud(hud.as_mut(), view);
        }
    }

    /// Rewrite the whole last frame and HUD after the host wiped its
    /// output. Needed outside `Playing`, where no tick emits a diff.
    pub fn repaint(&mut self, differ: &RenderDiffer) {
        self.write_cells(&differ.last_frame());
        self.replay_hud();
    }
}

fn publish_hud(hud: &mut dyn HudSink, view: &HudView) {
    hud.set_wave(&view.wave_text());
    hud.set_score(&view.score_text());
    hud.set_health(&view.health_bar());
}
