//! Crossterm implementations of the host collaborators.
//!
//! Each arena cell is two terminal columns wide so the grid looks square.
//! All writes are batched with `queue!` and flushed once per call.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use gridsiege_core::enums::StyleClass;
use gridsiege_core::state::Cell;
use gridsiege_core::types::ArenaSize;
use gridsiege_sim::host::{HudSink, OverlaySink, RenderSurface};

/// Terminal columns per arena cell.
const CELL_W: u16 = 2;

const HELP_TEXT: &str = "arrows/WASD move  p pause  r reset  q quit";

/// Screen positions of the arena, HUD and banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub arena: ArenaSize,
}

impl Layout {
    pub fn new(arena: ArenaSize) -> Self {
        Self { arena }
    }

    /// Terminal position of arena cell `(x, y)`, inside the border.
    pub fn cell_origin(&self, x: u16, y: u16) -> (u16, u16) {
        (
            x.saturating_mul(CELL_W).saturating_add(1),
            y.saturating_add(1),
        )
    }

    /// Width of the bordered arena in terminal columns.
    pub fn frame_width(&self) -> u16 {
        self.arena.width.saturating_mul(CELL_W).saturating_add(2)
    }

    pub fn hud_row(&self) -> u16 {
        self.arena.height.saturating_add(2)
    }

    pub fn help_row(&self) -> u16 {
        self.arena.height.saturating_add(3)
    }

    /// Column at which `text` is centred over the arena.
    pub fn centered_col(&self, text: &str) -> u16 {
        let len = text.chars().count() as u16;
        (self.frame_width().saturating_sub(len)) / 2
    }

    /// First of the two banner rows, around the arena's middle.
    pub fn banner_row(&self) -> u16 {
        self.arena.height / 2 + 1
    }
}

pub fn style_color(style: StyleClass) -> Color {
    match style {
        StyleClass::Empty => Color::Reset,
        StyleClass::Player => Color::Cyan,
        StyleClass::Hostile => Color::Red,
        StyleClass::Projectile => Color::Yellow,
        StyleClass::Pickup => Color::Green,
    }
}

/// Raw mode + alternate screen for the lifetime of the value.
pub struct TerminalSession {
    out: Stdout,
    enhanced_keys: bool,
}

impl TerminalSession {
    /// Enter raw mode. Key release reporting is requested where the
    /// terminal supports it.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableFocusChange,
            Clear(ClearType::All)
        )?;

        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        tracing::info!(enhanced_keys, "terminal session started");
        Ok(Self { out, enhanced_keys })
    }

    /// Whether the terminal reports key releases.
    pub fn reports_release(&self) -> bool {
        self.enhanced_keys
    }

    /// Clear the screen and draw the static chrome: border and help line.
    pub fn draw_chrome(&mut self, layout: &Layout) -> io::Result<()> {
        let inner = usize::from(layout.arena.width) * usize::from(CELL_W);
        let horizontal = "─".repeat(inner);
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(format!("┌{horizontal}┐"))
        )?;
        for y in 0..layout.arena.height {
            queue!(
                self.out,
                MoveTo(0, y.saturating_add(1)),
                Print('│'),
                MoveTo(layout.frame_width().saturating_sub(1), y.saturating_add(1)),
                Print('│')
            )?;
        }
        queue!(
            self.out,
            MoveTo(0, layout.arena.height.saturating_add(1)),
            Print(format!("└{horizontal}┘")),
            MoveTo(0, layout.help_row()),
            Print(HELP_TEXT)
        )?;
        self.out.flush()
    }

    /// Centred one- or two-line message over the arena.
    pub fn draw_banner(&mut self, layout: &Layout, lines: &[&str]) -> io::Result<()> {
        write_banner(&mut self.out, layout, lines)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            self.out,
            DisableFocusChange,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn write_banner(out: &mut Stdout, layout: &Layout, lines: &[&str]) -> io::Result<()> {
    queue!(out, SetForegroundColor(Color::White))?;
    for (i, line) in lines.iter().enumerate() {
        let padded = format!(" {line} ");
        queue!(
            out,
            MoveTo(layout.centered_col(&padded), layout.banner_row() + i as u16),
            Print(padded)
        )?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Arena grid on stdout.
pub struct TerminalSurface {
    out: Stdout,
    layout: Layout,
}

impl TerminalSurface {
    pub fn new(layout: Layout) -> Self {
        Self {
            out: io::stdout(),
            layout,
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        let (col, row) = self.layout.cell_origin(x, y);
        let result = queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(style_color(cell.style)),
            Print(cell.glyph),
            Print(' ')
        );
        if let Err(err) = result {
            tracing::warn!(%err, "cell write failed");
        }
    }

    fn flush(&mut self) {
        if let Err(err) = queue!(self.out, ResetColor).and_then(|_| self.out.flush()) {
            tracing::warn!(%err, "surface flush failed");
        }
    }
}

/// HUD line below the arena: wave, score and health bar side by side.
pub struct TerminalHud {
    out: Stdout,
    layout: Layout,
}

impl TerminalHud {
    const WAVE_COL: u16 = 1;
    const SCORE_COL: u16 = 13;
    const HEALTH_COL: u16 = 30;

    pub fn new(layout: Layout) -> Self {
        Self {
            out: io::stdout(),
            layout,
        }
    }

    fn put(&mut self, col: u16, text: &str, width: usize) {
        let result = queue!(
            self.out,
            MoveTo(col, self.layout.hud_row()),
            Print(format!("{text:<width$}"))
        )
        .and_then(|_| self.out.flush());
        if let Err(err) = result {
            tracing::warn!(%err, "hud write failed");
        }
    }
}

impl HudSink for TerminalHud {
    fn set_wave(&mut self, text: &str) {
        self.put(Self::WAVE_COL, text, 11);
    }

    fn set_score(&mut self, text: &str) {
        self.put(Self::SCORE_COL, text, 16);
    }

    fn set_health(&mut self, bar: &str) {
        self.put(Self::HEALTH_COL, &format!("HP {bar}"), 13);
    }
}

/// Pause and game-over banners. Hiding a banner is left to the next full
/// redraw, which the game loop requests.
pub struct TerminalOverlay {
    out: Stdout,
    layout: Layout,
}

impl TerminalOverlay {
    pub fn new(layout: Layout) -> Self {
        Self {
            out: io::stdout(),
            layout,
        }
    }
}

pub fn game_over_lines(wave: u32, score: u64) -> [String; 2] {
    [
        format!("GAME OVER  wave {wave}  score {score}"),
        "Enter: play again   q: quit".to_string(),
    ]
}

pub const PAUSE_LINES: [&str; 2] = ["PAUSED", "p: resume"];

pub const TITLE_LINES: [&str; 2] = ["GRIDSIEGE", "Enter: start   q: quit"];

impl OverlaySink for TerminalOverlay {
    fn show_game_over(&mut self, wave: u32, score: u64) {
        let lines = game_over_lines(wave, score);
        let refs = [lines[0].as_str(), lines[1].as_str()];
        if let Err(err) = write_banner(&mut self.out, &self.layout, &refs) {
            tracing::warn!(%err, "overlay write failed");
        }
    }

    fn set_pause_visible(&mut self, visible: bool) {
        if !visible {
            return;
        }
        if let Err(err) = write_banner(&mut self.out, &self.layout, &PAUSE_LINES) {
            tracing::warn!(%err, "overlay write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_positions() {
        let layout = Layout::new(ArenaSize::new(30, 15));
        assert_eq!(layout.cell_origin(0, 0), (1, 1));
        assert_eq!(layout.cell_origin(29, 14), (59, 15));
        assert_eq!(layout.frame_width(), 62);
        assert_eq!(layout.hud_row(), 17);
        assert_eq!(layout.banner_row(), 8);
    }

    #[test]
    fn test_layout_saturates_on_huge_arena() {
        let layout = Layout::new(ArenaSize::new(u16::MAX, u16::MAX));
        assert_eq!(layout.frame_width(), u16::MAX);
        assert_eq!(layout.cell_origin(u16::MAX - 1, u16::MAX - 1), (u16::MAX, u16::MAX));
        assert_eq!(layout.help_row(), u16::MAX);
    }

    #[test]
    fn test_banner_centering() {
        let layout = Layout::new(ArenaSize::new(30, 15));
        assert_eq!(layout.centered_col("PAUSED"), 28);
        let long = "x".repeat(100);
        assert_eq!(layout.centered_col(&long), 0);
    }

    #[test]
    fn test_banners_fit_default_arena() {
        let layout = Layout::new(ArenaSize::new(30, 15));
        let over = game_over_lines(999, 123_456);
        for line in over.iter().map(String::as_str).chain(PAUSE_LINES).chain(TITLE_LINES) {
            assert!(
                (line.chars().count() as u16) + 2 < layout.frame_width(),
                "{line:?} overflows the arena"
            );
        }
    }

    #[test]
    fn test_every_style_has_distinct_color() {
        let styles = [
            StyleClass::Player,
            StyleClass::Hostile,
            StyleClass::Projectile,
            StyleClass::Pickup,
        ];
        for (i, a) in styles.iter().enumerate() {
            assert_ne!(style_color(*a), Color::Reset);
            for b in &styles[i + 1..] {
                assert_ne!(style_color(*a), style_color(*b));
            }
        }
    }
}
