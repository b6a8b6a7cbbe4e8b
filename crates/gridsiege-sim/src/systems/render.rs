//! Render differ: turns simulation state into a grid of cells and emits
//! only the cells that changed since the previous frame.
//!
//! Layers paint back to front (pickups, projectiles, hostiles, player), so
//! the player wins any shared cell. Entities that floor off the grid are
//! skipped.

use hecs::World;

use gridsiege_core::components::{Active, Glyph, Player, Position};
use gridsiege_core::enums::{EntityKind, StyleClass};
use gridsiege_core::state::{Cell, CellWrite};
use gridsiege_core::types::ArenaSize;

/// Persistent previous-frame grid.
#[derive(Debug, Clone)]
pub struct RenderDiffer {
    arena: ArenaSize,
    /// `None` means the surface content is unknown and must be rewritten.
    previous: Vec<Option<Cell>>,
    current: Vec<Cell>,
}

impl RenderDiffer {
    /// A differ whose previous frame is the empty background, matching a
    /// freshly cleared surface.
    pub fn new(arena: ArenaSize) -> Self {
        Self {
            arena,
            previous: vec![Some(Cell::EMPTY); arena.cell_count()],
            current: vec![Cell::EMPTY; arena.cell_count()],
        }
    }

    /// Forget the previous frame so the next render rewrites every cell.
    pub fn invalidate(&mut self) {
        self.previous.fill(None);
    }

    /// Cell last emitted at `(x, y)`, if known.
    pub fn previous_cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.previous[i])
    }

    /// Every cell of the most recently built frame, for repainting a
    /// surface that lost its content. Unaffected by `invalidate`.
    pub fn last_frame(&self) -> Vec<CellWrite> {
        let width = usize::from(self.arena.width);
        self.current
            .iter()
            .enumerate()
            .map(|(i, cell)| CellWrite {
                x: (i % width) as u16,
                y: (i / width) as u16,
                cell: *cell,
            })
            .collect()
    }

    /// Build the current frame and return the writes that differ from the
    /// previous one. `now_ms` is the host clock and drives the blink.
    pub fn render(
        &mut self,
        world: &World,
        player: &Player,
        now_ms: f64,
        blink_period_ms: f64,
    ) -> Vec<CellWrite> {
        self.current.fill(Cell::EMPTY);

        let mut sprites: Vec<(EntityKind, Position, Glyph)> = {
            let mut query = world.query::<(&Position, &Glyph, &Active)>();
            let sprites = query
                .iter()
                .filter(|(_, (_, _, active))| active.0)
                .filter_map(|(_, (pos, glyph, _))| Some((kind_of(glyph.style)?, *pos, *glyph)))
                .collect();
            sprites
        };
        // Stable sort keeps query order within a layer.
        sprites.sort_by_key(|(kind, _, _)| *kind);

        for (_, pos, glyph) in &sprites {
            self.paint(pos.0, Cell::new(glyph.ch, glyph.style));
        }

        if player_visible(player, now_ms, blink_period_ms) {
            self.paint(
                player.position,
                Cell::new(EntityKind::Player.glyph(), EntityKind::Player.style()),
            );
        }

        self.diff()
    }

    fn paint(&mut self, p: glam::DVec2, cell: Cell) {
        if let Some((x, y)) = self.arena.cell_of(p) {
            if let Some(i) = self.index(x, y) {
                self.current[i] = cell;
            }
        }
    }

    fn diff(&mut self) -> Vec<CellWrite> {
        let width = usize::from(self.arena.width);
        let mut writes = Vec::new();
        for (i, (prev, cur)) in self.previous.iter_mut().zip(&self.current).enumerate() {
            if *prev != Some(*cur) {
                writes.push(CellWrite {
                    x: (i % width) as u16,
                    y: (i / width) as u16,
                    cell: *cur,
                });
                *prev = Some(*cur);
            }
        }
        writes
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.arena.width || y >= self.arena.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.arena.width) + usize::from(x))
    }
}

/// The player blinks on a fixed real-time period while invincible.
pub fn player_visible(player: &Player, now_ms: f64, blink_period_ms: f64) -> bool {
    if !player.invincible || blink_period_ms <= 0.0 {
        return true;
    }
    ((now_ms / blink_period_ms).floor() as i64).rem_euclid(2) == 0
}

fn kind_of(style: StyleClass) -> Option<EntityKind> {
    match style {
        StyleClass::Pickup => Some(EntityKind::Pickup),
        StyleClass::Projectile => Some(EntityKind::Projectile),
        StyleClass::Hostile => Some(EntityKind::Hostile),
        StyleClass::Player => Some(EntityKind::Player),
        StyleClass::Empty => None,
    }
}
