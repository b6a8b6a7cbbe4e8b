//! Keyboard-state model sampled once per tick.
//!
//! Two physical key-sets (arrows and WASD) feed the same four logical
//! movement keys. A logical key is held while any of its physical keys is.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Logical movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// Physical key recognised by the input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

impl PhysicalKey {
    pub const ALL: [PhysicalKey; 8] = [
        PhysicalKey::ArrowUp,
        PhysicalKey::ArrowDown,
        PhysicalKey::ArrowLeft,
        PhysicalKey::ArrowRight,
        PhysicalKey::W,
        PhysicalKey::A,
        PhysicalKey::S,
        PhysicalKey::D,
    ];

    pub fn logical(self) -> MoveKey {
        match self {
            PhysicalKey::ArrowUp | PhysicalKey::W => MoveKey::Up,
            PhysicalKey::ArrowDown | PhysicalKey::S => MoveKey::Down,
            PhysicalKey::ArrowLeft | PhysicalKey::A => MoveKey::Left,
            PhysicalKey::ArrowRight | PhysicalKey::D => MoveKey::Right,
        }
    }

    fn index(self) -> usize {
        match self {
            PhysicalKey::ArrowUp => 0,
            PhysicalKey::ArrowDown => 1,
            PhysicalKey::ArrowLeft => 2,
            PhysicalKey::ArrowRight => 3,
            PhysicalKey::W => 4,
            PhysicalKey::A => 5,
            PhysicalKey::S => 6,
            PhysicalKey::D => 7,
        }
    }
}

/// Pressed/released state of every physical key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pressed: [bool; 8],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a set of held keys.
    pub fn with_pressed(keys: &[PhysicalKey]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    pub fn set(&mut self, key: PhysicalKey, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed[key.index()]
    }

    /// Whether any physical key mapped to `key` is held.
    pub fn is_held(&self, key: MoveKey) -> bool {
        PhysicalKey::ALL
            .iter()
            .any(|&k| k.logical() == key && self.is_pressed(k))
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 8];
    }

    /// Raw (un-normalized) input direction; +y points down the grid.
    /// Opposite keys cancel out.
    pub fn direction(&self) -> DVec2 {
        let mut dir = DVec2::ZERO;
        if self.is_held(MoveKey::Up) {
            dir.y -= 1.0;
        }
        if self.is_held(MoveKey::Down) {
            dir.y += 1.0;
        }
        if self.is_held(MoveKey::Left) {
            dir.x -= 1.0;
        }
        if self.is_held(MoveKey::Right) {
            dir.x += 1.0;
        }
        dir
    }
}
