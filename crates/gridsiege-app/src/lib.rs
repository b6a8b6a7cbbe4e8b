//! GRIDSIEGE terminal host.
//!
//! Wires the headless simulation engine to a crossterm terminal: input
//! mapping, the frame loop, and terminal implementations of the engine's
//! render, HUD and overlay collaborators.

pub mod game_loop;
pub mod state;
pub mod terminal;

pub use gridsiege_core as core;
