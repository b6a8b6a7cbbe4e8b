//! Systems that operate on the simulation state each tick.
//!
//! Systems are plain functions that take the world (and the engine-owned
//! player, score, or director) by reference. They do not own state; the
//! engine calls them in a fixed order.

pub mod attack;
pub mod cleanup;
pub mod collision;
pub mod hud;
pub mod movement;
pub mod render;
pub mod spawn_director;
