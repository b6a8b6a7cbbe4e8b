//! Simulation engine for GRIDSIEGE.
//!
//! Owns the hecs ECS world, runs one simulation tick per host frame,
//! and produces `FrameReport`s for whatever host presents them.

pub mod engine;
pub mod host;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use gridsiege_core as core;
