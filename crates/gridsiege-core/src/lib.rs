//! Core types and definitions for the GRIDSIEGE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, lifecycle commands, frame reports, events, input, and tuning.
//! It has no dependency on the ECS runtime or any terminal framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
