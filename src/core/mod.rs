//! Core game types and logic (data, input, simulation, loop).
//!
//! Re-exports:
//! - `grid`: Wall grid loading and validation
//! - `player`: Player data, movement and damage
//! - `enemy`: Decorative enemies and angle helpers
//! - `input`: Abstract held actions and trigger events
//! - `state`: Game state and the per-frame step
//! - `game_loop`: Host-driven frame loop

pub mod grid;
pub mod player;
pub mod enemy;
pub mod input;
pub mod state;
pub mod game_loop;
