//! DOOM-style raycaster: a tile grid, a player that walks and shoots, and a
//! column-projected pseudo-3D view.

pub mod config;
pub mod core;
pub mod platform;
pub mod render;
