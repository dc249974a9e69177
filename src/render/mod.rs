//! Rendering utilities and the column renderer.
//!
//! Re-exports:
//! - `surface`: Drawing primitives the renderer relies on
//! - `framebuffer`: CPU framebuffer implementing `DrawSurface`
//! - `casters`: Ray marching and column projection
//! - `render3d`: First-person frame (background + walls)
//! - `hud`: Weapon, crosshair, counters, overlays
//! - `minimap`: Top-down map view

pub mod surface;
pub mod framebuffer;
pub mod casters;
pub mod render3d;
pub mod hud;
pub mod minimap;
