//! Window backends.
//!
//! - `raylib_host`: desktop window, keyboard/mouse/touch, texture upload
//! - `touch`: optional on-screen button bindings

pub mod raylib_host;
pub mod touch;
