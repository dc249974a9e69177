//! Fixed-step ray marching and column projection.
use raylib::prelude::Color;

use crate::config::RaycastConfig;
use crate::core::grid::Grid;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub angle: f32,
    /// Distance measured along the ray.
    pub distance: f32,
    /// Distance projected onto the view direction (fish-eye corrected).
    pub corrected: f32,
}

/// March from `(x, y)` along `angle` in `step` increments until a sample
/// lands in a wall. Returns `max_depth` when nothing is hit in range.
/// `step` must be positive.
pub fn cast_ray(grid: &Grid, x: f32, y: f32, angle: f32, step: f32, max_depth: f32) -> f32 {
    let (dx, dy) = (angle.cos(), angle.sin());
    let steps = (max_depth / step).ceil() as usize;
    for k in 0..steps {
        let d = k as f32 * step;
        if grid.is_wall(x + dx * d, y + dy * d) {
            return d;
        }
    }
    max_depth
}

/// Angle of column `i` out of `cfg.num_rays`, sweeping left to right.
#[inline]
pub fn ray_angle(heading: f32, i: usize, cfg: &RaycastConfig) -> f32 {
    heading - cfg.fov / 2.0 + (cfg.fov / cfg.num_rays as f32) * i as f32
}

/// Cast every column of the view.
pub fn cast_view(grid: &Grid, x: f32, y: f32, heading: f32, cfg: &RaycastConfig) -> Vec<RayHit> {
    (0..cfg.num_rays)
        .map(|i| {
            let angle = ray_angle(heading, i, cfg);
            let distance = cast_ray(grid, x, y, angle, cfg.step_size, cfg.max_depth);
            RayHit { angle, distance, corrected: distance * (angle - heading).cos() }
        })
        .collect()
}

/// Projected wall strip `(top, height)` for a corrected distance.
#[inline]
pub fn project_column(corrected: f32, screen_h: f32) -> (f32, f32) {
    let height = (screen_h / corrected) * 0.5;
    ((screen_h - height) / 2.0, height)
}

/// Warm grey that darkens linearly with distance. Orientation plays no part.
pub fn wall_shade(corrected: f32, max_depth: f32) -> Color {
    let brightness = (1.0 - corrected / max_depth).max(0.0);
    let v = (brightness * 150.0 + 50.0).floor();
    Color::new(v as u8, (v * 0.8) as u8, (v * 0.6) as u8, 255)
}
