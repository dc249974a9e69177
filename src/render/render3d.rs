//! First-person view: sky, parallax mountains, floor, then wall columns.
use raylib::prelude::Color;

use crate::core::state::{GameState, ViewMode};
use crate::render::casters::{cast_view, project_column, wall_shade};
use crate::render::surface::DrawSurface;
use crate::render::{hud, minimap};

const SKY_TOP: Color = Color::new(26, 42, 74, 255);
const SKY_BOTTOM: Color = Color::new(42, 26, 58, 255);
const MOUNTAIN: Color = Color::new(10, 10, 26, 255);
const FLOOR: Color = Color::new(42, 42, 42, 255);
const FLOOR_LINE: Color = Color::new(26, 26, 26, 255);

#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t) as u8 };
    Color::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), 255)
}

/// Draw one complete frame for the current view mode.
pub fn render_frame<S: DrawSurface>(state: &GameState, surface: &mut S) {
    surface.clear(Color::BLACK);
    match state.view {
        ViewMode::FirstPerson => {
            paint_background(surface, state.player.angle);
            render_walls(state, surface);
            hud::draw_weapon(surface, state.is_shooting());
            if state.is_shooting() {
                hud::draw_muzzle_flash(surface);
            }
            hud::draw_crosshair(surface);
        }
        ViewMode::Map => minimap::render_map(state, surface),
    }
    hud::draw_status(surface, &state.player);
    hud::draw_overlay(surface, state);
}

pub fn paint_background<S: DrawSurface>(surface: &mut S, heading: f32) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let horizon = h / 2.0;

    let rows = horizon as u32;
    for y in 0..rows {
        let col = lerp_color(SKY_TOP, SKY_BOTTOM, y as f32 / rows.max(1) as f32);
        surface.fill_rect(0.0, y as f32, w, 1.0, col);
    }

    let shift = (heading * 100.0) % w;
    for i in 0..5 {
        let mx = i as f32 * w / 4.0 - shift;
        surface.fill_triangle((mx, horizon), (mx + 100.0, horizon - 60.0), (mx + 200.0, horizon), MOUNTAIN);
    }

    surface.fill_rect(0.0, horizon, w, h - horizon, FLOOR);
    for i in 0..10 {
        let y = horizon + i as f32 * h / 20.0;
        surface.fill_rect(0.0, y, w, 1.0, FLOOR_LINE);
    }
}

/// One shaded strip per ray, perspective height from the corrected distance.
pub fn render_walls<S: DrawSurface>(state: &GameState, surface: &mut S) {
    let cfg = &state.config.raycast;
    let h = surface.height() as f32;
    let col_w = surface.width() as f32 / cfg.num_rays as f32;
    let p = &state.player;

    for (i, hit) in cast_view(&state.grid, p.x, p.y, p.angle, cfg).iter().enumerate() {
        if hit.corrected <= 0.0 {
            continue;
        }
        let (top, height) = project_column(hit.corrected, h);
        surface.fill_rect(i as f32 * col_w, top, col_w + 1.0, height, wall_shade(hit.corrected, cfg.max_depth));
    }
}
