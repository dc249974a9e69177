//! Top-down map view (toggled with M).
use raylib::prelude::Color;

use crate::core::grid::Cell;
use crate::core::state::GameState;
use crate::render::casters::{cast_ray, ray_angle};
use crate::render::surface::DrawSurface;

const FLOOR_2D: Color = Color::new(50, 50, 100, 255);
const WALL_2D: Color = Color::new(170, 40, 40, 255);

/// Pixel size of one grid cell so the whole map fits on screen.
pub fn cell_size(state: &GameState, surface_w: u32, surface_h: u32) -> f32 {
    let by_w = surface_w as f32 / state.grid.width() as f32;
    let by_h = surface_h as f32 / state.grid.height() as f32;
    by_w.min(by_h).floor().max(1.0)
}

fn draw_cell<S: DrawSurface>(surface: &mut S, xo: f32, yo: f32, block: f32, cell: Cell) {
    let color = match cell {
        Cell::Wall => WALL_2D,
        Cell::Empty => FLOOR_2D,
    };
    surface.fill_rect(xo, yo, block, block, color);
}

pub fn render_map<S: DrawSurface>(state: &GameState, surface: &mut S) {
    let block = cell_size(state, surface.width(), surface.height());
    for (j, row) in state.grid.rows().enumerate() {
        for (i, &cell) in row.iter().enumerate() {
            draw_cell(surface, i as f32 * block, j as f32 * block, block, cell);
        }
    }

    // a sparse fan of the view rays
    let p = &state.player;
    let rc = &state.config.raycast;
    let fan = rc.num_rays.min(25);
    let fan_cfg = crate::config::RaycastConfig { num_rays: fan, ..rc.clone() };
    for i in 0..fan {
        let a = ray_angle(p.angle, i, &fan_cfg);
        let d = cast_ray(&state.grid, p.x, p.y, a, rc.step_size, rc.max_depth);
        surface.draw_line(
            p.x * block,
            p.y * block,
            (p.x + a.cos() * d) * block,
            (p.y + a.sin() * d) * block,
            1.0,
            Color::WHITE,
        );
    }

    for e in &state.enemies {
        surface.fill_circle(e.x * block, e.y * block, (block * 0.2).max(2.0), Color::RED);
    }
    surface.fill_circle(p.x * block, p.y * block, (block * 0.15).max(2.0), Color::YELLOW);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::Framebuffer;

    #[test]
    fn map_fits_the_shorter_side() {
        let state = GameState::sample();
        assert_eq!(cell_size(&state, 800, 600), 60.0);
        assert_eq!(cell_size(&state, 5, 5), 1.0);
    }

    #[test]
    fn walls_enemies_and_player_are_drawn() {
        let state = GameState::sample();
        let mut fb = Framebuffer::new(100, 100);
        render_map(&state, &mut fb);
        // 10 px cells: (0,0) is border wall, enemy 0 sits at (70, 20)
        assert_eq!(fb.get_pixel(2, 2), WALL_2D);
        assert_eq!(fb.get_pixel(70, 20), Color::RED);
        assert_eq!(fb.get_pixel(15, 15), Color::YELLOW);
    }
}
