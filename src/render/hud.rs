//! Weapon, crosshair, status line and pause / game-over overlays.
use raylib::prelude::Color;

use crate::core::player::Player;
use crate::core::state::GameState;
use crate::render::surface::{DrawSurface, TextAlign};

const CROSSHAIR: Color = Color::new(0, 255, 0, 255);
const BAR_BACK: Color = Color::new(40, 40, 40, 200);
const HEALTH: Color = Color::new(200, 30, 30, 255);
const ARMOR: Color = Color::new(40, 90, 220, 255);

/// Gun at the bottom centre, kicked up and left while firing.
pub fn draw_weapon<S: DrawSurface>(surface: &mut S, recoil: bool) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let gx = w / 2.0 + if recoil { -5.0 } else { 0.0 };
    let gy = h - 120.0 + if recoil { -10.0 } else { 0.0 };

    surface.fill_rect(gx - 40.0, gy + 60.0, 35.0, 60.0, Color::new(139, 111, 71, 255)); // arm
    surface.fill_rect(gx - 30.0, gy, 60.0, 40.0, Color::new(42, 42, 42, 255)); // body
    surface.fill_rect(gx + 10.0, gy - 40.0, 15.0, 40.0, Color::new(26, 26, 26, 255)); // barrel
    surface.fill_rect(gx - 15.0, gy + 30.0, 25.0, 40.0, Color::new(58, 42, 26, 255)); // grip
    surface.fill_rect(gx + 20.0, gy + 10.0, 8.0, 8.0, Color::RED);
}

pub fn draw_muzzle_flash<S: DrawSurface>(surface: &mut S) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let fx = w / 2.0 + 15.0;
    let fy = h - 160.0;
    surface.fill_circle(fx, fy, 35.0, Color::new(255, 200, 100, 102));
    surface.fill_circle(fx, fy, 20.0, Color::new(255, 255, 150, 204));
    // tracer
    surface.draw_line(fx, fy, w / 2.0, h / 2.0 - 50.0, 3.0, Color::new(255, 255, 100, 153));
}

pub fn draw_crosshair<S: DrawSurface>(surface: &mut S) {
    let cx = surface.width() as f32 / 2.0;
    let cy = surface.height() as f32 / 2.0;
    surface.draw_line(cx - 10.0, cy, cx + 10.0, cy, 2.0, CROSSHAIR);
    surface.draw_line(cx, cy - 10.0, cx, cy + 10.0, 2.0, CROSSHAIR);
}

pub fn status_line(player: &Player) -> String {
    format!(
        "HEALTH {}%  ARMOR {}%  AMMO {}  KILLS {}",
        player.health.max(0),
        player.armor.max(0),
        player.ammo,
        player.kills
    )
}

pub fn draw_status<S: DrawSurface>(surface: &mut S, player: &Player) {
    surface.draw_text(&status_line(player), 10.0, 10.0, 20.0, Color::WHITE, TextAlign::Left);

    let bar = |surface: &mut S, y: f32, value: i32, color: Color| {
        surface.fill_rect(10.0, y, 100.0, 8.0, BAR_BACK);
        surface.fill_rect(10.0, y, value.clamp(0, 100) as f32, 8.0, color);
    };
    bar(surface, 36.0, player.health, HEALTH);
    bar(surface, 48.0, player.armor, ARMOR);
}

pub fn draw_overlay<S: DrawSurface>(surface: &mut S, state: &GameState) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    if state.game_over {
        surface.fill_rect(0.0, 0.0, w, h, Color::new(0, 0, 0, 178));
        surface.draw_text("GAME OVER", w / 2.0, h / 2.0 - 24.0, 48.0, Color::RED, TextAlign::Center);
        surface.draw_text("Restart to play again", w / 2.0, h / 2.0 + 30.0, 24.0, Color::WHITE, TextAlign::Center);
    } else if state.paused {
        surface.fill_rect(0.0, 0.0, w, h, Color::new(0, 0, 0, 128));
        surface.draw_text("PAUSED", w / 2.0, h / 2.0 - 18.0, 36.0, Color::WHITE, TextAlign::Center);
        surface.draw_text("Press P to resume", w / 2.0, h / 2.0 + 20.0, 18.0, Color::WHITE, TextAlign::Center);
    }
}
