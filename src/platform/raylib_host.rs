//! raylib window: keyboard and touch input in, framebuffer texture out.
use anyhow::{Result, anyhow};
use log::info;
use raylib::prelude::*;

use crate::config::GameConfig;
use crate::core::game_loop::FrameHost;
use crate::core::input::{FrameInput, HeldActions, InputEvent, InputSource};
use crate::platform::touch::TouchControls;
use crate::render::framebuffer::Framebuffer;
use crate::render::surface::TextAlign;

const TOUCH_FILL: Color = Color::new(100, 100, 100, 120);
const TOUCH_DOWN: Color = Color::new(220, 220, 220, 160);

pub struct RaylibHost {
    rl: RaylibHandle,
    thread: RaylibThread,
    texture: Texture2D,
    touch: TouchControls,
}

impl RaylibHost {
    /// Open the window and allocate the streaming texture. The engine is
    /// only built once this has succeeded.
    pub fn open(config: &GameConfig, title: &str) -> Result<Self> {
        let (w, h) = (config.screen_width as i32, config.screen_height as i32);
        let (mut rl, thread) = raylib::init().size(w, h).title(title).build();
        rl.set_target_fps(60);

        let image = Image::gen_image_color(w, h, Color::BLACK);
        let texture = rl
            .load_texture_from_image(&thread, &image)
            .map_err(|e| anyhow!("could not create frame texture: {e}"))?;

        let touch = TouchControls::from_config(&config.touch);
        info!("window {w}x{h} open, {} touch buttons bound", touch.buttons.len());
        Ok(Self { rl, thread, texture, touch })
    }

    fn keyboard_held(&self) -> HeldActions {
        let down = |keys: &[KeyboardKey]| keys.iter().any(|&k| self.rl.is_key_down(k));
        HeldActions {
            forward: down(&[KeyboardKey::KEY_W, KeyboardKey::KEY_UP]),
            back: down(&[KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN]),
            turn_left: down(&[KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT]),
            turn_right: down(&[KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT]),
        }
    }

    fn keyboard_events(&self) -> Vec<InputEvent> {
        let bindings = [
            (KeyboardKey::KEY_SPACE, InputEvent::Fire),
            (KeyboardKey::KEY_LEFT_CONTROL, InputEvent::Fire),
            (KeyboardKey::KEY_P, InputEvent::Pause),
            (KeyboardKey::KEY_E, InputEvent::Use),
            (KeyboardKey::KEY_M, InputEvent::ToggleMap),
        ];
        bindings
            .iter()
            .filter(|(key, _)| self.rl.is_key_pressed(*key))
            .map(|&(_, event)| event)
            .collect()
    }

    fn contact_points(&self) -> Vec<(f32, f32)> {
        let mut points = Vec::new();
        let touch_count = self.rl.get_touch_point_count();
        for i in 0..touch_count {
            let p = self.rl.get_touch_position(i);
            points.push((p.x, p.y));
        }
        if points.is_empty() && self.rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            let m = self.rl.get_mouse_position();
            points.push((m.x, m.y));
        }
        points
    }
}

impl InputSource for RaylibHost {
    fn poll(&mut self) -> FrameInput {
        let mut held = self.keyboard_held();
        let mut events = self.keyboard_events();
        if !self.touch.is_empty() {
            let points = self.contact_points();
            let mut touch_held = HeldActions::default();
            self.touch.update(&points, &mut touch_held, &mut events);
            held = held.merge(touch_held);
        }
        FrameInput { held, events, dt: self.rl.get_frame_time() }
    }
}

impl FrameHost for RaylibHost {
    fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    fn present(&mut self, frame: &Framebuffer) {
        frame.upload_to_texture(&mut self.texture);

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&self.texture, 0, 0, Color::WHITE);

        for label in frame.labels() {
            let size = label.size as i32;
            let x = match label.align {
                TextAlign::Left => label.x as i32,
                TextAlign::Center => label.x as i32 - d.measure_text(&label.text, size) / 2,
            };
            d.draw_text(&label.text, x, label.y as i32, size, label.color);
        }

        for button in &self.touch.buttons {
            let [x, y, w, h] = button.rect.map(|v| v as i32);
            let fill = if button.is_pressed { TOUCH_DOWN } else { TOUCH_FILL };
            d.draw_rectangle(x, y, w, h, fill);
            d.draw_rectangle_lines(x, y, w, h, Color::WHITE);
            d.draw_text(button.label, x + 6, y + h / 2 - 8, 16, Color::WHITE);
        }
    }
}
