use raylib::core::texture::RaylibTexture2D; // trait for .update_texture()
use raylib::prelude::*;

use crate::render::surface::{DrawSurface, TextAlign};

/// Text is not rasterized on the CPU; labels are queued and drawn by the
/// window backend on top of the uploaded pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    labels: Vec<TextLabel>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            labels: Vec::new(),
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    /// Source-over blend using the colour's alpha.
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.color_buffer[idx] = match color.a {
            255 => color,
            0 => return,
            a => {
                let dst = self.color_buffer[idx];
                let t = a as f32 / 255.0;
                let mix = |s: u8, d: u8| -> u8 { (s as f32 * t + d as f32 * (1.0 - t)).round() as u8 };
                Color::new(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b), 255)
            }
        };
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Push pixels into a persistent texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // &[Color] -> &[u8] (RGBA8) without copying
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        let _ = tex.update_texture(bytes);
    }
}

impl DrawSurface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.background_color = color;
        self.color_buffer.fill(color);
        self.labels.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let x0 = x.round().max(0.0) as i32;
        let y0 = y.round().max(0.0) as i32;
        let x1 = (x + w).round().min(self.width as f32) as i32;
        let y1 = (y + h).round().min(self.height as f32) as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, align: TextAlign) {
        self.labels.push(TextLabel { text: text.to_string(), x, y, size, color, align });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
        let half = (thickness * 0.5).max(0.5);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let cx = x0 + dx * t;
            let cy = y0 + dy * t;
            self.fill_rect(cx - half, cy - half, half * 2.0, half * 2.0, color);
        }
    }

    fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Color) {
        let edge = |p: (f32, f32), q: (f32, f32), r: (f32, f32)| (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0);
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }
        let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as i32;
        let max_x = a.0.max(b.0).max(c.0).ceil().min(self.width as f32) as i32;
        let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as i32;
        let max_y = a.1.max(b.1).max(c.1).ceil().min(self.height as f32) as i32;
        for py in min_y..max_y {
            for px in min_x..max_x {
                let p = (px as f32 + 0.5, py as f32 + 0.5);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let r2 = radius * radius;
        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;
        let x0 = (cx - radius).floor() as i32;
        let x1 = (cx + radius).ceil() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }
}
