//! The drawing primitives the renderer needs from a raster target.
use raylib::prelude::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, align: TextAlign);
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color);
    fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
}
