use bytemuck::{Pod, Zeroable};

use crate::point2d::IPoint;
use crate::rectangle::Rect;

/// RGBA8 pixel, laid out so a color grid can be viewed as raw bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Gray level `value` with full alpha.
    pub const fn gray(value: u8) -> Self {
        Color::rgba(value, value, value, 255)
    }

    /// Scales the color channels by `factor`, keeping alpha.
    /// Out-of-range products saturate at the `u8` bounds.
    pub fn scaled(self, factor: f64) -> Self {
        Color {
            r: (self.r as f64 * factor) as u8,
            g: (self.g as f64 * factor) as u8,
            b: (self.b as f64 * factor) as u8,
            a: self.a,
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Color and depth grids for one render.
///
/// Geometry is addressed with y pointing up. The color grid is stored
/// top-down like an image file, so the row flip happens inside
/// [`ScreenSpace::set_pixel`]. The depth grid stays in geometry
/// orientation at `y * width + x`.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    color: Vec<Color>,
    depth: Vec<f64>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size_calc = (width as usize) * (height as usize);
        Self {
            width,
            height,
            color: vec![background; size_calc],
            depth: vec![f64::NEG_INFINITY; size_calc],
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(IPoint { x, y })
    }

    #[inline(always)]
    fn depth_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline(always)]
    fn color_index(&self, x: u32, y: u32) -> usize {
        (self.height - 1 - y) as usize * self.width as usize + x as usize
    }

    /// Depth-tested write. Stores `color` and `depth` only when `depth` is
    /// strictly greater than the stored depth; returns whether it did.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, depth: f64) -> bool {
        assert!(
            self.in_bounds(x, y),
            "pixel ({x}, {y}) outside {}x{} frame buffer",
            self.width,
            self.height
        );
        let (x, y) = (x as u32, y as u32);
        let di = self.depth_index(x, y);
        if !(depth > self.depth[di]) {
            return false;
        }
        self.depth[di] = depth;
        let ci = self.color_index(x, y);
        self.color[ci] = color;
        true
    }

    /// Color at geometry coordinates `(x, y)`.
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.color[self.color_index(x as u32, y as u32)])
    }

    /// Stored depth at geometry coordinates `(x, y)`.
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f64> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.depth[self.depth_index(x as u32, y as u32)])
    }

    /// Color grid, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.color
    }

    /// Depth grid, bottom row first.
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// Color grid as tightly packed RGBA8 bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    pub fn clear(&mut self, background: Color) {
        self.color.fill(background);
        self.depth.fill(f64::NEG_INFINITY);
    }
}
