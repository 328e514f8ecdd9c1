use std::path::Path;

use image::GenericImageView;

use crate::error::{Error, Result};
use crate::point2d::Point2D;
use crate::screen::Color;

/// Read-only RGBA texel grid, rows stored top-down as decoded.
pub struct Texture {
    pub width: u32,
    pub height: u32,
    texels: Vec<Color>,
}

impl Texture {
    /// Loads any format the `image` features enable (PNG, TGA).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)?;
        let (width, height) = img.dimensions();
        log::info!("Loaded texture {} ({}x{})", path.display(), width, height);
        Self::from_rgba(width, height, img.to_rgba8().into_raw())
    }

    /// Builds a texture from tightly packed RGBA8 bytes, top row first.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected || expected == 0 {
            return Err(Error::TextureSize { width, height, expected, actual: rgba.len() });
        }
        let texels = bytemuck::cast_slice::<u8, Color>(&rgba).to_vec();
        Ok(Self { width, height, texels })
    }

    /// Texel at image coordinates (row 0 is the top row), clamped to the grid.
    pub fn texel(&self, x: i64, y: i64) -> Color {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Samples at normalized `uv` with v pointing up.
    ///
    /// Source data puts the origin bottom-left while storage is indexed from
    /// the top, so the row is `(1 - v) * height`. Coordinates on or past the
    /// far edge clamp to the last texel.
    pub fn sample(&self, uv: Point2D) -> Color {
        let x = (uv.x * self.width as f64) as i64;
        let y = ((1.0 - uv.y) * self.height as f64) as i64;
        self.texel(x, y)
    }
}
