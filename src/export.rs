//! Writing finished frames to image files.

use std::path::Path;

use image::{ExtendedColorType, Rgba, RgbaImage};

use crate::error::Result;
use crate::screen::ScreenSpace;

/// Saves the color grid; the format follows the file extension.
pub fn save_color<P: AsRef<Path>>(screen: &ScreenSpace, path: P) -> Result<()> {
    let path = path.as_ref();
    image::save_buffer(path, screen.as_bytes(), screen.width, screen.height, ExtendedColorType::Rgba8)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Diagnostic view of the depth grid.
///
/// Pixels that received a fragment get their depth clamped to `0..=255` in
/// the red channel; untouched pixels are transparent.
pub fn depth_map(screen: &ScreenSpace) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(screen.width, screen.height, Rgba([0, 0, 0, 0]));
    for y in 0..screen.height {
        for x in 0..screen.width {
            let depth = screen.depth_at(x as i32, y as i32).unwrap_or(f64::NEG_INFINITY);
            if depth > f64::NEG_INFINITY {
                let level = depth.clamp(0.0, 255.0) as u8;
                img.put_pixel(x, screen.height - 1 - y, Rgba([level, 0, 0, 255]));
            }
        }
    }
    img
}

pub fn save_depth_map<P: AsRef<Path>>(screen: &ScreenSpace, path: P) -> Result<()> {
    let path = path.as_ref();
    depth_map(screen).save(path)?;
    log::info!("Wrote depth map {}", path.display());
    Ok(())
}
