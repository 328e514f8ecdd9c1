use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point3d::Point3D;
use crate::screen::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Gray level from the face's light intensity.
    Flat,
    /// Texture sampled at the interpolated UV, scaled by light intensity.
    Textured,
    /// Triangle edges only.
    Wireframe,
}

impl std::str::FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(RenderMode::Flat),
            "textured" => Ok(RenderMode::Textured),
            "wireframe" => Ok(RenderMode::Wireframe),
            other => Err(Error::Config(format!("unknown render mode {:?}", other))),
        }
    }
}

/// Render settings, loadable from TOML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 4],
    pub light_direction: [f64; 3],
    /// Shading mode; `flat` when unset, see [`RenderConfig::resolve_mode`].
    pub mode: Option<RenderMode>,
    pub wire_color: [u8; 4],
    /// Object-space z multiplier for the depth buffer; the width when unset.
    pub depth_scale: Option<f64>,
    pub normalize_mesh: bool,
    /// Skip faces whose light intensity is not positive.
    pub cull_back_faces: bool,
    /// Worker threads for projection; logical CPU count when unset.
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: [0, 0, 0, 255],
            light_direction: [0.0, 0.0, -1.0],
            mode: None,
            wire_color: [255, 255, 255, 255],
            depth_scale: None,
            normalize_mesh: false,
            cull_back_faces: true,
            threads: None,
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!("image size {}x{} is empty", self.width, self.height)));
        }
        if self.light_direction.iter().all(|c| *c == 0.0) {
            return Err(Error::Config("light direction must be non-zero".to_string()));
        }
        if self.threads == Some(0) {
            return Err(Error::Config("threads must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn mode(&self) -> RenderMode {
        self.mode.unwrap_or(RenderMode::Flat)
    }

    /// Picks textured shading when a texture is supplied and no mode was set.
    pub fn resolve_mode(&mut self, has_texture: bool) -> RenderMode {
        if self.mode.is_none() && has_texture {
            self.mode = Some(RenderMode::Textured);
        }
        self.mode()
    }

    pub fn background_color(&self) -> Color {
        Color::from(self.background)
    }

    pub fn wire_color(&self) -> Color {
        Color::from(self.wire_color)
    }

    pub fn light(&self) -> Point3D {
        Point3D::from_array(self.light_direction)
    }

    pub fn depth_scale(&self) -> f64 {
        self.depth_scale.unwrap_or(self.width as f64)
    }

    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
