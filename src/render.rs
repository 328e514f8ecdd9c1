//! Whole-model rendering on top of the rasterizer.
//!
//! Per face this computes the light intensity, culls faces turned away from
//! the light and projects the vertices to screen space. That step is pure and
//! runs on a rayon pool; the resulting triangles are then rasterized one after
//! another, in face order, into a single [`ScreenSpace`].

use rayon::prelude::*;

use crate::config::{RenderConfig, RenderMode};
use crate::error::Result;
use crate::geometry::{Viewport, light_intensity};
use crate::line::draw_line;
use crate::obj::Model;
use crate::point2d::IPoint;
use crate::point3d::normalize;
use crate::rasterizer::{RasterStats, fill_triangle};
use crate::screen::{Color, ScreenSpace};
use crate::shader::{Shader, SolidShader, TextureShader};
use crate::texture::Texture;
use crate::triangle::Triangle;

/// A face ready for rasterization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedFace {
    pub triangle: Triangle,
    pub intensity: f64,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub faces: usize,
    pub culled: usize,
    pub rasterized: usize,
    pub lines: usize,
    pub pixels: RasterStats,
}

pub struct Renderer {
    config: RenderConfig,
    viewport: Viewport,
    pool: rayon::ThreadPool,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads())
            .build()?;
        let viewport = Viewport::new(config.width, config.height).with_depth_scale(config.depth_scale());
        log::debug!(
            "Renderer {}x{}, {} projection threads",
            config.width,
            config.height,
            pool.current_num_threads()
        );
        Ok(Self { config, viewport, pool })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn new_screen(&self) -> ScreenSpace {
        ScreenSpace::new(self.config.width, self.config.height, self.config.background_color())
    }

    /// Lights, culls and projects every face. Culled faces are `None`;
    /// the output keeps the model's face order.
    pub fn project(&self, model: &Model) -> Vec<Option<ProjectedFace>> {
        let light = normalize(self.config.light());
        let cull = self.config.cull_back_faces && self.config.mode() != RenderMode::Wireframe;
        let viewport = self.viewport;

        self.pool.install(|| {
            model
                .faces
                .par_iter()
                .map(|face| {
                    let fv = model.face_vertices(face);
                    let [v0, v1, v2] = fv.positions;
                    let intensity = light_intensity(v0, v1, v2, light);
                    if cull && !(intensity > 0.0) {
                        return None;
                    }
                    let [a, b, c] = fv.positions.map(|v| viewport.vertex_to_screen(v));
                    Some(ProjectedFace {
                        triangle: Triangle { a, b, c, tex_coords: fv.tex_coords },
                        intensity,
                    })
                })
                .collect()
        })
    }

    pub fn render(&self, model: &Model, texture: Option<&Texture>) -> (ScreenSpace, RenderSummary) {
        let mut screen = self.new_screen();
        let summary = self.render_into(&mut screen, model, texture);
        (screen, summary)
    }

    /// Renders `model` over whatever `screen` already holds.
    pub fn render_into(&self, screen: &mut ScreenSpace, model: &Model, texture: Option<&Texture>) -> RenderSummary {
        let mut mode = self.config.mode();
        if mode == RenderMode::Textured && texture.is_none() {
            log::warn!("Textured mode without a texture, falling back to flat shading");
            mode = RenderMode::Flat;
        }

        let projected = self.project(model);
        let mut summary = RenderSummary { faces: projected.len(), ..RenderSummary::default() };

        for face in &projected {
            let Some(face) = face else {
                summary.culled += 1;
                continue;
            };
            match mode {
                RenderMode::Wireframe => {
                    summary.lines += draw_wireframe(screen, &face.triangle, self.config.wire_color());
                }
                RenderMode::Flat => {
                    let shader = flat_shader(face.intensity);
                    summary.pixels += fill_triangle(screen, &face.triangle, face.intensity, &shader);
                    summary.rasterized += 1;
                }
                RenderMode::Textured => {
                    let flat;
                    let textured;
                    let shader: &dyn Shader = match (texture, face.triangle.tex_coords) {
                        (Some(texture), Some(_)) => {
                            textured = TextureShader::new(texture);
                            &textured
                        }
                        _ => {
                            flat = flat_shader(face.intensity);
                            &flat
                        }
                    };
                    summary.pixels += fill_triangle(screen, &face.triangle, face.intensity, shader);
                    summary.rasterized += 1;
                }
            }
        }

        log::info!(
            "Rendered {} faces ({} culled), {} pixels written",
            summary.faces,
            summary.culled,
            summary.pixels.written + summary.lines as u64
        );
        log::debug!("Raster stats: {:?}", summary.pixels);
        summary
    }
}

fn flat_shader(intensity: f64) -> SolidShader {
    SolidShader::new(Color::gray((intensity * 255.0) as u8))
}

/// Draws the three edges of a screen-space triangle.
pub fn draw_wireframe(screen: &mut ScreenSpace, triangle: &Triangle, color: Color) -> usize {
    let [a, b, c] = triangle.pixel_vertices();
    [(a, b), (b, c), (c, a)]
        .into_iter()
        .map(|(p0, p1): (IPoint, IPoint)| draw_line(screen, p0, p1, color))
        .sum()
}
