//! Per-pixel shading strategies.
//!
//! The rasterizer owns coverage and depth; a [`Shader`] only turns a covered
//! pixel's [`Fragment`] into a color.

use crate::point2d::Point2D;
use crate::point3d::Point3D;
use crate::screen::Color;
use crate::texture::Texture;

/// Shading input for one covered pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fragment<'a> {
    /// Barycentric weights of the pixel, one per triangle vertex.
    pub weights: Point3D,
    pub tex_coords: Option<&'a [Point2D; 3]>,
    /// Per-triangle light intensity, normally in `[0, 1]`.
    pub intensity: f64,
}

impl Fragment<'_> {
    /// Texture coordinate interpolated from the vertex UVs.
    pub fn uv(&self) -> Option<Point2D> {
        self.tex_coords.map(|[t0, t1, t2]| {
            *t0 * self.weights.x + *t1 * self.weights.y + *t2 * self.weights.z
        })
    }
}

pub trait Shader {
    fn shade(&self, fragment: &Fragment) -> Color;
}

impl<F> Shader for F
where
    F: Fn(&Fragment) -> Color,
{
    fn shade(&self, fragment: &Fragment) -> Color {
        self(fragment)
    }
}

/// Constant color; any lighting must already be folded into it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolidShader {
    pub color: Color,
}

impl SolidShader {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Shader for SolidShader {
    #[inline]
    fn shade(&self, _fragment: &Fragment) -> Color {
        self.color
    }
}

/// Samples a texture at the interpolated UV and scales RGB by the
/// fragment's intensity. Fragments without UVs sample at `(0, 0)`.
pub struct TextureShader<'a> {
    pub texture: &'a Texture,
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: &'a Texture) -> Self {
        Self { texture }
    }
}

impl Shader for TextureShader<'_> {
    #[inline]
    fn shade(&self, fragment: &Fragment) -> Color {
        let uv = fragment.uv().unwrap_or_default();
        self.texture.sample(uv).scaled(fragment.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(weights: Point3D, tex_coords: Option<&[Point2D; 3]>, intensity: f64) -> Fragment<'_> {
        Fragment { weights, tex_coords, intensity }
    }

    #[test]
    fn uv_is_weighted_sum() {
        let uvs = [Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0)];
        let f = fragment(Point3D::new(0.5, 0.25, 0.25), Some(&uvs), 1.0);
        assert_eq!(f.uv(), Some(Point2D::new(0.25, 0.25)));
        assert_eq!(fragment(Point3D::new(1.0, 0.0, 0.0), None, 1.0).uv(), None);
    }

    #[test]
    fn solid_ignores_inputs() {
        let s = SolidShader::new(Color::RED);
        let f = fragment(Point3D::new(0.1, 0.2, 0.7), None, 0.0);
        assert_eq!(s.shade(&f), Color::RED);
    }

    #[test]
    fn texture_is_modulated_by_intensity() {
        let texture = Texture::from_rgba(1, 1, vec![200, 100, 40, 255]).unwrap();
        let s = TextureShader::new(&texture);
        let uvs = [Point2D::new(0.5, 0.5); 3];
        let f = fragment(Point3D::new(1.0, 0.0, 0.0), Some(&uvs), 0.5);
        assert_eq!(s.shade(&f), Color::rgba(100, 50, 20, 255));
        let f = fragment(Point3D::new(1.0, 0.0, 0.0), None, 1.0);
        assert_eq!(s.shade(&f), Color::rgba(200, 100, 40, 255));
    }

    #[test]
    fn closures_are_shaders() {
        let by_weight = |f: &Fragment| Color::gray((f.weights.x * 255.0) as u8);
        let f = fragment(Point3D::new(1.0, 0.0, 0.0), None, 1.0);
        assert_eq!(by_weight.shade(&f), Color::WHITE);
    }
}
