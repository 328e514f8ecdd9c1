use crate::geometry::{barycentric, is_inside};
use crate::screen::ScreenSpace;
use crate::shader::{Fragment, Shader};
use crate::triangle::Triangle;

/// Pixel counts from filling one or more triangles.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Bounding-box pixels tested.
    pub visited: u64,
    /// Pixels that passed the inside test.
    pub covered: u64,
    /// Pixels that also passed the depth test.
    pub written: u64,
}

impl std::ops::AddAssign for RasterStats {
    fn add_assign(&mut self, other: RasterStats) {
        self.visited += other.visited;
        self.covered += other.covered;
        self.written += other.written;
    }
}

/// Fills `triangle` into `screen`, shading each covered pixel.
///
/// Scans the triangle's bounding box clipped to the screen, computes
/// barycentric weights from the truncated vertex positions and skips any
/// pixel with a negative weight. Covered pixels get the interpolated depth
/// and go through the screen's depth test.
pub fn fill_triangle<S: Shader + ?Sized>(
    screen: &mut ScreenSpace,
    triangle: &Triangle,
    intensity: f64,
    shader: &S,
) -> RasterStats {
    let mut stats = RasterStats::default();
    let bbox = triangle.bounding_box().intersect(&screen.bounds());
    let [p0, p1, p2] = triangle.pixel_vertices();

    for p in bbox.pixels() {
        stats.visited += 1;
        let weights = barycentric(p0, p1, p2, p);
        if !is_inside(weights) {
            continue;
        }
        stats.covered += 1;

        let depth = triangle.depth_at(weights);
        let fragment = Fragment {
            weights,
            tex_coords: triangle.tex_coords.as_ref(),
            intensity,
        };
        let color = shader.shade(&fragment);
        if screen.set_pixel(p.x, p.y, color, depth) {
            stats.written += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point3d::Point3D;
    use crate::screen::Color;
    use crate::shader::SolidShader;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64), z: f64) -> Triangle {
        Triangle::new(
            Point3D::new(a.0, a.1, z),
            Point3D::new(b.0, b.1, z),
            Point3D::new(c.0, c.1, z),
        )
    }

    #[test]
    fn small_right_triangle_coverage() {
        let mut screen = ScreenSpace::new(8, 8, Color::BLACK);
        let t = tri((0.0, 0.0), (3.0, 0.0), (0.0, 3.0), 1.0);
        let stats = fill_triangle(&mut screen, &t, 1.0, &SolidShader::new(Color::RED));
        // x + y <= 3 on the grid
        assert_eq!(stats.visited, 16);
        assert_eq!(stats.covered, 10);
        assert_eq!(stats.written, 10);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x + y <= 3 { Color::RED } else { Color::BLACK };
                assert_eq!(screen.color_at(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn winding_does_not_matter() {
        let mut cw = ScreenSpace::new(16, 16, Color::BLACK);
        let mut ccw = ScreenSpace::new(16, 16, Color::BLACK);
        let shader = SolidShader::new(Color::WHITE);
        fill_triangle(&mut ccw, &tri((1.0, 1.0), (12.0, 3.0), (5.0, 14.0), 0.0), 1.0, &shader);
        fill_triangle(&mut cw, &tri((1.0, 1.0), (5.0, 14.0), (12.0, 3.0), 0.0), 1.0, &shader);
        assert_eq!(cw.pixels(), ccw.pixels());
    }

    #[test]
    fn clips_to_screen() {
        let mut screen = ScreenSpace::new(10, 10, Color::BLACK);
        let t = tri((-20.0, -20.0), (40.0, -20.0), (-20.0, 40.0), 1.0);
        let stats = fill_triangle(&mut screen, &t, 1.0, &SolidShader::new(Color::RED));
        assert_eq!(stats.visited, 100);
        assert_eq!(stats.written, 100);
    }

    #[test]
    fn huge_triangle_covers_whole_screen() {
        let mut screen = ScreenSpace::new(16, 16, Color::BLACK);
        let t = tri((-3e9, -3e9), (3e9, -3e9), (0.0, 3e9), 1.0);
        let stats = fill_triangle(&mut screen, &t, 1.0, &SolidShader::new(Color::RED));
        assert_eq!(stats.visited, 256);
        assert_eq!(stats.written, 256);
        assert!((screen.depth_at(7, 7).unwrap() - 1.0).abs() < 1e-9);

        // vertices saturate to i32::MIN / i32::MAX; the hypotenuse then runs
        // along x + y = -1 and misses the screen
        let mut screen = ScreenSpace::new(16, 16, Color::BLACK);
        let t = tri((-3e9, -3e9), (3e9, -3e9), (-3e9, 3e9), 1.0);
        let stats = fill_triangle(&mut screen, &t, 1.0, &SolidShader::new(Color::RED));
        assert_eq!(stats.visited, 256);
        assert_eq!(stats.covered, 0);
    }

    #[test]
    fn offscreen_triangle_visits_nothing() {
        let mut screen = ScreenSpace::new(10, 10, Color::BLACK);
        let t = tri((20.0, 20.0), (30.0, 20.0), (20.0, 30.0), 1.0);
        let stats = fill_triangle(&mut screen, &t, 1.0, &SolidShader::new(Color::RED));
        assert_eq!(stats, RasterStats::default());
    }

    #[test]
    fn shader_sees_intensity_and_weights() {
        let mut screen = ScreenSpace::new(4, 4, Color::BLACK);
        let t = tri((0.0, 0.0), (3.0, 0.0), (0.0, 3.0), 1.0);
        let shader = |f: &Fragment| {
            assert!((f.weights.sum() - 1.0).abs() < 1e-9);
            Color::gray((f.intensity * 100.0) as u8)
        };
        fill_triangle(&mut screen, &t, 0.5, &shader);
        assert_eq!(screen.color_at(0, 0), Some(Color::gray(50)));
    }

    #[test]
    fn stats_accumulate() {
        let mut total = RasterStats::default();
        total += RasterStats { visited: 3, covered: 2, written: 1 };
        total += RasterStats { visited: 1, covered: 1, written: 1 };
        assert_eq!(total, RasterStats { visited: 4, covered: 3, written: 2 });
    }
}
