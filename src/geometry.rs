use crate::point2d::{IPoint, Point2D, dot2, perp};
use crate::point3d::{Point3D, cross3, dot3, normalize};

/// Weights returned for triangles whose doubled area is below one pixel.
/// The negative component makes `is_inside` reject every pixel.
pub const DEGENERATE_WEIGHTS: Point3D = Point3D { x: -1.0, y: 1.0, z: 1.0 };

/// Barycentric weights of `p` with respect to the triangle `v0, v1, v2`.
///
/// Solves `p = a*v0 + b*v1 + c*v2` by crossing the x and y rows of
/// `(v2 - v0, v1 - v0, v0 - p)`; the z component of the result is twice the
/// signed area of the triangle. The weights are returned as `(a, b, c)`.
pub fn barycentric(v0: IPoint, v1: IPoint, v2: IPoint, p: IPoint) -> Point3D {
    // differences in f64: saturated vertices may span more than i32::MAX
    let x_row = Point3D {
        x: v2.x as f64 - v0.x as f64,
        y: v1.x as f64 - v0.x as f64,
        z: v0.x as f64 - p.x as f64,
    };
    let y_row = Point3D {
        x: v2.y as f64 - v0.y as f64,
        y: v1.y as f64 - v0.y as f64,
        z: v0.y as f64 - p.y as f64,
    };
    let u = cross3(y_row, x_row);

    // |u.z| < 1 means zero area on an integer grid
    if u.z.abs() < 1.0 {
        return DEGENERATE_WEIGHTS;
    }
    Point3D {
        x: 1.0 - (u.x + u.y) / u.z,
        y: u.y / u.z,
        z: u.x / u.z,
    }
}

/// Inclusive inside test: points on an edge or a vertex count as inside.
#[inline(always)]
pub fn is_inside(weights: Point3D) -> bool {
    weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0
}

/// Signed area of `t1, t2, p`; positive when `p` is left of `t1 -> t2`.
pub fn signed_triangle_area(t1: Point2D, t2: Point2D, p: Point2D) -> f64 {
    let ap = p - t1;
    let t1t2perp: Point2D = perp(t2 - t1);
    -dot2(ap, t1t2perp) / 2.0
}

/// Half-plane inside test, independent of the barycentric solver.
/// Accepts either winding; boundary points are inside.
pub fn point_in_triangle(a: Point2D, b: Point2D, c: Point2D, p: Point2D) -> bool {
    let area = signed_triangle_area(a, b, c);
    if area == 0.0 {
        return false;
    }
    let edges = [
        signed_triangle_area(a, b, p),
        signed_triangle_area(b, c, p),
        signed_triangle_area(c, a, p),
    ];
    if area > 0.0 {
        edges.iter().all(|e| *e >= 0.0)
    } else {
        edges.iter().all(|e| *e <= 0.0)
    }
}

/// Unit normal of an object-space face, `(v2 - v0) x (v1 - v0)`.
pub fn face_normal(v0: Point3D, v1: Point3D, v2: Point3D) -> Point3D {
    normalize(cross3(v2 - v0, v1 - v0))
}

/// Lambertian intensity of a face lit from `light_dir`. Not clamped.
pub fn light_intensity(v0: Point3D, v1: Point3D, v2: Point3D, light_dir: Point3D) -> f64 {
    dot3(face_normal(v0, v1, v2), light_dir)
}

/// Maps normalized device coordinates in `[-1, 1]` to pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Multiplier turning object-space z into the depth proxy.
    pub depth_scale: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height, depth_scale: width as f64 }
    }

    pub fn with_depth_scale(mut self, depth_scale: f64) -> Self {
        self.depth_scale = depth_scale;
        self
    }

    #[inline(always)]
    pub fn vertex_to_screen(&self, vertex: Point3D) -> Point3D {
        Point3D {
            x: (vertex.x + 1.0) * self.width as f64 / 2.0,
            y: (vertex.y + 1.0) * self.height as f64 / 2.0,
            z: vertex.z * self.depth_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(x: i32, y: i32) -> IPoint {
        IPoint::new(x, y)
    }

    #[test]
    fn weights_at_vertices() {
        let (a, b, c) = (ip(10, 10), ip(50, 10), ip(10, 50));
        assert_eq!(barycentric(a, b, c, a), Point3D::new(1.0, 0.0, 0.0));
        assert_eq!(barycentric(a, b, c, b), Point3D::new(0.0, 1.0, 0.0));
        assert_eq!(barycentric(a, b, c, c), Point3D::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn weights_sum_to_one() {
        let (a, b, c) = (ip(3, 7), ip(91, 12), ip(40, 77));
        for p in [ip(40, 30), ip(3, 7), ip(60, 20), ip(0, 0)] {
            let w = barycentric(a, b, c, p);
            assert!((w.sum() - 1.0).abs() < 1e-9, "{w:?}");
        }
    }

    #[test]
    fn outside_point_has_negative_weight() {
        let w = barycentric(ip(0, 0), ip(10, 0), ip(0, 10), ip(8, 8));
        assert!(!is_inside(w));
        let w = barycentric(ip(0, 0), ip(10, 0), ip(0, 10), ip(5, 5));
        assert!(is_inside(w), "hypotenuse is inside: {w:?}");
    }

    #[test]
    fn collinear_triangle_returns_sentinel() {
        let w = barycentric(ip(0, 0), ip(5, 5), ip(10, 10), ip(5, 5));
        assert_eq!(w, DEGENERATE_WEIGHTS);
        assert!(!is_inside(w));
        let w = barycentric(ip(4, 4), ip(4, 4), ip(4, 4), ip(4, 4));
        assert!(!is_inside(w));
    }

    #[test]
    fn extreme_vertices_do_not_overflow() {
        let (lo, hi) = (i32::MIN, i32::MAX);
        // hypotenuse runs along x + y = -1, so the origin is just outside
        let w = barycentric(ip(lo, lo), ip(hi, lo), ip(lo, hi), ip(0, 0));
        assert!(!is_inside(w), "{w:?}");
        let w = barycentric(ip(lo, lo), ip(hi, lo), ip(0, hi), ip(3, 7));
        assert!(is_inside(w), "{w:?}");
        assert!((w.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn half_plane_test_accepts_both_windings() {
        let (a, b, c) = (Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0), Point2D::new(0.0, 10.0));
        let p = Point2D::new(2.0, 2.0);
        assert!(point_in_triangle(a, b, c, p));
        assert!(point_in_triangle(a, c, b, p));
        assert!(point_in_triangle(a, b, c, Point2D::new(5.0, 5.0)));
        assert!(!point_in_triangle(a, b, c, Point2D::new(6.0, 5.0)));
        assert!(!point_in_triangle(a, a, c, p));
    }

    #[test]
    fn facing_face_is_lit() {
        let light = Point3D::new(0.0, 0.0, -1.0);
        let v0 = Point3D::new(0.0, 0.0, 0.0);
        let v1 = Point3D::new(1.0, 0.0, 0.0);
        let v2 = Point3D::new(0.0, 1.0, 0.0);
        assert!((light_intensity(v0, v1, v2, light) - 1.0).abs() < 1e-12);
        assert!((light_intensity(v0, v2, v1, light) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn viewport_maps_ndc_corners() {
        let vp = Viewport::new(200, 100);
        assert_eq!(vp.vertex_to_screen(Point3D::new(-1.0, -1.0, 0.5)), Point3D::new(0.0, 0.0, 100.0));
        assert_eq!(vp.vertex_to_screen(Point3D::new(0.0, 0.0, 0.0)), Point3D::new(100.0, 50.0, 0.0));
        let vp = vp.with_depth_scale(1.0);
        assert_eq!(vp.vertex_to_screen(Point3D::new(1.0, 1.0, -0.25)).z, -0.25);
    }
}
