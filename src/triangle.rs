use crate::point2d::{IPoint, Point2D};
use crate::point3d::Point3D;
use crate::rectangle::Rect;

/// Screen-space triangle: x, y in pixels, z a depth proxy where larger is nearer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point3D,
    pub b: Point3D,
    pub c: Point3D,
    pub tex_coords: Option<[Point2D; 3]>,
}

impl Triangle {
    pub fn new(a: Point3D, b: Point3D, c: Point3D) -> Self {
        Triangle { a, b, c, tex_coords: None }
    }

    pub fn textured(a: Point3D, b: Point3D, c: Point3D, tex_coords: [Point2D; 3]) -> Self {
        Triangle { a, b, c, tex_coords: Some(tex_coords) }
    }

    pub fn vertices(&self) -> [Point3D; 3] {
        [self.a, self.b, self.c]
    }

    /// Vertices truncated to pixel coordinates, z dropped.
    pub fn pixel_vertices(&self) -> [IPoint; 3] {
        self.vertices().map(|v| IPoint { x: v.x as i32, y: v.y as i32 })
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::bounding(self.a, self.b, self.c)
    }

    /// Depth at the given barycentric weights.
    pub fn depth_at(&self, weights: Point3D) -> f64 {
        self.a.z * weights.x + self.b.z * weights.y + self.c.z * weights.z
    }
}
