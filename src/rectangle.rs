use crate::point2d::IPoint;
use crate::point3d::Point3D;

/// Half-open integer pixel rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

// helper methods
impl Rect {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Rect { min_x, min_y, max_x, max_y }
    }

    /// Rectangle covering a whole `width x height` image.
    pub fn from_size(width: u32, height: u32) -> Self {
        Rect::new(0, 0, width as i32, height as i32)
    }

    /// Bounding box of a triangle's truncated x, y coordinates.
    ///
    /// The max edge is one past the largest truncated coordinate, so the
    /// box contains every pixel the inclusive inside test can accept.
    pub fn bounding(a: Point3D, b: Point3D, c: Point3D) -> Self {
        let xs = [a.x as i32, b.x as i32, c.x as i32];
        let ys = [a.y as i32, b.y as i32, c.y as i32];
        Rect {
            min_x: xs[0].min(xs[1]).min(xs[2]),
            min_y: ys[0].min(ys[1]).min(ys[2]),
            max_x: xs[0].max(xs[1]).max(xs[2]).saturating_add(1),
            max_y: ys[0].max(ys[1]).max(ys[2]).saturating_add(1),
        }
    }

    pub fn width(&self) -> i32 {
        self.max_x.saturating_sub(self.min_x).max(0)
    }

    pub fn height(&self) -> i32 {
        self.max_y.saturating_sub(self.min_y).max(0)
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, p: IPoint) -> bool {
        p.x >= self.min_x && p.x < self.max_x && p.y >= self.min_y && p.y < self.max_y
    }

    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        }
    }

    /// Pixels in x-major order, matching the rasterizer scan.
    pub fn pixels(&self) -> impl Iterator<Item = IPoint> + '_ {
        let (min_y, max_y) = (self.min_y, self.max_y);
        (self.min_x..self.max_x).flat_map(move |x| (min_y..max_y).map(move |y| IPoint { x, y }))
    }
}
