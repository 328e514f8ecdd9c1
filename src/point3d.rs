use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3D { x, y, z }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Point3D { x: v[0], y: v[1], z: v[2] }
    }

    /// Sum of the components, handy for checking barycentric weights.
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }
}

impl Add for Point3D {
    type Output = Point3D;
    fn add(self, other: Point3D) -> Point3D {
        Point3D { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl Sub for Point3D {
    type Output = Point3D;
    fn sub(self, other: Point3D) -> Point3D {
        Point3D { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f64> for Point3D {
    type Output = Point3D;
    fn mul(self, scalar: f64) -> Point3D {
        Point3D { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

impl Div<f64> for Point3D {
    type Output = Point3D;
    fn div(self, scalar: f64) -> Point3D {
        Point3D { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}

impl Neg for Point3D {
    type Output = Point3D;
    fn neg(self) -> Point3D {
        Point3D { x: -self.x, y: -self.y, z: -self.z }
    }
}

pub fn dot3(a: Point3D, b: Point3D) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn cross3(a: Point3D, b: Point3D) -> Point3D {
    Point3D {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

/// Componentwise product.
pub fn scale3(a: Point3D, b: Point3D) -> Point3D {
    Point3D { x: a.x * b.x, y: a.y * b.y, z: a.z * b.z }
}

pub fn normalize(vec: Point3D) -> Point3D {
    let length = dot3(vec, vec).sqrt();
    if length != 0.0 { vec / length } else { vec }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Point3D::new(1.0, 0.0, 0.0);
        let y = Point3D::new(0.0, 1.0, 0.0);
        assert_eq!(cross3(x, y), Point3D::new(0.0, 0.0, 1.0));
        assert_eq!(cross3(y, x), Point3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalize_keeps_zero_vector() {
        assert_eq!(normalize(Point3D::default()), Point3D::default());
        let n = normalize(Point3D::new(3.0, 0.0, 4.0));
        assert!((dot3(n, n) - 1.0).abs() < 1e-12);
        assert_eq!(n, Point3D::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn componentwise_scale() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(2.0, 0.5, -1.0);
        assert_eq!(scale3(a, b), Point3D::new(2.0, 1.0, -3.0));
        assert_eq!(a.sum(), 6.0);
    }
}
