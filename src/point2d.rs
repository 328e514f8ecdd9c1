use std::ops::{Add, Div, Mul, Neg, Sub};

/// Floating point 2D point, used for texture coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

/// Integer pixel coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

impl IPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        IPoint { x, y }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    fn mul(self, scalar: f64) -> Point2D {
        Point2D { x: self.x * scalar, y: self.y * scalar }
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;
    fn div(self, scalar: f64) -> Point2D {
        Point2D { x: self.x / scalar, y: self.y / scalar }
    }
}

impl Neg for Point2D {
    type Output = Point2D;
    fn neg(self) -> Point2D {
        Point2D { x: -self.x, y: -self.y }
    }
}

#[inline(always)]
pub fn dot2(a: Point2D, b: Point2D) -> f64 {
    a.x * b.x + a.y * b.y
}

#[inline(always)]
pub fn perp(vec: Point2D) -> Point2D {
    Point2D { x: vec.y, y: -vec.x }
}
