//! zraster: a CPU triangle rasterizer with a depth buffer.
//!
//! Triangles are scanned over their bounding box, tested per pixel with
//! barycentric weights and written through a strict `>` depth test. Shading
//! is pluggable through [`shader::Shader`]: a flat color, a texture lookup
//! scaled by a per-triangle light intensity, or any closure over a
//! [`shader::Fragment`].
//!
//! ```
//! use zraster::point3d::Point3D;
//! use zraster::rasterizer::fill_triangle;
//! use zraster::screen::{Color, ScreenSpace};
//! use zraster::shader::SolidShader;
//! use zraster::triangle::Triangle;
//!
//! let mut screen = ScreenSpace::new(100, 100, Color::BLACK);
//! let tri = Triangle::new(
//!     Point3D::new(10.0, 10.0, 5.0),
//!     Point3D::new(50.0, 10.0, 5.0),
//!     Point3D::new(10.0, 50.0, 5.0),
//! );
//! let stats = fill_triangle(&mut screen, &tri, 1.0, &SolidShader::new(Color::RED));
//! assert!(stats.written > 0);
//! assert_eq!(screen.color_at(20, 20), Some(Color::RED));
//! ```
//!
//! Mesh loading ([`obj`]), textures ([`texture`]), whole-model rendering
//! ([`render`]) and image output ([`export`]) sit around that core.

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod line;
pub mod obj;
pub mod point2d;
pub mod point3d;
pub mod rasterizer;
pub mod rectangle;
pub mod render;
pub mod screen;
pub mod shader;
pub mod texture;
pub mod triangle;

pub use error::{Error, Result};
