//! Errors raised by the I/O collaborators around the rasterizer.
//!
//! The raster path itself is infallible; everything here comes from reading
//! meshes, textures or configuration, or from writing images.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{path}: line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("line {line}: {kind} index {index} out of range (have {len})")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("texture data is {actual} bytes, expected {expected} for {width}x{height}")]
    TextureSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
