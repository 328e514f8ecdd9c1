use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use zraster::config::{RenderConfig, RenderMode};
use zraster::export;
use zraster::obj::Model;
use zraster::render::Renderer;
use zraster::texture::Texture;

/// Render a Wavefront OBJ mesh to an image on the CPU.
#[derive(Debug, Parser)]
#[command(name = "zraster", version)]
struct Args {
    /// Mesh to render
    model: PathBuf,

    /// Diffuse texture (PNG or TGA)
    #[arg(short, long)]
    texture: Option<PathBuf>,

    /// Output image
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Also write a depth map here
    #[arg(long)]
    depth_map: Option<PathBuf>,

    /// TOML render settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// flat, textured or wireframe
    #[arg(short, long)]
    mode: Option<RenderMode>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Fit the mesh into the unit cube first
    #[arg(long)]
    normalize: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if args.mode.is_some() {
        config.mode = args.mode;
    }
    let mode = config.resolve_mode(args.texture.is_some());
    log::debug!("Render mode {:?}", mode);
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.normalize_mesh |= args.normalize;

    let mut model = Model::load(&args.model)
        .with_context(|| format!("loading model {}", args.model.display()))?;
    if config.normalize_mesh {
        model.normalize();
    }
    let texture = match &args.texture {
        Some(path) => Some(Texture::load(path).with_context(|| format!("loading texture {}", path.display()))?),
        None => None,
    };

    let renderer = Renderer::new(config)?;
    let start = Instant::now();
    let (screen, summary) = renderer.render(&model, texture.as_ref());
    log::info!(
        "{} triangles rasterized in {:.2?}",
        summary.rasterized,
        start.elapsed()
    );

    export::save_color(&screen, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    if let Some(path) = &args.depth_map {
        export::save_depth_map(&screen, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
