//! Sunray - renders the demo scene to a PNG.
//!
//! Usage: `sunray [output.png] [width] [height] [config.json]`

mod demo;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use sunray_renderer::{FrameBuffer, RenderConfig, RenderSession, Resolution};

const DEFAULT_OUTPUT: &str = "sunray.png";
const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 360;

struct Args {
    output: PathBuf,
    resolution: Resolution,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);

    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()).into();
    let width = match args.next() {
        Some(w) => w.parse().with_context(|| format!("Invalid width '{w}'"))?,
        None => DEFAULT_WIDTH,
    };
    let height = match args.next() {
        Some(h) => h.parse().with_context(|| format!("Invalid height '{h}'"))?,
        None => DEFAULT_HEIGHT,
    };
    let config = args.next().map(PathBuf::from);

    if let Some(extra) = args.next() {
        bail!("Unexpected argument '{extra}'");
    }

    Ok(Args {
        output,
        resolution: Resolution::new(width, height),
        config,
    })
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded render config from {}", path.display());
    Ok(config)
}

fn save_png(buffer: &FrameBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to save {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    let scene = demo::build_scene()?;

    let session = RenderSession::new(args.resolution, config)?;
    log::info!(
        "Rendering {}x{} in {} tiles on {} threads",
        args.resolution.width,
        args.resolution.height,
        session.tile_count(),
        rayon::current_num_threads()
    );

    let mut buffer = FrameBuffer::new(args.resolution);
    session.render(&mut buffer, &scene)?;
    drop(session);

    save_png(&buffer, &args.output)?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
