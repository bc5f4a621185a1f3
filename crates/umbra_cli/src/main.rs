use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use umbra_core::{builtin, load_scene, SceneDescription};
use umbra_renderer::{ImageBuffer, PixelBuffer, World, DEFAULT_BUCKET_SIZE};

/// Orthographic ray caster
#[derive(Debug, Parser)]
#[command(name = "umbra", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a scene to PNG and/or a raw float image
    Render(RenderArgs),
    /// Convert a raw float image to PNG
    Convert(ConvertArgs),
    /// List the built-in scenes
    List,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Scene description file (JSON)
    #[arg(short, long, conflicts_with = "builtin", required_unless_present = "builtin")]
    scene: Option<PathBuf>,
    /// Name of a built-in scene
    #[arg(short, long)]
    builtin: Option<String>,
    /// Where to save the tone-mapped image
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
    /// Also save the averaged linear colors as a raw float image
    #[arg(long)]
    raw: Option<PathBuf>,
    /// Override samples per pixel
    #[arg(long)]
    samples: Option<u32>,
    /// Override display gamma
    #[arg(long)]
    gamma: Option<f32>,
    /// Flag out-of-gamut pixels in red
    #[arg(long)]
    out_of_gamut: bool,
    /// Trace buckets on all cores
    #[arg(long)]
    parallel: bool,
    /// Bucket size for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Raw float image to read
    raw: PathBuf,
    /// Image width in pixels
    #[arg(long)]
    width: u32,
    /// Image height in pixels
    #[arg(long)]
    height: u32,
    /// Where to save the PNG
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
    /// Display gamma
    #[arg(long, default_value_t = 1.0)]
    gamma: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match Cli::parse().command {
        Command::Render(args) => render(args),
        Command::Convert(args) => convert(args),
        Command::List => {
            for name in builtin::NAMES {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn load(args: &RenderArgs) -> Result<SceneDescription> {
    let mut scene = match (&args.scene, &args.builtin) {
        (Some(path), _) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        (None, Some(name)) => match builtin::by_name(name) {
            Some(scene) => scene,
            None => bail!(
                "Unknown built-in scene '{}' (available: {})",
                name,
                builtin::NAMES.join(", ")
            ),
        },
        (None, None) => bail!("Either --scene or --builtin is required"),
    };

    if let Some(samples) = args.samples {
        scene.view_plane.samples = samples;
    }
    if let Some(gamma) = args.gamma {
        scene.view_plane.gamma = gamma;
    }
    if args.out_of_gamut {
        scene.view_plane.show_out_of_gamut = true;
    }
    scene.validate().context("Invalid render settings")?;

    Ok(scene)
}

fn render(args: RenderArgs) -> Result<()> {
    let scene = load(&args)?;
    let start = Instant::now();
    let world = World::build(&scene);
    log::info!("Scene '{}' built in {:?}", scene.name, start.elapsed());

    let image = if args.parallel {
        world.render_image_parallel(args.bucket_size)
    } else {
        world.render_image()
    }
    .context("Render failed")?;

    if let Some(raw) = &args.raw {
        image
            .save_raw(raw)
            .with_context(|| format!("Failed to write raw image {}", raw.display()))?;
        log::info!("Saved raw image to {}", raw.display());
    }

    let mut pixels = PixelBuffer::new(image.width, image.height);
    world.display_image(&image, &mut pixels);
    pixels
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let image = ImageBuffer::load_raw(&args.raw, args.width, args.height)
        .with_context(|| format!("Failed to read raw image {}", args.raw.display()))?;

    let mut world = World::new();
    world.vp.set_hres(args.width);
    world.vp.set_vres(args.height);
    world.vp.set_gamma(args.gamma);
    world.vp.validate().context("Invalid conversion settings")?;

    let mut pixels = PixelBuffer::new(args.width, args.height);
    world.display_image(&image, &mut pixels);
    pixels
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Converted {} to {}", args.raw.display(), args.output.display());

    Ok(())
}
