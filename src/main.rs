use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use moodcolor::config::{get_config, DEFAULT_CONFIG_PATH};
use moodcolor::{Interpolator, Point, Rasterizer, Settings, DEFAULT_STEP};
use palette::Srgb;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_SIZE: u32 = 400;
const AXIS_COLOR: Srgb<u8> = Srgb::new(128, 128, 128);

#[derive(Parser, Debug)]
#[command(name = "moodcolor", version)]
struct Cli {
    /// Settings file (JSON); the extension may be omitted.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the emotion color space as a PNG.
    Render(RenderArgs),
    /// Print the color of one (valence, energy) pair as `r,g,b`.
    Color(ColorArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Block size in pixels; 1 evaluates every pixel.
    #[arg(long)]
    step: Option<u32>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Draw gray valence and energy axes through the center.
    #[arg(long)]
    axes: bool,

    #[command(flatten)]
    grid: GridArgs,
}

#[derive(Parser, Debug)]
struct ColorArgs {
    #[arg(long, allow_negative_numbers = true)]
    valence: f64,

    #[arg(long, allow_negative_numbers = true)]
    energy: f64,

    /// Inputs are in [0, 1] rather than [-1, 1].
    #[arg(long)]
    unit: bool,

    /// Render the colormap and read the color back from it.
    #[arg(long)]
    pick: bool,

    #[command(flatten)]
    grid: GridArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings =
        get_config(&cli.config).with_context(|| format!("load settings '{}'", cli.config))?;
    let interpolator = settings
        .interpolator()
        .context("build color space from settings")?;

    match cli.cmd {
        Command::Render(args) => cmd_render(&settings, &interpolator, args),
        Command::Color(args) => cmd_color(&settings, &interpolator, args),
    }
}

fn render(
    settings: &Settings,
    interpolator: &Interpolator,
    grid: &GridArgs,
) -> anyhow::Result<moodcolor::Canvas> {
    let Settings {
        width,
        height,
        step,
        ..
    } = settings;

    let width = grid.width.or(*width).unwrap_or(DEFAULT_SIZE);
    let height = grid.height.or(*height).unwrap_or(DEFAULT_SIZE);
    let step = grid.step.or(*step).unwrap_or(DEFAULT_STEP);

    let canvas = Rasterizer::new(interpolator)
        .with_step(step)?
        .render(width, height)?;

    Ok(canvas)
}

fn cmd_render(
    settings: &Settings,
    interpolator: &Interpolator,
    args: RenderArgs,
) -> anyhow::Result<()> {
    let mut canvas = render(settings, interpolator, &args.grid)?;

    if args.axes {
        canvas.draw_axes(AXIS_COLOR);
    }

    canvas
        .as_image()
        .save(&args.out)
        .with_context(|| format!("write colormap '{}'", args.out.display()))?;

    info!(
        path = %args.out.display(),
        width = canvas.width(),
        height = canvas.height(),
        "colormap written"
    );

    Ok(())
}

fn cmd_color(
    settings: &Settings,
    interpolator: &Interpolator,
    args: ColorArgs,
) -> anyhow::Result<()> {
    let point = if args.unit {
        Point::from_unit(args.valence, args.energy)
    } else {
        Point::new(args.valence, args.energy)
    };

    let color = if args.pick {
        render(settings, interpolator, &args.grid)?
            .pick(point)
            .with_context(|| format!("({}, {}) lies outside the colormap", point.x, point.y))?
    } else {
        interpolator.rgb_at(point)
    };

    info!(valence = point.x, energy = point.y, "color resolved");

    println!("{},{},{}", color.red, color.green, color.blue);

    Ok(())
}
