use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use funpaint::config::Config;
use funpaint::draw::render_background;
use funpaint::input::{DrawingSurface, SurfaceSettings, default_menu};
use funpaint::{script, util};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "funpaint")]
#[command(
    version,
    about = "Interactive drawing surface with rainbow, eraser and stamp modes"
)]
struct Cli {
    /// Session script to replay (pointer events and menu commands, one per line)
    #[arg(long, short = 's', value_name = "FILE", required_unless_present = "print_menu")]
    script: Option<PathBuf>,

    /// PNG file to write the final canvas to
    #[arg(long, short = 'o', value_name = "FILE", default_value = "funpaint.png")]
    output: PathBuf,

    /// Configuration file (defaults to ~/.config/funpaint/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width override
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=8192))]
    width: Option<i32>,

    /// Canvas height override
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=8192))]
    height: Option<i32>,

    /// Seed for rainbow brush colors (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the menu commands understood in scripts and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_menu: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_menu {
        let mut current_menu = "";
        for entry in default_menu() {
            if entry.menu != current_menu {
                println!("{}:", entry.menu);
                current_menu = entry.menu;
            }
            println!("  {:<14} {}", entry.label, entry.command);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script_path = cli
        .script
        .as_deref()
        .context("--script is required")?;
    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let steps = script::parse_script(&text)
        .with_context(|| format!("Failed to parse script {}", script_path.display()))?;

    let settings = SurfaceSettings::from_config(&config);
    let mut surface = match cli.seed {
        Some(seed) => DrawingSurface::with_seed(settings, seed),
        None => DrawingSurface::new(settings),
    };

    log::info!("Replaying {} steps from {}", steps.len(), script_path.display());
    script::run_script(&mut surface, &steps);
    if surface.in_progress().is_some() {
        log::warn!("Script ended mid-stroke; the unfinished stroke is rendered but not committed");
    }

    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    {
        let mut ctx = cairo::Context::new(&image).context("Failed to create Cairo context")?;
        render_background(&ctx, settings.erase_color);
        surface.render(&mut ctx);
    }

    let mut file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    image
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", cli.output.display()))?;

    log::info!(
        "Wrote {} shapes ({}x{}, pen {}, mode {}) to {}",
        surface.shapes().len(),
        width,
        height,
        util::color_to_name(&surface.current_color()),
        surface.mode().label(),
        cli.output.display()
    );

    Ok(())
}
