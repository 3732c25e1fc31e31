use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::info;
use scribblepad::config::Config;
use scribblepad::draw::SurfaceFrame;
use scribblepad::draw::export::{save_png, write_png};
use scribblepad::replay;
use scribblepad::session::{RestoreCapability, read_state_file, write_state_file};
use scribblepad::surface::DrawingSurface;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scribblepad")]
#[command(
    version,
    about = "Freehand drawing surface that replays pointer scripts into PNG images"
)]
struct Cli {
    /// Config file to use instead of ~/.config/scribblepad/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Initial surface width in pixels
    #[arg(long, default_value_t = 1080)]
    width: i32,

    /// Initial surface height in pixels
    #[arg(long, default_value_t = 1920)]
    height: i32,

    /// JSON replay script of pointer events and surface changes
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// State file restored before replaying and saved afterwards
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,

    /// PNG output path (defaults to the configured export directory)
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,
}

/// State the shell keeps alongside the surface between runs.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShellState {
    runs: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };

    if cli.init_config {
        Config::create_default_file(&config_path)?;
        println!("Created {}", config_path.display());
        return Ok(());
    }

    let config = Config::load_from(&config_path)?;
    let mut surface = DrawingSurface::from_config(&config.surface);

    let mut shell_state = ShellState::default();
    if let Some(state_path) = &cli.state {
        if let Some(saved) = read_state_file(state_path, RestoreCapability::Typed)? {
            shell_state = surface.restore_state(saved);
            info!(
                "Restored {} strokes from run {}",
                surface.strokes().len(),
                shell_state.runs
            );
        }
    }

    let steps = match &cli.replay {
        Some(path) => replay::load_script(path)?,
        None => Vec::new(),
    };
    let frame = SurfaceFrame::new(0, cli.width, cli.height);
    replay::apply_steps(&mut surface, &steps, frame)?;

    let bitmap = surface
        .export_bitmap()
        .context("Failed to render surface for export")?;
    let written = match &cli.output {
        Some(path) => write_png(&bitmap, path)?,
        None => save_png(&bitmap, &config.export.to_export_config())?,
    };
    println!("{}", written.display());

    if let Some(state_path) = &cli.state {
        shell_state.runs += 1;
        let saved = surface.save_state(Some(shell_state)).context("no shell state")?;
        write_state_file(state_path, &saved)?;
    }

    Ok(())
}
