// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flycam")]
#[command(about = "Free-flying camera demo", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in borderless fullscreen
    #[arg(long, default_value = "false")]
    pub fullscreen: bool,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Camera movement per frame
    #[arg(long)]
    pub speed: Option<f32>,

    /// Mouse look sensitivity in degrees per pixel
    #[arg(long)]
    pub sensitivity: Option<f32>,
}
