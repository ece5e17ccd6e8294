use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use flycam::app::App;
use flycam::cli::Cli;
use flycam::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    log::debug!("{:?}", config);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(config);

    log::info!("Controls: WASD move, Space/Shift up/down, mouse look, F fullscreen, Q/Escape quit");
    event_loop.run_app(&mut app).context("event loop terminated with an error")?;

    Ok(())
}
