use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use walkthrough::app::{run_headless, LogRenderer, WalkthroughApp};
use walkthrough::cli::Cli;
use walkthrough::loaders::probe_model;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = cli.load_config()?;

    // The camera works the same with or without a model
    if let Some(path) = &cli.model {
        match probe_model(path) {
            Ok(model) => {
                log::info!(
                    "Model loaded: {} scenes, {} nodes, {} meshes",
                    model.scenes,
                    model.nodes,
                    model.meshes
                );
                if let Some(bounds) = model.bounds {
                    log::info!(
                        "Model spans {:?} to {:?}, walkable area {:?} to {:?}",
                        bounds.min,
                        bounds.max,
                        config.bounds.min,
                        config.bounds.max
                    );
                }
            }
            Err(e) => log::warn!("Continuing without a model: {:#}", e),
        }
    }

    if let Some(ticks) = cli.headless {
        let pose = run_headless(&config, ticks);
        println!("{}", serde_json::to_string_pretty(&pose)?);
        return Ok(());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = WalkthroughApp::new(&config, LogRenderer::default());

    log::info!(
        "Walkthrough - Controls: WASD/arrows move, drag to look, Space jump, Ctrl squat, Shift run, Escape quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
