//! Scenario replay entry point.
//!
//! Usage: `interact-sim <scenario.ron>`
use std::path::PathBuf;

use anyhow::{Context, Result};
use interaction_content::ScenarioLoader;
use interaction_sim::{SimConfig, Simulation, presentation};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: interact-sim <scenario.ron>")?;

    let config = SimConfig::from_env()?;
    let scenario = ScenarioLoader::load(&path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    tracing::info!(
        scenario = %path.display(),
        targets = scenario.targets.len(),
        frames = scenario.frames.len(),
        "replaying scenario"
    );

    let mut simulation = Simulation::new(config, scenario)?;
    simulation.run(|outcome| println!("{}", presentation::render_line(outcome)));

    for target in simulation.world().targets() {
        println!("{}: {} interaction(s)", target.id(), target.interactions());
    }

    Ok(())
}
