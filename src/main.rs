use std::fs::File;
use std::sync::Mutex;
use std::{io, process};

use anyhow::{Context, Result, bail};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use studio_walk::{config::GameConfig, engine::Game, runtime::Runtime};

const LOG_FILE: &str = "studio-walk.log";

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const PLAY_USAGE: &str = "studio-walk [play]";
const SCENE_USAGE: &str = "studio-walk scene";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None | Some("play") => play(),
        Some("scene") => scene(),
        _ => bail!(
            "Studio Walk — two rooms, one door, a desk and a nailed bunny\n\nUsage:\n  {PLAY_USAGE}\n  {SCENE_USAGE}"
        ),
    }
}

fn play() -> Result<()> {
    init_tracing()?;
    info!(version = env!("CARGO_PKG_VERSION"), "=== Studio Walk startup ===");

    let config = GameConfig::load();
    let mut runtime = Runtime::new(Game::new(), config);
    runtime.run()?;

    info!("=== Studio Walk shutdown ===");
    Ok(())
}

/// Dump the first frame's draw instructions as JSON.
fn scene() -> Result<()> {
    let scene = Game::new().resolve();
    serde_json::to_writer_pretty(io::stdout().lock(), &scene)
        .context("Failed to write scene")?;
    println!();
    Ok(())
}

/// The terminal is the screen, so logs go to a file in the temp directory.
fn init_tracing() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}
