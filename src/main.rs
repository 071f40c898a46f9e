//! swipe-replay - replay a recorded input scenario through the gesture recognizer
//!
//! Prints one line per recognized gesture, as text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swipe_input::{replay, GestureConfig, GestureRecognizer, Scenario};

#[derive(Parser, Debug)]
#[command(name = "swipe-replay")]
#[command(about = "Replay recorded touch input through the swipe gesture recognizer", long_about = None)]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Gesture config file (TOML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print gestures as JSON lines
    #[arg(short, long)]
    json: bool,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet by default, verbose with --debug
    let default_filter = if args.debug {
        "debug,swipe_input=trace"
    } else {
        "warn,swipe_input=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => GestureConfig::load(path)
            .with_context(|| format!("failed to load gesture config {}", path.display()))?,
        None => GestureConfig::default(),
    };
    let scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("failed to load scenario {}", args.scenario.display()))?;

    let mut recognizer = GestureRecognizer::new(config);
    let events = replay(&mut recognizer, &scenario);

    for replayed in &events {
        if args.json {
            println!("{}", serde_json::to_string(replayed)?);
        } else {
            println!("tick {:>5}  {:?}", replayed.tick, replayed.event);
        }
    }

    info!(
        ticks = scenario.ticks.len(),
        gestures = events.len(),
        "Replay complete"
    );
    Ok(())
}
