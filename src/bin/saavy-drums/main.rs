//! saavy-drums - play a procedural drum kit through the default output
//!
//! Run with: cargo run --bin saavy-drums -- --bpm 110 --bars 8
//!
//! While the pattern plays, type k/s/h/t/c and Enter to add hits.

mod app;
mod sequencer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::DrumApp;

#[derive(Debug, Parser)]
#[command(name = "saavy-drums", version, about = "Procedural drum machine")]
struct Args {
    /// Tempo in beats per minute
    #[arg(long, default_value_t = 120.0)]
    bpm: f64,

    /// Bars to play before stopping; 0 loops forever
    #[arg(long, default_value_t = 4)]
    bars: usize,

    /// Seed for the engine's noise generators
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if !(args.bpm.is_finite() && args.bpm > 0.0) {
        color_eyre::eyre::bail!("--bpm must be a positive number, got {}", args.bpm);
    }

    DrumApp::new(args.bpm, (args.bars > 0).then_some(args.bars), args.seed).run()
}
