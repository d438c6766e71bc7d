/*
 * Orbital Sandbox
 *
 * Hold the left mouse button to grow a body, drag while holding to give it
 * a fling, and release to let it go. Every body pulls on every other body,
 * and when two overlap the heavier one swallows the lighter.
 *
 * Left control suppresses body creation, Tab clears the sandbox.
 */

use anyhow::Result;
use clap::Parser;

use orbital_sandbox::app::{self, LaunchOptions};
use orbital_sandbox::SimulationParams;

#[derive(Parser, Debug)]
#[command(about = "Interactive gravitational N-body sandbox")]
struct Args {
    /// Seed for body colors and trail jitter; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,
}

fn main() -> Result<()> {
    // Info level unless RUST_LOG overrides; keep the GPU backend quiet
    let default = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();

    let params = SimulationParams {
        tick_rate: args.tick_rate,
        ..Default::default()
    };

    app::run(LaunchOptions { params, seed: args.seed })?;
    Ok(())
}
