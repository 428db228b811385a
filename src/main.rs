//! Balls, Springs and Gravity
//!
//! Usage: `ball-springs [--frames N] [--seed S] 1a2 3x0 ...`
//!
//! Every argument describes one spring by embedding two ball numbers (1-9);
//! a `0` in either slot creates the ball without a spring.

mod cli_args;
mod headless;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli_args::Args;
use headless::HeadlessRenderer;
use particle_physics::{parse_args, TopologyError};
use particle_simulation::{FrameLimiter, Simulation, SimulationError, SimulationParams};

fn run(args: Args) -> Result<(), SimulationError> {
    let config = parse_args(args.scene_tokens())
        .map_err(|source| SimulationError::Topology { source })?;
    log::info!(
        "✓ Parsed {} spring descriptors for {} balls",
        config.descriptors.len(),
        config.particle_count
    );

    let params = SimulationParams::default();
    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("✓ Seeding ball positions with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut simulation = Simulation::from_scene(&config, params, &mut rng)?;
    let mut renderer = HeadlessRenderer::new(args.frames);
    let mut limiter = FrameLimiter::with_rate(params.tick_rate);

    simulation.run(&mut renderer, &mut limiter)
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting balls, springs and gravity simulation...");

    match run(args) {
        Ok(()) => {}
        Err(SimulationError::Topology {
            source: TopologyError::InvalidInvocation,
        }) => {
            log::error!("Invalid program call arguments!");
        }
        Err(err) => log::error!("{}", snafu::Report::from_error(err)),
    }

    log::info!("The simulation ran correctly!");
}
