//! Errors from building or stepping a simulation

use particle_physics::TopologyError;

#[derive(Debug, snafu::Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SimulationError {
    /// The scene description could not be turned into particles and springs
    #[snafu(display("Invalid scene"))]
    Topology { source: TopologyError },

    /// A tick produced a position that is NaN or infinite
    #[snafu(display("Particle {index} left the finite plane on tick {tick}"))]
    NonFiniteState { index: usize, tick: u64 },
}
