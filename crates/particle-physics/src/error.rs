//! Errors raised while turning startup input into a scene

/// Everything that can go wrong between the raw descriptor tokens and a spring network.
#[derive(Debug, snafu::Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TopologyError {
    /// No descriptor tokens followed the program name
    #[snafu(display("Invalid program call arguments! Expected at least one spring descriptor"))]
    InvalidInvocation,

    /// A token did not embed exactly two digits
    #[snafu(display(
        "Malformed spring descriptor #{position} {token:?}: expected 2 digits, found {digits}"
    ))]
    MalformedDescriptor {
        position: usize,
        token: String,
        digits: usize,
    },

    /// A spring names a particle the scene doesn't have
    #[snafu(display("Spring endpoint {index} is out of range for {particle_count} particles"))]
    SpringEndpointOutOfRange { index: usize, particle_count: usize },
}
