//! Command line arguments

use clap::Parser;

/// Balls joined by springs, pulled together by gravity, inside a walled arena
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Spring descriptors such as `1a2` or `3x0`: two ball numbers (1-9) per
    /// token, where a `0` adds the ball without a spring
    pub descriptors: Vec<String>,

    /// Stop after presenting this many frames; runs until killed when unset
    #[arg(short('f'), long, env = "BALL_SPRINGS_FRAMES")]
    pub frames: Option<u64>,

    /// Seed for the initial ball positions; random when unset
    #[arg(short('s'), long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Argument tokens in program-call order, the binary name first
    pub fn scene_tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(env!("CARGO_PKG_NAME")).chain(self.descriptors.iter().map(String::as_str))
    }
}
