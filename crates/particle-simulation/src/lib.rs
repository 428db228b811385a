//! # Particle Simulation
//!
//! Runs a balls-and-springs scene tick by tick: gravity kick, fixed-step
//! integration with springs and walls, then a frame for the renderer.

pub mod clock;
pub mod error;
pub mod params;
pub mod render;
pub mod simulation;

pub use clock::*;
pub use error::*;
pub use params::*;
pub use render::*;
pub use simulation::*;
