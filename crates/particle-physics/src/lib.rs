//! # Particle Physics
//!
//! Force model and scene construction for a 2D balls-and-springs simulation:
//! all-pairs gravity, damped springs between chosen pairs and elastic walls
//! around a rectangular arena.

pub mod boundary;
pub mod constants;
pub mod error;
pub mod forces;
pub mod particle;
pub mod spring;
pub mod topology;

pub use boundary::*;
pub use constants::*;
pub use error::*;
pub use forces::*;
pub use particle::*;
pub use spring::*;
pub use topology::*;
