//! Point-mass balls

use glam::Vec2;

use crate::constants::{ball_mass, BALL_DENSITY, BALL_RADIUS};

/// A ball: a point mass with a fixed collision radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Centre of the ball
    pub position: Vec2,
    /// Linear velocity
    pub velocity: Vec2,
    mass: f32,
    radius: f32,
}

impl Particle {
    /// Create a ball at rest with the default radius and the mass that goes with it
    pub fn new(position: Vec2) -> Self {
        Self::with_radius(position, BALL_RADIUS)
    }

    /// Create a ball at rest with a custom radius
    pub fn with_radius(position: Vec2, radius: f32) -> Self {
        Self::with_density(position, radius, BALL_DENSITY)
    }

    /// Create a ball at rest whose mass comes from its area at `density`
    pub fn with_density(position: Vec2, radius: f32, density: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: ball_mass(radius, density),
            radius,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Apply an instantaneous impulse at the ball's centre.
    ///
    /// Only linear velocity changes; a point mass has nothing to spin.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if self.mass > 0.0 {
            self.velocity += impulse / self.mass;
        }
    }
}
