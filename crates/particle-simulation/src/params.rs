//! Simulation parameters for runtime tuning

use std::time::Duration;

use particle_physics::{
    Boundary, Spring, ARENA_HEIGHT, ARENA_WIDTH, BALL_DENSITY, BALL_RADIUS, GRAVITY_AMPLIFICATION,
    GRAVITY_CUTOFF, SPRING_DAMPING, SPRING_REST_LENGTH, SPRING_STIFFNESS, TARGET_TICK_RATE,
    TIME_STEP, WALL_ELASTICITY, WALL_THICKNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    // Integration
    /// Fixed physics step per tick, independent of wall-clock frame time
    pub dt: f32,
    /// Presentation ticks per second; 0 disables pacing
    pub tick_rate: u32,

    // Gravity
    pub gravity_amplification: f32,
    pub gravity_cutoff: f32,

    // Springs
    pub spring_rest_length: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,

    // Balls & arena
    pub ball_radius: f32,
    pub ball_density: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub wall_thickness: f32,
    pub wall_elasticity: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            dt: TIME_STEP,
            tick_rate: TARGET_TICK_RATE,

            gravity_amplification: GRAVITY_AMPLIFICATION,
            gravity_cutoff: GRAVITY_CUTOFF,

            spring_rest_length: SPRING_REST_LENGTH,
            spring_stiffness: SPRING_STIFFNESS,
            spring_damping: SPRING_DAMPING,

            ball_radius: BALL_RADIUS,
            ball_density: BALL_DENSITY,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            wall_elasticity: WALL_ELASTICITY,
        }
    }
}

impl SimulationParams {
    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Scale of the per-tick gravity kick; 0 turns gravity off
    pub fn with_gravity_amplification(mut self, amplification: f32) -> Self {
        self.gravity_amplification = amplification;
        self
    }

    pub fn with_ball_density(mut self, density: f32) -> Self {
        self.ball_density = density;
        self
    }

    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    /// Template every new spring copies its physical constants from
    pub fn spring_template(&self) -> Spring {
        Spring::new(0, 0)
            .with_rest_length(self.spring_rest_length)
            .with_stiffness(self.spring_stiffness)
            .with_damping(self.spring_damping)
    }

    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.arena_width, self.arena_height)
            .with_thickness(self.wall_thickness)
            .with_elasticity(self.wall_elasticity)
    }

    /// Wall-clock budget of one presented tick, `None` when unpaced
    pub fn frame_duration(&self) -> Option<Duration> {
        crate::clock::frame_time(self.tick_rate)
    }
}
