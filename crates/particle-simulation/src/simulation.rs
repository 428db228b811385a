//! Simulation context and per-tick stepping
//!
//! A tick applies the gravity kick from a snapshot of all positions, then
//! advances every ball by one fixed step: positions move with the current
//! velocity, springs push velocities, walls reflect anything touching them.

use glam::Vec2;
use particle_physics::{
    apply_gravity, spring_force, Boundary, Particle, SceneConfig, SpringNetwork,
};
use rand::Rng;
use snafu::ResultExt;

use crate::clock::FrameLimiter;
use crate::error::{NonFiniteStateSnafu, SimulationError, TopologySnafu};
use crate::render::{Frame, ParticleInstance, RenderSink};
use crate::SimulationParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Terminated,
}

/// Owns every ball, spring and wall of one run
pub struct Simulation {
    params: SimulationParams,
    particles: Vec<Particle>,
    springs: SpringNetwork,
    boundary: Boundary,

    state: SimulationState,
    tick: u64,
    time: f32,
}

impl Simulation {
    pub fn new(particles: Vec<Particle>, springs: SpringNetwork, params: SimulationParams) -> Self {
        Self {
            boundary: params.boundary(),
            params,
            particles,
            springs,
            state: SimulationState::Running,
            tick: 0,
            time: 0.0,
        }
    }

    /// Scatter `config.particle_count` balls over the arena and link them per the descriptors
    pub fn from_scene<R: Rng>(
        config: &SceneConfig,
        params: SimulationParams,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let particles = spawn_particles(config.particle_count, &params, rng);
        let springs = SpringNetwork::from_descriptors(
            &config.descriptors,
            particles.len(),
            params.spring_template(),
        )
        .context(TopologySnafu)?;

        log::info!(
            "Built scene: {} balls, {} springs, {}×{} arena",
            particles.len(),
            springs.len(),
            params.arena_width,
            params.arena_height
        );

        Ok(Self::new(particles, springs, params))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn springs(&self) -> &SpringNetwork {
        &self.springs
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds elapsed
    pub fn time(&self) -> f32 {
        self.time
    }

    /// External stop signal; takes effect before the next tick
    pub fn stop(&mut self) {
        self.state = SimulationState::Terminated;
    }

    /// Advance one tick: gravity kick, then one fixed integration step
    pub fn step(&mut self) -> Result<(), SimulationError> {
        apply_gravity(
            &mut self.particles,
            self.params.gravity_cutoff,
            self.params.gravity_amplification,
        );
        self.integrate(self.params.dt);

        self.tick += 1;
        self.time += self.params.dt;

        match self.particles.iter().position(|p| !p.position.is_finite()) {
            Some(index) => NonFiniteStateSnafu {
                index,
                tick: self.tick,
            }
            .fail(),
            None => Ok(()),
        }
    }

    fn integrate(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.position += particle.velocity * dt;
        }

        let mut forces = vec![Vec2::ZERO; self.particles.len()];
        for spring in self.springs.iter() {
            let f = spring_force(spring, &self.particles[spring.a], &self.particles[spring.b]);
            forces[spring.a] += f;
            forces[spring.b] -= f;
        }
        for (particle, force) in self.particles.iter_mut().zip(forces) {
            particle.apply_impulse(force * dt);
        }

        for particle in &mut self.particles {
            self.boundary.contain(particle);
        }
    }

    pub fn frame(&self) -> Frame {
        let particles = self
            .particles
            .iter()
            .map(|p| ParticleInstance {
                position: p.position.to_array(),
                radius: p.radius(),
                _padding: 0.0,
            })
            .collect();
        let springs = self
            .springs
            .iter()
            .map(|s| [self.particles[s.a].position, self.particles[s.b].position])
            .collect();

        Frame {
            tick: self.tick,
            time: self.time,
            particles,
            springs,
            walls: self.boundary.walls.map(|w| [w.start, w.end]),
        }
    }

    /// Tick until stopped: by [`Simulation::stop`], by the sink returning
    /// `false`, or by a failing tick. A failure terminates the run and is
    /// returned as is.
    pub fn run<S: RenderSink + ?Sized>(
        &mut self,
        sink: &mut S,
        limiter: &mut FrameLimiter,
    ) -> Result<(), SimulationError> {
        log::info!("Simulation running ({} s per tick)", self.params.dt);
        while self.state == SimulationState::Running {
            if let Err(err) = self.step() {
                self.stop();
                return Err(err);
            }
            if !sink.present(&self.frame()) {
                log::info!("Stop requested after tick {}", self.tick);
                self.stop();
            }
            limiter.wait();
        }
        log::info!(
            "Simulation terminated after {} ticks ({:.3} simulated s)",
            self.tick,
            self.time
        );
        Ok(())
    }
}

/// Balls at rest on random whole-pixel positions inside the arena
pub fn spawn_particles<R: Rng>(
    count: usize,
    params: &SimulationParams,
    rng: &mut R,
) -> Vec<Particle> {
    let max_x = params.arena_width.max(0.0) as u32;
    let max_y = params.arena_height.max(0.0) as u32;
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..=max_x) as f32;
            let y = rng.random_range(0..=max_y) as f32;
            Particle::with_density(Vec2::new(x, y), params.ball_radius, params.ball_density)
        })
        .collect()
}
