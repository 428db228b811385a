//! What the simulation hands to whoever draws it

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One ball as a renderer sees it. Laid out for direct upload to an instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub radius: f32,
    pub _padding: f32,
}

/// Read-only snapshot of one tick
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick: u64,
    /// Simulated seconds elapsed
    pub time: f32,
    pub particles: Vec<ParticleInstance>,
    /// Endpoints of every spring
    pub springs: Vec<[Vec2; 2]>,
    /// Endpoints of the four walls
    pub walls: [[Vec2; 2]; 4],
}

impl Frame {
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }
}

/// Draws frames. Called once per tick; returning `false` asks the simulation to stop.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame) -> bool;
}
