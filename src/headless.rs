//! Render sink that draws nothing and logs instead

use particle_simulation::{Frame, RenderSink};

pub struct HeadlessRenderer {
    frame_budget: Option<u64>,
    presented: u64,
}

impl HeadlessRenderer {
    /// Stop after `frame_budget` frames, or never with `None`
    pub fn new(frame_budget: Option<u64>) -> Self {
        Self {
            frame_budget,
            presented: 0,
        }
    }
}

impl RenderSink for HeadlessRenderer {
    fn present(&mut self, frame: &Frame) -> bool {
        self.presented += 1;

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "tick {} t={:.3}s, {} balls, {} springs ({} instance bytes)",
                frame.tick,
                frame.time,
                frame.particles.len(),
                frame.springs.len(),
                frame.instance_bytes().len()
            );
            for (i, p) in frame.particles.iter().enumerate() {
                log::debug!(
                    "    [{}] pos=({:.2}, {:.2}) r={:.1}",
                    i + 1,
                    p.position[0],
                    p.position[1],
                    p.radius
                );
            }
        }

        match self.frame_budget {
            Some(budget) => self.presented < budget,
            None => true,
        }
    }
}
