//! Wall-clock pacing for presented ticks
//!
//! Only presentation is paced. The physics step stays fixed whatever the
//! frame rate turns out to be.

use std::time::{Duration, Instant};

/// Duration of one tick at `ticks_per_second`; `None` for 0 (unpaced)
pub fn frame_time(ticks_per_second: u32) -> Option<Duration> {
    (ticks_per_second > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(ticks_per_second)))
}

pub struct FrameLimiter {
    frame_time: Option<Duration>,
    last_frame: Instant,
}

impl FrameLimiter {
    /// Limit to `frame_time` per tick, or run flat out with `None`
    pub fn new(frame_time: Option<Duration>) -> Self {
        Self {
            frame_time,
            last_frame: Instant::now(),
        }
    }

    pub fn with_rate(ticks_per_second: u32) -> Self {
        Self::new(frame_time(ticks_per_second))
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Sleep off whatever is left of the current frame budget.
    ///
    /// Returns how long the frame took before sleeping.
    pub fn wait(&mut self) -> Duration {
        let busy = self.last_frame.elapsed();
        if let Some(frame_time) = self.frame_time {
            if busy < frame_time {
                std::thread::sleep(frame_time - busy);
            }
        }
        self.last_frame = Instant::now();
        busy
    }
}
