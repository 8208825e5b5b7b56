// diagnostics.rs
// Per-frame aggregates and the wall-clock FPS counter backing the host's
// stats overlay.

use std::time::{Duration, Instant};

/// Aggregates accumulated while submitting a frame to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub count: usize,
    pub total_energy: f32,
}

impl FrameStats {
    pub fn particles_line(&self) -> String {
        format!("Particles: {}", self.count)
    }

    pub fn energy_line(&self) -> String {
        format!("Energy: {}", self.total_energy.round())
    }
}

/// Frames-per-second counter sampled once per second of wall-clock time.
pub struct FpsCounter {
    frames: u32,
    fps: u32,
    last_sample: Instant,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            fps: 0,
            last_sample: Instant::now(),
        }
    }

    /// Record one rendered frame. Returns the new rate when a full second
    /// has elapsed since the previous sample.
    pub fn tick(&mut self) -> Option<u32> {
        self.frames += 1;
        if self.last_sample.elapsed() >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.last_sample = Instant::now();
            Some(self.fps)
        } else {
            None
        }
    }

    /// Most recent sampled rate.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn fps_line(&self) -> String {
        format!("FPS: {}", self.fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
