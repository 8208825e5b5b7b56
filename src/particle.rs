// Defines the particle struct (position, velocity, size, energy, charge,
// excitation state) and its creation/decay methods. The charge sign drives
// the pairwise attraction/repulsion force in high-energy mode.

use palette::Hsl;
use ultraviolet::Vec2;

use crate::color;
use crate::config::{self, WorldConfig};
use crate::sampler::Sampler;
use crate::state;

/// Outline the renderer draws for every particle. Selected globally by the
/// host UI and stamped on particles at creation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

/// Fixed ±1 charge, assigned once at creation. Modeled as an enum so a
/// particle's charge can never drift to anything other than ±1.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Charge {
    Positive,
    Negative,
}

impl Charge {
    pub fn value(self) -> f32 {
        match self {
            Charge::Positive => 1.0,
            Charge::Negative => -1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rendered size; rescaled every frame from `original_size`.
    pub size: f32,
    /// Stable baseline the per-frame size derivations start from.
    pub original_size: f32,
    pub energy: f32,
    pub charge: Charge,
    pub excited: bool,
    /// Hue in [0, 360) degrees; only read in rainbow color mode.
    pub hue: f32,
    pub shape: Shape,
    /// Stored display color. Recomputed per frame in the energy, speed and
    /// rainbow modes; in random mode it keeps the creation-time draw.
    pub color: Hsl,
}

impl Particle {
    pub fn new(pos: Vec2, config: &WorldConfig, sampler: &mut dyn Sampler) -> Self {
        let size = sampler.range(config::MIN_SIZE, config::MAX_SIZE);
        let vel = Vec2::new(sampler.range(-1.0, 1.0), sampler.range(-1.0, 1.0))
            * config.speed_scale;
        let energy = sampler.range(0.0, config::ENERGY_MAX);
        let charge = if sampler.chance(0.5) {
            Charge::Positive
        } else {
            Charge::Negative
        };
        let hue = sampler.range(0.0, 360.0);
        let mut particle = Self {
            pos,
            vel,
            size,
            original_size: size,
            energy,
            charge,
            excited: false,
            hue,
            shape: *state::CURRENT_SHAPE.lock(),
            color: Hsl::new(0.0, 1.0, 0.5),
        };
        particle.color = color::initial_color(config.color_mode, &particle, sampler);
        particle
    }

    pub fn speed(&self) -> f32 {
        self.vel.mag()
    }

    /// Linear energy drain while excited. Reaching zero ends the excitation
    /// and clamps energy in the same call.
    pub fn decay_excitement(&mut self) {
        if self.excited {
            self.energy -= config::ENERGY_DECAY;
            if self.energy <= 0.0 {
                self.excited = false;
                self.energy = 0.0;
            }
        }
    }
}
