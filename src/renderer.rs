// renderer.rs
// Drawing boundary. The simulation hands one Sprite per particle per frame
// to whatever backend the host wires in; pixel-level drawing stays outside
// the crate.

use palette::Hsl;
use ultraviolet::Vec2;

use crate::particle::{Particle, Shape};

/// Everything the drawing backend needs for one particle.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub shape: Shape,
    pub center: Vec2,
    pub size: f32,
    pub color: Hsl,
    /// Request a glow/halo around the sprite while the particle is excited.
    pub glow: bool,
}

impl Sprite {
    pub fn from_particle(particle: &Particle) -> Self {
        Self {
            shape: particle.shape,
            center: particle.pos,
            size: particle.size,
            color: particle.color,
            glow: particle.excited,
        }
    }
}

pub trait Renderer {
    fn render(&mut self, sprite: &Sprite);
}

/// Backend that discards everything; headless stepping and benchmarks.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _sprite: &Sprite) {}
}

#[cfg(test)]
pub(crate) struct RecordingRenderer {
    pub sprites: Vec<Sprite>,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self { sprites: Vec::new() }
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn render(&mut self, sprite: &Sprite) {
        self.sprites.push(*sprite);
    }
}
