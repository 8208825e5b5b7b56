//! Color derivation for the four display modes.
//!
//! Colors are HSL with fixed 100% saturation and 50% lightness; only the hue
//! varies. The creation-time draw and the per-frame update are deliberately
//! asymmetric: random mode samples a hue once at creation and is a no-op
//! afterwards, while energy/speed/rainbow recompute every frame.

use palette::Hsl;

use crate::config::{ColorMode, ENERGY_HUE_SCALE, SPEED_HUE_SCALE};
use crate::particle::Particle;
use crate::sampler::Sampler;

/// Display color at the given hue (degrees), full saturation, half lightness.
pub fn hsl(hue: f32) -> Hsl {
    Hsl::new(hue, 1.0, 0.5)
}

/// Color assigned when a particle is created.
pub fn initial_color(mode: ColorMode, particle: &Particle, sampler: &mut dyn Sampler) -> Hsl {
    match mode {
        ColorMode::Random => hsl(sampler.range(0.0, 360.0)),
        ColorMode::Energy => hsl(particle.energy * ENERGY_HUE_SCALE),
        ColorMode::Speed => hsl(particle.speed() * SPEED_HUE_SCALE),
        ColorMode::Rainbow => hsl(particle.hue),
    }
}

/// Per-frame recompute of the stored display color. Rainbow mode also
/// advances the particle's hue by one degree, wrapping at 360.
pub fn update_color(mode: ColorMode, particle: &mut Particle) {
    match mode {
        ColorMode::Energy => particle.color = hsl(particle.energy * ENERGY_HUE_SCALE),
        ColorMode::Speed => particle.color = hsl(particle.speed() * SPEED_HUE_SCALE),
        ColorMode::Rainbow => {
            particle.hue = (particle.hue + 1.0) % 360.0;
            particle.color = hsl(particle.hue);
        }
        ColorMode::Random => {}
    }
}
