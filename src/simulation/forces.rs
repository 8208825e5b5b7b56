//! Charge force between particle pairs.
//!
//! Inverse-square in the separation distance, cut off at `FORCE_RADIUS`.
//! Like charges push apart, opposite charges pull together. Applied as a
//! direct velocity nudge rather than an accumulated acceleration.

use ultraviolet::Vec2;

use crate::config::FORCE_SCALE;
use crate::particle::Particle;

/// Velocity nudge on `a` from the charge interaction with `b`, where
/// `delta = b.pos - a.pos` and `d = |delta|`. Caller guarantees `d > 0`.
pub fn charge_nudge(a: &Particle, b: &Particle, delta: Vec2, d: f32) -> Vec2 {
    let force = a.charge.value() * b.charge.value() / (d * d);
    -(delta / d) * force * FORCE_SCALE
}
