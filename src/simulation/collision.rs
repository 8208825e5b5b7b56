// simulation/collision.rs
// All-pairs interaction scan and collision resolution for high-energy mode.

use crate::config::{EXCITE_BONUS, EXCITE_CHANCE, FORCE_RADIUS};
use crate::particle::Particle;
use crate::sampler::Sampler;

use super::forces;

/// Scan every other particle on behalf of `particles[i]`: overlapping pairs
/// collide, pairs inside `FORCE_RADIUS` exchange a charge-force nudge.
///
/// Collisions mutate both sides, so an interacting pair is visited twice per
/// frame (once from each side) and pooling plus the velocity swap apply twice.
/// Callers rely on that double application; do not deduplicate the pairs.
pub fn interact(particles: &mut [Particle], sampler: &mut dyn Sampler, i: usize) {
    for j in 0..particles.len() {
        if j == i {
            continue;
        }
        let delta = particles[j].pos - particles[i].pos;
        let d = delta.mag();

        if d < particles[i].size + particles[j].size {
            let (a, b) = pair_mut(particles, i, j);
            resolve_collision(a, b, sampler);
        }

        // Coincident centers would divide by zero; the collision above still
        // fires, only the force term is skipped.
        if d > 0.0 && d < FORCE_RADIUS {
            let nudge = forces::charge_nudge(&particles[i], &particles[j], delta, d);
            particles[i].vel += nudge;
        }
    }
}

/// Collision response: pool energy to the average of the pair, roll
/// excitation independently for each side, and exchange velocities wholesale
/// (equal-effective-mass elastic swap).
pub fn resolve_collision(a: &mut Particle, b: &mut Particle, sampler: &mut dyn Sampler) {
    let pooled = (a.energy + b.energy) * 0.5;
    a.energy = pooled;
    b.energy = pooled;

    if sampler.chance(EXCITE_CHANCE) {
        a.excited = true;
        a.energy += EXCITE_BONUS;
    }
    if sampler.chance(EXCITE_CHANCE) {
        b.excited = true;
        b.energy += EXCITE_BONUS;
    }

    std::mem::swap(&mut a.vel, &mut b.vel);
}

fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = particles.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = particles.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
