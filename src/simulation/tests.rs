// Frame-level tests for the Simulation: wall reflection, pointer
// interaction, pairwise collision/force behavior, and world lifecycle.

use ultraviolet::Vec2;

use super::simulation::Simulation;
use crate::color;
use crate::config::WorldConfig;
use crate::particle::{Charge, Particle, Shape};
use crate::renderer::RecordingRenderer;
use crate::sampler::FixedSampler;
use crate::state;

fn plain_particle(pos: Vec2, vel: Vec2) -> Particle {
    Particle {
        pos,
        vel,
        size: 3.0,
        original_size: 3.0,
        energy: 100.0,
        charge: Charge::Positive,
        excited: false,
        hue: 0.0,
        shape: Shape::Circle,
        color: color::hsl(0.0),
    }
}

fn sim_with(particles: Vec<Particle>, config: WorldConfig) -> Simulation {
    Simulation {
        particles,
        width: 800.0,
        height: 600.0,
        pointer: Vec2::new(400.0, 300.0),
        config,
        frame: 0,
        sampler: Box::new(FixedSampler::constant(1.0)),
    }
}

fn high_energy_config() -> WorldConfig {
    WorldConfig {
        high_energy: true,
        ..WorldConfig::default()
    }
}

#[test]
fn wall_reflection_inverts_velocity_and_drains_energy() {
    let p = plain_particle(Vec2::new(-5.0, 300.0), Vec2::new(2.0, 0.0));
    let mut sim = sim_with(vec![p], high_energy_config());
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.vel.x, -2.0);
    assert_eq!(p.pos.x, -3.0, "reflection flips velocity without clamping");
    assert_eq!(p.energy, 100.0 * 0.95);
}

#[test]
fn wall_reflection_in_normal_mode_keeps_energy() {
    let p = plain_particle(Vec2::new(-5.0, 300.0), Vec2::new(2.0, 0.0));
    let mut sim = sim_with(vec![p], WorldConfig::default());
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.vel.x, -2.0);
    assert_eq!(p.energy, 100.0);
}

#[test]
fn floor_reflection_is_independent_of_x() {
    let p = plain_particle(Vec2::new(400.0, 599.0), Vec2::new(0.0, 3.0));
    let mut sim = sim_with(vec![p], WorldConfig::default());
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.vel.y, -3.0);
    assert_eq!(p.vel.x, 0.0);
}

#[test]
fn gravity_accelerates_before_integration() {
    let p = plain_particle(Vec2::new(400.0, 100.0), Vec2::zero());
    let config = WorldConfig {
        gravity: 0.5,
        ..WorldConfig::default()
    };
    let mut sim = sim_with(vec![p], config);
    sim.pointer = Vec2::zero();
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.vel.y, 0.5);
    assert_eq!(p.pos.y, 100.5, "the fresh gravity increment moves the particle this frame");
}

#[test]
fn high_energy_size_and_color_track_energy() {
    let p = plain_particle(Vec2::new(400.0, 300.0), Vec2::zero());
    let mut sim = sim_with(vec![p], high_energy_config());
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.size, 3.0 * 1.5);
    assert_eq!(p.color.hue.into_positive_degrees(), 200.0);
}

#[test]
fn colliding_pair_pools_energy() {
    let mut a = plain_particle(Vec2::new(100.0, 100.0), Vec2::zero());
    let mut b = plain_particle(Vec2::new(101.0, 100.0), Vec2::zero());
    a.energy = 40.0;
    b.energy = 60.0;
    let mut sim = sim_with(vec![a, b], high_energy_config());
    sim.step();
    // The constant-1.0 sampler never excites, so both sides hold the pooled
    // average even though the pair resolved twice.
    assert_eq!(sim.particles[0].energy, 50.0);
    assert_eq!(sim.particles[1].energy, 50.0);
}

#[test]
fn pair_effects_apply_twice_per_frame() {
    let mut a = plain_particle(Vec2::new(100.0, 100.0), Vec2::zero());
    let mut b = plain_particle(Vec2::new(101.0, 100.0), Vec2::zero());
    a.energy = 40.0;
    b.energy = 60.0;
    let mut sim = sim_with(vec![a, b], high_energy_config());
    // First excitation roll succeeds for particle 0; all later rolls fail.
    sim.sampler = Box::new(FixedSampler::sequence(vec![0.0, 1.0], 1.0));
    sim.step();
    // Pass one: pool to 50, excite particle 0 to 100, decay to 99.5.
    // Pass two (from particle 1's scan): pool again to (99.5 + 50) / 2.
    assert_eq!(sim.particles[0].energy, 74.75);
    assert_eq!(sim.particles[1].energy, 74.75);
    assert!(sim.particles[0].excited);
    assert!(!sim.particles[1].excited);
}

#[test]
fn opposite_charges_drift_toward_each_other() {
    let mut a = plain_particle(Vec2::new(200.0, 300.0), Vec2::zero());
    let mut b = plain_particle(Vec2::new(250.0, 300.0), Vec2::zero());
    a.size = 1.0;
    a.original_size = 1.0;
    b.size = 1.0;
    b.original_size = 1.0;
    a.charge = Charge::Positive;
    b.charge = Charge::Negative;
    let mut sim = sim_with(vec![a, b], high_energy_config());
    sim.step();
    assert!(sim.particles[0].vel.x > 0.0, "left particle pulled right");
    assert!(sim.particles[1].vel.x < 0.0, "right particle pulled left");
}

#[test]
fn like_charges_drift_apart() {
    let mut a = plain_particle(Vec2::new(200.0, 300.0), Vec2::zero());
    let mut b = plain_particle(Vec2::new(250.0, 300.0), Vec2::zero());
    a.size = 1.0;
    a.original_size = 1.0;
    b.size = 1.0;
    b.original_size = 1.0;
    let mut sim = sim_with(vec![a, b], high_energy_config());
    sim.step();
    assert!(sim.particles[0].vel.x < 0.0, "left particle pushed left");
    assert!(sim.particles[1].vel.x > 0.0, "right particle pushed right");
}

#[test]
fn pointer_hover_grows_and_attracts() {
    let p = plain_particle(Vec2::new(350.0, 300.0), Vec2::zero());
    let mut sim = sim_with(vec![p], WorldConfig::default());
    sim.pointer = Vec2::new(400.0, 300.0);
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.size, 6.0);
    assert_eq!(p.pos.x, 350.0 + 50.0 * 0.03);
    assert_eq!(p.pos.y, 300.0);
}

#[test]
fn far_pointer_leaves_size_and_position_alone() {
    let p = plain_particle(Vec2::new(100.0, 300.0), Vec2::zero());
    let mut sim = sim_with(vec![p], WorldConfig::default());
    sim.pointer = Vec2::new(400.0, 300.0);
    for _ in 0..2 {
        sim.step();
        let p = &sim.particles[0];
        assert_eq!(p.size, p.original_size);
        assert_eq!(p.pos, Vec2::new(100.0, 300.0));
    }
}

#[test]
fn excitation_ends_in_the_update_that_drains_it() {
    let mut p = plain_particle(Vec2::new(400.0, 300.0), Vec2::zero());
    p.excited = true;
    p.energy = 0.2;
    let mut sim = sim_with(vec![p], WorldConfig::default());
    sim.step();
    let p = &sim.particles[0];
    assert_eq!(p.energy, 0.0);
    assert!(!p.excited);
}

#[test]
fn reset_leaves_one_centered_particle() {
    let particles = vec![
        plain_particle(Vec2::new(10.0, 10.0), Vec2::zero()),
        plain_particle(Vec2::new(20.0, 20.0), Vec2::zero()),
    ];
    let mut sim = sim_with(particles, high_energy_config());
    sim.reset();
    assert_eq!(sim.particles.len(), 1);
    assert_eq!(sim.particles[0].pos, Vec2::new(400.0, 300.0));
    assert!(!sim.particles[0].excited);
    assert!(!sim.config.high_energy);
}

#[test]
fn resize_repopulates_inside_the_new_viewport() {
    let config = WorldConfig {
        initial_count: 4,
        ..WorldConfig::default()
    };
    let mut sim = sim_with(Vec::new(), config);
    sim.resize(400.0, 200.0);
    assert_eq!(sim.width, 400.0);
    assert_eq!(sim.particles.len(), 4);
    for p in &sim.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 200.0);
    }
}

#[test]
fn normal_click_spawns_a_burst_of_particles() {
    let mut sim = sim_with(Vec::new(), WorldConfig::default());
    sim.spawn_at(10.0, 20.0);
    assert_eq!(sim.particles.len(), sim.config.spawn_count);
    for p in &sim.particles {
        assert_eq!(p.pos, Vec2::new(10.0, 20.0));
        assert!(p.vel.x.abs() <= 4.0 && p.vel.y.abs() <= 4.0);
        assert!(!p.excited);
    }
}

#[test]
fn high_energy_click_spawns_one_excited_particle() {
    let mut sim = sim_with(Vec::new(), high_energy_config());
    sim.spawn_at(10.0, 20.0);
    assert_eq!(sim.particles.len(), 1);
    let p = &sim.particles[0];
    assert_eq!(p.energy, 200.0);
    assert!(p.excited);
}

#[test]
fn enabling_high_energy_rerolls_energy_but_not_charge() {
    let mut a = plain_particle(Vec2::new(100.0, 100.0), Vec2::zero());
    a.charge = Charge::Negative;
    let b = plain_particle(Vec2::new(700.0, 500.0), Vec2::zero());
    let mut sim = sim_with(vec![a, b], WorldConfig::default());
    sim.sampler = Box::new(FixedSampler::constant(0.25));
    sim.set_high_energy(true);
    assert!(sim.config.high_energy);
    assert_eq!(sim.particles[0].energy, 25.0);
    assert_eq!(sim.particles[1].energy, 25.0);
    assert_eq!(sim.particles[0].charge, Charge::Negative);
    assert_eq!(sim.particles[1].charge, Charge::Positive);
}

#[test]
fn render_submits_every_particle_and_publishes_stats() {
    let mut a = plain_particle(Vec2::new(100.0, 100.0), Vec2::zero());
    a.energy = 10.0;
    a.excited = true;
    let mut b = plain_particle(Vec2::new(700.0, 500.0), Vec2::zero());
    b.energy = 20.0;
    let sim = sim_with(vec![a, b], WorldConfig::default());
    let mut renderer = RecordingRenderer::new();
    let stats = sim.render_to(&mut renderer);
    assert_eq!(renderer.sprites.len(), 2);
    assert!(renderer.sprites[0].glow);
    assert!(!renderer.sprites[1].glow);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_energy, 30.0);
    assert_eq!(*state::FRAME_STATS.lock(), stats);
}

#[test]
fn invariants_hold_over_many_random_frames() {
    let config = WorldConfig {
        initial_count: 20,
        gravity: 0.1,
        high_energy: true,
        color_mode: crate::config::ColorMode::Rainbow,
        ..WorldConfig::default()
    };
    let mut sim = Simulation::new(800.0, 600.0, config);
    sim.sampler = Box::new(fastrand::Rng::with_seed(42));
    sim.populate();
    for frame in 0..60 {
        if frame == 30 {
            sim.spawn_at(400.0, 300.0);
        }
        sim.step();
        for p in &sim.particles {
            assert!(p.size > 0.0, "size must stay positive");
            assert!(p.energy >= 0.0, "energy must stay non-negative");
            assert!(p.charge.value().abs() == 1.0);
            assert!(p.hue >= 0.0 && p.hue < 360.0);
            assert!(p.vel.x.is_finite() && p.vel.y.is_finite());
        }
    }
    assert_eq!(sim.particles.len(), 21);
    assert_eq!(sim.frame, 60);
}
