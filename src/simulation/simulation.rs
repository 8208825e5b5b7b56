// simulation/simulation.rs
// Contains the Simulation struct: the particle collection, the per-frame
// update pass, input-triggered spawning, and the renderer handoff.

use std::sync::atomic::Ordering;

use ultraviolet::Vec2;

use crate::color;
use crate::config::{self, WorldConfig};
use crate::diagnostics::FrameStats;
use crate::particle::Particle;
use crate::profile_scope;
use crate::renderer::{Renderer, Sprite};
use crate::sampler::Sampler;
use crate::state;

use super::collision;

pub struct Simulation {
    pub particles: Vec<Particle>,
    /// Viewport extents; particles reflect off [0, width] x [0, height].
    pub width: f32,
    pub height: f32,
    /// Last reported pointer position.
    pub pointer: Vec2,
    /// Snapshot of the user-adjustable parameters for the current frame.
    pub config: WorldConfig,
    pub frame: usize,
    pub sampler: Box<dyn Sampler>,
}

impl Simulation {
    pub fn new(width: f32, height: f32, config: WorldConfig) -> Self {
        let mut sim = Self {
            particles: Vec::new(),
            width,
            height,
            pointer: Vec2::zero(),
            config,
            frame: 0,
            sampler: Box::new(fastrand::Rng::new()),
        };
        sim.populate();
        sim
    }

    /// Replace the collection with `initial_count` particles at uniform
    /// random positions inside the viewport.
    pub fn populate(&mut self) {
        self.particles.clear();
        for _ in 0..self.config.initial_count {
            let pos = Vec2::new(
                self.sampler.range(0.0, self.width),
                self.sampler.range(0.0, self.height),
            );
            let particle = Particle::new(pos, &self.config, self.sampler.as_mut());
            self.particles.push(particle);
        }
    }

    /// Advance every particle by one frame. Each particle runs its full
    /// update before the next one starts; in high-energy mode the pairwise
    /// scan mutates peers mid-pass, so the ordering is load-bearing.
    pub fn step(&mut self) {
        profile_scope!("step");
        for i in 0..self.particles.len() {
            self.update_particle(i);
        }
        self.frame += 1;
    }

    fn update_particle(&mut self, i: usize) {
        let high_energy = self.config.high_energy;

        {
            let (width, height) = (self.width, self.height);
            let gravity = self.config.gravity;
            let p = &mut self.particles[i];
            p.vel.y += gravity;
            p.pos += p.vel;

            if p.pos.x < 0.0 || p.pos.x > width {
                p.vel.x = -p.vel.x;
                if high_energy {
                    p.energy *= config::WALL_ENERGY_LOSS;
                }
            }
            if p.pos.y < 0.0 || p.pos.y > height {
                p.vel.y = -p.vel.y;
                if high_energy {
                    p.energy *= config::WALL_ENERGY_LOSS;
                }
            }
        }

        if high_energy {
            collision::interact(&mut self.particles, self.sampler.as_mut(), i);
            let p = &mut self.particles[i];
            p.size = p.original_size * (1.0 + p.energy / config::SIZE_ENERGY_DIVISOR);
            p.color = color::hsl((p.energy * config::ENERGY_HUE_SCALE) % 360.0);
        } else {
            let pointer = self.pointer;
            let p = &mut self.particles[i];
            let delta = pointer - p.pos;
            if delta.mag() < config::POINTER_RADIUS {
                p.size = p.original_size * config::HOVER_GROWTH;
                p.pos += delta * config::POINTER_PULL;
            } else {
                p.size = p.original_size;
            }
        }

        color::update_color(self.config.color_mode, &mut self.particles[i]);
        self.particles[i].decay_excitement();
    }

    /// Pointer click. High-energy mode appends a single excited burst
    /// particle; normal mode appends `spawn_count` particles. Either way the
    /// creation-time velocity roll is replaced with the wider click spread.
    pub fn spawn_at(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if self.config.high_energy {
            let mut p = Particle::new(pos, &self.config, self.sampler.as_mut());
            p.energy = config::BURST_ENERGY;
            p.excited = true;
            p.vel = self.click_velocity();
            self.particles.push(p);
        } else {
            for _ in 0..self.config.spawn_count {
                let mut p = Particle::new(pos, &self.config, self.sampler.as_mut());
                p.vel = self.click_velocity();
                self.particles.push(p);
            }
        }
    }

    fn click_velocity(&mut self) -> Vec2 {
        let half = config::CLICK_SPEED / 2.0;
        Vec2::new(
            self.sampler.range(-half, half),
            self.sampler.range(-half, half),
        )
    }

    /// Full reset: one fresh particle at the viewport center, high-energy
    /// mode switched off.
    pub fn reset(&mut self) {
        self.config.high_energy = false;
        let center = Vec2::new(self.width / 2.0, self.height / 2.0);
        let particle = Particle::new(center, &self.config, self.sampler.as_mut());
        self.particles = vec![particle];
    }

    /// Viewport resize discards the collection and repopulates it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Toggle pairwise interaction. Enabling re-rolls the energy of live
    /// particles; charges stay fixed for life.
    pub fn set_high_energy(&mut self, enabled: bool) {
        self.config.high_energy = enabled;
        if enabled {
            for p in &mut self.particles {
                p.energy = self.sampler.range(0.0, config::ENERGY_MAX);
            }
        }
    }

    /// Accept a full settings snapshot at a frame boundary. If the
    /// configured initial population no longer matches the live collection
    /// the world reinitializes, matching the host UI's slider behavior.
    pub fn set_config(&mut self, config: WorldConfig) {
        self.config = config;
        if self.particles.len() != self.config.initial_count {
            self.populate();
        }
    }

    /// Submit every particle to the renderer and publish the frame
    /// aggregates for the host overlay.
    pub fn render_to(&self, renderer: &mut dyn Renderer) -> FrameStats {
        let mut stats = FrameStats::default();
        for particle in &self.particles {
            renderer.render(&Sprite::from_particle(particle));
            stats.count += 1;
            stats.total_energy += particle.energy;
        }
        *state::FRAME_STATS.lock() = stats;
        stats
    }

    /// One display tick: advance unless paused, then render. Paused frames
    /// keep rendering so the host can redraw the frozen scene.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> FrameStats {
        if !state::PAUSED.load(Ordering::Relaxed) {
            self.step();
        }
        self.render_to(renderer)
    }
}
