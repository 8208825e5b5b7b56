// commands.rs
// Handles processing of SimCommand messages from the host UI

use std::sync::atomic::Ordering;

use ultraviolet::Vec2;

use crate::config::WorldConfig;
use crate::io::{load_preset, save_preset, PresetStore};
use crate::particle::Shape;
use crate::simulation::Simulation;
use crate::state;

/// Discrete inputs the host UI sends between frames.
pub enum SimCommand {
    /// Pointer click at viewport coordinates.
    SpawnAt { x: f32, y: f32 },
    /// Pointer moved.
    SetPointer { x: f32, y: f32 },
    /// Full settings snapshot replacement.
    SetConfig { config: WorldConfig },
    /// Shape toggle: restamps live particles and future spawns.
    SetShape { shape: Shape },
    SetHighEnergy { enabled: bool },
    Resize { width: f32, height: f32 },
    Reset,
    /// Advance exactly one frame, then pause.
    StepOnce,
    SavePreset { name: String },
    LoadPreset { name: String },
}

/// Process a single SimCommand
pub fn process_command(
    cmd: SimCommand,
    simulation: &mut Simulation,
    presets: &mut dyn PresetStore,
) {
    match cmd {
        SimCommand::SpawnAt { x, y } => {
            simulation.spawn_at(x, y);
        }

        SimCommand::SetPointer { x, y } => {
            simulation.pointer = Vec2::new(x, y);
        }

        SimCommand::SetConfig { config } => {
            simulation.set_config(config);
        }

        SimCommand::SetShape { shape } => {
            handle_set_shape(simulation, shape);
        }

        SimCommand::SetHighEnergy { enabled } => {
            simulation.set_high_energy(enabled);
        }

        SimCommand::Resize { width, height } => {
            simulation.resize(width, height);
        }

        SimCommand::Reset => {
            simulation.reset();
        }

        SimCommand::StepOnce => {
            handle_step_once(simulation);
        }

        SimCommand::SavePreset { name } => {
            handle_save_preset(simulation, presets, name);
        }

        SimCommand::LoadPreset { name } => {
            handle_load_preset(simulation, presets, name);
        }
    }
}

fn handle_set_shape(simulation: &mut Simulation, shape: Shape) {
    *state::CURRENT_SHAPE.lock() = shape;
    for particle in &mut simulation.particles {
        particle.shape = shape;
    }
}

fn handle_step_once(simulation: &mut Simulation) {
    simulation.step();
    state::PAUSED.store(true, Ordering::Relaxed);
}

fn handle_save_preset(simulation: &Simulation, presets: &mut dyn PresetStore, name: String) {
    if let Err(e) = save_preset(presets, &name, &simulation.config) {
        eprintln!("Failed to save preset '{name}': {e}");
    }
}

fn handle_load_preset(simulation: &mut Simulation, presets: &mut dyn PresetStore, name: String) {
    match load_preset(presets, &name) {
        Ok(config) => simulation.set_config(config),
        Err(e) => eprintln!("Failed to load preset '{name}': {e}"),
    }
}
