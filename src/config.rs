// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

// ====================
// Particle Creation
// ====================
/// Smallest size a particle can be rolled at creation.
pub const MIN_SIZE: f32 = 2.0;
/// Largest size a particle can be rolled at creation.
pub const MAX_SIZE: f32 = 5.0;
/// Upper bound of the initial energy roll.
pub const ENERGY_MAX: f32 = 100.0;
/// Full span of the per-axis velocity given to click-spawned particles.
pub const CLICK_SPEED: f32 = 8.0;
/// Energy of the single particle spawned by a click in high-energy mode.
pub const BURST_ENERGY: f32 = 200.0;

// ====================
// Pointer Interaction (normal mode)
// ====================
/// Radius around the pointer within which particles react to it.
pub const POINTER_RADIUS: f32 = 100.0;
/// Fraction of the pointer offset applied to the position each frame.
pub const POINTER_PULL: f32 = 0.03;
/// Size multiplier while inside the pointer radius.
pub const HOVER_GROWTH: f32 = 2.0;

// ====================
// Pairwise Interaction (high-energy mode)
// ====================
/// Cutoff distance for the charge force.
pub const FORCE_RADIUS: f32 = 100.0;
/// Scale applied to the inverse-square charge force.
pub const FORCE_SCALE: f32 = 0.1;
/// Probability that a collision leaves a particle excited.
pub const EXCITE_CHANCE: f32 = 0.3;
/// Energy granted alongside excitation.
pub const EXCITE_BONUS: f32 = 50.0;
/// Energy retained after bouncing off a wall in high-energy mode.
pub const WALL_ENERGY_LOSS: f32 = 0.95;

// ====================
// Display Derivation
// ====================
/// Hue degrees per unit of energy in the energy color mode.
pub const ENERGY_HUE_SCALE: f32 = 2.0;
/// Hue degrees per unit of speed in the speed color mode.
pub const SPEED_HUE_SCALE: f32 = 50.0;
/// Energy that doubles a particle's rendered size in high-energy mode.
pub const SIZE_ENERGY_DIVISOR: f32 = 200.0;
/// Energy lost per frame while excited.
pub const ENERGY_DECAY: f32 = 0.5;

// ====================
// World Defaults
// ====================
pub const DEFAULT_SPAWN_COUNT: usize = 5;
pub const DEFAULT_INITIAL_COUNT: usize = 1;
pub const DEFAULT_SPEED_SCALE: f32 = 1.0;
pub const DEFAULT_GRAVITY: f32 = 0.0;
pub const DEFAULT_TRAIL_LENGTH: f32 = 0.1;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

/// How particle colors are derived each frame. Unrecognized values in
/// externally supplied snapshots fall back to `Random` rather than failing
/// the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Random,
    Energy,
    Speed,
    Rainbow,
}

impl ColorMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "energy" => ColorMode::Energy,
            "speed" => ColorMode::Speed,
            "rainbow" => ColorMode::Rainbow,
            _ => ColorMode::Random,
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Random
    }
}

impl<'de> Deserialize<'de> for ColorMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ColorMode::parse(&s))
    }
}

/// Background styling chosen by the host UI. Carried only so a preset
/// round-trips; the simulation never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    Gradient,
    Dark,
    Light,
    Custom,
}

impl BackgroundMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => BackgroundMode::Dark,
            "light" => BackgroundMode::Light,
            "custom" => BackgroundMode::Custom,
            _ => BackgroundMode::Gradient,
        }
    }
}

impl Default for BackgroundMode {
    fn default() -> Self {
        BackgroundMode::Gradient
    }
}

impl<'de> Deserialize<'de> for BackgroundMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(BackgroundMode::parse(&s))
    }
}

/// Immutable per-frame snapshot of the user-adjustable parameters. The host
/// UI builds a fresh snapshot and hands it over between frames; the
/// simulation never mutates one in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Particles appended per click in normal mode.
    pub spawn_count: usize,
    /// Population after a viewport resize or full reinitialization.
    pub initial_count: usize,
    /// Scale on the creation-time velocity roll.
    pub speed_scale: f32,
    /// Per-frame downward velocity increment.
    pub gravity: f32,
    pub color_mode: ColorMode,
    pub background_mode: BackgroundMode,
    /// Canvas fade factor used by the host when clearing; opaque to the core.
    pub trail_length: f32,
    /// Enables pairwise collision and charge-force interaction.
    pub high_energy: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            spawn_count: DEFAULT_SPAWN_COUNT,
            initial_count: DEFAULT_INITIAL_COUNT,
            speed_scale: DEFAULT_SPEED_SCALE,
            gravity: DEFAULT_GRAVITY,
            color_mode: ColorMode::default(),
            background_mode: BackgroundMode::default(),
            trail_length: DEFAULT_TRAIL_LENGTH,
            high_energy: false,
        }
    }
}
