// state.rs
// Shared state owned by the host UI and read by the simulation between
// frames: the global shape selector, the pause flag, and the published
// per-frame stats the overlay displays.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;

use crate::diagnostics::FrameStats;
use crate::particle::Shape;

/// Shape stamped on newly created particles; the host's shape toggle cycles
/// this and restamps live particles through `SimCommand::SetShape`.
pub static CURRENT_SHAPE: Lazy<Mutex<Shape>> = Lazy::new(|| Mutex::new(Shape::Circle));

/// While set, `Simulation::tick` skips stepping but still renders.
pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));

/// Stats from the most recently rendered frame, for the host overlay.
pub static FRAME_STATS: Lazy<Mutex<FrameStats>> = Lazy::new(|| Mutex::new(FrameStats::default()));
