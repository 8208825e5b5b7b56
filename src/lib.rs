pub mod color;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod init_config;
pub mod io;
pub mod particle;
pub mod profiler;
pub mod renderer;
pub mod sampler;
pub mod simulation;
pub mod state;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
