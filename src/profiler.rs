use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cumulative wall time per named section, filled in by `profile_scope!`
/// when the `profiling` feature is enabled.
pub struct Profiler {
    sections: HashMap<&'static str, Duration>,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        *self.sections.entry(name).or_default() += elapsed;
    }

    /// Sections sorted by cumulative time, longest first.
    pub fn report(&self) -> Vec<(&'static str, Duration)> {
        let mut entries: Vec<_> = self.sections.iter().map(|(n, d)| (*n, *d)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn print_and_clear(&mut self) {
        for (name, elapsed) in self.report() {
            println!("{:<20} {:?}", name, elapsed);
        }
        self.sections.clear();
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ScopeGuard {
    name: &'static str,
    start: Instant,
}

/// Begin timing a section; the guard reports to the global profiler on drop.
pub fn scope(name: &'static str) -> ScopeGuard {
    ScopeGuard {
        name,
        start: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopeGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().record(self.name, self.start.elapsed());
    }
}

#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::scope($name);
    };
}
