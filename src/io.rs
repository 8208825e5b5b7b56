// io.rs
// Named preset persistence. Presets are WorldConfig snapshots serialized to
// JSON and parked in a key-value string store supplied by the host (browser
// storage, a file, an in-memory map in tests). The blob is opaque to the
// simulation.

use std::collections::HashMap;
use std::io;

use crate::config::WorldConfig;
use crate::profile_scope;

/// Key-value string store the host backs with whatever it has.
pub trait PresetStore {
    fn get(&self, name: &str) -> Option<String>;
    fn put(&mut self, name: &str, blob: String);
    fn names(&self) -> Vec<String>;
}

/// In-memory store; the default for tests and headless runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }

    fn put(&mut self, name: &str, blob: String) {
        self.entries.insert(name.to_owned(), blob);
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

pub fn save_preset(
    store: &mut dyn PresetStore,
    name: &str,
    config: &WorldConfig,
) -> io::Result<()> {
    profile_scope!("save_preset");
    let blob = serde_json::to_string(config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    store.put(name, blob);
    Ok(())
}

pub fn load_preset(store: &dyn PresetStore, name: &str) -> io::Result<WorldConfig> {
    profile_scope!("load_preset");
    let blob = store.get(name).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, format!("no preset named '{name}'"))
    })?;
    serde_json::from_str(&blob).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
