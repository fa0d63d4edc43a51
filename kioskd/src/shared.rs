use std::sync::{Arc, Mutex};

use crate::config::Configuration;

/// Settings cell shared between the configuration server (writer) and the
/// reconciliation loop (reader). Writes are whole-record replacements and
/// the changed flag is a one-shot edge signal: latest write wins, and the
/// loop consumes the flag with `take_changed`.
#[derive(Clone)]
pub struct SettingsCell {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    config: Configuration,
    changed: bool,
}

impl SettingsCell {
    pub fn new(config: Configuration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                config,
                changed: false,
            })),
        }
    }

    pub fn get(&self) -> Configuration {
        self.inner.lock().unwrap().config.clone()
    }

    /// Full-record replace; raises the changed flag.
    pub fn replace(&self, config: Configuration) {
        let mut inner = self.inner.lock().unwrap();
        inner.config = config;
        inner.changed = true;
    }

    /// Read and clear the changed flag in one step.
    pub fn take_changed(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        std::mem::replace(&mut inner.changed, false)
    }
}
