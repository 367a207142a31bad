use std::collections::HashMap;

use crate::modules::client_config::adapters::outbound::settings_source::SettingsSource;

#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsSource {
    values: HashMap<String, String>,
}

impl InMemorySettingsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsSource for InMemorySettingsSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
