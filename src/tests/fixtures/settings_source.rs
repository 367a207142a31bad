use crate::modules::client_config::adapters::outbound::settings_source_in_memory::InMemorySettingsSource;
use crate::modules::client_config::core::settings::{AZURE_CLIENT_ID, AZURE_TENANT_ID};

pub const FIXED_CLIENT_ID: &str = "client-fixed-0001";
pub const FIXED_TENANT_ID: &str = "tenant-fixed-0001";

/// Builds an in-memory environment. `None` leaves the variable unset.
pub struct InMemorySettingsSourceBuilder {
    client_id: Option<String>,
    tenant_id: Option<String>,
}

impl Default for InMemorySettingsSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl InMemorySettingsSourceBuilder {
    pub fn new() -> Self {
        Self {
            client_id: Some(FIXED_CLIENT_ID.to_string()),
            tenant_id: Some(FIXED_TENANT_ID.to_string()),
        }
    }

    pub fn client_id(mut self, v: Option<&str>) -> Self {
        self.client_id = v.map(str::to_string);
        self
    }

    pub fn tenant_id(mut self, v: Option<&str>) -> Self {
        self.tenant_id = v.map(str::to_string);
        self
    }

    pub fn build(self) -> InMemorySettingsSource {
        let mut source = InMemorySettingsSource::new();
        if let Some(client_id) = self.client_id {
            source = source.with(AZURE_CLIENT_ID, client_id);
        }
        if let Some(tenant_id) = self.tenant_id {
            source = source.with(AZURE_TENANT_ID, tenant_id);
        }
        source
    }
}

#[cfg(test)]
mod in_memory_settings_source_builder_tests {
    use super::*;
    use crate::modules::client_config::adapters::outbound::settings_source::SettingsSource;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_with_fixed_identifiers() {
        let source = InMemorySettingsSourceBuilder::default().build();

        assert_eq!(source.lookup(AZURE_CLIENT_ID).as_deref(), Some(FIXED_CLIENT_ID));
        assert_eq!(source.lookup(AZURE_TENANT_ID).as_deref(), Some(FIXED_TENANT_ID));
    }

    #[rstest]
    fn setters_can_unset_variables() {
        let source = InMemorySettingsSourceBuilder::new()
            .client_id(None)
            .tenant_id(Some("tenant-xyz"))
            .build();

        assert_eq!(source.lookup(AZURE_CLIENT_ID), None);
        assert_eq!(source.lookup(AZURE_TENANT_ID).as_deref(), Some("tenant-xyz"));
    }
}
