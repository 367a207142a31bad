use crate::modules::client_config::adapters::outbound::settings_source::SettingsSource;

pub const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";

/// Required variables that were absent, empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("configuration missing: {} not configured", .missing.join(", "))]
pub struct MissingConfiguration {
    pub missing: Vec<&'static str>,
}

/// Validated identity-provider settings. Only obtainable through [`AzureSettings::load`]
/// or [`AzureSettings::new`], so both fields are always non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureSettings {
    client_id: String,
    tenant_id: String,
}

impl AzureSettings {
    pub fn new(
        client_id: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Result<Self, MissingConfiguration> {
        let client_id = non_blank(Some(client_id.into()));
        let tenant_id = non_blank(Some(tenant_id.into()));
        Self::validate(client_id, tenant_id)
    }

    pub fn load(source: &dyn SettingsSource) -> Result<Self, MissingConfiguration> {
        let client_id = non_blank(source.lookup(AZURE_CLIENT_ID));
        let tenant_id = non_blank(source.lookup(AZURE_TENANT_ID));
        Self::validate(client_id, tenant_id)
    }

    fn validate(
        client_id: Option<String>,
        tenant_id: Option<String>,
    ) -> Result<Self, MissingConfiguration> {
        match (client_id, tenant_id) {
            (Some(client_id), Some(tenant_id)) => Ok(Self {
                client_id,
                tenant_id,
            }),
            (client_id, tenant_id) => {
                let mut missing = Vec::with_capacity(2);
                if client_id.is_none() {
                    missing.push(AZURE_CLIENT_ID);
                }
                if tenant_id.is_none() {
                    missing.push(AZURE_TENANT_ID);
                }
                Err(MissingConfiguration { missing })
            }
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
