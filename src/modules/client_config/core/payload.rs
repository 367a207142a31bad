use serde::Serialize;

use crate::modules::client_config::core::settings::AzureSettings;

pub const AUTHORITY_BASE: &str = "https://login.microsoftonline.com/";
pub const DEFAULT_SCOPES: &[&str] = &["Files.Read.All"];

pub fn authority_for(tenant_id: &str) -> String {
    format!("{AUTHORITY_BASE}{tenant_id}/")
}

/// Browser-side MSAL configuration. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    client_id: String,
    authority: String,
    tenant_id: String,
    scopes: Vec<String>,
}

impl ConfigPayload {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

impl From<&AzureSettings> for ConfigPayload {
    fn from(settings: &AzureSettings) -> Self {
        Self {
            client_id: settings.client_id().to_string(),
            authority: authority_for(settings.tenant_id()),
            tenant_id: settings.tenant_id().to_string(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
