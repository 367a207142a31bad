use std::sync::Arc;

use thiserror::Error;

use crate::modules::client_config::adapters::outbound::settings_source::SettingsSource;
use crate::modules::client_config::core::payload::ConfigPayload;
use crate::modules::client_config::core::settings::{AzureSettings, MissingConfiguration};
use crate::modules::client_config::use_cases::serve_client_config::render::{
    render_json, render_script,
};

#[derive(Debug, Error)]
pub enum ServeConfigError {
    #[error(transparent)]
    MissingConfiguration(#[from] MissingConfiguration),

    #[error("failed to serialize client config: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Builds the client config from the current settings on every call.
pub struct ServeClientConfigHandler {
    source: Arc<dyn SettingsSource + Send + Sync>,
}

impl ServeClientConfigHandler {
    pub fn new(source: Arc<dyn SettingsSource + Send + Sync>) -> Self {
        Self { source }
    }

    pub fn payload(&self) -> Result<ConfigPayload, ServeConfigError> {
        let settings = AzureSettings::load(&*self.source)?;
        Ok(ConfigPayload::from(&settings))
    }

    pub fn script(&self) -> Result<String, ServeConfigError> {
        Ok(render_script(&self.payload()?)?)
    }

    pub fn json(&self) -> Result<String, ServeConfigError> {
        Ok(render_json(&self.payload()?)?)
    }
}
