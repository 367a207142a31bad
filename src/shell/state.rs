use crate::modules::client_config::use_cases::serve_client_config::handler::ServeClientConfigHandler;
use crate::modules::inventory_update::use_cases::update_inventory::handler::UpdateInventoryHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub client_config: Arc<ServeClientConfigHandler>,
    pub cache_max_age_secs: u64,
    pub inventory_update: Arc<UpdateInventoryHandler>,
    pub upload_limit_bytes: usize,
}
