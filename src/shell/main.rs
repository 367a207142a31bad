use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use excel_up_config::modules::client_config::adapters::outbound::settings_source::ProcessEnvironment;
use excel_up_config::modules::client_config::use_cases::serve_client_config::handler::ServeClientConfigHandler;
use excel_up_config::modules::inventory_update::adapters::outbound::workbook_calamine::CalamineWorkbookReader;
use excel_up_config::modules::inventory_update::adapters::outbound::workbook_xlsx::XlsxWorkbookWriter;
use excel_up_config::modules::inventory_update::use_cases::update_inventory::handler::UpdateInventoryHandler;
use excel_up_config::shell::config::ServerConfig;
use excel_up_config::shell::env_file::EnvFile;
use excel_up_config::shell::http::router;
use excel_up_config::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = EnvFile::load();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    env_file.report();

    let environment = Arc::new(ProcessEnvironment);
    let config = ServerConfig::load(&*environment).context("invalid server configuration")?;
    let addr = config.socket_addr().context("invalid bind address")?;

    let state = AppState {
        client_config: Arc::new(ServeClientConfigHandler::new(environment)),
        cache_max_age_secs: config.cache_max_age_secs,
        inventory_update: Arc::new(UpdateInventoryHandler::new(
            Arc::new(CalamineWorkbookReader),
            Arc::new(XlsxWorkbookWriter),
        )),
        upload_limit_bytes: config.upload_limit_bytes,
    };

    tracing::info!("client config endpoint: http://{}/api/config.js", addr);
    tracing::info!("inventory update endpoint: http://{}/api/process", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
