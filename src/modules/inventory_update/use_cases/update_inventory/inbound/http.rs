use axum::{
    extract::{Multipart, State, multipart::{MultipartError, MultipartRejection}},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::modules::inventory_update::use_cases::update_inventory::command::UpdateInventory;
use crate::modules::inventory_update::use_cases::update_inventory::handler::UpdateInventoryError;
use crate::shell::state::AppState;

pub const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

pub const INVENTORY_FIELD: &str = "inv";
pub const SALES_FIELD: &str = "ven";
pub const PERIOD_FIELD: &str = "period";

pub async fn handle(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => return rejection.into_response(),
    };
    let command = match read_form(multipart).await {
        Ok(command) => command,
        Err(response) => return response,
    };

    let handler = state.inventory_update.clone();
    match tokio::task::spawn_blocking(move || handler.handle(command)).await {
        Ok(Ok(updated)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", updated.file_name),
                ),
            ],
            updated.bytes,
        )
            .into_response(),
        Ok(Err(error)) => failure(error),
        Err(error) => {
            tracing::error!(%error, "inventory update task failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, "inventory update failed".into())
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<UpdateInventory, Response> {
    let mut inventory = None;
    let mut sales = None;
    let mut period = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(INVENTORY_FIELD) => {
                inventory = Some(field.bytes().await.map_err(malformed)?.to_vec());
            }
            Some(SALES_FIELD) => {
                sales = Some(field.bytes().await.map_err(malformed)?.to_vec());
            }
            Some(PERIOD_FIELD) => period = Some(field.text().await.map_err(malformed)?),
            _ => {}
        }
    }

    let missing = |name: &str| {
        text(
            StatusCode::BAD_REQUEST,
            format!("missing form field {name:?}"),
        )
    };
    Ok(UpdateInventory {
        inventory: inventory.ok_or_else(|| missing(INVENTORY_FIELD))?,
        sales: sales.ok_or_else(|| missing(SALES_FIELD))?,
        period: period.ok_or_else(|| missing(PERIOD_FIELD))?,
    })
}

fn malformed(error: MultipartError) -> Response {
    tracing::warn!(%error, "malformed inventory upload");
    text(error.status(), error.body_text())
}

fn failure(error: UpdateInventoryError) -> Response {
    let status = match &error {
        UpdateInventoryError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
        UpdateInventoryError::Unreadable { .. } | UpdateInventoryError::Report(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        UpdateInventoryError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(%error, "inventory update failed");
    } else {
        tracing::warn!(%error, "inventory update rejected");
    }
    text(status, error.to_string())
}

fn text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, PLAIN_TEXT)], body).into_response()
}
