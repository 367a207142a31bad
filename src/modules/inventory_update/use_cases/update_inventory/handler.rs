use std::sync::Arc;

use thiserror::Error;

use crate::modules::inventory_update::adapters::outbound::workbook::{
    WorkbookError, WorkbookReader, WorkbookWriter,
};
use crate::modules::inventory_update::core::period::{Period, PeriodError};
use crate::modules::inventory_update::core::report::{ReportError, update_inventory};
use crate::modules::inventory_update::use_cases::update_inventory::command::{
    UpdateInventory, UpdatedWorkbook,
};

pub const OUTPUT_SHEET: &str = "InvActualizado";

#[derive(Debug, Error)]
pub enum UpdateInventoryError {
    #[error(transparent)]
    InvalidPeriod(#[from] PeriodError),

    #[error("{upload} upload: {source}")]
    Unreadable {
        upload: &'static str,
        source: WorkbookError,
    },

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Write(WorkbookError),
}

pub struct UpdateInventoryHandler {
    reader: Arc<dyn WorkbookReader + Send + Sync>,
    writer: Arc<dyn WorkbookWriter + Send + Sync>,
}

impl UpdateInventoryHandler {
    pub fn new(
        reader: Arc<dyn WorkbookReader + Send + Sync>,
        writer: Arc<dyn WorkbookWriter + Send + Sync>,
    ) -> Self {
        Self { reader, writer }
    }

    /// CPU-bound; call from a blocking context.
    pub fn handle(&self, command: UpdateInventory) -> Result<UpdatedWorkbook, UpdateInventoryError> {
        let period: Period = command.period.parse()?;
        let inventory = self
            .reader
            .read(&command.inventory)
            .map_err(|source| UpdateInventoryError::Unreadable {
                upload: "inventory",
                source,
            })?;
        let sales = self
            .reader
            .read(&command.sales)
            .map_err(|source| UpdateInventoryError::Unreadable {
                upload: "sales",
                source,
            })?;

        let report = update_inventory(inventory, sales, period)?;
        tracing::info!(%period, rows = report.rows().len(), "inventory updated");

        let bytes = self
            .writer
            .write(OUTPUT_SHEET, &report)
            .map_err(UpdateInventoryError::Write)?;
        Ok(UpdatedWorkbook {
            file_name: format!("TblInventario_actualizado_{period}.xlsx"),
            bytes,
        })
    }
}
