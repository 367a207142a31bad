use thiserror::Error;

use crate::modules::inventory_update::core::table::Table;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkbookError {
    #[error("unreadable workbook: {0}")]
    Unreadable(String),

    #[error("workbook has no sheet with a header row")]
    NoSheets,

    #[error("could not write workbook: {0}")]
    Write(String),
}

/// Reads every sheet of a workbook and stacks them into one table.
pub trait WorkbookReader {
    fn read(&self, bytes: &[u8]) -> Result<Table, WorkbookError>;
}

/// Writes one table as the only sheet of a new workbook.
pub trait WorkbookWriter {
    fn write(&self, sheet_name: &str, table: &Table) -> Result<Vec<u8>, WorkbookError>;
}
