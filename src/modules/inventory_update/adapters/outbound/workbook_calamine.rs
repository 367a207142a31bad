use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::modules::inventory_update::adapters::outbound::workbook::{
    WorkbookError, WorkbookReader,
};
use crate::modules::inventory_update::core::table::{Cell, Table};

/// Reads `.xlsx`, `.xlsm`, `.xls` and `.ods` uploads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineWorkbookReader;

impl WorkbookReader for CalamineWorkbookReader {
    fn read(&self, bytes: &[u8]) -> Result<Table, WorkbookError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| WorkbookError::Unreadable(e.to_string()))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| WorkbookError::Unreadable(format!("sheet {name:?}: {e}")))?;
            let grid = range
                .rows()
                .map(|row| row.iter().map(to_cell).collect())
                .collect();
            match Table::from_grid(grid) {
                Some(table) => sheets.push(table),
                None => tracing::debug!(sheet = %name, "skipping empty sheet"),
            }
        }

        if sheets.is_empty() {
            return Err(WorkbookError::NoSheets);
        }
        Ok(Table::concat(sheets))
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
