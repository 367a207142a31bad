use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};

use crate::modules::inventory_update::adapters::outbound::workbook::{
    WorkbookError, WorkbookWriter,
};
use crate::modules::inventory_update::core::table::{Cell, Table};

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbookWriter;

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write(&self, sheet_name: &str, table: &Table) -> Result<Vec<u8>, WorkbookError> {
        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet_name).map_err(write_error)?;

            for (col, name) in table.columns().iter().enumerate() {
                worksheet
                    .write_string(0, col_num(col)?, name.as_str())
                    .map_err(write_error)?;
            }
            for (index, row) in table.rows().iter().enumerate() {
                let row_num = row_num(index + 1)?;
                for (col, cell) in row.iter().enumerate() {
                    let col = col_num(col)?;
                    match cell {
                        Cell::Number(n) if n.is_finite() => {
                            worksheet.write_number(row_num, col, *n).map_err(write_error)?;
                        }
                        Cell::Text(s) if !s.is_empty() => {
                            worksheet
                                .write_string(row_num, col, s.as_str())
                                .map_err(write_error)?;
                        }
                        Cell::Bool(b) => {
                            worksheet.write_boolean(row_num, col, *b).map_err(write_error)?;
                        }
                        _ => {}
                    }
                }
            }
        }
        workbook.save_to_buffer().map_err(write_error)
    }
}

fn write_error(error: XlsxError) -> WorkbookError {
    WorkbookError::Write(error.to_string())
}

fn row_num(index: usize) -> Result<RowNum, WorkbookError> {
    RowNum::try_from(index).map_err(|_| WorkbookError::Write(format!("row {index} out of range")))
}

fn col_num(index: usize) -> Result<ColNum, WorkbookError> {
    ColNum::try_from(index)
        .map_err(|_| WorkbookError::Write(format!("column {index} out of range")))
}
