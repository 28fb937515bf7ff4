//! Excel export of a selection.

use crate::config::EXPORT_SHEET_NAME;
use crate::error::{LoaderError, Result};
use crate::model::{Cell, PlateTable, Selection};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

fn column_number(column: usize) -> Result<u16> {
    u16::try_from(column).map_err(|_| LoaderError::Export {
        message: format!("column {} is beyond the worksheet limit", column + 1),
    })
}

fn row_number(row: usize) -> Result<u32> {
    u32::try_from(row).map_err(|_| LoaderError::Export {
        message: format!("row {} is beyond the worksheet limit", row + 1),
    })
}

fn write_cell(worksheet: &mut Worksheet, row: u32, column: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty => {}
        Cell::Number(value) => {
            worksheet.write_number(row, column, *value)?;
        }
        Cell::Text(text) => {
            worksheet.write_string(row, column, text)?;
        }
    }
    Ok(())
}

/// Build the export workbook: original header row, then the selected rows.
pub fn build_workbook(table: &PlateTable, selection: &Selection) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, column_number(col)?, header, &header_format)?;
    }

    for (i, row) in table.selected_rows(selection).enumerate() {
        let row_num = row_number(i + 1)?;
        for (col, cell) in row.cells.iter().enumerate().take(table.headers.len()) {
            write_cell(worksheet, row_num, column_number(col)?, cell)?;
        }
    }

    Ok(workbook)
}

/// Write the selection to an `.xlsx` file.
pub fn write_xlsx(table: &PlateTable, selection: &Selection, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(table, selection)?;
    workbook.save(path)?;
    Ok(())
}
