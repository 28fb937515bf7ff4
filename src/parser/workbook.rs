//! Excel workbook reader (first worksheet only).

use crate::error::{LoaderError, Result};
use crate::model::{Cell, PlateTable, Row};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::debug;

/// Convert a workbook cell into a table cell.
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::String(text) => Cell::from_text(text),
        other => Cell::from_text(&other.to_string()),
    }
}

/// Read the first worksheet of an `.xlsx`/`.xls`/`.xlsm` workbook.
pub fn read_workbook(path: &Path) -> Result<PlateTable> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoaderError::EmptyFile {
            path: path.to_path_buf(),
        })?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| LoaderError::EmptyFile {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(|cell| cell.to_string())
        .collect();

    let data_rows: Vec<Row> = rows
        .enumerate()
        .map(|(i, cells)| Row::new(first_line + i + 1, cells.iter().map(cell_from_data).collect()))
        .collect();

    debug!(
        "Read {} rows from sheet '{}' of {}",
        data_rows.len(),
        sheet_name,
        path.display()
    );

    PlateTable::new(headers, data_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_data() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(cell_from_data(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(
            cell_from_data(&Data::String(" 12 ".to_string())),
            Cell::Number(12.0)
        );
        assert_eq!(
            cell_from_data(&Data::String("S355".to_string())),
            Cell::Text("S355".to_string())
        );
    }
}
