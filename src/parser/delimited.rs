//! CSV reader.

use crate::error::{LoaderError, Result};
use crate::model::{Cell, PlateTable, Row};
use csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Read a CSV table from any reader. The first record is the header.
pub fn read_csv<R: Read>(reader: R) -> Result<PlateTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoaderError::Spreadsheet {
            message: "CSV input has no header row".to_string(),
        });
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 2);
        rows.push(Row::new(line, record.iter().map(Cell::from_text).collect()));
    }

    PlateTable::new(headers, rows)
}

/// Read a CSV table from a string.
pub fn parse_csv_str(content: &str) -> Result<PlateTable> {
    read_csv(content.as_bytes())
}
