//! PlateTable - Typed view of an uploaded inventory sheet.

use super::{Plate, Selection};
use crate::config::{THICKNESS_COLUMN, WEIGHT_COLUMN};
use crate::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

static EMPTY_CELL: Cell = Cell::Empty;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Type a raw text value: blanks are empty, numeric text becomes a number.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Cell::Number(value),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    /// Numeric value of the cell, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Check if the cell holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(text) => write!(f, "{}", text),
        }
    }
}

/// One data row with its 1-based line number in the source sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Line number in the source sheet (the header is line 1).
    pub line: usize,
    /// Cells in original column order.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a row.
    pub fn new(line: usize, cells: Vec<Cell>) -> Self {
        Self { line, cells }
    }

    /// Cell at a column, empty when the row is short.
    pub fn cell(&self, column: usize) -> &Cell {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    /// Check if every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

/// Normalize a header for matching: trim, collapse whitespace, lowercase.
pub fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Find a column by normalized header name.
pub fn find_column(headers: &[String], name: &str) -> Option<usize> {
    let wanted = normalize_header(name);
    headers.iter().position(|h| normalize_header(h) == wanted)
}

/// Inventory table with the weight and thickness columns located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateTable {
    /// Header row, trimmed, in original order.
    pub headers: Vec<String>,
    /// Non-blank data rows in original order.
    pub rows: Vec<Row>,
    /// Position of the `Plate Weight` column.
    pub weight_column: usize,
    /// Position of the `Plate Thickness` column.
    pub thickness_column: usize,
}

impl PlateTable {
    /// Build a table, locating the required columns and dropping blank rows.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

        let weight_column =
            find_column(&headers, WEIGHT_COLUMN).ok_or_else(|| LoaderError::MissingColumn {
                column: WEIGHT_COLUMN.to_string(),
            })?;
        let thickness_column =
            find_column(&headers, THICKNESS_COLUMN).ok_or_else(|| LoaderError::MissingColumn {
                column: THICKNESS_COLUMN.to_string(),
            })?;

        let rows = rows.into_iter().filter(|r| !r.is_blank()).collect();

        Ok(Self {
            headers,
            rows,
            weight_column,
            thickness_column,
        })
    }

    /// Build a table from in-memory records; lines are numbered after the header.
    pub fn from_records(headers: &[&str], records: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, cells)| Row::new(i + 2, cells))
            .collect();
        Self::new(headers.iter().map(|h| h.to_string()).collect(), rows)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header of the weight column as written in the sheet.
    pub fn weight_header(&self) -> &str {
        &self.headers[self.weight_column]
    }

    /// Header of the thickness column as written in the sheet.
    pub fn thickness_header(&self) -> &str {
        &self.headers[self.thickness_column]
    }

    /// Convert one data row into a plate.
    pub fn plate(&self, index: usize) -> Result<Plate> {
        let row = &self.rows[index];
        let weight = self.numeric(row, self.weight_column)?;
        let thickness = self.numeric(row, self.thickness_column)?;
        Ok(Plate::new(index, weight, thickness))
    }

    /// Convert every data row into a plate.
    pub fn plates(&self) -> Result<Vec<Plate>> {
        (0..self.rows.len()).map(|i| self.plate(i)).collect()
    }

    /// Rows included in a selection, in original order.
    pub fn selected_rows<'a>(&'a self, selection: &'a Selection) -> impl Iterator<Item = &'a Row> {
        selection
            .indices
            .iter()
            .filter_map(move |&index| self.rows.get(index))
    }

    fn numeric(&self, row: &Row, column: usize) -> Result<f64> {
        row.cell(column)
            .as_number()
            .ok_or_else(|| LoaderError::InvalidValue {
                row: row.line,
                column: self.headers[column].clone(),
                value: row.cell(column).to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(value: f64) -> Cell {
        Cell::Number(value)
    }

    #[test]
    fn test_cell_from_text() {
        assert_eq!(Cell::from_text("  "), Cell::Empty);
        assert_eq!(Cell::from_text(" 12.5 "), Cell::Number(12.5));
        assert_eq!(Cell::from_text("P-001"), Cell::Text("P-001".to_string()));
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Plate   WEIGHT "), "plate weight");
        assert_eq!(normalize_header("Plate\tThickness"), "plate thickness");
    }

    #[test]
    fn test_table_locates_columns() {
        let table = PlateTable::from_records(
            &["Plate ID", " plate weight ", "PLATE THICKNESS"],
            vec![vec![Cell::Text("A".to_string()), num(10.0), num(25.0)]],
        )
        .unwrap();

        assert_eq!(table.weight_column, 1);
        assert_eq!(table.thickness_column, 2);
        assert_eq!(table.weight_header(), "plate weight");
        assert_eq!(table.plates().unwrap(), vec![Plate::new(0, 10.0, 25.0)]);
    }

    #[test]
    fn test_table_missing_column() {
        let err = PlateTable::from_records(&["Plate Weight", "Width"], vec![]).unwrap_err();
        match err {
            LoaderError::MissingColumn { column } => assert_eq!(column, "Plate Thickness"),
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_table_skips_blank_rows() {
        let table = PlateTable::from_records(
            &["Plate Weight", "Plate Thickness"],
            vec![
                vec![num(1.0), num(2.0)],
                vec![Cell::Empty, Cell::Empty],
                vec![num(3.0), num(4.0)],
            ],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].line, 4);
        assert_eq!(table.plate(1).unwrap(), Plate::new(1, 3.0, 4.0));
    }

    #[test]
    fn test_table_non_numeric_value() {
        let table = PlateTable::from_records(
            &["Plate Weight", "Plate Thickness"],
            vec![vec![Cell::Text("heavy".to_string()), num(4.0)]],
        )
        .unwrap();

        match table.plates().unwrap_err() {
            LoaderError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Plate Weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_reads_as_empty() {
        let table = PlateTable::from_records(
            &["Plate Weight", "Plate Thickness"],
            vec![vec![num(5.0)]],
        )
        .unwrap();
        assert!(table.rows[0].cell(1).is_empty());
        assert!(table.plates().is_err());
    }
}
