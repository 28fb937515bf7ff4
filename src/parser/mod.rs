//! Inventory file readers.

mod delimited;
mod workbook;

pub use delimited::{parse_csv_str, read_csv};
pub use workbook::{cell_from_data, read_workbook};

use crate::error::{LoaderError, Result};
use crate::model::PlateTable;
use std::fs::File;
use std::path::Path;

/// Read a plate inventory, choosing the reader by file extension.
pub fn parse_plate_file(path: &Path) -> Result<PlateTable> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" => read_workbook(path),
        "csv" => {
            if std::fs::metadata(path)?.len() == 0 {
                return Err(LoaderError::EmptyFile {
                    path: path.to_path_buf(),
                });
            }
            read_csv(File::open(path)?)
        }
        _ => Err(LoaderError::UnsupportedFormat { extension }),
    }
}
