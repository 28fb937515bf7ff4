//! Export of selected plates to spreadsheet files.

mod delimited;
mod xlsx;

pub use delimited::write_csv;
pub use xlsx::{build_workbook, write_xlsx};

use crate::config::FurnacePreset;
use crate::error::Result;
use crate::model::{PlateTable, Selection};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Default download name for a furnace, e.g. `Optimized_Furnace_100MT_Plates.xlsx`.
pub fn default_output_name(furnace: FurnacePreset) -> String {
    format!("Optimized_Furnace_{}MT_Plates.xlsx", furnace.weight_capacity())
}

/// Default output path: the default name next to the input file.
pub fn default_output_path(input: &Path, furnace: FurnacePreset) -> PathBuf {
    input.with_file_name(default_output_name(furnace))
}

/// Write the selection, as CSV for `.csv` paths and `.xlsx` otherwise.
pub fn write_selection(table: &PlateTable, selection: &Selection, path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        write_csv(table, selection, File::create(path)?)
    } else {
        write_xlsx(table, selection, path)
    }
}
