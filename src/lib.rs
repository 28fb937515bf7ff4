//! furnace-loader - Choose which steel plates to load into a furnace.
//!
//! Given a plate inventory (a spreadsheet with `Plate Weight` and
//! `Plate Thickness` columns) and a furnace preset, the loader picks the subset
//! of plates with the greatest total weight whose total weight and total stack
//! thickness stay within the furnace limits, and writes that subset back out as
//! a spreadsheet.
//!
//! # Example
//!
//! ```no_run
//! use furnace_loader::{optimize_file, FurnacePreset, SolveOptions};
//! use std::path::Path;
//!
//! let plan = optimize_file(
//!     Path::new("stock.xlsx"),
//!     FurnacePreset::Furnace1,
//!     &SolveOptions::default(),
//! )
//! .unwrap();
//! println!("{}", plan.selection);
//! plan.write_to(Path::new("Optimized_Furnace_100MT_Plates.xlsx")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod solver;
pub mod validation;

// Re-exports for convenience
pub use config::{Capacity, FurnacePreset, SolveOptions};
pub use error::{ErrorCode, LoaderError, Result};
pub use export::{default_output_name, default_output_path, write_selection};
pub use model::{Cell, Plate, PlateTable, Row, Selection};
pub use parser::{parse_csv_str, parse_plate_file};
pub use solver::{select, select_with, select_with_fallback, PlateSolver};
pub use validation::{quick_validate, validate_table, ValidationResult};

use std::path::Path;
use tracing::warn;

/// Outcome of one optimization run.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    /// The inventory as read.
    pub table: PlateTable,
    /// Furnace the plan was computed for.
    pub furnace: FurnacePreset,
    /// Chosen plates.
    pub selection: Selection,
}

impl LoadPlan {
    /// Validate a table and select plates for the furnace.
    pub fn compute(
        table: PlateTable,
        furnace: FurnacePreset,
        options: &SolveOptions,
    ) -> Result<Self> {
        let capacity = furnace.capacity();

        let validation = quick_validate(&table, capacity)?;
        for warning in &validation.warnings {
            warn!("{}", warning);
        }

        Self::from_validated(table, furnace, options)
    }

    /// Select plates for a table that already passed validation.
    pub fn from_validated(
        table: PlateTable,
        furnace: FurnacePreset,
        options: &SolveOptions,
    ) -> Result<Self> {
        let plates = table.plates()?;
        let selection = select_with_fallback(&plates, furnace.capacity(), options)?;

        Ok(Self {
            table,
            furnace,
            selection,
        })
    }

    /// Rows of the selected plates, in original order.
    pub fn selected_rows(&self) -> impl Iterator<Item = &Row> {
        self.table.selected_rows(&self.selection)
    }

    /// Write the selected rows to a spreadsheet.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_selection(&self.table, &self.selection, path)
    }
}

/// Read an inventory file and select plates for the furnace.
///
/// This is the full pipeline without the export step:
/// 1. Read the spreadsheet
/// 2. Validate every row (malformed input stops here)
/// 3. Solve exactly, falling back to the greedy heuristic if allowed
pub fn optimize_file(
    input_path: &Path,
    furnace: FurnacePreset,
    options: &SolveOptions,
) -> Result<LoadPlan> {
    let table = parse_plate_file(input_path)?;
    LoadPlan::compute(table, furnace, options)
}
