//! Validation logic for plate inventories.

use crate::config::Capacity;
use crate::error::{LoaderError, Result};
use crate::model::{Cell, PlateTable, Row};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a whole inventory against a furnace capacity.
pub fn validate_table(table: &PlateTable, capacity: Capacity) -> Result<ValidationResult> {
    capacity.check()?;

    let mut result = ValidationResult::ok();

    if table.is_empty() {
        result.add_warning("No plates in input");
    }

    for row in &table.rows {
        result.merge(validate_row(table, row, capacity));
    }

    Ok(result)
}

/// Validate one data row.
pub fn validate_row(table: &PlateTable, row: &Row, capacity: Capacity) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let weight = check_positive(&mut result, row, table.weight_header(), row.cell(table.weight_column));
    let thickness = check_positive(
        &mut result,
        row,
        table.thickness_header(),
        row.cell(table.thickness_column),
    );

    if let Some(weight) = weight {
        if !capacity.admits_weight(weight) {
            result.add_warning(format!(
                "Row {}: weight {} MT exceeds furnace capacity {} MT; plate will never be loaded",
                row.line, weight, capacity.weight
            ));
        }
    }

    if let Some(thickness) = thickness {
        if !capacity.admits_thickness(thickness) {
            result.add_warning(format!(
                "Row {}: thickness {} mm exceeds furnace height {} mm; plate will never be loaded",
                row.line, thickness, capacity.thickness
            ));
        }
    }

    result
}

fn check_positive(
    result: &mut ValidationResult,
    row: &Row,
    column: &str,
    cell: &Cell,
) -> Option<f64> {
    match cell {
        Cell::Empty => {
            result.add_error(format!("Row {}: missing {}", row.line, column));
            None
        }
        Cell::Text(text) => {
            result.add_error(format!(
                "Row {}: {} '{}' is not a number",
                row.line, column, text
            ));
            None
        }
        Cell::Number(value) if !value.is_finite() => {
            result.add_error(format!(
                "Row {}: {} {} is not finite",
                row.line, column, value
            ));
            None
        }
        Cell::Number(value) if *value <= 0.0 => {
            result.add_error(format!(
                "Row {}: {} {} must be positive",
                row.line, column, value
            ));
            None
        }
        Cell::Number(value) => Some(*value),
    }
}

/// Validate and turn any errors into a single [`LoaderError::Validation`].
pub fn quick_validate(table: &PlateTable, capacity: Capacity) -> Result<ValidationResult> {
    let result = validate_table(table, capacity)?;

    if !result.passed {
        return Err(LoaderError::Validation {
            errors: result.errors,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FurnacePreset;

    fn table(records: Vec<Vec<Cell>>) -> PlateTable {
        PlateTable::from_records(&["Plate Weight", "Plate Thickness"], records).unwrap()
    }

    fn furnace1() -> Capacity {
        FurnacePreset::Furnace1.capacity()
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_table tests ====================

    #[test]
    fn test_validate_clean_table() {
        let result = validate_table(
            &table(vec![vec![Cell::Number(20.0), Cell::Number(50.0)]]),
            furnace1(),
        )
        .unwrap();
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_table_warns() {
        let result = validate_table(&table(vec![]), furnace1()).unwrap();
        assert!(result.passed);
        assert_eq!(result.warnings, vec!["No plates in input"]);
    }

    #[test]
    fn test_validate_reports_bad_cells() {
        let result = validate_table(
            &table(vec![
                vec![Cell::Text("n/a".to_string()), Cell::Number(50.0)],
                vec![Cell::Number(-3.0), Cell::Number(0.0)],
                vec![Cell::Number(5.0), Cell::Empty],
            ]),
            furnace1(),
        )
        .unwrap();

        assert!(!result.passed);
        assert_eq!(
            result.errors,
            vec![
                "Row 2: Plate Weight 'n/a' is not a number",
                "Row 3: Plate Weight -3 must be positive",
                "Row 3: Plate Thickness 0 must be positive",
                "Row 4: missing Plate Thickness",
            ]
        );
    }

    #[test]
    fn test_validate_warns_on_oversized_plate() {
        let result = validate_table(
            &table(vec![vec![Cell::Number(120.0), Cell::Number(400.0)]]),
            furnace1(),
        )
        .unwrap();

        assert!(result.passed);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("exceeds furnace capacity 100 MT"));
        assert!(result.warnings[1].contains("exceeds furnace height 350 mm"));
    }

    #[test]
    fn test_warning_agrees_with_solver_on_plate_just_over_cap() {
        let table = table(vec![vec![Cell::Number(100.0 + 5e-10), Cell::Number(10.0)]]);
        let result = validate_table(&table, furnace1()).unwrap();
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("will never be loaded"));

        let selection = crate::solver::select(&table.plates().unwrap(), furnace1()).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_quick_validate_fails_with_validation_error() {
        let err = quick_validate(
            &table(vec![vec![Cell::Number(f64::INFINITY), Cell::Number(5.0)]]),
            furnace1(),
        )
        .unwrap_err();

        match err {
            LoaderError::Validation { errors } => {
                assert_eq!(errors, vec!["Row 2: Plate Weight inf is not finite"]);
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }
}
