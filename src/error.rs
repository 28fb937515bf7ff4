//! Error types for the furnace loader.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error codes for plate loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Unreadable spreadsheet (-3)
    ReadError = -3,
    /// Unsupported file extension (-4)
    UnsupportedFormat = -4,
    /// Required column missing (E100)
    MissingColumn = 100,
    /// Malformed cell or row data (E101)
    MalformedInput = 101,
    /// Bad capacity or furnace choice (E200)
    InvalidCapacity = 200,
    /// Plate with negative or non-finite attributes (E201)
    InfeasibleInput = 201,
    /// Exact solve ran out of time (E300)
    SolverTimeout = 300,
    /// Exact solve could not finish within its state budget (E301)
    SolverFailure = 301,
    /// Output could not be written (E400)
    ExportFailed = 400,
}

/// Main error type for the loader.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Unsupported file format '{extension}' (expected .xlsx, .xls or .csv)")]
    UnsupportedFormat { extension: String },

    #[error("Spreadsheet error: {message}")]
    Spreadsheet { message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Invalid value in row {row}, column '{column}': '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Input validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Unknown furnace '{value}' (expected 1 or 2)")]
    UnknownFurnace { value: String },

    #[error("Invalid {field} capacity: {value}")]
    InvalidCapacity { field: String, value: f64 },

    #[error("Plate {index} has invalid {field}: {value}")]
    InfeasibleInput {
        index: usize,
        field: String,
        value: f64,
    },

    #[error("Solver timed out after {elapsed:?} (limit {limit:?})")]
    SolverTimeout { elapsed: Duration, limit: Duration },

    #[error("Solver failed: {message}")]
    SolverFailure { message: String },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoaderError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LoaderError::FileNotFound { .. } => ErrorCode::FileNotFound,
            LoaderError::EmptyFile { .. } => ErrorCode::EmptyFile,
            LoaderError::UnsupportedFormat { .. } => ErrorCode::UnsupportedFormat,
            LoaderError::Spreadsheet { .. } => ErrorCode::ReadError,
            LoaderError::Csv(_) => ErrorCode::ReadError,
            LoaderError::MissingColumn { .. } => ErrorCode::MissingColumn,
            LoaderError::InvalidValue { .. } => ErrorCode::MalformedInput,
            LoaderError::Validation { .. } => ErrorCode::MalformedInput,
            LoaderError::UnknownFurnace { .. } => ErrorCode::InvalidCapacity,
            LoaderError::InvalidCapacity { .. } => ErrorCode::InvalidCapacity,
            LoaderError::InfeasibleInput { .. } => ErrorCode::InfeasibleInput,
            LoaderError::SolverTimeout { .. } => ErrorCode::SolverTimeout,
            LoaderError::SolverFailure { .. } => ErrorCode::SolverFailure,
            LoaderError::Export { .. } => ErrorCode::ExportFailed,
            LoaderError::Io(_) => ErrorCode::ReadError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether the input table itself is malformed (reported before solving).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::MissingColumn | ErrorCode::MalformedInput
        )
    }

    /// Whether the exact solver gave up and a heuristic retry makes sense.
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::SolverTimeout | ErrorCode::SolverFailure
        )
    }
}

impl From<calamine::Error> for LoaderError {
    fn from(err: calamine::Error) -> Self {
        LoaderError::Spreadsheet {
            message: err.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for LoaderError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        LoaderError::Export {
            message: err.to_string(),
        }
    }
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;
