//! Data model types for furnace loading.

mod plate;
mod selection;
mod table;

pub use plate::{plates_from_pairs, Plate};
pub use selection::Selection;
pub use table::{find_column, normalize_header, Cell, PlateTable, Row};
