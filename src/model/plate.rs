//! Plate - A single steel plate from the inventory.

use serde::{Deserialize, Serialize};

/// A single steel plate considered for the furnace load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    /// Position of the plate's row among the data rows of the input table.
    pub index: usize,
    /// Plate weight in metric tons.
    pub weight: f64,
    /// Plate thickness in millimeters.
    pub thickness: f64,
}

impl Plate {
    /// Create a new plate.
    pub fn new(index: usize, weight: f64, thickness: f64) -> Self {
        Self {
            index,
            weight,
            thickness,
        }
    }
}

/// Build plates from `(weight, thickness)` pairs, numbering them in order.
pub fn plates_from_pairs(pairs: &[(f64, f64)]) -> Vec<Plate> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(weight, thickness))| Plate::new(index, weight, thickness))
        .collect()
}
