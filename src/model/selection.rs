//! Selection - The plates chosen for one furnace load.

use super::Plate;
use crate::config::Capacity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subset of plates chosen for a furnace load, with its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Original indices of the chosen plates, ascending.
    pub indices: Vec<usize>,
    /// Sum of chosen plate weights (MT).
    pub total_weight: f64,
    /// Sum of chosen plate thicknesses (mm).
    pub total_thickness: f64,
    /// Capacity the selection was computed against.
    pub capacity: Capacity,
    /// Set when the selection came from the greedy fallback.
    pub approximate: bool,
}

impl Selection {
    /// An empty selection against the given capacity.
    pub fn empty(capacity: Capacity) -> Self {
        Self {
            indices: Vec::new(),
            total_weight: 0.0,
            total_thickness: 0.0,
            capacity,
            approximate: false,
        }
    }

    /// Build a selection from plate indices, summing the plates in index order.
    pub fn from_indices(plates: &[Plate], mut indices: Vec<usize>, capacity: Capacity) -> Self {
        indices.sort_unstable();
        indices.dedup();

        let mut total_weight = 0.0;
        let mut total_thickness = 0.0;
        for plate in plates.iter().filter(|p| indices.binary_search(&p.index).is_ok()) {
            total_weight += plate.weight;
            total_thickness += plate.thickness;
        }

        Self {
            indices,
            total_weight,
            total_thickness,
            capacity,
            approximate: false,
        }
    }

    /// Mark the selection as a heuristic result.
    pub fn into_approximate(mut self) -> Self {
        self.approximate = true;
        self
    }

    /// Number of plates selected.
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check the totals against the capacity.
    pub fn is_feasible(&self) -> bool {
        self.capacity.admits(self.total_weight, self.total_thickness)
    }

    /// Unused weight capacity.
    pub fn remaining_weight(&self) -> f64 {
        (self.capacity.weight - self.total_weight).max(0.0)
    }

    /// Unused thickness capacity.
    pub fn remaining_thickness(&self) -> f64 {
        (self.capacity.thickness - self.total_thickness).max(0.0)
    }

    /// Weight utilization as a fraction of capacity.
    pub fn weight_utilization(&self) -> f64 {
        self.total_weight / self.capacity.weight
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} plates, {:.2} MT, {:.0} mm",
            self.count(),
            self.total_weight,
            self.total_thickness
        )?;
        if self.approximate {
            write!(f, " (approximate)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plates_from_pairs;

    #[test]
    fn test_from_indices_sums_and_sorts() {
        let plates = plates_from_pairs(&[(60.0, 100.0), (50.0, 100.0), (40.0, 100.0)]);
        let selection = Selection::from_indices(&plates, vec![2, 0], Capacity::new(100.0, 250.0));

        assert_eq!(selection.indices, vec![0, 2]);
        assert_eq!(selection.total_weight, 100.0);
        assert_eq!(selection.total_thickness, 200.0);
        assert_eq!(selection.count(), 2);
        assert!(selection.is_feasible());
        assert_eq!(selection.remaining_thickness(), 50.0);
    }

    #[test]
    fn test_display() {
        let plates = plates_from_pairs(&[(12.346, 20.0)]);
        let selection = Selection::from_indices(&plates, vec![0], Capacity::new(100.0, 350.0));
        assert_eq!(selection.to_string(), "1 plates, 12.35 MT, 20 mm");
        assert_eq!(
            selection.into_approximate().to_string(),
            "1 plates, 12.35 MT, 20 mm (approximate)"
        );
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::empty(Capacity::new(100.0, 350.0));
        assert!(selection.is_empty());
        assert_eq!(selection.total_weight, 0.0);
        assert_eq!(selection.weight_utilization(), 0.0);
        assert!(selection.is_feasible());
    }
}
