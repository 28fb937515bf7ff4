//! Greedy fallback: fill the furnace pass by pass, keep the heavier load.
//!
//! One pass takes the heaviest plates first, which always includes the
//! heaviest plate that fits alone. The other takes the most weight per
//! millimetre of stack first, which does better when the height is binding.

use super::PlateSolver;
use crate::config::Capacity;
use crate::error::Result;
use crate::model::{Plate, Selection};
use std::cmp::Ordering;

/// Heuristic solver used when the exact solve gives up.
///
/// Results are feasible but not necessarily optimal, and are always marked
/// approximate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl PlateSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, plates: &[Plate], capacity: Capacity) -> Result<Selection> {
        let heaviest = fill(plates, capacity, |a, b| b.weight.total_cmp(&a.weight));
        let densest = fill(plates, capacity, |a, b| {
            density(b)
                .total_cmp(&density(a))
                .then_with(|| b.weight.total_cmp(&a.weight))
        });

        let best = if densest.total_weight > heaviest.total_weight {
            densest
        } else {
            heaviest
        };
        Ok(best.into_approximate())
    }
}

fn density(plate: &Plate) -> f64 {
    if plate.thickness > 0.0 {
        plate.weight / plate.thickness
    } else {
        f64::INFINITY
    }
}

/// Add plates in the given order while they fit. Ties go to thinner, then earlier plates.
fn fill<F>(plates: &[Plate], capacity: Capacity, order: F) -> Selection
where
    F: Fn(&Plate, &Plate) -> Ordering,
{
    let mut sorted: Vec<&Plate> = plates.iter().filter(|p| p.weight > 0.0).collect();
    sorted.sort_by(|a, b| {
        order(a, b)
            .then_with(|| a.thickness.total_cmp(&b.thickness))
            .then_with(|| a.index.cmp(&b.index))
    });

    let mut weight = 0.0;
    let mut thickness = 0.0;
    let mut indices = Vec::new();

    for plate in sorted {
        if capacity.admits(weight + plate.weight, thickness + plate.thickness) {
            weight += plate.weight;
            thickness += plate.thickness;
            indices.push(plate.index);
        }
    }

    Selection::from_indices(plates, indices, capacity)
}
