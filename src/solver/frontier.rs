//! Exact plate selection over the frontier of reachable load weights.
//!
//! Plates are folded in input order. After each plate the frontier holds one
//! partial load per distinct reachable weight: the one with the thinnest stack,
//! sorted by weight. A heavier load never replaces a lighter one, because the
//! lighter load may still have room for a plate the heavier one cannot take.
//! Loads that cannot catch up with the heaviest load even by taking every
//! remaining plate are dropped. The last entry of the final frontier is the
//! heaviest feasible load, and among loads of that weight the thinnest.

use super::PlateSolver;
use crate::config::{float_cmp, Capacity, SolveOptions, DEFAULT_MAX_STATES};
use crate::error::{LoaderError, Result};
use crate::model::{Plate, Selection};
use std::time::{Duration, Instant};
use tracing::debug;

/// Fixed-size bit set over candidate positions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlateSet {
    words: Vec<u64>,
}

impl PlateSet {
    fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    fn insert(&mut self, pos: usize) {
        self.words[pos / 64] |= 1u64 << (pos % 64);
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..64)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| w * 64 + bit)
        })
    }
}

/// A partial load: its totals and the candidates it contains.
#[derive(Debug, Clone)]
struct Load {
    weight: f64,
    thickness: f64,
    members: PlateSet,
}

impl Load {
    fn empty(len: usize) -> Self {
        Self {
            weight: 0.0,
            thickness: 0.0,
            members: PlateSet::with_len(len),
        }
    }

    fn with_plate(&self, pos: usize, plate: &Plate) -> Self {
        let mut members = self.members.clone();
        members.insert(pos);
        Self {
            weight: self.weight + plate.weight,
            thickness: self.thickness + plate.thickness,
            members,
        }
    }

    /// Frontier order: lighter first. Loads of equal weight keep their order.
    fn precedes(&self, other: &Load) -> bool {
        !float_cmp::approx_eq(self.weight, other.weight) && self.weight < other.weight
    }
}

/// Append a load, keeping only the thinnest load per weight.
///
/// An equally heavy load already on the frontier wins unless the new one is
/// strictly thinner.
fn push_dominant(frontier: &mut Vec<Load>, load: Load) {
    match frontier.last_mut() {
        Some(last) if float_cmp::approx_eq(last.weight, load.weight) => {
            if float_cmp::gt(last.thickness, load.thickness) {
                *last = load;
            }
        }
        _ => frontier.push(load),
    }
}

/// Merge two sorted frontiers. On exact ties the existing load is kept.
fn merge_frontiers(existing: Vec<Load>, shifted: Vec<Load>) -> Vec<Load> {
    let mut merged = Vec::with_capacity(existing.len() + shifted.len());
    let mut existing = existing.into_iter().peekable();
    let mut shifted = shifted.into_iter().peekable();

    loop {
        let take_shifted = match (existing.peek(), shifted.peek()) {
            (Some(old), Some(new)) => new.precedes(old),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };

        let next = if take_shifted {
            shifted.next()
        } else {
            existing.next()
        };

        if let Some(load) = next {
            push_dominant(&mut merged, load);
        }
    }

    merged
}

/// Exact solver with a wall-clock and frontier-size budget.
#[derive(Debug, Clone)]
pub struct FrontierSolver {
    /// Wall-clock budget.
    pub time_limit: Duration,
    /// Maximum frontier size.
    pub max_states: usize,
}

impl Default for FrontierSolver {
    fn default() -> Self {
        Self::from_options(&SolveOptions::default())
    }
}

impl FrontierSolver {
    /// Build a solver from solve options.
    pub fn from_options(options: &SolveOptions) -> Self {
        Self {
            time_limit: options.time_limit,
            max_states: options.max_states.max(1),
        }
    }

    /// Solver without a time limit.
    pub fn unbounded() -> Self {
        Self {
            time_limit: Duration::MAX,
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

impl PlateSolver for FrontierSolver {
    fn name(&self) -> &'static str {
        "frontier"
    }

    fn solve(&self, plates: &[Plate], capacity: Capacity) -> Result<Selection> {
        let start = Instant::now();

        let candidates: Vec<&Plate> = plates
            .iter()
            .filter(|p| capacity.admits(p.weight, p.thickness))
            .collect();

        // Weight still available after each candidate position.
        let mut remaining: Vec<f64> = vec![0.0; candidates.len() + 1];
        for pos in (0..candidates.len()).rev() {
            remaining[pos] = remaining[pos + 1] + candidates[pos].weight;
        }

        let mut frontier = vec![Load::empty(candidates.len())];
        let mut peak = 1;

        for (pos, plate) in candidates.iter().enumerate() {
            let elapsed = start.elapsed();
            if elapsed >= self.time_limit {
                return Err(LoaderError::SolverTimeout {
                    elapsed,
                    limit: self.time_limit,
                });
            }

            let shifted: Vec<Load> = frontier
                .iter()
                .filter(|load| {
                    capacity.admits(load.weight + plate.weight, load.thickness + plate.thickness)
                })
                .map(|load| load.with_plate(pos, plate))
                .collect();

            if shifted.is_empty() {
                continue;
            }

            frontier = merge_frontiers(frontier, shifted);

            let best = frontier.last().map_or(0.0, |load| load.weight);
            let reach = remaining[pos + 1];
            frontier.retain(|load| !float_cmp::gt(best, load.weight + reach));
            peak = peak.max(frontier.len());

            if frontier.len() > self.max_states {
                return Err(LoaderError::SolverFailure {
                    message: format!(
                        "frontier grew to {} loads after {} of {} plates (limit {})",
                        frontier.len(),
                        pos + 1,
                        candidates.len(),
                        self.max_states
                    ),
                });
            }
        }

        let indices: Vec<usize> = frontier
            .last()
            .map(|best| best.members.iter().map(|pos| candidates[pos].index).collect())
            .unwrap_or_default();

        debug!(
            "Frontier solve: {} of {} plates fit alone, peak frontier {}, took {:?}",
            candidates.len(),
            plates.len(),
            peak,
            start.elapsed()
        );

        Ok(Selection::from_indices(plates, indices, capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plates_from_pairs;
    use pretty_assertions::assert_eq;

    fn solve(pairs: &[(f64, f64)], weight: f64, thickness: f64) -> Selection {
        FrontierSolver::unbounded()
            .solve(&plates_from_pairs(pairs), Capacity::new(weight, thickness))
            .unwrap()
    }

    #[test]
    fn test_plate_set_iter() {
        let mut set = PlateSet::with_len(130);
        set.insert(0);
        set.insert(64);
        set.insert(129);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 64, 129]);
    }

    #[test]
    fn test_merge_keeps_thinnest_load_per_weight() {
        let load = |weight, thickness| Load {
            weight,
            thickness,
            members: PlateSet::with_len(1),
        };
        let merged = merge_frontiers(
            vec![load(0.0, 0.0), load(5.0, 10.0), load(8.0, 30.0)],
            vec![load(4.0, 5.0), load(7.0, 10.0), load(8.0, 20.0), load(9.0, 40.0)],
        );
        let totals: Vec<_> = merged.iter().map(|l| (l.weight, l.thickness)).collect();
        assert_eq!(
            totals,
            vec![(0.0, 0.0), (4.0, 5.0), (5.0, 10.0), (7.0, 10.0), (8.0, 20.0), (9.0, 40.0)]
        );
    }

    #[test]
    fn test_lighter_load_kept_for_later_plate() {
        // {20} must survive next to the heavier {30} so that 20 + 40 can fill the cap.
        let selection = solve(&[(30.0, 10.0), (20.0, 15.0), (40.0, 10.0)], 60.0, 350.0);
        assert_eq!(selection.indices, vec![1, 2]);
        assert_eq!(selection.total_weight, 60.0);
    }

    #[test]
    fn test_weight_cap_binding() {
        let selection = solve(&[(60.0, 100.0), (50.0, 100.0), (40.0, 100.0)], 100.0, 250.0);
        assert_eq!(selection.indices, vec![0, 2]);
        assert_eq!(selection.total_weight, 100.0);
        assert_eq!(selection.total_thickness, 200.0);
    }

    #[test]
    fn test_thickness_cap_binding() {
        // Two heavy thick plates would fit the weight cap but not the stack height.
        let selection = solve(&[(45.0, 200.0), (45.0, 200.0), (30.0, 50.0), (20.0, 50.0)], 100.0, 350.0);
        assert_eq!(selection.indices, vec![0, 2, 3]);
        assert_eq!(selection.total_weight, 95.0);
        assert_eq!(selection.total_thickness, 300.0);
    }

    #[test]
    fn test_prefers_thinner_stack_on_equal_weight() {
        let selection = solve(&[(30.0, 10.0), (20.0, 10.0), (10.0, 10.0), (40.0, 10.0)], 60.0, 350.0);
        assert_eq!(selection.indices, vec![1, 3]);
        assert_eq!(selection.total_thickness, 20.0);
    }

    #[test]
    fn test_exact_tie_prefers_earlier_plate() {
        let selection = solve(&[(50.0, 100.0), (50.0, 100.0)], 60.0, 350.0);
        assert_eq!(selection.indices, vec![0]);
    }

    #[test]
    fn test_oversized_plates_skipped() {
        let selection = solve(&[(150.0, 10.0), (10.0, 400.0), (25.0, 30.0)], 100.0, 350.0);
        assert_eq!(selection.indices, vec![2]);
    }

    #[test]
    fn test_zero_thickness_plate_is_free() {
        let selection = solve(&[(10.0, 0.0), (90.0, 350.0)], 100.0, 350.0);
        assert_eq!(selection.indices, vec![0, 1]);
    }

    #[test]
    fn test_zero_weight_plate_not_loaded() {
        let selection = solve(&[(0.0, 10.0), (20.0, 10.0)], 100.0, 350.0);
        assert_eq!(selection.indices, vec![1]);
    }

    #[test]
    fn test_fractional_weights_fill_exactly() {
        let selection = solve(&[(0.1, 1.0), (0.2, 1.0), (0.7, 1.0), (0.5, 1.0)], 1.0, 350.0);
        assert_eq!(selection.indices, vec![0, 1, 2]);
        assert!(selection.is_feasible());
    }

    #[test]
    fn test_time_limit_exceeded() {
        let solver = FrontierSolver {
            time_limit: Duration::ZERO,
            max_states: 10,
        };
        let plates = plates_from_pairs(&[(1.0, 1.0)]);
        let err = solver.solve(&plates, Capacity::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, LoaderError::SolverTimeout { .. }));
    }

    #[test]
    fn test_state_budget_exceeded() {
        let solver = FrontierSolver {
            time_limit: Duration::from_secs(60),
            max_states: 2,
        };
        let plates = plates_from_pairs(&[(1.0, 1.0), (2.0, 2.0), (4.0, 4.0)]);
        let err = solver.solve(&plates, Capacity::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, LoaderError::SolverFailure { .. }));
    }
}
