//! Plate selection: which plates to load so the furnace carries the most weight.
//!
//! The selection problem is a 0/1 knapsack with two capacity constraints
//! (total weight and total stack thickness) where each plate's value is its
//! weight. [`select`] solves it exactly; [`select_with_fallback`] retries with
//! the greedy heuristic when the exact solve runs out of budget.

mod frontier;
mod greedy;

pub use frontier::FrontierSolver;
pub use greedy::GreedySolver;

use crate::config::{Capacity, SolveOptions};
use crate::error::{LoaderError, Result};
use crate::model::{Plate, Selection};
use tracing::{debug, warn};

/// A strategy for choosing plates under a capacity.
pub trait PlateSolver {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Choose plates. Inputs are assumed to have passed [`check_inputs`].
    fn solve(&self, plates: &[Plate], capacity: Capacity) -> Result<Selection>;
}

/// Reject invalid capacities and plates with negative or non-finite attributes.
pub fn check_inputs(plates: &[Plate], capacity: Capacity) -> Result<()> {
    capacity.check()?;

    for plate in plates {
        for (field, value) in [("weight", plate.weight), ("thickness", plate.thickness)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LoaderError::InfeasibleInput {
                    index: plate.index,
                    field: field.to_string(),
                    value,
                });
            }
        }
    }

    Ok(())
}

/// Select the heaviest feasible set of plates with default options.
pub fn select(plates: &[Plate], capacity: Capacity) -> Result<Selection> {
    select_with(plates, capacity, &SolveOptions::default())
}

/// Select the heaviest feasible set of plates, exactly.
///
/// Fails with [`LoaderError::SolverTimeout`] or [`LoaderError::SolverFailure`]
/// when the budget in `options` is exhausted; never falls back.
pub fn select_with(
    plates: &[Plate],
    capacity: Capacity,
    options: &SolveOptions,
) -> Result<Selection> {
    check_inputs(plates, capacity)?;

    if plates.is_empty() {
        return Ok(Selection::empty(capacity));
    }

    let solver = FrontierSolver::from_options(options);
    debug!("Solving {} plates with {} solver", plates.len(), solver.name());
    solver.solve(plates, capacity)
}

/// Select exactly, falling back to the greedy heuristic if allowed.
///
/// A fallback result has `approximate` set.
pub fn select_with_fallback(
    plates: &[Plate],
    capacity: Capacity,
    options: &SolveOptions,
) -> Result<Selection> {
    match select_with(plates, capacity, options) {
        Err(err) if err.is_solver_failure() && options.allow_fallback => {
            warn!("{}; falling back to greedy selection (approximate)", err);
            GreedySolver.solve(plates, capacity)
        }
        result => result,
    }
}
