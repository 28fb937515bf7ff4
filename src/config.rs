//! Configuration constants and settings for the furnace loader.

use crate::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Floating-point comparison epsilon for telling load weights apart.
pub const EPS: f64 = 1e-9;

/// Relative slack for rounding error in summed plate values.
pub const SUM_SLACK: f64 = 1024.0 * f64::EPSILON;

/// Header of the weight column (metric tons).
pub const WEIGHT_COLUMN: &str = "Plate Weight";

/// Header of the thickness column (millimeters).
pub const THICKNESS_COLUMN: &str = "Plate Thickness";

/// Worksheet name used for exported selections.
pub const EXPORT_SHEET_NAME: &str = "Optimized Plates";

/// Default wall-clock budget for an exact solve.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 5_000;

/// Default cap on the number of partial loads kept by the exact solver.
pub const DEFAULT_MAX_STATES: usize = 500_000;

/// Furnace preset with fixed weight and thickness capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FurnacePreset {
    /// 100 MT, 350 mm stack height.
    #[default]
    Furnace1,
    /// 200 MT, 700 mm stack height.
    Furnace2,
}

impl FurnacePreset {
    /// Weight capacity in metric tons.
    pub fn weight_capacity(&self) -> f64 {
        match self {
            FurnacePreset::Furnace1 => 100.0,
            FurnacePreset::Furnace2 => 200.0,
        }
    }

    /// Thickness (stack height) capacity in millimeters.
    pub fn thickness_capacity(&self) -> f64 {
        match self {
            FurnacePreset::Furnace1 => 350.0,
            FurnacePreset::Furnace2 => 700.0,
        }
    }

    /// Capacity pair for this preset.
    pub fn capacity(&self) -> Capacity {
        Capacity {
            weight: self.weight_capacity(),
            thickness: self.thickness_capacity(),
        }
    }

    /// Furnace number as shown to operators.
    pub fn number(&self) -> u8 {
        match self {
            FurnacePreset::Furnace1 => 1,
            FurnacePreset::Furnace2 => 2,
        }
    }
}

impl fmt::Display for FurnacePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Furnace {} ({} MT, {} mm height)",
            self.number(),
            self.weight_capacity(),
            self.thickness_capacity()
        )
    }
}

impl FromStr for FurnacePreset {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "1" | "furnace1" => Ok(FurnacePreset::Furnace1),
            "2" | "furnace2" => Ok(FurnacePreset::Furnace2),
            _ => Err(LoaderError::UnknownFurnace {
                value: s.to_string(),
            }),
        }
    }
}

/// Weight and thickness limits for a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    /// Maximum total weight (MT).
    pub weight: f64,
    /// Maximum total thickness (mm).
    pub thickness: f64,
}

impl Capacity {
    /// Create a capacity pair.
    pub fn new(weight: f64, thickness: f64) -> Self {
        Self { weight, thickness }
    }

    /// Reject non-finite or non-positive limits.
    pub fn check(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(LoaderError::InvalidCapacity {
                field: "weight".to_string(),
                value: self.weight,
            });
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(LoaderError::InvalidCapacity {
                field: "thickness".to_string(),
                value: self.thickness,
            });
        }
        Ok(())
    }

    /// Check whether a load of the given totals fits.
    #[inline]
    pub fn admits(&self, weight: f64, thickness: f64) -> bool {
        self.admits_weight(weight) && self.admits_thickness(thickness)
    }

    /// Check a total weight against the weight cap.
    #[inline]
    pub fn admits_weight(&self, weight: f64) -> bool {
        float_cmp::within_cap(weight, self.weight)
    }

    /// Check a total thickness against the stack height.
    #[inline]
    pub fn admits_thickness(&self, thickness: f64) -> bool {
        float_cmp::within_cap(thickness, self.thickness)
    }
}

/// Budget and fallback settings for the plate selector.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Wall-clock budget for the exact solve.
    pub time_limit: Duration,
    /// Maximum number of partial loads kept on the frontier.
    pub max_states: usize,
    /// Fall back to the greedy heuristic when the exact solve gives up.
    pub allow_fallback: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_millis(DEFAULT_TIME_LIMIT_MS),
            max_states: DEFAULT_MAX_STATES,
            allow_fallback: true,
        }
    }
}

impl SolveOptions {
    /// Options with the given time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, millis: u64) -> Self {
        self.time_limit = Duration::from_millis(millis);
        self
    }

    /// Options that never fall back to the heuristic.
    pub fn exact_only(mut self) -> Self {
        self.allow_fallback = false;
        self
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::{EPS, SUM_SLACK};

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS
    }

    /// `total <= cap`, allowing only the rounding error of a float sum.
    #[inline]
    pub fn within_cap(total: f64, cap: f64) -> bool {
        total <= cap + cap.abs() * SUM_SLACK
    }

    /// `a > b` by more than epsilon.
    #[inline]
    pub fn gt(a: f64, b: f64) -> bool {
        a > b + EPS
    }
}
