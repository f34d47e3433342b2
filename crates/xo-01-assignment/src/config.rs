//! Configuration for the assignment subsystem

use serde::{Deserialize, Serialize};

use crate::domain::{AssignmentError, DEFAULT_CROSSOVER_TOLERANCE};

/// Assignment configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Fraction of all objects each user should receive, in `(0, 1]`
    pub assignment_percentage: f64,
    /// Fraction of a user's objects that should overlap with others, in `[0, 1]`
    pub crossover_percentage: f64,
    /// Absolute tolerance before the verifier warns about crossover drift
    pub crossover_tolerance: f64,
    /// Shuffle seed; `None` draws one from entropy on every run
    pub seed: Option<u64>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            assignment_percentage: 0.3,
            crossover_percentage: 0.2,
            crossover_tolerance: DEFAULT_CROSSOVER_TOLERANCE,
            seed: None,
        }
    }
}

impl AssignmentConfig {
    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every range up front.
    ///
    /// Percentages are checked again by the feasibility checker; this catches
    /// a bad tolerance before any run starts.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if !(self.assignment_percentage > 0.0 && self.assignment_percentage <= 1.0) {
            return Err(AssignmentError::invalid(
                "assignment_percentage",
                self.assignment_percentage,
                "must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_percentage) {
            return Err(AssignmentError::invalid(
                "crossover_percentage",
                self.crossover_percentage,
                "must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_tolerance) {
            return Err(AssignmentError::invalid(
                "crossover_tolerance",
                self.crossover_tolerance,
                "must be in [0, 1]",
            ));
        }
        Ok(())
    }
}
