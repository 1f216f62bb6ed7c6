//! Step and time accounting shared by the searches.

use std::time::{Duration, Instant};

use npc_common::{FormulaError, SearchConfig};
use serde::Serialize;
use thiserror::Error;

/// Errors that stop a search before it reaches a verdict.
///
/// Not colorable and not satisfiable are verdicts, not errors; they are the
/// `None` witness of a [`SearchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The configured step bound was reached.
    #[error("search stopped after {steps} steps: step limit of {limit} reached")]
    StepLimit {
        /// Steps taken, including the one that crossed the bound.
        steps: u64,
        /// The configured bound.
        limit: u64,
    },

    /// The configured wall-clock bound was reached.
    #[error("search stopped after {steps} steps: time limit of {limit:?} reached")]
    TimeLimit {
        /// Steps taken before the deadline was noticed.
        steps: u64,
        /// The configured bound.
        limit: Duration,
    },

    /// The formula does not satisfy the search precondition.
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

impl SearchError {
    /// True for the two budget variants.
    #[must_use]
    pub const fn is_budget_exhausted(&self) -> bool {
        matches!(self, Self::StepLimit { .. } | Self::TimeLimit { .. })
    }
}

/// Counters collected over one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Recursive entries made, one per partial assignment visited.
    pub steps: u64,
    /// Wall-clock time of the call.
    pub elapsed: Duration,
}

/// Outcome of a search that ran to a verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport<W> {
    /// The witness, or `None` when none exists.
    pub witness: Option<W>,
    /// Counters for the call.
    pub stats: SearchStats,
}

impl<W> SearchReport<W> {
    /// True when a witness was found.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.witness.is_some()
    }
}

/// Per-call budget. Every search step calls [`Budget::tick`].
pub(crate) struct Budget {
    step_limit: Option<u64>,
    time_limit: Option<Duration>,
    steps: u64,
    started: Instant,
}

impl Budget {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            step_limit: config.step_limit,
            time_limit: config.time_limit,
            steps: 0,
            started: Instant::now(),
        }
    }

    /// Count one step and fail if either bound is now exceeded.
    #[inline]
    pub(crate) fn tick(&mut self) -> Result<(), SearchError> {
        self.steps += 1;
        if let Some(limit) = self.step_limit {
            if self.steps > limit {
                return Err(SearchError::StepLimit {
                    steps: self.steps,
                    limit,
                });
            }
        }
        if let Some(limit) = self.time_limit {
            if self.started.elapsed() >= limit {
                return Err(SearchError::TimeLimit {
                    steps: self.steps,
                    limit,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn stats(&self) -> SearchStats {
        SearchStats {
            steps: self.steps,
            elapsed: self.started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_budget_never_fails() {
        let mut budget = Budget::new(&SearchConfig::unlimited());
        for _ in 0..10_000 {
            assert!(budget.tick().is_ok());
        }
        assert_eq!(budget.stats().steps, 10_000);
    }

    #[test]
    fn step_limit_is_inclusive() {
        let cfg = SearchConfig::builder().step_limit(3).build();
        let mut budget = Budget::new(&cfg);
        assert!(budget.tick().is_ok());
        assert!(budget.tick().is_ok());
        assert!(budget.tick().is_ok());
        assert_eq!(
            budget.tick(),
            Err(SearchError::StepLimit { steps: 4, limit: 3 })
        );
    }

    #[test]
    fn zero_time_limit_fails_immediately() {
        let cfg = SearchConfig::builder().time_limit(Duration::ZERO).build();
        let mut budget = Budget::new(&cfg);
        let err = budget.tick().unwrap_err();
        assert!(err.is_budget_exhausted());
        assert!(matches!(err, SearchError::TimeLimit { steps: 1, .. }));
    }

    #[test]
    fn formula_errors_are_not_budget_errors() {
        let err = SearchError::from(FormulaError::ZeroLiteral { clause: 0 });
        assert!(!err.is_budget_exhausted());
    }
}
