//! Backtracking decider for 3-NAESAT.

use npc_common::{Assignment, Formula, SearchConfig};
use tracing::{debug, trace};

use crate::budget::{Budget, SearchError, SearchReport};
use crate::profiling::Timer;

/// Depth-first search over variables `1..=n`, `true` before `false`.
///
/// Only complete assignments are tested: once every variable has a value
/// the not-all-equal predicate is evaluated over all clauses and the branch
/// is accepted or abandoned. No propagation, no clause learning.
pub struct NaeSatSearch<'f> {
    formula: &'f Formula,
    assignment: Assignment,
}

impl<'f> NaeSatSearch<'f> {
    /// Decide NAE-satisfiability with no step or time bound.
    ///
    /// # Panics
    ///
    /// Panics if the formula uses a variable above its declared count (see
    /// [`Formula::validate`]); use [`NaeSatSearch::solve_with`] to get that
    /// as an error instead.
    #[must_use]
    pub fn solve(formula: &'f Formula) -> Option<Assignment> {
        match Self::solve_with(formula, &SearchConfig::unlimited()) {
            Ok(report) => report.witness,
            Err(e) => panic!("NAE search precondition violated: {e}"),
        }
    }

    /// Decide NAE-satisfiability within the bounds of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Formula`] for a malformed formula, and
    /// [`SearchError::StepLimit`] or [`SearchError::TimeLimit`] when the
    /// search is cut short.
    pub fn solve_with(
        formula: &'f Formula,
        config: &SearchConfig,
    ) -> Result<SearchReport<Assignment>, SearchError> {
        let mut timer = Timer::new("NaeSatSearch::solve_with");
        formula.validate()?;

        let mut search = Self {
            formula,
            assignment: Assignment::all_false(formula.num_vars()),
        };
        let mut budget = Budget::new(config);

        let found = search.backtrack(&mut budget)?;
        let stats = budget.stats();
        timer.add_steps(stats.steps);
        debug!(
            "NAE search on n={} k={} finished: satisfiable={} steps={}",
            formula.num_vars(),
            formula.num_clauses(),
            found,
            stats.steps
        );

        let witness = found.then_some(search.assignment);
        Ok(SearchReport { witness, stats })
    }

    /// Depth-first search over `1..=depth`, with the assignment itself as
    /// the stack: a variable still `true` has its `false` branch pending.
    /// One budget tick per variable value entered, plus one for the root.
    fn backtrack(&mut self, budget: &mut Budget) -> Result<bool, SearchError> {
        let n = self.formula.num_vars();
        let mut depth = 0;
        budget.tick()?;

        loop {
            if depth < n {
                depth += 1;
                self.assignment.set(depth, true);
                budget.tick()?;
                continue;
            }

            // Base Case
            if self.formula.is_nae_satisfied(&self.assignment) {
                return Ok(true);
            }

            // Unwind to the deepest variable whose `false` branch is pending.
            loop {
                if depth == 0 {
                    return Ok(false);
                }
                if self.assignment.get(depth) {
                    self.assignment.set(depth, false);
                    budget.tick()?;
                    break;
                }
                trace!("variable {} exhausted both values, backtracking", depth);
                depth -= 1;
            }
        }
    }
}
