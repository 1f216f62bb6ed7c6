//! Backtracking decider for graph 3-colorability.

use npc_common::{Color, Graph, SearchConfig, VertexColoring};
use tracing::{debug, trace};

use crate::budget::{Budget, SearchError, SearchReport};
use crate::profiling::Timer;

/// Depth-first search over vertices in index order, trying
/// [`Color::TRIAL_ORDER`] at each one.
///
/// The search keeps its own stack, so depth is bounded by memory rather
/// than by the thread's call stack.
///
/// A color is committed to vertex `v` only when no already colored neighbor
/// carries it. When all three fail, `v` is reset to uncolored and the failure
/// goes one level up. The first complete coloring found is the witness.
///
/// Each call owns its scratch coloring, so concurrent searches over the same
/// graph are independent.
pub struct ColoringSearch<'g> {
    graph: &'g Graph,
    colors: Vec<Option<Color>>,
}

impl<'g> ColoringSearch<'g> {
    /// Decide 3-colorability with no step or time bound.
    ///
    /// Returns the witness coloring, or `None` when the graph is not
    /// 3-colorable. The graph with no vertices yields the empty coloring.
    #[must_use]
    pub fn solve(graph: &'g Graph) -> Option<VertexColoring> {
        match Self::solve_with(graph, &SearchConfig::unlimited()) {
            Ok(report) => report.witness,
            Err(e) => unreachable!("unbounded coloring search stopped early: {e}"),
        }
    }

    /// Decide 3-colorability within the bounds of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StepLimit`] or [`SearchError::TimeLimit`] when
    /// the search is cut short. The verdict is never guessed.
    pub fn solve_with(
        graph: &'g Graph,
        config: &SearchConfig,
    ) -> Result<SearchReport<VertexColoring>, SearchError> {
        let mut timer = Timer::new("ColoringSearch::solve_with");
        let mut search = Self {
            graph,
            colors: vec![None; graph.num_vertices()],
        };
        let mut budget = Budget::new(config);

        let found = search.backtrack(&mut budget)?;
        let stats = budget.stats();
        timer.add_steps(stats.steps);
        debug!(
            "coloring search on |V|={} |E|={} finished: colorable={} steps={}",
            graph.num_vertices(),
            graph.num_edges(),
            found,
            stats.steps
        );

        let witness = found.then(|| search.into_coloring());
        Ok(SearchReport { witness, stats })
    }

    /// Depth-first search with the vertex stack kept in `colors` itself:
    /// vertices below `v` are colored, `v` and above are uncolored except
    /// while `v` is being re-tried. One budget tick per vertex entered.
    fn backtrack(&mut self, budget: &mut Budget) -> Result<bool, SearchError> {
        let n = self.graph.num_vertices();
        let mut v = 0;
        budget.tick()?;

        loop {
            // Base Case
            if v == n {
                return Ok(true);
            }

            // Resume after the color `v` had when the search came back to it.
            // Declaration order is trial order.
            let start = self.colors[v].map_or(0, |c| c as usize + 1);
            let next = Color::TRIAL_ORDER[start..]
                .iter()
                .copied()
                .find(|&color| !self.conflicts(v, color));

            if let Some(color) = next {
                self.colors[v] = Some(color);
                v += 1;
                budget.tick()?;
                continue;
            }

            self.colors[v] = None;
            trace!("vertex {} exhausted all colors, backtracking", v);
            if v == 0 {
                return Ok(false);
            }
            v -= 1;
        }
    }

    /// Some colored neighbor of `v` already has `color`.
    fn conflicts(&self, v: usize, color: Color) -> bool {
        self.graph
            .neighbors(v)
            .iter()
            .any(|&u| u != v && self.colors[u] == Some(color))
    }

    fn into_coloring(self) -> VertexColoring {
        VertexColoring::new(self.colors.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use npc_common::Color::{Blue, Green, Red};

    use super::*;

    #[test]
    fn empty_graph_has_empty_coloring() {
        let coloring = ColoringSearch::solve(&Graph::empty(0)).unwrap();
        assert!(coloring.is_empty());
    }

    #[test]
    fn triangle_gets_trial_order() {
        let coloring = ColoringSearch::solve(&Graph::complete(3)).unwrap();
        assert_eq!(coloring.as_slice(), &[Green, Blue, Red]);
    }

    #[test]
    fn independent_vertices_all_take_first_color() {
        let coloring = ColoringSearch::solve(&Graph::empty(4)).unwrap();
        assert!(coloring.as_slice().iter().all(|&c| c == Green));
    }

    #[test]
    fn k4_is_not_colorable() {
        assert!(ColoringSearch::solve(&Graph::complete(4)).is_none());
    }

    #[test]
    fn long_path_does_not_exhaust_the_call_stack() {
        let n = 500_000;
        let path = Graph::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap();
        let report = ColoringSearch::solve_with(&path, &SearchConfig::unlimited()).unwrap();
        assert_eq!(report.stats.steps, n as u64 + 1);
        assert!(path.is_proper_coloring(&report.witness.unwrap()));
    }

    #[test]
    fn backtracking_step_count() {
        // Root, then for each color of v0: v0 itself, two colors for v1 and
        // one forced color for v2 under each. v3 never gets a color.
        let report =
            ColoringSearch::solve_with(&Graph::complete(4), &SearchConfig::unlimited()).unwrap();
        assert!(report.witness.is_none());
        assert_eq!(report.stats.steps, 1 + 3 * (1 + 2 + 2));
    }

    #[test]
    fn step_count_for_path() {
        // One entry per vertex plus the final base case; no backtracking.
        let path = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let report = ColoringSearch::solve_with(&path, &SearchConfig::unlimited()).unwrap();
        assert_eq!(report.stats.steps, 5);
        assert_eq!(
            report.witness.unwrap().as_slice(),
            &[Green, Blue, Green, Blue]
        );
    }
}
