//! Decide 3-NAESAT by reducing to 3-coloring and searching the graph.

use npc_common::{Assignment, Formula, SearchConfig, VertexColoring};
use serde::Serialize;
use tracing::info;

use crate::budget::{SearchError, SearchStats};
use crate::coloring::ColoringSearch;
use crate::reduce::SatToColorReducer;

/// Result of [`decide_by_reduction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReductionReport {
    /// Vertices of the reduced graph.
    pub num_vertices: usize,
    /// Edges of the reduced graph.
    pub num_edges: usize,
    /// The coloring found for the reduced graph.
    pub coloring: Option<VertexColoring>,
    /// The assignment read off `coloring`.
    pub assignment: Option<Assignment>,
    /// Counters of the coloring search.
    pub stats: SearchStats,
}

impl ReductionReport {
    /// The formula was found NAE-satisfiable.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.assignment.is_some()
    }
}

/// Reduce `formula`, search the graph under `config`, and translate any
/// coloring back to an assignment.
///
/// # Errors
///
/// [`SearchError::Formula`] for a malformed formula, or a budget variant if
/// the coloring search is cut short.
pub fn decide_by_reduction(
    formula: &Formula,
    config: &SearchConfig,
) -> Result<ReductionReport, SearchError> {
    let reduction = SatToColorReducer::reduce(formula)?;
    let graph = reduction.graph();
    let report = ColoringSearch::solve_with(graph, config)?;

    let assignment = report
        .witness
        .as_ref()
        .map(|c| reduction.assignment_from_coloring(c));
    info!(
        "n={} k={} -> |V|={} |E|={}: {}",
        formula.num_vars(),
        formula.num_clauses(),
        graph.num_vertices(),
        graph.num_edges(),
        if assignment.is_some() {
            "NAE-satisfiable"
        } else {
            "not NAE-satisfiable"
        }
    );

    Ok(ReductionReport {
        num_vertices: graph.num_vertices(),
        num_edges: graph.num_edges(),
        coloring: report.witness,
        assignment,
        stats: report.stats,
    })
}
