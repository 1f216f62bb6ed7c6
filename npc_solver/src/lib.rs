//! Exact deciders for graph 3-coloring and 3-NAESAT, and the reduction
//! from 3-NAESAT to 3-coloring.
//!
//! Both deciders are plain depth-first backtracking searches with no
//! heuristics, so their witnesses are deterministic:
//!
//! - [`ColoringSearch`] colors vertices in index order, trying
//!   `Green, Blue, Red`;
//! - [`NaeSatSearch`] assigns variables `1..=n` in order, `true` first, and
//!   checks the NAE predicate only on complete assignments.
//!
//! [`SatToColorReducer`] builds the `1 + 2n + 3k` vertex graph that is
//! 3-colorable exactly when the formula is NAE-satisfiable, and
//! [`decide_by_reduction`] chains the reducer with the coloring search.
//!
//! Every search has a `solve` entry point without bounds and a `solve_with`
//! entry point taking a [`SearchConfig`](npc_common::SearchConfig); the
//! latter reports [`SearchStats`] and stops with a [`SearchError`] once a
//! configured step or time limit is reached.

mod budget;
mod coloring;
mod nae;
mod pipeline;
pub mod profiling;
mod reduce;

pub use crate::budget::{SearchError, SearchReport, SearchStats};
pub use crate::coloring::ColoringSearch;
pub use crate::nae::NaeSatSearch;
pub use crate::pipeline::{ReductionReport, decide_by_reduction};
pub use crate::reduce::{Reduction, SatToColorReducer, VertexRole};
