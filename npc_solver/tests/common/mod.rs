#![allow(dead_code)]

use std::sync::Once;

use npc_common::{Assignment, Formula, Graph};

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Brute-force NAE-satisfiability over all `2^n` assignments.
pub fn nae_by_enumeration(formula: &Formula) -> bool {
    let n = formula.num_vars();
    (0u64..1 << n).any(|bits| {
        let values = (0..n).map(|i| bits & (1 << i) != 0).collect();
        formula.is_nae_satisfied(&Assignment::from_values(values))
    })
}

/// Complete graph on `n` vertices built from the edge list, so the test does
/// not depend on `Graph::complete`.
pub fn clique(n: usize) -> Graph {
    let edges = (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j)));
    Graph::from_edges(n, edges).unwrap()
}
