//! Named graphs and formulas with known answers.
//!
//! Shared by the unit and integration tests of every crate in the workspace
//! so that each decider is checked against the same catalogue.

use crate::{Formula, Graph};

/// A graph together with its known 3-colorability.
#[derive(Debug, Clone)]
pub struct GraphCase {
    /// Short identifier used in test output.
    pub name: &'static str,
    /// The instance.
    pub graph: Graph,
    /// Whether a proper 3-coloring exists.
    pub colorable: bool,
}

/// A formula together with its known NAE-satisfiability.
#[derive(Debug, Clone)]
pub struct FormulaCase {
    /// Short identifier used in test output.
    pub name: &'static str,
    /// The instance.
    pub formula: Formula,
    /// Whether a not-all-equal assignment exists.
    pub satisfiable: bool,
}

fn graph_case(name: &'static str, graph: Graph, colorable: bool) -> GraphCase {
    GraphCase {
        name,
        graph,
        colorable,
    }
}

fn formula_case(name: &'static str, clauses: &[[i32; 3]], satisfiable: bool) -> FormulaCase {
    let formula = Formula::from_raw(clauses.iter().copied())
        .unwrap_or_else(|e| panic!("fixture {name} is malformed: {e}"));
    FormulaCase {
        name,
        formula,
        satisfiable,
    }
}

/// Cycle `C_n` on vertices `0..n`.
#[must_use]
pub fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n)))
        .unwrap_or_else(|e| panic!("cycle({n}) is malformed: {e}"))
}

/// Wheel: hub `0` joined to every vertex of a rim cycle on `1..=rim`.
#[must_use]
pub fn wheel(rim: usize) -> Graph {
    let spokes = (1..=rim).map(|i| (0, i));
    let rim_edges = (0..rim).map(|i| (i + 1, (i + 1) % rim + 1));
    Graph::from_edges(rim + 1, spokes.chain(rim_edges))
        .unwrap_or_else(|e| panic!("wheel({rim}) is malformed: {e}"))
}

/// The Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`.
#[must_use]
pub fn petersen() -> Graph {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let inner = (0..5).map(|i| (5 + i, 5 + (i + 2) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    Graph::from_edges(10, outer.chain(inner).chain(spokes))
        .unwrap_or_else(|e| panic!("petersen is malformed: {e}"))
}

/// Every signed pattern of variables 1, 2, 3: one clause per sign choice.
///
/// For any assignment one of the eight clauses evaluates to all-true or
/// all-false, so no NAE assignment exists.
#[must_use]
pub fn all_sign_patterns() -> Vec<[i32; 3]> {
    (0..8)
        .map(|bits: i32| {
            let sign = |b: i32| if bits & (1 << b) == 0 { 1 } else { -1 };
            [sign(0), 2 * sign(1), 3 * sign(2)]
        })
        .collect()
}

lazy_static::lazy_static! {
    /// Graphs with known colorability.
    pub static ref GRAPH_CASES: Vec<GraphCase> = vec![
        graph_case("empty", Graph::empty(0), true),
        graph_case("single_vertex", Graph::empty(1), true),
        graph_case("independent_5", Graph::empty(5), true),
        graph_case("k2", Graph::complete(2), true),
        graph_case("triangle", Graph::complete(3), true),
        graph_case("k4", Graph::complete(4), false),
        graph_case("k5", Graph::complete(5), false),
        graph_case("c5", cycle(5), true),
        graph_case("c6", cycle(6), true),
        graph_case("wheel_4", wheel(4), true),
        graph_case("wheel_5", wheel(5), false),
        graph_case("wheel_6", wheel(6), true),
        graph_case("petersen", petersen(), true),
    ];

    /// Formulas with known NAE-satisfiability.
    pub static ref FORMULA_CASES: Vec<FormulaCase> = vec![
        formula_case("no_clauses", &[], true),
        formula_case("single_clause", &[[1, 2, 3]], true),
        formula_case("repeated_literal", &[[1, 1, 1]], false),
        formula_case("repeated_negated_literal", &[[-2, -2, -2]], false),
        formula_case("complementary_pair", &[[1, -1, 2]], true),
        formula_case("two_of_one_var", &[[1, 1, 2]], true),
        formula_case("forced_equal_then_clash", &[[1, 1, -2], [1, 1, 2]], false),
        formula_case("chain", &[[1, 2, 3], [-1, -2, 4], [2, -3, -4]], true),
        formula_case("all_sign_patterns", &all_sign_patterns(), false),
    ];
}
