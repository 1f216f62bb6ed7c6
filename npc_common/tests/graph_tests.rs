#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use npc_common::{Graph, GraphError, text::parse_graphs};
use quickcheck::{Arbitrary, Gen, quickcheck};
use rstest::rstest;

mod common;

/// Random simple graph on at most 12 vertices.
#[derive(Clone, Debug)]
struct ArbitraryGraph {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl Arbitrary for ArbitraryGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 13;
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                if bool::arbitrary(g) {
                    edges.push((i, j));
                }
            }
        }
        Self {
            num_vertices,
            edges,
        }
    }
}

impl ArbitraryGraph {
    fn build(&self) -> Graph {
        Graph::from_edges(self.num_vertices, self.edges.iter().copied()).unwrap()
    }
}

fn render_matrix(graph: &Graph) -> String {
    let mut out = format!("{}\n", graph.num_vertices());
    for v in 0..graph.num_vertices() {
        let row: Vec<&str> = graph
            .row(v)
            .iter()
            .map(|&b| if b { "1" } else { "0" })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(3, 3)]
#[case(4, 6)]
#[case(10, 45)]
fn complete_graph_counts(#[case] n: usize, #[case] edges: usize) {
    let g = Graph::complete(n);
    assert_eq!(g.num_vertices(), n);
    assert_eq!(g.num_edges(), edges);
    for v in 0..n {
        assert_eq!(g.degree(v), n - 1);
        assert!(!g.is_adjacent(v, v));
    }
}

#[rstest]
#[case(&[[0u8, 1], [1, 0]], Ok(1))]
#[case(&[[0u8, 1], [0, 0]], Err(GraphError::Asymmetric { i: 0, j: 1 }))]
#[case(&[[1u8, 0], [0, 0]], Err(GraphError::SelfLoop(0)))]
fn binary_matrix_validation(
    #[case] rows: &[[u8; 2]],
    #[case] expected: Result<usize, GraphError>,
) {
    let parsed = Graph::from_binary_matrix(rows).map(|g| g.num_edges());
    assert_eq!(parsed, expected);
}

quickcheck! {
    fn prop_adjacency_is_symmetric(input: ArbitraryGraph) -> bool {
        let g = input.build();
        (0..g.num_vertices()).all(|i| {
            (0..g.num_vertices()).all(|j| g.is_adjacent(i, j) == g.is_adjacent(j, i))
        })
    }

    fn prop_edge_count_matches_edge_list(input: ArbitraryGraph) -> bool {
        let g = input.build();
        g.num_edges() == input.edges.len() && g.edges().collect::<Vec<_>>() == input.edges
    }

    fn prop_neighbors_agree_with_matrix(input: ArbitraryGraph) -> bool {
        let g = input.build();
        (0..g.num_vertices()).all(|v| {
            g.neighbors(v).iter().all(|&u| g.is_adjacent(v, u))
                && g.degree(v) == g.row(v).iter().filter(|&&b| b).count()
        })
    }

    fn prop_text_format_preserves_graph(input: ArbitraryGraph) -> bool {
        let g = input.build();
        let text = format!("{}0\n", render_matrix(&g));
        let parsed = parse_graphs(&text).unwrap();
        if g.num_vertices() == 0 {
            // A zero count terminates the file.
            parsed.is_empty()
        } else {
            parsed == vec![g]
        }
    }
}

#[test]
fn degree_sum_is_twice_edge_count() {
    common::setup_test_logging();
    for case in npc_common::fixtures::GRAPH_CASES.iter() {
        let g = &case.graph;
        let degree_sum: usize = (0..g.num_vertices()).map(|v| g.degree(v)).sum();
        assert_invariant!(degree_sum == 2 * g.num_edges(), case.name);
    }
}
