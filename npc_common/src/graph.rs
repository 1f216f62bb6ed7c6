//! Simple undirected graphs stored as sorted neighbor lists.

use contracts::*;
use tracing::trace;

use crate::{GraphError, VertexColoring};

/// A simple undirected graph on vertices `0..num_vertices`.
///
/// Representation:
/// - `neighbors[v]` lists the vertices adjacent to `v` in increasing order,
///   never contains `v`, and `u` is in `neighbors[v]` iff `v` is in
///   `neighbors[u]`.
/// - `num_edges` counts unordered pairs and is fixed at construction.
///
/// Storage is linear in `|V| + |E|`, so sparse graphs with many vertices
/// (reduced formulas with large variable indices) stay small. Every
/// constructor validates; a `Graph` value is always simple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    neighbors: Vec<Vec<usize>>,
    num_edges: usize,
}

impl Graph {
    /// Build from a square boolean matrix.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if the matrix is not square, not symmetric,
    /// or has a true diagonal entry.
    pub fn from_matrix<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GraphError> {
        let n = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            let len = entries.as_ref().len();
            if len != n {
                return Err(GraphError::NotSquare {
                    row,
                    len,
                    expected: n,
                });
            }
        }

        let at = |i: usize, j: usize| rows[i].as_ref()[j];
        for i in 0..n {
            if at(i, i) {
                return Err(GraphError::SelfLoop(i));
            }
            for j in (i + 1)..n {
                if at(i, j) != at(j, i) {
                    return Err(GraphError::Asymmetric { i, j });
                }
            }
        }

        let neighbors = (0..n)
            .map(|v| (0..n).filter(|&u| at(v, u)).collect())
            .collect();
        Ok(Self::index(n, neighbors))
    }

    /// Build from a square matrix of `0`/`1` entries.
    ///
    /// # Errors
    ///
    /// As [`Graph::from_matrix`], plus [`GraphError::NonBinary`] for any
    /// entry other than `0` or `1`.
    pub fn from_binary_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GraphError> {
        let bools = rows
            .iter()
            .enumerate()
            .map(|(row, entries)| {
                entries
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(column, &value)| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        value => Err(GraphError::NonBinary { row, column, value }),
                    })
                    .collect::<Result<Vec<bool>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_matrix(&bools)
    }

    /// Build from a vertex count and an edge list. Repeated edges are merged.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint `>= num_vertices`
    /// and [`GraphError::SelfLoop`] for an edge `(v, v)`.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut neighbors = vec![Vec::new(); num_vertices];
        for (u, v) in edges {
            if u >= num_vertices || v >= num_vertices {
                return Err(GraphError::VertexOutOfRange { u, v, num_vertices });
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            neighbors[u].push(v);
            neighbors[v].push(u);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        Ok(Self::index(num_vertices, neighbors))
    }

    /// The complete graph `K_n`.
    #[must_use]
    pub fn complete(n: usize) -> Self {
        let neighbors = (0..n)
            .map(|v| (0..n).filter(|&u| u != v).collect())
            .collect();
        Self::index(n, neighbors)
    }

    /// The graph on `n` vertices with no edges.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self::index(n, vec![Vec::new(); n])
    }

    /// Count edges of validated, sorted neighbor lists.
    fn index(n: usize, neighbors: Vec<Vec<usize>>) -> Self {
        let num_edges = neighbors.iter().map(Vec::len).sum::<usize>() / 2;
        trace!("indexed graph with {} vertices and {} edges", n, num_edges);
        Self {
            num_vertices: n,
            neighbors,
            num_edges,
        }
    }

    /// Vertex count.
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of unordered adjacent pairs.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// True when `u` and `v` share an edge. Never true for `u == v`.
    #[requires(u < self.num_vertices && v < self.num_vertices)]
    #[must_use]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].binary_search(&v).is_ok()
    }

    /// Vertices adjacent to `v`, ascending.
    #[requires(v < self.num_vertices)]
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    /// Degree of `v`.
    #[requires(v < self.num_vertices)]
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    /// Row `v` of the adjacency matrix, materialized.
    #[requires(v < self.num_vertices)]
    #[ensures(ret.len() == self.num_vertices)]
    #[must_use]
    pub fn row(&self, v: usize) -> Vec<bool> {
        let mut row = vec![false; self.num_vertices];
        for &u in &self.neighbors[v] {
            row[u] = true;
        }
        row
    }

    /// Every edge once, as `(i, j)` with `i < j`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(v, ns)| ns.iter().filter(move |&&u| u > v).map(move |&u| (v, u)))
    }

    /// `coloring` covers every vertex and no edge joins two equal colors.
    #[must_use]
    pub fn is_proper_coloring(&self, coloring: &VertexColoring) -> bool {
        coloring.len() == self.num_vertices
            && self.edges().all(|(i, j)| coloring[i] != coloring[j])
    }
}
