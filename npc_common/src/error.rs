//! Error types for graph and formula construction and for the text formats.
//!
//! Structural errors are raised at the boundary, when a [`Graph`](crate::Graph)
//! or [`Formula`](crate::Formula) is built. A negative decision (not colorable,
//! not satisfiable) is never an error; the deciders report it as `None`.

use thiserror::Error;

/// A graph whose adjacency relation is not a simple undirected graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A matrix row does not have one entry per vertex.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Entries found in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// `adjacency[i][j] != adjacency[j][i]`.
    #[error("adjacency matrix is not symmetric at ({i}, {j})")]
    Asymmetric {
        /// Row of the mismatch.
        i: usize,
        /// Column of the mismatch.
        j: usize,
    },

    /// A vertex is adjacent to itself.
    #[error("self loop on vertex {0}")]
    SelfLoop(usize),

    /// A matrix entry other than 0 or 1.
    #[error("entry ({row}, {column}) is {value}, expected 0 or 1")]
    NonBinary {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
        /// Value found.
        value: u8,
    },

    /// An edge endpoint outside `0..num_vertices`.
    #[error("edge ({u}, {v}) leaves the vertex range 0..{num_vertices}")]
    VertexOutOfRange {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// Vertex count of the graph.
        num_vertices: usize,
    },
}

/// A formula whose literals do not fit its declared variable range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Literal `0` has no variable.
    #[error("clause {clause} contains the literal 0")]
    ZeroLiteral {
        /// Zero-based clause position.
        clause: usize,
    },

    /// `|v|` exceeds the declared number of variables.
    #[error("clause {clause} uses literal {literal}, but the formula declares {num_vars} variables")]
    LiteralOutOfRange {
        /// Zero-based clause position.
        clause: usize,
        /// The offending signed literal.
        literal: i64,
        /// Declared variable count.
        num_vars: usize,
    },
}

impl FormulaError {
    /// Create an out-of-range error.
    pub fn out_of_range(clause: usize, literal: impl Into<i64>, num_vars: usize) -> Self {
        Self::LiteralOutOfRange {
            clause,
            literal: literal.into(),
            num_vars,
        }
    }
}

/// Errors raised while reading the graph or formula text formats.
///
/// Graph numbers and line numbers are one-based, matching what a user sees
/// in an editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line that should hold a vertex count does not.
    #[error("graph {graph}: expected a vertex count, found {token:?}")]
    BadVertexCount {
        /// Graph number.
        graph: usize,
        /// Text found instead.
        token: String,
    },

    /// Input ended before all matrix rows were read.
    #[error("graph {graph}: missing row {row}")]
    MissingRow {
        /// Graph number.
        graph: usize,
        /// Zero-based row index.
        row: usize,
    },

    /// A matrix row has the wrong number of tokens.
    #[error("graph {graph}, row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        /// Graph number.
        graph: usize,
        /// Zero-based row index.
        row: usize,
        /// Vertex count.
        expected: usize,
        /// Tokens found.
        found: usize,
    },

    /// A matrix token that is not `0` or `1`.
    #[error("graph {graph}, row {row}, column {column}: expected 0 or 1, found {token:?}")]
    BadEntry {
        /// Graph number.
        graph: usize,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Token found.
        token: String,
    },

    /// The matrix parsed but is not a simple undirected graph.
    #[error("graph {graph}: {source}")]
    Graph {
        /// Graph number.
        graph: usize,
        /// Structural problem.
        #[source]
        source: GraphError,
    },

    /// A formula line whose literal count is not a multiple of three.
    #[error("line {line}: {count} literals do not form whole 3-literal clauses")]
    PartialClause {
        /// Line number.
        line: usize,
        /// Literals on the line.
        count: usize,
    },

    /// A formula token that is not a signed integer.
    #[error("line {line}: expected a signed integer, found {token:?}")]
    BadLiteral {
        /// Line number.
        line: usize,
        /// Token found.
        token: String,
    },

    /// The line parsed but the clauses are malformed.
    #[error("line {line}: {source}")]
    Formula {
        /// Line number.
        line: usize,
        /// Structural problem.
        #[source]
        source: FormulaError,
    },
}

impl ParseError {
    /// Attach a graph number to a structural graph error.
    pub const fn graph(graph: usize, source: GraphError) -> Self {
        Self::Graph { graph, source }
    }

    /// Attach a line number to a structural formula error.
    pub const fn formula(line: usize, source: FormulaError) -> Self {
        Self::Formula { line, source }
    }
}
