//! Polynomial reduction from 3-NAESAT to graph 3-coloring.
//!
//! For a formula with `n` variables and `k` clauses the graph has
//! `1 + 2n + 3k` vertices laid out as:
//!
//! | vertices          | role                                  |
//! |-------------------|---------------------------------------|
//! | `0`               | base                                  |
//! | `1..=n`           | `x_i` at vertex `i`                   |
//! | `n+1..=2n`        | `¬x_i` at vertex `n+i`                |
//! | `2n+1..2n+3k`     | one triple per clause, in clause order |
//!
//! and `3n + 6k` edges:
//! - the base is joined to every literal vertex, so literal vertices use the
//!   two non-base colors, one read as true and the other as false;
//! - `x_i` is joined to `¬x_i`, so complementary literals take opposite
//!   values;
//! - each clause triple is a triangle, and member `j` is joined to the
//!   vertex of the clause's `j`-th literal. The triangle needs all three
//!   colors, which is possible exactly when the three attached literals are
//!   not all equal.

use contracts::*;
use npc_common::{Assignment, Color, Formula, FormulaError, Graph, Literal, VertexColoring};
use tracing::debug;

use crate::profiling::Timer;

/// Builds the reduction graph for a formula.
pub struct SatToColorReducer;

impl SatToColorReducer {
    /// Vertex index of the base vertex in every reduced graph.
    pub const BASE: usize = 0;

    /// `(|V|, |E|)` of the graph [`SatToColorReducer::reduce`] builds for a
    /// formula with `num_vars` variables and `num_clauses` clauses.
    #[must_use]
    pub const fn graph_size(num_vars: usize, num_clauses: usize) -> (usize, usize) {
        let layout = Layout {
            num_vars,
            num_clauses,
        };
        (layout.num_vertices(), 3 * num_vars + 6 * num_clauses)
    }

    /// Reduce `formula` to an equivalent 3-coloring instance.
    ///
    /// # Errors
    ///
    /// Returns the [`FormulaError`] from [`Formula::validate`] if a literal
    /// names a variable above the formula's variable count.
    pub fn reduce(formula: &Formula) -> Result<Reduction, FormulaError> {
        let _t = Timer::new("SatToColorReducer::reduce");
        formula.validate()?;

        let n = formula.num_vars();
        let clause_literals: Vec<[Literal; 3]> =
            formula.clauses().iter().map(|c| *c.literals()).collect();
        let layout = Layout {
            num_vars: n,
            num_clauses: clause_literals.len(),
        };

        let mut edges = Vec::with_capacity(3 * n + 6 * layout.num_clauses);

        // base-literal and complementary pair
        for var in 1..=n {
            let pos = layout.positive_vertex(var);
            let neg = layout.negative_vertex(var);
            edges.push((Self::BASE, pos));
            edges.push((Self::BASE, neg));
            edges.push((pos, neg));
        }

        // clause triangles and clause-to-literal
        for (clause, literals) in clause_literals.iter().enumerate() {
            let [a, b, c] = layout.clause_vertices(clause);
            edges.extend([(a, b), (b, c), (c, a)]);
            for (slot, lit) in [a, b, c].into_iter().zip(literals) {
                edges.push((slot, layout.literal_vertex(*lit)));
            }
        }

        // Every endpoint is in range once validate() has passed.
        let graph = match Graph::from_edges(layout.num_vertices(), edges) {
            Ok(graph) => graph,
            Err(e) => unreachable!("reduction produced a malformed graph: {e}"),
        };
        debug!(
            "reduced n={} k={} to |V|={} |E|={}",
            n,
            layout.num_clauses,
            graph.num_vertices(),
            graph.num_edges()
        );

        Ok(Reduction {
            graph,
            layout,
            clause_literals,
        })
    }
}

/// Index arithmetic for the vertex layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Layout {
    num_vars: usize,
    num_clauses: usize,
}

impl Layout {
    const fn num_vertices(self) -> usize {
        1 + 2 * self.num_vars + 3 * self.num_clauses
    }

    const fn positive_vertex(self, var: usize) -> usize {
        var
    }

    const fn negative_vertex(self, var: usize) -> usize {
        self.num_vars + var
    }

    const fn literal_vertex(self, lit: Literal) -> usize {
        if lit.is_negated() {
            self.negative_vertex(lit.var())
        } else {
            self.positive_vertex(lit.var())
        }
    }

    const fn clause_vertices(self, clause: usize) -> [usize; 3] {
        let first = 1 + 2 * self.num_vars + 3 * clause;
        [first, first + 1, first + 2]
    }
}

/// What a vertex of the reduced graph stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexRole {
    /// Vertex `0`.
    Base,
    /// A positive or negative literal vertex.
    Literal(Literal),
    /// Member `position` (0..3) of the triangle for clause `clause`.
    ClauseSlot {
        /// Zero-based clause index.
        clause: usize,
        /// Position of the attached literal within the clause.
        position: usize,
    },
}

/// A reduced graph together with the vertex-to-literal translation.
#[derive(Clone, Debug)]
pub struct Reduction {
    graph: Graph,
    layout: Layout,
    clause_literals: Vec<[Literal; 3]>,
}

impl Reduction {
    /// The 3-coloring instance.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Variable count `n` of the source formula.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.layout.num_vars
    }

    /// Clause count `k` of the source formula.
    #[must_use]
    pub const fn num_clauses(&self) -> usize {
        self.layout.num_clauses
    }

    /// The literal a vertex represents, or `None` for the base and clause
    /// vertices and for indices past the end of the graph.
    #[must_use]
    pub fn literal_of(&self, vertex: usize) -> Option<Literal> {
        match self.role(vertex)? {
            VertexRole::Literal(lit) => Some(lit),
            VertexRole::Base | VertexRole::ClauseSlot { .. } => None,
        }
    }

    /// Role of `vertex`, or `None` past the end of the graph.
    #[must_use]
    pub fn role(&self, vertex: usize) -> Option<VertexRole> {
        let n = self.layout.num_vars;
        if vertex >= self.layout.num_vertices() {
            return None;
        }
        Some(match vertex {
            0 => VertexRole::Base,
            v if v <= n => VertexRole::Literal(Literal::positive(v)),
            v if v <= 2 * n => VertexRole::Literal(Literal::negative(v - n)),
            v => {
                let offset = v - 1 - 2 * n;
                VertexRole::ClauseSlot {
                    clause: offset / 3,
                    position: offset % 3,
                }
            }
        })
    }

    /// Vertex carrying `lit`.
    #[requires(lit.var() <= self.num_vars())]
    #[must_use]
    pub fn vertex_of(&self, lit: Literal) -> usize {
        self.layout.literal_vertex(lit)
    }

    /// The three triangle vertices of clause `clause`.
    #[requires(clause < self.num_clauses())]
    #[must_use]
    pub fn clause_vertices(&self, clause: usize) -> [usize; 3] {
        self.layout.clause_vertices(clause)
    }

    /// Read an assignment off a proper coloring of the reduced graph.
    ///
    /// The color of vertex `1` is taken as "true"; each variable is true
    /// exactly when its positive vertex has that color. With no variables
    /// the result is the empty assignment.
    #[requires(coloring.len() == self.graph.num_vertices())]
    #[must_use]
    pub fn assignment_from_coloring(&self, coloring: &VertexColoring) -> Assignment {
        let n = self.layout.num_vars;
        let Some(true_color) = coloring.get(self.layout.positive_vertex(1)).filter(|_| n > 0)
        else {
            return Assignment::default();
        };
        Assignment::from_values(
            (1..=n)
                .map(|var| coloring[self.layout.positive_vertex(var)] == true_color)
                .collect(),
        )
    }

    /// Build a proper coloring of the reduced graph from a NAE assignment.
    ///
    /// The base takes [`Color::Green`], true literals [`Color::Blue`] and
    /// false literals [`Color::Red`]. In each clause triangle the member at a
    /// true literal takes the false color, a member at a false literal takes
    /// the true color and the remaining member takes the base color.
    ///
    /// Returns `None` when `assignment` leaves some clause all-equal.
    #[requires(assignment.num_vars() == self.num_vars())]
    #[must_use]
    pub fn coloring_from_assignment(&self, assignment: &Assignment) -> Option<VertexColoring> {
        const BASE: Color = Color::Green;
        const TRUE: Color = Color::Blue;
        const FALSE: Color = Color::Red;
        let value_color = |value: bool| if value { TRUE } else { FALSE };

        let mut colors = vec![BASE; self.layout.num_vertices()];
        for (var, value) in assignment.iter() {
            colors[self.layout.positive_vertex(var)] = value_color(value);
            colors[self.layout.negative_vertex(var)] = value_color(!value);
        }

        for (clause, &literals) in self.clause_literals.iter().enumerate() {
            let values = literals.map(|lit| assignment.literal_value(lit));
            let at_true = values.iter().position(|&v| v)?;
            let at_false = values.iter().position(|&v| !v)?;
            let slots = self.layout.clause_vertices(clause);
            for (position, slot) in slots.into_iter().enumerate() {
                colors[slot] = if position == at_true {
                    FALSE
                } else if position == at_false {
                    TRUE
                } else {
                    BASE
                };
            }
        }

        Some(VertexColoring::new(colors))
    }
}
