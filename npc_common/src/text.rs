//! Line-oriented text formats for graphs and formulas.
//!
//! Graph files hold a sequence of blocks. Each block is a line with the
//! vertex count `n` followed by `n` rows of `n` whitespace-separated `0`/`1`
//! tokens. A count of `0`, or the end of input, ends the file:
//!
//! ```text
//! 3
//! 0 1 1
//! 1 0 1
//! 1 1 0
//! 0
//! ```
//!
//! Formula files hold one formula per line. Each line is a run of signed
//! integers read three at a time, one clause per triple:
//!
//! ```text
//! 1 2 3 -1 -2 4
//! 1 1 1
//! ```

use tracing::debug;

use crate::{Formula, Graph, ParseError};

/// Read every graph block from `input`.
///
/// Blank lines before a vertex count are skipped.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the graph, row and column of the first
/// problem found.
pub fn parse_graphs(input: &str) -> Result<Vec<Graph>, ParseError> {
    let mut lines = input.lines();
    let mut graphs = Vec::new();

    loop {
        let graph = graphs.len() + 1;
        let Some(header) = lines.by_ref().map(str::trim).find(|l| !l.is_empty()) else {
            break;
        };
        let n: usize = header.parse().map_err(|_| ParseError::BadVertexCount {
            graph,
            token: header.to_string(),
        })?;
        if n == 0 {
            break;
        }

        let mut rows: Vec<Vec<u8>> = Vec::with_capacity(n);
        for row in 0..n {
            let line = lines.next().ok_or(ParseError::MissingRow { graph, row })?;
            rows.push(parse_matrix_row(line, graph, row, n)?);
        }

        let parsed =
            Graph::from_binary_matrix(&rows).map_err(|source| ParseError::graph(graph, source))?;
        debug!(
            "parsed graph {} with {} vertices and {} edges",
            graph,
            parsed.num_vertices(),
            parsed.num_edges()
        );
        graphs.push(parsed);
    }

    Ok(graphs)
}

fn parse_matrix_row(line: &str, graph: usize, row: usize, n: usize) -> Result<Vec<u8>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n {
        return Err(ParseError::ColumnCount {
            graph,
            row,
            expected: n,
            found: tokens.len(),
        });
    }
    tokens
        .iter()
        .enumerate()
        .map(|(column, token)| match *token {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(ParseError::BadEntry {
                graph,
                row,
                column,
                token: other.to_string(),
            }),
        })
        .collect()
}

/// Read one formula per line of `input`.
///
/// # Errors
///
/// Returns the first [`ParseError`] found, with its one-based line number.
pub fn parse_formulas(input: &str) -> Result<Vec<Formula>, ParseError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_formula_line(line, idx + 1))
        .collect()
}

/// Read a single formula line. A blank line is the empty formula.
///
/// # Errors
///
/// Returns [`ParseError::BadLiteral`] for a non-integer token,
/// [`ParseError::PartialClause`] when the token count is not a multiple of
/// three, and [`ParseError::Formula`] for a `0` literal.
pub fn parse_formula_line(line: &str, line_no: usize) -> Result<Formula, ParseError> {
    let literals = line
        .split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| ParseError::BadLiteral {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i32>, _>>()?;

    if literals.len() % 3 != 0 {
        return Err(ParseError::PartialClause {
            line: line_no,
            count: literals.len(),
        });
    }

    let mut formula = Formula::new();
    for triple in literals.chunks_exact(3) {
        formula
            .push_raw([triple[0], triple[1], triple[2]])
            .map_err(|source| ParseError::formula(line_no, source))?;
    }
    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormulaError;

    #[test]
    fn reads_graphs_until_zero() {
        let input = "3\n0 1 1\n1 0 1\n1 1 0\n\n2\n0 0\n0 0\n0\n4\n";
        let graphs = parse_graphs(input).unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].num_edges(), 3);
        assert_eq!(graphs[1].num_edges(), 0);
    }

    #[test]
    fn reads_graphs_until_eof() {
        let graphs = parse_graphs("1\n0\n").unwrap();
        assert_eq!(graphs.len(), 1);
        assert!(parse_graphs("").unwrap().is_empty());
    }

    #[test]
    fn graph_errors_carry_position() {
        assert_eq!(
            parse_graphs("2\n0 1\n"),
            Err(ParseError::MissingRow { graph: 1, row: 1 })
        );
        assert_eq!(
            parse_graphs("2\n0 1 0\n1 0\n"),
            Err(ParseError::ColumnCount {
                graph: 1,
                row: 0,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse_graphs("1\n0\n2\n0 x\n1 0\n"),
            Err(ParseError::BadEntry {
                graph: 2,
                row: 0,
                column: 1,
                token: "x".to_string()
            })
        );
        assert!(matches!(
            parse_graphs("two\n"),
            Err(ParseError::BadVertexCount { graph: 1, .. })
        ));
        assert!(matches!(
            parse_graphs("2\n0 1\n0 0\n"),
            Err(ParseError::Graph { graph: 1, .. })
        ));
    }

    #[test]
    fn reads_formula_lines() {
        let formulas = parse_formulas("1 2 3 -1 -2 4\n1 1 1\n\n").unwrap();
        assert_eq!(formulas.len(), 3);
        assert_eq!(formulas[0].num_vars(), 4);
        assert_eq!(formulas[0].num_clauses(), 2);
        assert_eq!(formulas[1].num_vars(), 1);
        assert_eq!(formulas[2].num_clauses(), 0);
    }

    #[test]
    fn formula_errors_carry_line() {
        assert_eq!(
            parse_formulas("1 2 3\n1 2\n"),
            Err(ParseError::PartialClause { line: 2, count: 2 })
        );
        assert_eq!(
            parse_formula_line("1 two 3", 7),
            Err(ParseError::BadLiteral {
                line: 7,
                token: "two".to_string()
            })
        );
        assert_eq!(
            parse_formula_line("1 2 3 4 0 5", 3),
            Err(ParseError::formula(3, FormulaError::ZeroLiteral { clause: 1 }))
        );
    }
}
