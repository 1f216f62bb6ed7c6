//! Text and JSON rendering of per-instance results.

use std::fmt::{self, Write};
use std::time::{Duration, Instant};

use itertools::Itertools;
use npc_common::{Assignment, Formula, Graph, VertexColoring};
use npc_solver::SearchError;
use serde::Serialize;

/// Graphs with at least this many vertices get the color plan inline and no
/// matrix.
pub const PRINT_THRESHOLD: usize = 20;

/// A search outcome together with the wall-clock time of the call.
#[derive(Debug)]
pub struct Timed<T> {
    pub outcome: Result<T, SearchError>,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn measure(f: impl FnOnce() -> Result<T, SearchError>) -> Self {
        let start = Instant::now();
        let outcome = f();
        Self {
            outcome,
            elapsed: start.elapsed(),
        }
    }
}

/// The decided part of a formula result, whichever way it was found.
#[derive(Debug, Clone, Copy)]
pub struct FormulaVerdict<'a> {
    pub certificate: Option<&'a Assignment>,
    pub steps: u64,
}

fn error_steps(err: &SearchError) -> u64 {
    match err {
        SearchError::StepLimit { steps, .. } | SearchError::TimeLimit { steps, .. } => *steps,
        SearchError::Formula(_) => 0,
    }
}

/// `** Find 3-Color plans for graphs in <file>`
pub fn write_color_banner(out: &mut String, file: &str) -> fmt::Result {
    writeln!(out, "** Find 3-Color plans for graphs in {file}\n")
}

/// `** Find 3NAESAT in <file> (<method>):`
pub fn write_nae_banner(out: &mut String, file: &str, method: &str) -> fmt::Result {
    writeln!(out, "** Find 3NAESAT in {file} ({method}):\n")
}

/// Header line, then the plan and matrix for small colorable graphs.
pub fn write_graph_text(
    out: &mut String,
    number: usize,
    graph: &Graph,
    result: &Timed<Option<VertexColoring>>,
) -> fmt::Result {
    let n = graph.num_vertices();
    write!(out, "G{number}:(|V|={n},|E|={}) ", graph.num_edges())?;
    match &result.outcome {
        Ok(Some(coloring)) if n >= PRINT_THRESHOLD => {
            for color in coloring.as_slice() {
                write!(out, "{color} ")?;
            }
        }
        Ok(Some(_)) => {}
        Ok(None) => write!(out, "Not 3-colorable ")?,
        Err(e) => write!(out, "Undecided: {e} ")?,
    }
    writeln!(out, "(ms={})", result.elapsed.as_millis())?;

    let Ok(Some(coloring)) = &result.outcome else {
        return Ok(());
    };
    if n >= PRINT_THRESHOLD {
        return Ok(());
    }
    writeln!(out, "  {coloring}")?;
    for v in 0..n {
        let cells = graph
            .row(v)
            .iter()
            .enumerate()
            .map(|(u, &adjacent)| match (u == v, adjacent) {
                (true, _) => 'X',
                (false, true) => '1',
                (false, false) => ' ',
            })
            .join(" ");
        writeln!(out, "{} {cells}", coloring[v])?;
    }
    Ok(())
}

/// Four-line block for one formula: header, certificate, clauses, and the
/// evaluated clauses when a certificate exists.
pub fn write_formula_text(
    out: &mut String,
    number: usize,
    formula: &Formula,
    reduced_size: Option<(usize, usize)>,
    elapsed: Duration,
    verdict: Result<FormulaVerdict<'_>, &SearchError>,
) -> fmt::Result {
    write!(
        out,
        "3CNF No.{number}:[n={} k={}]",
        formula.num_vars(),
        formula.num_clauses()
    )?;
    if let Some((vertices, edges)) = reduced_size {
        write!(out, " -> [V={vertices}, E={edges}]")?;
    }
    writeln!(out)?;

    let ms = elapsed.as_millis();
    let certificate = match verdict {
        Ok(FormulaVerdict {
            certificate: Some(a),
            ..
        }) => {
            writeln!(out, "({ms} ms) NAE certificate = [{a}]")?;
            Some(a)
        }
        Ok(_) => {
            writeln!(out, "({ms} ms) No NAE positive certificate!")?;
            None
        }
        Err(e) => {
            writeln!(out, "({ms} ms) Undecided: {e}")?;
            None
        }
    };

    writeln!(out, "{formula} ==>")?;
    if let Some(a) = certificate {
        writeln!(out, "{}", formula.render_evaluation(a))?;
    }
    writeln!(out)
}

#[derive(Serialize)]
struct GraphRecord<'a> {
    graph: usize,
    vertices: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    colorable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coloring: Option<&'a VertexColoring>,
    elapsed_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct FormulaRecord<'a> {
    formula: usize,
    num_vars: usize,
    num_clauses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    reduced_vertices: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reduced_edges: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    satisfiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    certificate: Option<&'a Assignment>,
    steps: u64,
    elapsed_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// One JSON object for a graph result.
pub fn graph_json(
    number: usize,
    graph: &Graph,
    result: &Timed<Option<VertexColoring>>,
) -> serde_json::Result<String> {
    let (colorable, coloring, error) = match &result.outcome {
        Ok(coloring) => (Some(coloring.is_some()), coloring.as_ref(), None),
        Err(e) => (None, None, Some(e.to_string())),
    };
    serde_json::to_string(&GraphRecord {
        graph: number,
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
        colorable,
        coloring,
        elapsed_ms: result.elapsed.as_millis(),
        error,
    })
}

/// One JSON object for a formula result.
pub fn formula_json(
    number: usize,
    formula: &Formula,
    reduced_size: Option<(usize, usize)>,
    elapsed: Duration,
    verdict: Result<FormulaVerdict<'_>, &SearchError>,
) -> serde_json::Result<String> {
    let (satisfiable, certificate, steps, error) = match verdict {
        Ok(v) => (Some(v.certificate.is_some()), v.certificate, v.steps, None),
        Err(e) => (None, None, error_steps(e), Some(e.to_string())),
    };
    serde_json::to_string(&FormulaRecord {
        formula: number,
        num_vars: formula.num_vars(),
        num_clauses: formula.num_clauses(),
        reduced_vertices: reduced_size.map(|(v, _)| v),
        reduced_edges: reduced_size.map(|(_, e)| e),
        satisfiable,
        certificate,
        steps,
        elapsed_ms: elapsed.as_millis(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use npc_common::Color::{Blue, Green, Red};
    use npc_common::text::parse_formula_line;

    use super::*;

    fn decided<T>(value: T) -> Timed<T> {
        Timed {
            outcome: Ok(value),
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn small_graph_prints_plan_and_matrix() {
        let mut out = String::new();
        let coloring = VertexColoring::new(vec![Green, Blue, Red]);
        write_graph_text(&mut out, 1, &Graph::complete(3), &decided(Some(coloring))).unwrap();
        assert_eq!(
            out,
            "G1:(|V|=3,|E|=3) (ms=0)\n  G B R\nG X 1 1\nB 1 X 1\nR 1 1 X\n"
        );
    }

    #[test]
    fn non_adjacent_cells_are_blank() {
        let mut out = String::new();
        let coloring = VertexColoring::new(vec![Green, Green]);
        write_graph_text(&mut out, 2, &Graph::empty(2), &decided(Some(coloring))).unwrap();
        assert_eq!(out, "G2:(|V|=2,|E|=0) (ms=0)\n  G G\nG X  \nG   X\n");
    }

    #[test]
    fn large_graph_prints_plan_inline() {
        let mut out = String::new();
        let graph = Graph::empty(PRINT_THRESHOLD);
        let coloring = VertexColoring::new(vec![Green; PRINT_THRESHOLD]);
        write_graph_text(&mut out, 3, &graph, &decided(Some(coloring))).unwrap();
        let expected = format!("G3:(|V|=20,|E|=0) {}(ms=0)\n", "G ".repeat(20));
        assert_eq!(out, expected);
    }

    #[test]
    fn uncolorable_graph() {
        let mut out = String::new();
        write_graph_text(&mut out, 4, &Graph::complete(4), &decided(None)).unwrap();
        assert_eq!(out, "G4:(|V|=4,|E|=6) Not 3-colorable (ms=0)\n");
    }

    #[test]
    fn budget_exhaustion_is_reported_inline() {
        let mut out = String::new();
        let result = Timed {
            outcome: Err(SearchError::StepLimit { steps: 2, limit: 1 }),
            elapsed: Duration::ZERO,
        };
        write_graph_text(&mut out, 1, &Graph::complete(4), &result).unwrap();
        assert!(out.starts_with("G1:(|V|=4,|E|=6) Undecided: search stopped after 2 steps"));
    }

    #[test]
    fn certificate_block() {
        let formula = parse_formula_line("1 2 -3 -1 2 3", 1).unwrap();
        let a = Assignment::from_values(vec![true, false, true]);
        let mut out = String::new();
        let verdict = FormulaVerdict {
            certificate: Some(&a),
            steps: 4,
        };
        write_formula_text(&mut out, 1, &formula, None, Duration::ZERO, Ok(verdict)).unwrap();
        assert_eq!(
            out,
            "3CNF No.1:[n=3 k=2]\n\
             (0 ms) NAE certificate = [1:T 2:F 3:T]\n\
             ( 1| 2|-3)^(-1| 2| 3) ==>\n\
             ( T| F| F)^( F| F| T)\n\n"
        );
    }

    #[test]
    fn no_certificate_block_with_reduced_size() {
        let formula = parse_formula_line("1 1 1", 1).unwrap();
        let mut out = String::new();
        let verdict = FormulaVerdict {
            certificate: None,
            steps: 3,
        };
        write_formula_text(&mut out, 2, &formula, Some((6, 9)), Duration::ZERO, Ok(verdict))
            .unwrap();
        assert_eq!(
            out,
            "3CNF No.2:[n=1 k=1] -> [V=6, E=9]\n\
             (0 ms) No NAE positive certificate!\n\
             ( 1| 1| 1) ==>\n\n"
        );
    }

    #[test]
    fn graph_json_fields() {
        let coloring = VertexColoring::new(vec![Green, Blue]);
        let line = graph_json(1, &Graph::complete(2), &decided(Some(coloring))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["graph"], 1);
        assert_eq!(value["edges"], 1);
        assert_eq!(value["colorable"], true);
        assert_eq!(value["coloring"], serde_json::json!(["Green", "Blue"]));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn formula_json_for_budget_error() {
        let formula = parse_formula_line("1 2 3", 1).unwrap();
        let err = SearchError::StepLimit { steps: 3, limit: 2 };
        let line = formula_json(5, &formula, Some((10, 15)), Duration::ZERO, Err(&err)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["formula"], 5);
        assert_eq!(value["reduced_vertices"], 10);
        assert_eq!(value["steps"], 3);
        assert!(value.get("satisfiable").is_none());
        assert!(value["error"].as_str().unwrap().contains("step limit of 2"));
    }
}
