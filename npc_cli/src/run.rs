use std::error::Error;
use std::fs;

use npc_common::SearchConfig;
use npc_common::text::{parse_formulas, parse_graphs};
use npc_solver::{ColoringSearch, NaeSatSearch, SatToColorReducer, decide_by_reduction};
use rayon::prelude::*;
use tracing::info;

use crate::args::{Args, Command, FormatArg};
use crate::report::{
    FormulaVerdict, Timed, formula_json, graph_json, write_color_banner, write_formula_text,
    write_graph_text, write_nae_banner,
};

/// Map `f` over `items`, keeping input order either way.
fn solve_all<I, R, F>(items: &[I], parallel: bool, f: F) -> Vec<R>
where
    I: Sync,
    R: Send,
    F: Fn(&I) -> R + Sync + Send,
{
    if parallel {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

/// Read the input file, solve every instance and render the report.
pub fn execute(args: &Args) -> Result<String, Box<dyn Error>> {
    let path = args.command.file();
    let input = fs::read_to_string(path)?;
    let file = path.display().to_string();
    let config = args.to_config();
    let mut out = String::new();

    match &args.command {
        Command::Color { .. } => run_color(&mut out, &file, &input, &config, args)?,
        Command::Naesat { .. } => run_naesat(&mut out, &file, &input, &config, args)?,
        Command::Reduce { .. } => run_reduce(&mut out, &file, &input, &config, args)?,
    }
    Ok(out)
}

fn run_color(
    out: &mut String,
    file: &str,
    input: &str,
    config: &SearchConfig,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let graphs = parse_graphs(input)?;
    info!("Loaded {} graphs from {}", graphs.len(), file);

    let results = solve_all(&graphs, args.parallel, |graph| {
        Timed::measure(|| ColoringSearch::solve_with(graph, config).map(|r| r.witness))
    });

    if args.format == FormatArg::Text {
        write_color_banner(out, file)?;
    }
    for (i, (graph, result)) in graphs.iter().zip(&results).enumerate() {
        match args.format {
            FormatArg::Text => write_graph_text(out, i + 1, graph, result)?,
            FormatArg::Json => {
                out.push_str(&graph_json(i + 1, graph, result)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

fn run_naesat(
    out: &mut String,
    file: &str,
    input: &str,
    config: &SearchConfig,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let formulas = parse_formulas(input)?;
    info!("Loaded {} formulas from {}", formulas.len(), file);

    let results = solve_all(&formulas, args.parallel, |formula| {
        Timed::measure(|| NaeSatSearch::solve_with(formula, config))
    });

    if args.format == FormatArg::Text {
        write_nae_banner(out, file, "by backtracking")?;
    }
    for (i, (formula, result)) in formulas.iter().zip(&results).enumerate() {
        let verdict = result.outcome.as_ref().map(|report| FormulaVerdict {
            certificate: report.witness.as_ref(),
            steps: report.stats.steps,
        });
        match args.format {
            FormatArg::Text => {
                write_formula_text(out, i + 1, formula, None, result.elapsed, verdict)?;
            }
            FormatArg::Json => {
                out.push_str(&formula_json(i + 1, formula, None, result.elapsed, verdict)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

fn run_reduce(
    out: &mut String,
    file: &str,
    input: &str,
    config: &SearchConfig,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let formulas = parse_formulas(input)?;
    info!("Loaded {} formulas from {}", formulas.len(), file);

    let results = solve_all(&formulas, args.parallel, |formula| {
        Timed::measure(|| decide_by_reduction(formula, config))
    });

    if args.format == FormatArg::Text {
        write_nae_banner(out, file, "reduced to 3-Color Problem")?;
    }
    for (i, (formula, result)) in formulas.iter().zip(&results).enumerate() {
        let size = SatToColorReducer::graph_size(formula.num_vars(), formula.num_clauses());
        let verdict = result.outcome.as_ref().map(|report| FormulaVerdict {
            certificate: report.assignment.as_ref(),
            steps: report.stats.steps,
        });
        match args.format {
            FormatArg::Text => {
                write_formula_text(out, i + 1, formula, Some(size), result.elapsed, verdict)?;
            }
            FormatArg::Json => {
                out.push_str(&formula_json(
                    i + 1,
                    formula,
                    Some(size),
                    result.elapsed,
                    verdict,
                )?);
                out.push('\n');
            }
        }
    }
    Ok(())
}
