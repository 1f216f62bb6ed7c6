//! npc command-line tool
//!
//! Reads a graph or formula file, decides every instance in it and prints a
//! line-oriented report per instance, or one JSON object per line.

#[global_allocator]
/// Global allocator using jemalloc for better performance in parallel workloads.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod report;
mod run;

use clap::Parser;
use tracing::info;

use args::Args;

/// Executes the npc tool.
///
/// Logging goes to stderr through `RUST_LOG`; the report goes to stdout.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Running {:?}", args.command);

    let report = run::execute(&args)?;
    print!("{report}");

    npc_solver::profiling::report();
    Ok(())
}
