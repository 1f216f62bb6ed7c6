use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use npc_common::SearchConfig;

/// NP-complete problem deciders: graph 3-coloring and 3-NAESAT
#[derive(Parser, Debug)]
#[command(name = "npc")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Stop each search after this many search steps
    #[arg(long, global = true)]
    pub step_limit: Option<u64>,

    /// Stop each search after this many milliseconds
    #[arg(long, global = true)]
    pub time_limit_ms: Option<u64>,

    /// Solve the instances of the file concurrently
    #[arg(short = 'p', long, global = true, default_value_t = false)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    pub format: FormatArg,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find a 3-coloring for every adjacency matrix in FILE
    Color {
        /// Graph file: a vertex count line followed by that many matrix rows, repeated
        file: PathBuf,
    },
    /// Decide NAE-satisfiability of every formula in FILE by backtracking
    Naesat {
        /// Formula file: one formula per line as signed literal triples
        file: PathBuf,
    },
    /// Decide NAE-satisfiability of every formula in FILE through 3-coloring
    Reduce {
        /// Formula file: one formula per line as signed literal triples
        file: PathBuf,
    },
}

impl Command {
    pub const fn file(&self) -> &PathBuf {
        match self {
            Self::Color { file } | Self::Naesat { file } | Self::Reduce { file } => file,
        }
    }
}

impl Args {
    /// Convert command-line arguments into the search configuration
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::builder()
            .maybe_step_limit(self.step_limit)
            .maybe_time_limit(self.time_limit_ms.map(Duration::from_millis))
            .build()
    }
}

/// Command-line argument wrapper for the report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// The line-oriented report
    #[value(name = "text")]
    Text,
    /// One JSON object per instance
    #[value(name = "json")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_flow_into_config() {
        let args = Args::parse_from([
            "npc",
            "color",
            "graphs.txt",
            "--step-limit",
            "100",
            "--time-limit-ms",
            "250",
        ]);
        let config = args.to_config();
        assert_eq!(config.step_limit, Some(100));
        assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
        assert_eq!(args.command.file(), &PathBuf::from("graphs.txt"));
    }

    #[test]
    fn defaults_are_unlimited_text() {
        let args = Args::parse_from(["npc", "naesat", "f.txt"]);
        assert!(args.to_config().is_unlimited());
        assert_eq!(args.format, FormatArg::Text);
        assert!(!args.parallel);
    }

    #[test]
    fn global_flags_before_subcommand() {
        let args = Args::parse_from(["npc", "--parallel", "--format", "json", "reduce", "f.txt"]);
        assert!(args.parallel);
        assert_eq!(args.format, FormatArg::Json);
        assert!(matches!(args.command, Command::Reduce { .. }));
    }
}
