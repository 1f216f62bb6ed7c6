//! Shared data model for the npc workspace.
//!
//! This crate holds the static combinatorial structures the deciders operate
//! on (graphs, colorings, formulas, assignments), the error types raised when
//! those structures are malformed, the search configuration, and the two
//! line-oriented text formats the command-line front end reads.

mod assignment;
mod color;
mod config;
mod error;
pub mod fixtures;
mod formula;
mod graph;
mod literal;
pub mod text;

pub use crate::assignment::*;
pub use crate::color::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::formula::*;
pub use crate::graph::*;
pub use crate::literal::*;
