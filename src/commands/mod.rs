//! Command implementations for job-depgraph CLI
//!
//! This module contains the implementations for each CLI command:
//! - graph: Assemble the trigger graph around root jobs
//! - edges: List the edges incident with a single job

pub mod edges;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Edges { .. } => edges::execute_edges_command(command),
    }
}
