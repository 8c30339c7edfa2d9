//! # job-depgraph - Map Trigger Relationships Between Build Jobs
//!
//! job-depgraph normalizes every source of "job A triggers job B" in a build
//! orchestration registry into directed upstream → downstream edges, and
//! assembles them into a graph around chosen root jobs.
//!
//! ## Main Components
//!
//! - **Core**: Job names, kinds and declared trigger configurations
//! - **Registry**: The read-only job registry port, its in-memory
//!   implementation and the TOML manifests it loads from
//! - **Edge**: The edge providers, one per relationship source
//! - **Graph**: Breadth-first graph assembly and cycle detection
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ```
//! use job_depgraph::common::ConfigBuilder;
//! use job_depgraph::core::{Job, JobKind};
//! use job_depgraph::edge::PARAMETERIZED_TRIGGER_PLUGIN;
//! use job_depgraph::graph::GraphCalculator;
//! use job_depgraph::registry::{InMemoryRegistry, JobRegistry};
//! use job_depgraph::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = InMemoryRegistry::builder()
//!     .with_plugin(PARAMETERIZED_TRIGGER_PLUGIN)
//!     .with_job(
//!         Job::builder()
//!             .with_name("team/build")
//!             .with_build_trigger("test")
//!             .with_parameterized_trigger("../ops/deploy")
//!             .build()?,
//!     )
//!     .with_job(Job::builder().with_name("team/test").build()?)
//!     .with_job(
//!         Job::builder()
//!             .with_name("ops/deploy")
//!             .with_kind(JobKind::Pipeline)
//!             .build()?,
//!     )
//!     .with_job(
//!         Job::builder()
//!             .with_name("ops/smoke")
//!             .with_kind(JobKind::Pipeline)
//!             .with_reverse_trigger("deploy")
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let build = registry.job("team/build").unwrap();
//! let graph = GraphCalculator::new(&registry).generate_graph(&[build]);
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 3);
//!
//! let json = JsonReportGenerator::new().generate_report(&graph)?;
//! assert!(json.contains("reverse-build-trigger"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod edge;
pub mod error;
pub mod executors;
pub mod graph;
pub mod names;
pub mod registry;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::cli::Cli;
    use crate::commands::execute_command;
    use crate::constants::logging::{DEFAULT_FILTER, LOG_ENV};

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed by an embedding application
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    execute_command(cli.command)
}
