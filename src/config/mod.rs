//! # Configuration Module
//!
//! This module provides configuration structures for all job-depgraph
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **GraphOptions**: Configuration for the `graph` command to assemble the
//!   trigger graph around root jobs
//! - **EdgeQueryConfig**: Configuration for the `edges` command to list the
//!   edges incident with one job
//!
//! ## Example
//!
//! ```
//! use job_depgraph::cli::OutputFormat;
//! use job_depgraph::common::ConfigBuilder;
//! use job_depgraph::config::GraphOptions;
//! use job_depgraph::graph::TraversalDirection;
//!
//! # fn main() -> Result<(), job_depgraph::error::DepgraphError> {
//! let options = GraphOptions::builder()
//!     .with_registry("jobs.toml".into())
//!     .with_roots(vec!["team/*".to_string()])
//!     .with_direction(TraversalDirection::Downstream)
//!     .with_format(OutputFormat::Json)
//!     .build()?;
//!
//! assert_eq!(options.traversal.max_depth, None);
//! # Ok(())
//! # }
//! ```

pub mod edges;
pub mod graph;

pub use edges::EdgeQueryConfig;
pub use graph::GraphOptions;
