//! # Graph Assembly Module
//!
//! Builds a snapshot of the jobs reachable from one or more root jobs by
//! asking every edge provider for the edges incident with each frontier job.
//!
//! ## Components
//!
//! - **GraphCalculator**: breadth-first traversal over a fixed list of
//!   [`EdgeSource`](crate::edge::EdgeSource)s
//! - **TraversalOptions**: direction and depth limits of the traversal
//! - **JobGraph**: the deduplicated node and edge sets, with cycle detection
//! - **EdgeListing**: the edges incident with a single job
//!
//! ## Example
//!
//! ```
//! use job_depgraph::common::ConfigBuilder;
//! use job_depgraph::core::Job;
//! use job_depgraph::graph::GraphCalculator;
//! use job_depgraph::registry::{InMemoryRegistry, JobRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = InMemoryRegistry::builder()
//!     .with_job(Job::builder().with_name("build").with_build_trigger("test").build()?)
//!     .with_job(Job::builder().with_name("test").with_build_trigger("deploy").build()?)
//!     .with_job(Job::builder().with_name("deploy").build()?)
//!     .build()?;
//!
//! let test = registry.job("test").unwrap();
//! let graph = GraphCalculator::new(&registry).generate_graph(&[test]);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.cycles().is_empty());
//! # Ok(())
//! # }
//! ```

mod calculator;
mod types;

pub use calculator::{GraphCalculator, TraversalDirection, TraversalOptions};
pub use types::{EdgeListing, JobGraph};
