//! Report generation modules for different output formats
//!
//! This module contains report generators for two output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//!
//! Both render a [`JobGraph`] for the `graph` command and an [`EdgeListing`]
//! for the `edges` command.

pub mod human;
pub mod json;

use crate::error::DepgraphError;
use crate::graph::{EdgeListing, JobGraph};

/// Common trait for all report generators
pub trait ReportGenerator<T: ?Sized = JobGraph> {
    /// Generate a report from an assembled graph or an edge listing
    fn generate_report(&self, subject: &T) -> Result<String, DepgraphError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
