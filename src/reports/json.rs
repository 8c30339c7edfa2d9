//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::DepgraphError;
use crate::graph::{EdgeListing, JobGraph};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, graph: &JobGraph) -> Result<String, DepgraphError> {
        let jobs: Vec<_> = graph.nodes().collect();
        let edges: Vec<_> = graph.edges().collect();

        let report = json!({
            "roots": graph.roots(),
            "jobs": jobs,
            "edges": edges,
            "cycles": graph.cycles(),
        });

        serde_json::to_string_pretty(&report).map_err(DepgraphError::Json)
    }
}

impl ReportGenerator<EdgeListing> for JsonReportGenerator {
    fn generate_report(&self, listing: &EdgeListing) -> Result<String, DepgraphError> {
        let report = json!({
            "job": listing.job(),
            "upstream": listing.upstream(),
            "downstream": listing.downstream(),
        });

        serde_json::to_string_pretty(&report).map_err(DepgraphError::Json)
    }
}
