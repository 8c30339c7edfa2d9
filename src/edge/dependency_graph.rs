use tracing::trace;

use super::{Edge, EdgeKind, EdgeProvider};
use crate::core::Job;
use crate::registry::{Dependency, JobRegistry, NativeDependencyGraph};

/// [`EdgeProvider`] yielding the records of the host's native dependency graph
pub struct DependencyGraphEdgeProvider<'r> {
    dependency_graph: &'r NativeDependencyGraph,
}

impl<'r> DependencyGraphEdgeProvider<'r> {
    pub fn new(registry: &'r dyn JobRegistry) -> Self {
        Self {
            dependency_graph: registry.dependency_graph(),
        }
    }

    fn edges(dependencies: &[Dependency]) -> Vec<Edge> {
        dependencies
            .iter()
            .map(|dependency| {
                Edge::new(
                    dependency.upstream().clone(),
                    dependency.downstream().clone(),
                    EdgeKind::BuildTrigger,
                )
            })
            .collect()
    }
}

impl EdgeProvider for DependencyGraphEdgeProvider<'_> {
    fn upstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        if !job.kind().in_dependency_graph() {
            trace!(job = %job.full_name(), kind = %job.kind(), "not indexed by the dependency graph");
            return Vec::new();
        }
        Self::edges(self.dependency_graph.upstream_dependencies(job.full_name()))
    }

    fn downstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        if !job.kind().in_dependency_graph() {
            trace!(job = %job.full_name(), kind = %job.kind(), "not indexed by the dependency graph");
            return Vec::new();
        }
        Self::edges(self.dependency_graph.downstream_dependencies(job.full_name()))
    }
}
