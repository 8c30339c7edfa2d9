use tracing::debug;

use super::{Edge, EdgeKind, EdgeProvider};
use crate::constants::plugins::PARAMETERIZED_TRIGGER;
use crate::core::Job;
use crate::names::resolve_name_list;
use crate::registry::JobRegistry;

/// [`EdgeProvider`] yielding the downstream lists of the parameterized-trigger
/// publisher
///
/// Plugin presence is checked once, at construction. Without the plugin every
/// query is empty.
pub struct ParameterizedTriggerEdgeProvider<'r> {
    registry: &'r dyn JobRegistry,
    plugin_installed: bool,
}

impl<'r> ParameterizedTriggerEdgeProvider<'r> {
    pub fn new(registry: &'r dyn JobRegistry) -> Self {
        Self {
            registry,
            plugin_installed: registry.is_plugin_installed(PARAMETERIZED_TRIGGER),
        }
    }

    pub fn is_plugin_installed(&self) -> bool {
        self.plugin_installed
    }
}

impl EdgeProvider for ParameterizedTriggerEdgeProvider<'_> {
    /// Scans every publisher-carrying job for configurations targeting `job`
    fn upstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        let mut edges = Vec::new();
        if !self.plugin_installed {
            return edges;
        }

        for upstream in self.registry.jobs() {
            if !upstream.kind().has_publishers() {
                continue;
            }
            for config in upstream.parameterized_triggers() {
                let targets = resolve_name_list(self.registry, &upstream.parent(), config.projects());
                if targets.iter().any(|t| t.full_name() == job.full_name()) {
                    edges.push(Edge::between(upstream, job, EdgeKind::ParameterizedTrigger));
                }
            }
        }

        debug!(job = %job.full_name(), edges = edges.len(), "parameterized-trigger upstream scan");
        edges
    }

    fn downstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        let mut edges = Vec::new();
        if !self.plugin_installed || !job.kind().has_publishers() {
            return edges;
        }

        for config in job.parameterized_triggers() {
            for downstream in resolve_name_list(self.registry, &job.parent(), config.projects()) {
                edges.push(Edge::between(job, downstream, EdgeKind::ParameterizedTrigger));
            }
        }

        edges
    }
}
