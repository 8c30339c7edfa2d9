use tracing::debug;

use super::{Edge, EdgeKind, EdgeProvider};
use crate::core::Job;
use crate::names::resolve_name_list;
use crate::registry::JobRegistry;

/// [`EdgeProvider`] yielding the upstream watches of reverse build triggers
///
/// The declaring job is the downstream side of each edge.
pub struct ReverseBuildTriggerEdgeProvider<'r> {
    registry: &'r dyn JobRegistry,
}

impl<'r> ReverseBuildTriggerEdgeProvider<'r> {
    pub fn new(registry: &'r dyn JobRegistry) -> Self {
        Self { registry }
    }
}

impl EdgeProvider for ReverseBuildTriggerEdgeProvider<'_> {
    fn upstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        let mut edges = Vec::new();
        if !job.kind().has_triggers() {
            return edges;
        }

        for trigger in job.reverse_triggers() {
            for upstream in resolve_name_list(self.registry, &job.parent(), trigger.upstream_projects()) {
                edges.push(Edge::between(upstream, job, EdgeKind::ReverseBuildTrigger));
            }
        }

        edges
    }

    /// Scans every trigger-carrying job for watches naming `job`
    ///
    /// Each watch list resolves against its declaring job's parent.
    fn downstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        let mut edges = Vec::new();

        for downstream in self.registry.jobs() {
            if !downstream.kind().has_triggers() {
                continue;
            }
            for trigger in downstream.reverse_triggers() {
                let watched =
                    resolve_name_list(self.registry, &downstream.parent(), trigger.upstream_projects());
                if watched.iter().any(|w| w.full_name() == job.full_name()) {
                    edges.push(Edge::between(job, downstream, EdgeKind::ReverseBuildTrigger));
                }
            }
        }

        debug!(job = %job.full_name(), edges = edges.len(), "reverse-build-trigger downstream scan");
        edges
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::core::JobKind;
    use crate::registry::InMemoryRegistry;

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::builder()
            .with_job(Job::builder().with_name("team/u").build().unwrap())
            .with_job(
                Job::builder()
                    .with_name("team/d")
                    .with_kind(JobKind::Pipeline)
                    .with_reverse_trigger("u, Ghost")
                    .build()
                    .unwrap(),
            )
            .with_job(
                Job::builder()
                    .with_name("ops/watcher")
                    .with_reverse_trigger("../team/u")
                    .build()
                    .unwrap(),
            )
            .with_job(
                Job::builder()
                    .with_name("ops/u")
                    .with_kind(JobKind::External)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn edge(from: &str, to: &str) -> Edge {
        Edge::new(from.into(), to.into(), EdgeKind::ReverseBuildTrigger)
    }

    #[test]
    fn test_upstream_edges_point_at_declaring_job() {
        let registry = registry();
        let provider = ReverseBuildTriggerEdgeProvider::new(&registry);
        let d = registry.job("team/d").unwrap();

        assert_eq!(provider.upstream_edges_incident_with(d), vec![edge("team/u", "team/d")]);
        assert!(provider.downstream_edges_incident_with(d).is_empty());
    }

    #[test]
    fn test_downstream_edges_scan_watchers() {
        let registry = registry();
        let provider = ReverseBuildTriggerEdgeProvider::new(&registry);
        let u = registry.job("team/u").unwrap();

        assert_eq!(
            provider.downstream_edges_incident_with(u),
            vec![edge("team/u", "ops/watcher"), edge("team/u", "team/d")]
        );
    }

    #[test]
    fn test_watch_lists_resolve_against_the_declaring_job() {
        let registry = registry();
        let provider = ReverseBuildTriggerEdgeProvider::new(&registry);
        // "u" declared inside team/ must not match ops/u
        let ops_u = registry.job("ops/u").unwrap();

        assert!(provider.downstream_edges_incident_with(ops_u).is_empty());
    }

    #[test]
    fn test_external_job_has_no_triggers() {
        let registry = registry();
        let provider = ReverseBuildTriggerEdgeProvider::new(&registry);
        let ops_u = registry.job("ops/u").unwrap();

        assert!(provider.upstream_edges_incident_with(ops_u).is_empty());
    }
}
