//! # Edge Providers
//!
//! Every source of "job A triggers job B" relationships is normalized into
//! [`Edge`] values through the [`EdgeProvider`] interface:
//!
//! - **DependencyGraphEdgeProvider**: the host's native dependency graph
//! - **ParameterizedTriggerEdgeProvider**: publish-time trigger configurations
//!   of the parameterized-trigger plugin, inactive when the plugin is absent
//! - **ReverseBuildTriggerEdgeProvider**: triggers that watch upstream jobs
//!
//! Edges always point upstream → downstream, whichever side declared the
//! relationship. Queries never fail: unresolvable names, unsupported job kinds
//! and absent plugins all yield fewer edges.
//!
//! ## Example
//!
//! ```
//! use job_depgraph::common::ConfigBuilder;
//! use job_depgraph::core::Job;
//! use job_depgraph::edge::{Edge, EdgeKind, EdgeProvider, EdgeSource};
//! use job_depgraph::registry::{InMemoryRegistry, JobRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = InMemoryRegistry::builder()
//!     .with_job(Job::builder().with_name("lib").build()?)
//!     .with_job(Job::builder().with_name("app").with_reverse_trigger("lib").build()?)
//!     .build()?;
//!
//! let app = registry.job("app").unwrap();
//! let edges: Vec<Edge> = EdgeSource::standard(&registry)
//!     .iter()
//!     .flat_map(|provider| provider.upstream_edges_incident_with(app))
//!     .collect();
//!
//! assert_eq!(edges, vec![Edge::new("lib".into(), "app".into(), EdgeKind::ReverseBuildTrigger)]);
//! # Ok(())
//! # }
//! ```

mod dependency_graph;
mod parameterized_trigger;
mod reverse_trigger;

use std::fmt;

use serde::Serialize;

pub use dependency_graph::DependencyGraphEdgeProvider;
pub use parameterized_trigger::ParameterizedTriggerEdgeProvider;
pub use reverse_trigger::ReverseBuildTriggerEdgeProvider;

pub use crate::constants::plugins::PARAMETERIZED_TRIGGER as PARAMETERIZED_TRIGGER_PLUGIN;
use crate::core::{FullName, Job};
use crate::registry::JobRegistry;

/// Which relationship produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    BuildTrigger,
    ParameterizedTrigger,
    ReverseBuildTrigger,
}

impl EdgeKind {
    pub fn label(self) -> &'static str {
        match self {
            EdgeKind::BuildTrigger => "build-trigger",
            EdgeKind::ParameterizedTrigger => "parameterized-trigger",
            EdgeKind::ReverseBuildTrigger => "reverse-build-trigger",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Directed upstream → downstream relationship between two jobs
///
/// Equality covers both endpoints and the kind, so edges of different kinds
/// between the same jobs stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    from: FullName,
    to: FullName,
    kind: EdgeKind,
}

impl Edge {
    pub fn new(from: FullName, to: FullName, kind: EdgeKind) -> Self {
        Self { from, to, kind }
    }

    pub(crate) fn between(upstream: &Job, downstream: &Job, kind: EdgeKind) -> Self {
        Self::new(
            upstream.full_name().clone(),
            downstream.full_name().clone(),
            kind,
        )
    }

    /// Upstream endpoint
    pub fn from(&self) -> &FullName {
        &self.from
    }

    /// Downstream endpoint
    pub fn to(&self) -> &FullName {
        &self.to
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({})", self.from, self.to, self.kind)
    }
}

/// Source of edges incident with a job, split by direction
pub trait EdgeProvider {
    /// Edges whose downstream endpoint is `job`
    fn upstream_edges_incident_with(&self, job: &Job) -> Vec<Edge>;

    /// Edges whose upstream endpoint is `job`
    fn downstream_edges_incident_with(&self, job: &Job) -> Vec<Edge>;

    fn edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        let mut edges = self.upstream_edges_incident_with(job);
        edges.extend(self.downstream_edges_incident_with(job));
        edges
    }
}

/// The fixed set of provider variants
pub enum EdgeSource<'r> {
    DependencyGraph(DependencyGraphEdgeProvider<'r>),
    ParameterizedTrigger(ParameterizedTriggerEdgeProvider<'r>),
    ReverseBuildTrigger(ReverseBuildTriggerEdgeProvider<'r>),
}

impl<'r> EdgeSource<'r> {
    /// One provider of each kind, in a fixed order
    pub fn standard(registry: &'r dyn JobRegistry) -> Vec<EdgeSource<'r>> {
        vec![
            EdgeSource::DependencyGraph(DependencyGraphEdgeProvider::new(registry)),
            EdgeSource::ParameterizedTrigger(ParameterizedTriggerEdgeProvider::new(registry)),
            EdgeSource::ReverseBuildTrigger(ReverseBuildTriggerEdgeProvider::new(registry)),
        ]
    }

    /// Kind of every edge this source yields
    pub fn kind(&self) -> EdgeKind {
        match self {
            EdgeSource::DependencyGraph(_) => EdgeKind::BuildTrigger,
            EdgeSource::ParameterizedTrigger(_) => EdgeKind::ParameterizedTrigger,
            EdgeSource::ReverseBuildTrigger(_) => EdgeKind::ReverseBuildTrigger,
        }
    }
}

impl EdgeProvider for EdgeSource<'_> {
    fn upstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        match self {
            EdgeSource::DependencyGraph(p) => p.upstream_edges_incident_with(job),
            EdgeSource::ParameterizedTrigger(p) => p.upstream_edges_incident_with(job),
            EdgeSource::ReverseBuildTrigger(p) => p.upstream_edges_incident_with(job),
        }
    }

    fn downstream_edges_incident_with(&self, job: &Job) -> Vec<Edge> {
        match self {
            EdgeSource::DependencyGraph(p) => p.downstream_edges_incident_with(job),
            EdgeSource::ParameterizedTrigger(p) => p.downstream_edges_incident_with(job),
            EdgeSource::ReverseBuildTrigger(p) => p.downstream_edges_incident_with(job),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::registry::InMemoryRegistry;

    #[test]
    fn test_edges_of_different_kinds_are_distinct() {
        let a = Edge::new("a".into(), "b".into(), EdgeKind::BuildTrigger);
        let b = Edge::new("a".into(), "b".into(), EdgeKind::ReverseBuildTrigger);
        let c = Edge::new("a".into(), "b".into(), EdgeKind::BuildTrigger);

        let set: HashSet<Edge> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("team/lib".into(), "team/app".into(), EdgeKind::ParameterizedTrigger);
        assert_eq!(edge.to_string(), "team/lib → team/app (parameterized-trigger)");
    }

    #[test]
    fn test_edge_serializes_with_kebab_kind() {
        let edge = Edge::new("a".into(), "b".into(), EdgeKind::ReverseBuildTrigger);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": "a", "to": "b", "kind": "reverse-build-trigger"})
        );
    }

    #[test]
    fn test_standard_sources_cover_every_kind_in_order() {
        let registry = InMemoryRegistry::builder().build().unwrap();
        let kinds: Vec<EdgeKind> = EdgeSource::standard(&registry)
            .iter()
            .map(EdgeSource::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                EdgeKind::BuildTrigger,
                EdgeKind::ParameterizedTrigger,
                EdgeKind::ReverseBuildTrigger
            ]
        );
    }

    #[test]
    fn test_edges_incident_with_combines_both_directions() {
        let registry = InMemoryRegistry::builder()
            .with_job(Job::builder().with_name("up").with_build_trigger("mid").build().unwrap())
            .with_job(Job::builder().with_name("mid").with_build_trigger("down").build().unwrap())
            .with_job(Job::builder().with_name("down").build().unwrap())
            .build()
            .unwrap();
        let mid = registry.job("mid").unwrap();

        let provider = DependencyGraphEdgeProvider::new(&registry);
        let edges = provider.edges_incident_with(mid);
        assert_eq!(
            edges,
            vec![
                Edge::new("up".into(), "mid".into(), EdgeKind::BuildTrigger),
                Edge::new("mid".into(), "down".into(), EdgeKind::BuildTrigger),
            ]
        );
    }
}
