//! The host's precomputed dependency graph
//!
//! Only jobs whose kind participates in the native graph are indexed. Records
//! are derived once from every such job's core build trigger and are never
//! updated afterwards.

use std::collections::HashMap;

use tracing::debug;

use super::JobRegistry;
use crate::core::FullName;
use crate::names::resolve_name_list;

/// One resolved upstream → downstream record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    upstream: FullName,
    downstream: FullName,
}

impl Dependency {
    pub fn new(upstream: FullName, downstream: FullName) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    pub fn upstream(&self) -> &FullName {
        &self.upstream
    }

    pub fn downstream(&self) -> &FullName {
        &self.downstream
    }
}

#[derive(Debug, Clone, Default)]
pub struct NativeDependencyGraph {
    // keyed by the downstream job
    upstream: HashMap<FullName, Vec<Dependency>>,
    // keyed by the upstream job
    downstream: HashMap<FullName, Vec<Dependency>>,
}

impl NativeDependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every build trigger declared by a graph-participating job
    ///
    /// Downstream names resolve against the declaring job's parent. Resolved
    /// jobs that do not participate in the graph are skipped.
    pub fn compute(registry: &dyn JobRegistry) -> Self {
        let mut graph = Self::new();

        for job in registry.jobs() {
            if !job.kind().in_dependency_graph() {
                continue;
            }
            let Some(child_projects) = job.build_trigger() else {
                continue;
            };

            for child in resolve_name_list(registry, &job.parent(), child_projects) {
                if child.kind().in_dependency_graph() {
                    graph.add_dependency(Dependency::new(
                        job.full_name().clone(),
                        child.full_name().clone(),
                    ));
                } else {
                    debug!(
                        upstream = %job.full_name(),
                        downstream = %child.full_name(),
                        kind = %child.kind(),
                        "skipping build trigger target outside the dependency graph"
                    );
                }
            }
        }

        graph
    }

    /// Record a dependency; an identical record is stored only once
    pub fn add_dependency(&mut self, dependency: Dependency) {
        let upstream = self
            .upstream
            .entry(dependency.downstream.clone())
            .or_default();
        if upstream.contains(&dependency) {
            return;
        }
        upstream.push(dependency.clone());
        self.downstream
            .entry(dependency.upstream.clone())
            .or_default()
            .push(dependency);
    }

    /// Records whose downstream side is `job`
    pub fn upstream_dependencies(&self, job: &FullName) -> &[Dependency] {
        self.upstream.get(job).map(Vec::as_slice).unwrap_or_default()
    }

    /// Records whose upstream side is `job`
    pub fn downstream_dependencies(&self, job: &FullName) -> &[Dependency] {
        self.downstream.get(job).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn dependency_count(&self) -> usize {
        self.downstream.values().map(Vec::len).sum()
    }
}
