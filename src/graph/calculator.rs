use std::collections::{HashSet, VecDeque};

use clap::ValueEnum;
use tracing::{debug, instrument, warn};

use super::{EdgeListing, JobGraph};
use crate::core::{FullName, Job};
use crate::edge::{EdgeProvider, EdgeSource};
use crate::registry::JobRegistry;

/// Which incident edges are followed from each frontier job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TraversalDirection {
    #[default]
    Both,
    Upstream,
    Downstream,
}

impl TraversalDirection {
    pub fn includes_upstream(self) -> bool {
        matches!(self, TraversalDirection::Both | TraversalDirection::Upstream)
    }

    pub fn includes_downstream(self) -> bool {
        matches!(self, TraversalDirection::Both | TraversalDirection::Downstream)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    pub direction: TraversalDirection,
    /// Jobs this far from the nearest root are recorded but not expanded
    pub max_depth: Option<usize>,
}

/// Breadth-first assembler of a [`JobGraph`] from a list of edge sources
pub struct GraphCalculator<'r> {
    registry: &'r dyn JobRegistry,
    providers: Vec<EdgeSource<'r>>,
    options: TraversalOptions,
}

impl<'r> GraphCalculator<'r> {
    /// Calculator over the standard edge sources with default options
    pub fn new(registry: &'r dyn JobRegistry) -> Self {
        Self {
            registry,
            providers: EdgeSource::standard(registry),
            options: TraversalOptions::default(),
        }
    }

    pub fn with_providers(mut self, providers: Vec<EdgeSource<'r>>) -> Self {
        self.providers = providers;
        self
    }

    pub fn with_options(mut self, options: TraversalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &TraversalOptions {
        &self.options
    }

    #[instrument(skip_all, fields(roots = roots.len()))]
    pub fn generate_graph(&self, roots: &[&Job]) -> JobGraph {
        let mut graph = JobGraph::new(roots.iter().map(|job| job.full_name().clone()));
        let mut visited: HashSet<FullName> = HashSet::new();
        let mut frontier: VecDeque<(FullName, usize)> = VecDeque::new();

        for root in graph.roots() {
            if visited.insert(root.clone()) {
                frontier.push_back((root.clone(), 0));
            }
        }

        while let Some((name, depth)) = frontier.pop_front() {
            if self.options.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            let Some(job) = self.registry.job(name.as_str()) else {
                warn!(job = %name, "endpoint is not a known job, not expanding");
                continue;
            };

            for edge in self.edge_listing(job).into_edges() {
                for endpoint in [edge.from(), edge.to()] {
                    if visited.insert(endpoint.clone()) {
                        frontier.push_back((endpoint.clone(), depth + 1));
                    }
                }
                graph.add_edge(edge);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph assembled"
        );
        graph
    }

    /// Edges incident with `job` from every provider, in provider order
    ///
    /// Only the configured direction is queried. Repeated edges are dropped.
    pub fn edge_listing(&self, job: &Job) -> EdgeListing {
        let mut listing = EdgeListing::new(job.full_name().clone());
        for provider in &self.providers {
            if self.options.direction.includes_upstream() {
                for edge in provider.upstream_edges_incident_with(job) {
                    listing.push_upstream(edge);
                }
            }
            if self.options.direction.includes_downstream() {
                for edge in provider.downstream_edges_incident_with(job) {
                    listing.push_downstream(edge);
                }
            }
        }
        listing
    }
}
