//! Graph snapshot types

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::FullName;
use crate::edge::{Edge, EdgeKind};

/// Jobs and edges discovered from a set of root jobs
///
/// Edges are unique by (from, to, kind): parallel edges of different kinds
/// are kept, repeated discoveries of the same edge are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobGraph {
    roots: Vec<FullName>,
    nodes: BTreeSet<FullName>,
    edges: BTreeSet<Edge>,
}

impl JobGraph {
    pub fn new(roots: impl IntoIterator<Item = FullName>) -> Self {
        let mut graph = Self::default();
        for root in roots {
            if graph.nodes.insert(root.clone()) {
                graph.roots.push(root);
            }
        }
        graph
    }

    pub fn add_node(&mut self, name: FullName) -> bool {
        self.nodes.insert(name)
    }

    /// Add an edge and its endpoints; false if the edge was already present
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if self.edges.contains(&edge) {
            return false;
        }
        self.nodes.insert(edge.from().clone());
        self.nodes.insert(edge.to().clone());
        self.edges.insert(edge)
    }

    pub fn roots(&self) -> &[FullName] {
        &self.roots
    }

    pub fn is_root(&self, name: &str) -> bool {
        self.roots.iter().any(|root| root.as_str() == name)
    }

    /// Jobs in name order
    pub fn nodes(&self) -> impl Iterator<Item = &FullName> {
        self.nodes.iter()
    }

    /// Edges ordered by (from, to, kind)
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Edges of the snapshot ending at `name`
    pub fn upstream_of(&self, name: &str) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.to().as_str() == name)
            .collect()
    }

    /// Edges of the snapshot starting at `name`
    pub fn downstream_of(&self, name: &str) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.from().as_str() == name)
            .collect()
    }

    /// One graph node per job, one graph edge per snapshot edge
    pub fn to_petgraph(&self) -> DiGraph<FullName, EdgeKind> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices: HashMap<&FullName, NodeIndex> = HashMap::new();

        for name in &self.nodes {
            indices.insert(name, graph.add_node(name.clone()));
        }
        for edge in &self.edges {
            graph.add_edge(indices[edge.from()], indices[edge.to()], edge.kind());
        }

        graph
    }

    /// Trigger loops: strongly connected components of two or more jobs, and
    /// jobs that trigger themselves
    ///
    /// Each cycle is sorted by name, and the cycles are sorted.
    pub fn cycles(&self) -> Vec<Vec<FullName>> {
        let graph = self.to_petgraph();

        let mut cycles: Vec<Vec<FullName>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut names: Vec<FullName> = scc.iter().map(|&idx| graph[idx].clone()).collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }

    /// Whether `name` takes part in any trigger loop
    pub fn in_cycle(&self, name: &str) -> bool {
        self.cycles()
            .iter()
            .any(|cycle| cycle.iter().any(|member| member.as_str() == name))
    }
}

/// Edges incident with a single job, split by direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListing {
    job: FullName,
    upstream: Vec<Edge>,
    downstream: Vec<Edge>,
}

impl EdgeListing {
    pub fn new(job: FullName) -> Self {
        Self {
            job,
            upstream: Vec::new(),
            downstream: Vec::new(),
        }
    }

    pub fn push_upstream(&mut self, edge: Edge) {
        if !self.upstream.contains(&edge) {
            self.upstream.push(edge);
        }
    }

    pub fn push_downstream(&mut self, edge: Edge) {
        if !self.downstream.contains(&edge) {
            self.downstream.push(edge);
        }
    }

    pub fn job(&self) -> &FullName {
        &self.job
    }

    pub fn upstream(&self) -> &[Edge] {
        &self.upstream
    }

    pub fn downstream(&self) -> &[Edge] {
        &self.downstream
    }

    pub fn is_empty(&self) -> bool {
        self.upstream.is_empty() && self.downstream.is_empty()
    }

    /// Upstream edges first, then downstream
    pub fn into_edges(self) -> impl Iterator<Item = Edge> {
        self.upstream.into_iter().chain(self.downstream)
    }
}
