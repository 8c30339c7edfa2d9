use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{JobRegistry, NativeDependencyGraph};
use crate::common::ConfigBuilder;
use crate::core::{FullName, Job};
use crate::error::DepgraphError;

/// Immutable job population held in memory
///
/// Folders are registered explicitly or implied by the full names of jobs.
/// The native dependency graph is computed once when the registry is built.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    jobs: BTreeMap<FullName, Job>,
    folders: BTreeSet<FullName>,
    plugins: BTreeSet<String>,
    dependency_graph: NativeDependencyGraph,
}

impl InMemoryRegistry {
    pub fn builder() -> InMemoryRegistryBuilder {
        InMemoryRegistryBuilder::new()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn folders(&self) -> impl Iterator<Item = &FullName> {
        self.folders.iter()
    }

    pub fn plugins(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(String::as_str)
    }
}

impl JobRegistry for InMemoryRegistry {
    fn job(&self, full_name: &str) -> Option<&Job> {
        self.jobs.get(full_name)
    }

    fn is_folder(&self, full_name: &str) -> bool {
        self.folders.contains(full_name)
    }

    fn jobs(&self) -> Box<dyn Iterator<Item = &Job> + '_> {
        Box::new(self.jobs.values())
    }

    fn dependency_graph(&self) -> &NativeDependencyGraph {
        &self.dependency_graph
    }

    fn is_plugin_installed(&self, short_name: &str) -> bool {
        self.plugins.contains(short_name)
    }
}

#[derive(Default)]
pub struct InMemoryRegistryBuilder {
    jobs: Vec<Job>,
    folders: Vec<String>,
    plugins: BTreeSet<String>,
}

impl InMemoryRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = Job>) -> Self {
        self.jobs.extend(jobs);
        self
    }

    pub fn with_folder(mut self, folder: &str) -> Self {
        self.folders.push(folder.to_string());
        self
    }

    pub fn with_plugin(mut self, short_name: &str) -> Self {
        self.plugins.insert(short_name.to_string());
        self
    }

    pub fn with_plugins<I, S>(mut self, short_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins.extend(short_names.into_iter().map(Into::into));
        self
    }
}

impl ConfigBuilder for InMemoryRegistryBuilder {
    type Config = InMemoryRegistry;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        let mut folders = BTreeSet::new();
        for folder in &self.folders {
            let folder = FullName::parse(folder)?;
            folders.extend(folder.ancestors());
            folders.insert(folder);
        }

        let mut jobs = BTreeMap::new();
        for job in self.jobs {
            folders.extend(job.full_name().ancestors());
            let name = job.full_name().clone();
            if jobs.insert(name.clone(), job).is_some() {
                return Err(DepgraphError::DuplicateItem {
                    name: name.to_string(),
                });
            }
        }

        // A job name that is also a folder is either a clash or a job nested
        // under another job.
        if let Some(clash) = jobs.keys().find(|name| folders.contains(*name)) {
            return Err(DepgraphError::DuplicateItem {
                name: clash.to_string(),
            });
        }

        let mut registry = InMemoryRegistry {
            jobs,
            folders,
            plugins: self.plugins,
            dependency_graph: NativeDependencyGraph::new(),
        };
        registry.dependency_graph = NativeDependencyGraph::compute(&registry);

        debug!(
            jobs = registry.jobs.len(),
            folders = registry.folders.len(),
            plugins = registry.plugins.len(),
            dependencies = registry.dependency_graph.dependency_count(),
            "built in-memory job registry"
        );

        Ok(registry)
    }
}
