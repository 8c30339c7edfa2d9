//! # Job Registry Module
//!
//! Read-only port onto the host's job/trigger store. Edge providers only ever
//! see a `&dyn JobRegistry`, so the same providers run against a live host or
//! against the in-memory population loaded from manifests.
//!
//! ## Components
//!
//! - **JobRegistry**: lookup, enumeration, native dependency graph and plugin
//!   presence
//! - **NativeDependencyGraph**: the host's precomputed upstream/downstream
//!   records
//! - **InMemoryRegistry**: immutable registry built from [`Job`] values
//! - **load_registry**: builds an `InMemoryRegistry` from a TOML manifest file
//!   or a directory of job manifests

mod dependency_graph;
mod discovery;
mod manifest;
mod memory;

pub use dependency_graph::{Dependency, NativeDependencyGraph};
pub use discovery::load_registry;
pub use manifest::{
    JobManifest, ParameterizedTriggerManifest, RegistryManifest, ReverseTriggerManifest,
};
pub use memory::{InMemoryRegistry, InMemoryRegistryBuilder};

use crate::core::Job;

/// Read-only view of the host's jobs, folders and installed plugins
pub trait JobRegistry {
    /// Job with exactly this full name
    fn job(&self, full_name: &str) -> Option<&Job>;

    /// Whether this full name denotes a folder (the root is not a folder)
    fn is_folder(&self, full_name: &str) -> bool;

    /// Every job known to the host, in a stable order
    fn jobs(&self) -> Box<dyn Iterator<Item = &Job> + '_>;

    fn dependency_graph(&self) -> &NativeDependencyGraph;

    /// Whether the companion plugin with this short name is installed
    fn is_plugin_installed(&self, short_name: &str) -> bool;
}
