//! Command executors that handle the actual logic for each command

pub mod edges;
pub mod graph;

use std::path::Path;

use console::style;
use miette::{Result, WrapErr};

use crate::constants::plugins::PARAMETERIZED_TRIGGER;
use crate::registry::{InMemoryRegistry, JobRegistry, load_registry};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the registry, telling the user when parameterized trigger edges will
/// be missing
pub(crate) fn load_registry_with_notice(path: &Path, plugins: &[String]) -> Result<InMemoryRegistry> {
    let registry = load_registry(path, plugins)
        .wrap_err_with(|| format!("Failed to load job registry from '{}'", path.display()))?;

    if !registry.is_plugin_installed(PARAMETERIZED_TRIGGER) {
        eprintln!(
            "{} Plugin '{}' is not installed, its trigger configurations are ignored",
            style("ℹ").blue(),
            PARAMETERIZED_TRIGGER
        );
    }

    Ok(registry)
}
