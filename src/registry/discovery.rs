use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::InMemoryRegistry;
use super::manifest::{JobManifest, PluginsManifest, RegistryManifest, parse_toml, read_manifest};
use crate::common::ConfigBuilder;
use crate::constants::manifest::{EXTENSION, PLUGINS_FILE};
use crate::error::DepgraphError;

/// Load a job registry from a manifest file or a directory of job manifests
///
/// A directory is walked recursively: every sub-directory is a folder, every
/// `*.toml` file is one job named by its relative path without extension, and
/// a top-level `plugins.toml` lists installed plugins. Hidden entries are
/// skipped. `extra_plugins` are added to whatever the manifests declare.
pub fn load_registry(path: &Path, extra_plugins: &[String]) -> Result<InMemoryRegistry, DepgraphError> {
    if path.is_dir() {
        load_directory(path, extra_plugins)
    } else {
        RegistryManifest::parse_file(path)?.into_registry(extra_plugins)
    }
}

fn load_directory(root: &Path, extra_plugins: &[String]) -> Result<InMemoryRegistry, DepgraphError> {
    let mut builder = InMemoryRegistry::builder().with_plugins(extra_plugins.iter().cloned());

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| DepgraphError::Io(e.into()))?;
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        if entry.file_type().is_dir() {
            builder = builder.with_folder(&item_name(relative));
            continue;
        }

        if relative == Path::new(PLUGINS_FILE) {
            let content = read_manifest(entry.path())?;
            let plugins: PluginsManifest = parse_toml(&entry.path().display().to_string(), &content)?;
            builder = builder.with_plugins(plugins.plugins);
            continue;
        }

        if relative.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
            debug!(path = %entry.path().display(), "skipping non-manifest file");
            continue;
        }

        let name = item_name(&relative.with_extension(""));
        let manifest = JobManifest::parse_file(entry.path())?;
        if let Some(declared) = &manifest.name
            && declared.trim_matches('/') != name
        {
            return Err(DepgraphError::ConfigurationError {
                message: format!(
                    "Job manifest '{}' declares name '{declared}', but its path names it '{name}'",
                    entry.path().display()
                ),
            });
        }

        builder = builder.with_job(manifest.into_job(&name)?);
    }

    builder.build()
}

fn item_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(entry: &DirEntry) -> bool {
    // the root itself may be a hidden temp directory
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
