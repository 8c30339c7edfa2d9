use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::InMemoryRegistry;
use crate::common::ConfigBuilder;
use crate::core::{Job, JobKind};
use crate::error::{DepgraphError, ManifestParseError};

/// Single-file description of a whole job population
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RegistryManifest {
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<JobManifest>,
}

/// Configuration of one job
///
/// `name` is required inside a [`RegistryManifest`]. A per-job file is named
/// by its path, so there `name` may only repeat that path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct JobManifest {
    pub name: Option<String>,
    #[serde(default)]
    pub kind: JobKind,
    pub build_trigger: Option<String>,
    #[serde(default)]
    pub parameterized_trigger: Vec<ParameterizedTriggerManifest>,
    #[serde(default)]
    pub reverse_trigger: Vec<ReverseTriggerManifest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ParameterizedTriggerManifest {
    pub projects: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReverseTriggerManifest {
    pub upstream_projects: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct PluginsManifest {
    #[serde(default)]
    pub plugins: Vec<String>,
}

impl RegistryManifest {
    pub fn parse_file(path: &Path) -> Result<Self, DepgraphError> {
        let content = read_manifest(path)?;
        Self::parse_str(&path.display().to_string(), &content)
    }

    pub fn parse_str(file: &str, content: &str) -> Result<Self, DepgraphError> {
        parse_toml(file, content)
    }

    /// Build the registry, adding `extra_plugins` to the declared ones
    pub fn into_registry(self, extra_plugins: &[String]) -> Result<InMemoryRegistry, DepgraphError> {
        let mut builder = InMemoryRegistry::builder()
            .with_plugins(self.plugins)
            .with_plugins(extra_plugins.iter().cloned());

        for folder in &self.folders {
            builder = builder.with_folder(folder);
        }

        for job in self.jobs {
            let name = job
                .name
                .clone()
                .ok_or_else(|| DepgraphError::ConfigurationError {
                    message: "Every [[jobs]] entry needs a name".to_string(),
                })?;
            builder = builder.with_job(job.into_job(&name)?);
        }

        builder.build()
    }
}

impl JobManifest {
    pub fn parse_file(path: &Path) -> Result<Self, DepgraphError> {
        let content = read_manifest(path)?;
        parse_toml(&path.display().to_string(), &content)
    }

    pub fn into_job(self, name: &str) -> Result<Job, DepgraphError> {
        let mut builder = Job::builder().with_name(name).with_kind(self.kind);

        if let Some(child_projects) = &self.build_trigger {
            builder = builder.with_build_trigger(child_projects);
        }
        for config in &self.parameterized_trigger {
            builder = builder.with_parameterized_trigger(&config.projects);
        }
        for trigger in &self.reverse_trigger {
            builder = builder.with_reverse_trigger(&trigger.upstream_projects);
        }

        builder.build()
    }
}

pub(super) fn read_manifest(path: &Path) -> Result<String, DepgraphError> {
    std::fs::read_to_string(path).map_err(|e| DepgraphError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

pub(super) fn parse_toml<T: DeserializeOwned>(file: &str, content: &str) -> Result<T, DepgraphError> {
    toml::from_str(content).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        DepgraphError::ManifestParseError(Box::new(ManifestParseError {
            file: file.to_string(),
            source_code: NamedSource::new(file, content.to_string()),
            span,
            source: e,
        }))
    })
}
