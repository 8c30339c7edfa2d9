//! Edges command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::DepgraphError;
use crate::graph::TraversalDirection;

#[derive(Debug, Clone)]
pub struct EdgeQueryConfig {
    pub registry: PathBuf,
    pub plugins: Vec<String>,
    pub job: String,
    pub direction: TraversalDirection,
    pub format: OutputFormat,
}

impl EdgeQueryConfig {
    pub fn builder() -> EdgeQueryConfigBuilder {
        EdgeQueryConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct EdgeQueryConfigBuilder {
    registry: Option<PathBuf>,
    plugins: Vec<String>,
    job: Option<String>,
    direction: TraversalDirection,
    format: Option<OutputFormat>,
}

impl EdgeQueryConfigBuilder {
    pub fn with_registry(mut self, registry: PathBuf) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<String>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_job(mut self, job: String) -> Self {
        self.job = Some(job);
        self
    }

    pub fn with_direction(mut self, direction: TraversalDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for EdgeQueryConfigBuilder {
    type Config = EdgeQueryConfig;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        Ok(EdgeQueryConfig {
            registry: self
                .registry
                .ok_or_else(|| DepgraphError::ConfigurationError {
                    message: "Missing required field: registry".to_string(),
                })?,
            plugins: self.plugins,
            job: self.job.ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: job".to_string(),
            })?,
            direction: self.direction,
            format: self.format.ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
        })
    }
}
