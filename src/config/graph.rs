//! Graph command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::DepgraphError;
use crate::graph::{TraversalDirection, TraversalOptions};

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub registry: PathBuf,
    pub plugins: Vec<String>,
    pub roots: Vec<String>,
    pub traversal: TraversalOptions,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    registry: Option<PathBuf>,
    plugins: Vec<String>,
    roots: Option<Vec<String>>,
    direction: TraversalDirection,
    max_depth: Option<usize>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: PathBuf) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<String>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_roots(mut self, roots: Vec<String>) -> Self {
        self.roots = Some(roots);
        self
    }

    pub fn with_direction(mut self, direction: TraversalDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        let roots = self
            .roots
            .ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: roots".to_string(),
            })?;
        if roots.is_empty() {
            return Err(DepgraphError::ConfigurationError {
                message: "At least one root pattern is required".to_string(),
            });
        }

        Ok(GraphOptions {
            registry: self
                .registry
                .ok_or_else(|| DepgraphError::ConfigurationError {
                    message: "Missing required field: registry".to_string(),
                })?,
            plugins: self.plugins,
            roots,
            traversal: TraversalOptions {
                direction: self.direction,
                max_depth: self.max_depth,
            },
            format: self.format.ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            output: self.output,
        })
    }
}
