//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::graph::TraversalDirection;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Registry manifest: a TOML file, or a directory of job manifests
    #[arg(long, value_name = "PATH", env = "JOB_DEPGRAPH_REGISTRY")]
    pub registry: PathBuf,

    /// Treat a plugin as installed, in addition to those the registry declares
    #[arg(
        long = "plugin",
        value_name = "NAME",
        value_delimiter = ',',
        env = "JOB_DEPGRAPH_PLUGINS"
    )]
    pub plugins: Vec<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "JOB_DEPGRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common traversal direction arguments
#[derive(Args, Debug, Clone)]
pub struct DirectionArgs {
    /// Which incident edges to follow
    #[arg(
        short,
        long,
        value_enum,
        default_value = "both",
        env = "JOB_DEPGRAPH_DIRECTION"
    )]
    pub direction: TraversalDirection,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepgraphError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepgraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepgraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
