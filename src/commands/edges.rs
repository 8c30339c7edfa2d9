//! Edges command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::EdgeQueryConfig;
use crate::error::DepgraphError;

impl FromCommand for EdgeQueryConfig {
    fn from_command(command: Commands) -> Result<Self, DepgraphError> {
        match command {
            Commands::Edges {
                job,
                common,
                direction,
                format,
            } => EdgeQueryConfig::builder()
                .with_registry(common.registry)
                .with_plugins(common.plugins)
                .with_job(job)
                .with_direction(direction.direction)
                .with_format(format.format)
                .build(),
            _ => Err(DepgraphError::ConfigurationError {
                message: "Invalid command type for EdgeQueryConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(EdgeQueryConfig);

/// Execute the edges command for listing the edges of one job
pub fn execute_edges_command(command: Commands) -> Result<()> {
    let config = EdgeQueryConfig::from_command(command)
        .wrap_err("Failed to parse edges command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::edges::EdgesExecutor;
    EdgesExecutor::execute(config)
}
