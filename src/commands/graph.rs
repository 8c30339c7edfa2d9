//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::DepgraphError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, DepgraphError> {
        match command {
            Commands::Graph {
                roots,
                common,
                direction,
                max_depth,
                format,
                output,
            } => GraphOptions::builder()
                .with_registry(common.registry)
                .with_plugins(common.plugins)
                .with_roots(roots)
                .with_direction(direction.direction)
                .with_max_depth(max_depth)
                .with_format(format.format)
                .with_output(output)
                .build(),
            _ => Err(DepgraphError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for assembling the trigger graph
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_graph_options_from_command() {
        let cli = Cli::try_parse_from([
            "job-depgraph",
            "graph",
            "build",
            "--registry",
            "jobs.toml",
            "--output",
            "graph.json",
        ])
        .unwrap();

        let options = GraphOptions::try_from(cli.command).unwrap();
        assert_eq!(options.roots, vec!["build".to_string()]);
        assert_eq!(options.output, Some("graph.json".into()));
    }

    #[test]
    fn test_edges_command_is_not_graph_options() {
        let cli =
            Cli::try_parse_from(["job-depgraph", "edges", "build", "--registry", "jobs.toml"])
                .unwrap();
        assert!(GraphOptions::from_command(cli.command).is_err());
    }
}
