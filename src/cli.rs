use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, DirectionArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "job-depgraph",
    about = "🔗 Map the trigger relationships between build jobs",
    long_about = "job-depgraph reads a registry of build jobs and reports which jobs trigger \
                  which. Edges come from the native build-trigger graph, parameterized \
                  trigger configurations and reverse build triggers, and always point from \
                  the upstream job to the downstream job.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the trigger graph around one or more root jobs
    ///
    /// Walks outward from every job matching a root pattern, following the
    /// edges of every provider until no new jobs are found.
    #[command(
        long_about = "Assemble the trigger graph reachable from the root jobs. Root patterns are \
                      glob patterns matched against full job names, such as 'team/*' or \
                      'deploy'. The traversal follows upstream and downstream edges by default \
                      and reports trigger cycles found along the way."
    )]
    Graph {
        /// Glob patterns selecting the root jobs
        #[arg(required = true, value_name = "ROOT_PATTERN")]
        roots: Vec<String>,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        direction: DirectionArgs,

        /// Record jobs this many edges from a root without expanding them
        #[arg(long, value_name = "N", env = "JOB_DEPGRAPH_MAX_DEPTH")]
        max_depth: Option<usize>,

        #[command(flatten)]
        format: FormatArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "JOB_DEPGRAPH_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// List the edges incident with a single job
    ///
    /// Queries every provider once for the job's upstream and downstream
    /// edges, without walking any further.
    Edges {
        /// Full name of the job, such as 'team/build'
        #[arg(value_name = "JOB", env = "JOB_DEPGRAPH_JOB")]
        job: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        direction: DirectionArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::TraversalDirection;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_graph_command() {
        let cli = Cli::try_parse_from([
            "job-depgraph",
            "graph",
            "team/*",
            "deploy",
            "--registry",
            "jobs.toml",
            "--plugin",
            "parameterized-trigger,other",
            "--direction",
            "downstream",
            "--max-depth",
            "2",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Graph {
            roots,
            common,
            direction,
            max_depth,
            format,
            output,
        } = cli.command
        else {
            panic!("expected the graph command");
        };
        assert_eq!(roots, vec!["team/*", "deploy"]);
        assert_eq!(common.registry, PathBuf::from("jobs.toml"));
        assert_eq!(common.plugins, vec!["parameterized-trigger", "other"]);
        assert_eq!(direction.direction, TraversalDirection::Downstream);
        assert_eq!(max_depth, Some(2));
        assert_eq!(format.format, OutputFormat::Json);
        assert_eq!(output, None);
    }

    #[test]
    fn test_graph_requires_a_root() {
        assert!(Cli::try_parse_from(["job-depgraph", "graph", "--registry", "jobs.toml"]).is_err());
    }

    #[test]
    fn test_parse_edges_command_defaults() {
        let cli =
            Cli::try_parse_from(["job-depgraph", "edges", "team/build", "--registry", "jobs"])
                .unwrap();

        let Commands::Edges {
            job,
            common,
            direction,
            format,
        } = cli.command
        else {
            panic!("expected the edges command");
        };
        assert_eq!(job, "team/build");
        assert!(common.plugins.is_empty());
        assert_eq!(direction.direction, TraversalDirection::Both);
        assert_eq!(format.format, OutputFormat::Human);
    }
}
