//! Edges command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::EdgeQueryConfig;
use crate::core::FullName;
use crate::error::DepgraphError;
use crate::executors::{CommandExecutor, load_registry_with_notice};
use crate::graph::{GraphCalculator, TraversalOptions};
use crate::registry::JobRegistry;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct EdgesExecutor;

impl CommandExecutor for EdgesExecutor {
    type Config = EdgeQueryConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let registry = load_registry_with_notice(&config.registry, &config.plugins)?;

        let name = FullName::from(config.job.as_str());
        let job = registry
            .job(name.as_str())
            .ok_or_else(|| DepgraphError::JobNotFound {
                name: name.to_string(),
            })?;

        eprintln!(
            "{} Querying edges of {}...",
            style("🔍").cyan(),
            style(job.full_name()).bold()
        );

        let listing = GraphCalculator::new(&registry)
            .with_options(TraversalOptions {
                direction: config.direction,
                max_depth: None,
            })
            .edge_listing(job);

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&listing),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&listing),
        }
        .wrap_err("Failed to generate edge report")?;

        println!("{report}");
        Ok(())
    }
}
