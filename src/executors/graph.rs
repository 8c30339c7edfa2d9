//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::GraphOptions;
use crate::executors::{CommandExecutor, load_registry_with_notice};
use crate::graph::GraphCalculator;
use crate::names::match_jobs;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::pluralize;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let registry = load_registry_with_notice(&config.registry, &config.plugins)?;

        let roots = match_jobs(&registry, &config.roots).wrap_err("Failed to select root jobs")?;

        eprintln!(
            "{} Generating trigger graph from {} root {}...",
            style("📊").cyan(),
            style(roots.len()).bold(),
            pluralize("job", roots.len())
        );

        let graph = GraphCalculator::new(&registry)
            .with_options(config.traversal)
            .generate_graph(&roots);

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&graph),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&graph),
        }
        .wrap_err("Failed to generate graph report")?;

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        writeln!(output_writer, "{report}")
            .and_then(|()| output_writer.flush())
            .into_diagnostic()
            .wrap_err("Failed to write graph report")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;

    fn write_registry(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("jobs.toml");
        fs::write(
            &path,
            r#"
[[jobs]]
name = "build"
build-trigger = "test"

[[jobs]]
name = "test"
"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_writes_json_report_to_output_file() {
        let dir = TempDir::new().unwrap();
        let registry = write_registry(&dir);
        let output = dir.path().join("graph.json");

        let options = GraphOptions::builder()
            .with_registry(registry)
            .with_roots(vec!["build".to_string()])
            .with_format(OutputFormat::Json)
            .with_output(Some(output.clone()))
            .build()
            .unwrap();
        GraphExecutor::execute(options).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(written["jobs"], serde_json::json!(["build", "test"]));
    }

    #[test]
    fn test_unmatched_root_fails() {
        let dir = TempDir::new().unwrap();
        let registry = write_registry(&dir);

        let options = GraphOptions::builder()
            .with_registry(registry)
            .with_roots(vec!["deploy".to_string()])
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();
        assert!(GraphExecutor::execute(options).is_err());
    }
}
