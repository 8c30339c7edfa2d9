//! Human-readable console report generation

use std::collections::BTreeSet;
use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::FullName;
use crate::edge::Edge;
use crate::error::DepgraphError;
use crate::graph::{EdgeListing, JobGraph};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn write_edge_branches(
    output: &mut String,
    edges: &[&Edge],
    endpoint: impl Fn(&Edge) -> &FullName,
    arrow: &str,
    empty: &str,
) -> Result<(), DepgraphError> {
    if edges.is_empty() {
        writeln!(output, "└── {}", style(empty).dim())?;
        return Ok(());
    }

    for (i, &edge) in edges.iter().enumerate() {
        let branch = if i + 1 == edges.len() { "└──" } else { "├──" };
        writeln!(
            output,
            "{} {} {} ({})",
            branch,
            style(arrow).dim(),
            style(endpoint(edge)).yellow(),
            style(edge.kind()).dim()
        )?;
    }
    Ok(())
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, graph: &JobGraph) -> Result<String, DepgraphError> {
        let mut output = String::new();

        let cycles = graph.cycles();
        let in_cycle: BTreeSet<&FullName> = cycles.iter().flatten().collect();

        write!(
            output,
            "\n{} Job graph: {} {}, {} {}\n\n",
            style("📊").blue(),
            style(graph.node_count()).bold(),
            pluralize("job", graph.node_count()),
            style(graph.edge_count()).bold(),
            pluralize("edge", graph.edge_count())
        )?;

        for name in graph.nodes() {
            if in_cycle.contains(name) {
                write!(output, "{}", style(format!("[{name}]")).red().bold())?;
            } else {
                write!(output, "{}", style(name).bold())?;
            }
            if graph.is_root(name.as_str()) {
                write!(output, " {}", style("(root)").cyan())?;
            }
            writeln!(output)?;

            let downstream = graph.downstream_of(name.as_str());
            write_edge_branches(
                &mut output,
                &downstream,
                Edge::to,
                "→",
                "(no downstream jobs)",
            )?;
        }

        if !cycles.is_empty() {
            writeln!(
                output,
                "\n{} Found {} trigger {}:",
                style("🔄").yellow(),
                style(cycles.len()).red().bold(),
                pluralize("cycle", cycles.len())
            )?;
            for cycle in &cycles {
                let members: Vec<&str> = cycle.iter().map(FullName::as_str).collect();
                writeln!(output, "  {} {}", style("•").dim(), members.join(", "))?;
            }
            writeln!(output, "\nLegend: [job] = part of a trigger cycle")?;
        }

        Ok(output)
    }
}

impl ReportGenerator<EdgeListing> for HumanReportGenerator {
    fn generate_report(&self, listing: &EdgeListing) -> Result<String, DepgraphError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} Edges incident with {}\n",
            style("🔗").cyan(),
            style(listing.job()).bold()
        )?;

        let upstream: Vec<&Edge> = listing.upstream().iter().collect();
        writeln!(
            output,
            "{} ({} {})",
            style("Upstream").bold(),
            upstream.len(),
            pluralize("edge", upstream.len())
        )?;
        write_edge_branches(&mut output, &upstream, Edge::from, "←", "(no upstream jobs)")?;

        let downstream: Vec<&Edge> = listing.downstream().iter().collect();
        writeln!(
            output,
            "\n{} ({} {})",
            style("Downstream").bold(),
            downstream.len(),
            pluralize("edge", downstream.len())
        )?;
        write_edge_branches(
            &mut output,
            &downstream,
            Edge::to,
            "→",
            "(no downstream jobs)",
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use predicates::prelude::*;

    use super::*;
    use crate::edge::EdgeKind;

    fn edge(from: &str, to: &str, kind: EdgeKind) -> Edge {
        console::set_colors_enabled(false);
        Edge::new(from.into(), to.into(), kind)
    }

    #[test]
    fn test_tree_lists_downstream_edges() {
        let mut graph = JobGraph::new(["build".into()]);
        graph.add_edge(edge("build", "test", EdgeKind::BuildTrigger));
        graph.add_edge(edge("build", "deploy", EdgeKind::ParameterizedTrigger));

        let report = HumanReportGenerator::new().generate_report(&graph).unwrap();

        assert!(predicate::str::contains("3 jobs").eval(&report));
        assert!(predicate::str::contains("2 edges").eval(&report));
        assert!(predicate::str::contains("(root)").eval(&report));
        assert!(predicate::str::contains("deploy (parameterized-trigger)").eval(&report));
        assert!(predicate::str::contains("test (build-trigger)").eval(&report));
        assert!(predicate::str::contains("(no downstream jobs)").eval(&report));
        assert!(!predicate::str::contains("Legend").eval(&report));
    }

    #[test]
    fn test_cycle_members_are_boxed() {
        let mut graph = JobGraph::new(["a".into()]);
        graph.add_edge(edge("a", "b", EdgeKind::BuildTrigger));
        graph.add_edge(edge("b", "a", EdgeKind::ReverseBuildTrigger));

        let report = HumanReportGenerator::new().generate_report(&graph).unwrap();

        assert!(predicate::str::contains("[a]").eval(&report));
        assert!(predicate::str::contains("[b]").eval(&report));
        assert!(predicate::str::contains("1 trigger cycle").eval(&report));
        assert!(predicate::str::contains("a, b").eval(&report));
        assert!(predicate::str::contains("Legend").eval(&report));
    }

    #[test]
    fn test_singular_counts() {
        console::set_colors_enabled(false);
        let graph = JobGraph::new(["solo".into()]);

        let report = HumanReportGenerator::new().generate_report(&graph).unwrap();
        assert!(predicate::str::contains("1 job,").eval(&report));
        assert!(predicate::str::contains("0 edges").eval(&report));
    }

    #[test]
    fn test_edge_listing_report() {
        let mut listing = EdgeListing::new("mid".into());
        listing.push_upstream(edge("up", "mid", EdgeKind::ReverseBuildTrigger));

        let report = HumanReportGenerator::new().generate_report(&listing).unwrap();

        assert!(predicate::str::contains("Edges incident with").eval(&report));
        assert!(predicate::str::contains("up (reverse-build-trigger)").eval(&report));
        assert!(predicate::str::contains("(no downstream jobs)").eval(&report));
    }
}
