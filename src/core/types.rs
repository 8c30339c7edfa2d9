//! Core type definitions
//!
//! Jobs live in a tree of folders. A job is addressed by its [`FullName`], the
//! `/`-separated path from the root, and relative name references declared by
//! a job are resolved against its parent folder.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ConfigBuilder;
use crate::error::DepgraphError;

/// Path of an item (job or folder) from the root, e.g. `team-a/libs/core`
///
/// The root itself is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse and validate a full name
    ///
    /// Leading and trailing slashes are ignored. Empty segments and the
    /// relative segments `.` and `..` are rejected.
    pub fn parse(name: &str) -> Result<Self, DepgraphError> {
        let trimmed = name.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(DepgraphError::InvalidJobName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }

        for segment in trimmed.split('/') {
            let reason = match segment {
                "" => "name contains an empty segment",
                "." | ".." => "relative segments are not allowed in full names",
                s if s.trim() != s => "segments must not have surrounding whitespace",
                _ => continue,
            };
            return Err(DepgraphError::InvalidJobName {
                name: name.to_string(),
                reason: reason.to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The containing folder; the root for top-level items and for the root
    pub fn parent(&self) -> FullName {
        match self.0.rsplit_once('/') {
            Some((parent, _)) => Self(parent.to_string()),
            None => Self::root(),
        }
    }

    /// Last path segment
    pub fn short_name(&self) -> &str {
        self.0.rsplit_once('/').map_or(self.0.as_str(), |(_, name)| name)
    }

    pub fn child(&self, name: &str) -> FullName {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }

    /// Proper ancestors, nearest first, excluding the root
    pub fn ancestors(&self) -> impl Iterator<Item = FullName> + '_ {
        self.0
            .rmatch_indices('/')
            .map(|(idx, _)| Self(self.0[..idx].to_string()))
    }
}

impl From<&str> for FullName {
    fn from(name: &str) -> Self {
        Self(name.trim_matches('/').to_string())
    }
}

impl Borrow<str> for FullName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability variant of a job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    /// Classic project: publishers, triggers and native dependency graph
    #[default]
    Freestyle,
    /// Triggers only; never indexed by the native dependency graph
    Pipeline,
    /// Records results of builds run elsewhere
    External,
}

impl JobKind {
    pub fn has_publishers(self) -> bool {
        matches!(self, JobKind::Freestyle)
    }

    pub fn has_triggers(self) -> bool {
        matches!(self, JobKind::Freestyle | JobKind::Pipeline)
    }

    pub fn in_dependency_graph(self) -> bool {
        matches!(self, JobKind::Freestyle)
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Freestyle => write!(f, "freestyle"),
            JobKind::Pipeline => write!(f, "pipeline"),
            JobKind::External => write!(f, "external"),
        }
    }
}

/// One publish-time trigger configuration of the parameterized-trigger plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterizedTriggerConfig {
    projects: String,
}

impl ParameterizedTriggerConfig {
    pub fn new(projects: impl Into<String>) -> Self {
        Self {
            projects: projects.into(),
        }
    }

    /// Raw comma-separated list of downstream job names
    pub fn projects(&self) -> &str {
        &self.projects
    }
}

/// Registered trigger that starts its job when any watched upstream completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseBuildTrigger {
    upstream_projects: String,
}

impl ReverseBuildTrigger {
    pub fn new(upstream_projects: impl Into<String>) -> Self {
        Self {
            upstream_projects: upstream_projects.into(),
        }
    }

    /// Raw comma-separated list of upstream job names
    pub fn upstream_projects(&self) -> &str {
        &self.upstream_projects
    }
}

/// A buildable unit owned by the host registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    full_name: FullName,
    kind: JobKind,
    build_trigger: Option<String>,
    parameterized_triggers: Vec<ParameterizedTriggerConfig>,
    reverse_triggers: Vec<ReverseBuildTrigger>,
}

impl Job {
    pub fn builder() -> JobBuilder {
        JobBuilder::new()
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn name(&self) -> &str {
        self.full_name.short_name()
    }

    /// Scope that relative names declared by this job resolve against
    pub fn parent(&self) -> FullName {
        self.full_name.parent()
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// Core downstream list feeding the native dependency graph
    pub fn build_trigger(&self) -> Option<&str> {
        self.build_trigger.as_deref()
    }

    pub fn parameterized_triggers(&self) -> &[ParameterizedTriggerConfig] {
        &self.parameterized_triggers
    }

    pub fn reverse_triggers(&self) -> &[ReverseBuildTrigger] {
        &self.reverse_triggers
    }
}

pub struct JobBuilder {
    name: Option<String>,
    kind: JobKind,
    build_trigger: Option<String>,
    parameterized_triggers: Vec<ParameterizedTriggerConfig>,
    reverse_triggers: Vec<ReverseBuildTrigger>,
}

impl Default for JobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            kind: JobKind::default(),
            build_trigger: None,
            parameterized_triggers: Vec::new(),
            reverse_triggers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_kind(mut self, kind: JobKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_build_trigger(mut self, child_projects: &str) -> Self {
        self.build_trigger = Some(child_projects.to_string());
        self
    }

    pub fn with_parameterized_trigger(mut self, projects: &str) -> Self {
        self.parameterized_triggers
            .push(ParameterizedTriggerConfig::new(projects));
        self
    }

    pub fn with_reverse_trigger(mut self, upstream_projects: &str) -> Self {
        self.reverse_triggers
            .push(ReverseBuildTrigger::new(upstream_projects));
        self
    }
}

impl ConfigBuilder for JobBuilder {
    type Config = Job;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        let name = self
            .name
            .ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: name".to_string(),
            })?;
        let full_name = FullName::parse(&name)?;

        let has_publishers =
            self.build_trigger.is_some() || !self.parameterized_triggers.is_empty();
        if has_publishers && !self.kind.has_publishers() {
            return Err(DepgraphError::ConfigurationError {
                message: format!(
                    "Job '{full_name}' is a {} job and cannot carry publishers",
                    self.kind
                ),
            });
        }
        if !self.reverse_triggers.is_empty() && !self.kind.has_triggers() {
            return Err(DepgraphError::ConfigurationError {
                message: format!(
                    "Job '{full_name}' is an {} job and cannot carry triggers",
                    self.kind
                ),
            });
        }

        Ok(Job {
            full_name,
            kind: self.kind,
            build_trigger: self.build_trigger,
            parameterized_triggers: self.parameterized_triggers,
            reverse_triggers: self.reverse_triggers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_parent_and_short_name() {
        let name = FullName::parse("team-a/libs/core").unwrap();
        assert_eq!(name.parent().as_str(), "team-a/libs");
        assert_eq!(name.short_name(), "core");
        assert_eq!(name.parent().parent().parent(), FullName::root());
        assert!(FullName::from("top").parent().is_root());
    }

    #[test]
    fn test_full_name_parse_strips_slashes() {
        assert_eq!(FullName::parse("/a/b/").unwrap().as_str(), "a/b");
    }

    #[test]
    fn test_full_name_parse_rejects_bad_segments() {
        for bad in ["", "/", "a//b", "a/../b", "./a", "a/ b"] {
            let err = FullName::parse(bad).unwrap_err();
            assert!(
                matches!(err, DepgraphError::InvalidJobName { .. }),
                "expected InvalidJobName for {bad:?}"
            );
        }
    }

    #[test]
    fn test_full_name_ancestors_nearest_first() {
        let name = FullName::from("a/b/c");
        let ancestors: Vec<String> = name.ancestors().map(|a| a.to_string()).collect();
        assert_eq!(ancestors, vec!["a/b", "a"]);
        assert_eq!(FullName::from("a").ancestors().count(), 0);
    }

    #[test]
    fn test_child_of_root() {
        assert_eq!(FullName::root().child("x").as_str(), "x");
        assert_eq!(FullName::from("f").child("x").as_str(), "f/x");
    }

    #[test]
    fn test_job_builder_defaults_to_freestyle() {
        let job = Job::builder()
            .with_name("folder/build")
            .with_build_trigger("test")
            .build()
            .unwrap();
        assert_eq!(job.kind(), JobKind::Freestyle);
        assert_eq!(job.name(), "build");
        assert_eq!(job.parent().as_str(), "folder");
        assert_eq!(job.build_trigger(), Some("test"));
    }

    #[test]
    fn test_pipeline_cannot_carry_publishers() {
        let err = Job::builder()
            .with_name("deploy")
            .with_kind(JobKind::Pipeline)
            .with_parameterized_trigger("other")
            .build()
            .unwrap_err();
        assert!(matches!(err, DepgraphError::ConfigurationError { .. }));
    }

    #[test]
    fn test_external_cannot_carry_triggers() {
        let err = Job::builder()
            .with_name("monitor")
            .with_kind(JobKind::External)
            .with_reverse_trigger("upstream")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot carry triggers"));
    }

    #[test]
    fn test_pipeline_may_carry_reverse_triggers() {
        let job = Job::builder()
            .with_name("deploy")
            .with_kind(JobKind::Pipeline)
            .with_reverse_trigger("build")
            .with_reverse_trigger("lint")
            .build()
            .unwrap();
        assert_eq!(job.reverse_triggers().len(), 2);
        assert_eq!(job.reverse_triggers()[1].upstream_projects(), "lint");
    }
}
