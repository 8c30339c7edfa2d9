use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid job manifest '{file}'")]
#[diagnostic(
    code(job_depgraph::manifest_parse_error),
    help("Check the TOML syntax and keys near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepgraphError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(job_depgraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(job_depgraph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(job_depgraph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(job_depgraph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(job_depgraph::config_error),
        help("Check your command arguments and job manifests")
    )]
    ConfigurationError { message: String },

    #[error("Invalid job name '{name}': {reason}")]
    #[diagnostic(
        code(job_depgraph::invalid_job_name),
        help("Full names are '/'-separated item names such as 'folder/job'")
    )]
    InvalidJobName { name: String, reason: String },

    #[error("Item '{name}' is defined more than once")]
    #[diagnostic(
        code(job_depgraph::duplicate_item),
        help("Each job and folder full name must be unique, and jobs cannot contain other items")
    )]
    DuplicateItem { name: String },

    #[error("Job '{name}' not found")]
    #[diagnostic(
        code(job_depgraph::job_not_found),
        help("Use the full name of the job, including its folders")
    )]
    JobNotFound { name: String },

    #[error("No job matches '{pattern}'")]
    #[diagnostic(
        code(job_depgraph::no_matching_jobs),
        help("Root patterns are glob patterns matched against job full names")
    )]
    NoMatchingJobs { pattern: String },

    #[error("Invalid root pattern '{pattern}'")]
    #[diagnostic(
        code(job_depgraph::invalid_pattern),
        help("Check the glob syntax of the pattern")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
