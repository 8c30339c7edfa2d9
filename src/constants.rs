//! Configuration constants for job-depgraph

/// Companion plugins whose presence changes which edges are reported
pub mod plugins {
    /// Plugin providing publish-time parameterized trigger configurations
    pub const PARAMETERIZED_TRIGGER: &str = "parameterized-trigger";
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Diagnostic logging configuration
pub mod logging {
    /// Environment variable holding the `tracing` filter directives
    pub const LOG_ENV: &str = "JOB_DEPGRAPH_LOG";

    /// Filter used when the environment variable is unset or invalid
    pub const DEFAULT_FILTER: &str = "warn";
}

/// Registry manifest layout
pub mod manifest {
    /// Extension of job manifests in directory mode
    pub const EXTENSION: &str = "toml";

    /// Root file of a manifest directory listing installed plugins
    pub const PLUGINS_FILE: &str = "plugins.toml";
}
