//! Core data types and structures
//!
//! This module contains the job model that edge providers and the graph
//! calculator read, separated from the registry that owns the jobs.

pub mod types;

pub use types::*;
