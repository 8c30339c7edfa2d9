//! Resolution of textual job references
//!
//! Dependency declarations are comma-separated lists of job names. Each name
//! is a path relative to the declaring job's parent folder (`sibling`,
//! `sub/job`, `../other`) or absolute from the root (`/team/job`). Names that
//! resolve to nothing, or to a folder, are dropped without error.

use glob::{MatchOptions, Pattern};

use crate::core::{FullName, Job};
use crate::error::DepgraphError;
use crate::registry::JobRegistry;

enum Cursor<'r> {
    Root,
    Folder(FullName),
    Job(&'r Job),
}

impl Cursor<'_> {
    fn at(scope: FullName) -> Self {
        if scope.is_root() {
            Cursor::Root
        } else {
            Cursor::Folder(scope)
        }
    }
}

/// Split a raw name list into its trimmed, non-empty entries
pub fn split_name_list(names: &str) -> impl Iterator<Item = &str> {
    names.split(',').map(str::trim).filter(|name| !name.is_empty())
}

/// Resolve every name of `names` against `scope`
///
/// Unresolvable names are skipped; the result keeps the first occurrence of
/// each job in declaration order.
pub fn resolve_name_list<'r>(
    registry: &'r dyn JobRegistry,
    scope: &FullName,
    names: &str,
) -> Vec<&'r Job> {
    let mut resolved: Vec<&'r Job> = Vec::new();
    for name in split_name_list(names) {
        if let Some(job) = resolve_name(registry, scope, name)
            && !resolved.iter().any(|r| r.full_name() == job.full_name())
        {
            resolved.push(job);
        }
    }
    resolved
}

/// Resolve a single name against `scope`
///
/// Relative names are walked segment by segment from `scope`. If the walk
/// leaves the tree (an unknown segment, or `..` above the root) or ends at the
/// root, the name is retried as a full name from the root.
pub fn resolve_name<'r>(
    registry: &'r dyn JobRegistry,
    scope: &FullName,
    name: &str,
) -> Option<&'r Job> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if let Some(absolute) = name.strip_prefix('/') {
        return lookup_full_name(registry, absolute);
    }

    let mut cursor = Cursor::at(scope.clone());
    let mut walked_off = false;

    for segment in name.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                let parent = match &cursor {
                    Cursor::Root => {
                        walked_off = true;
                        break;
                    }
                    Cursor::Folder(folder) => folder.parent(),
                    Cursor::Job(job) => job.parent(),
                };
                cursor = Cursor::at(parent);
            }
            child_name => {
                let child = match &cursor {
                    Cursor::Root => FullName::root().child(child_name),
                    Cursor::Folder(folder) => folder.child(child_name),
                    // jobs do not contain items
                    Cursor::Job(_) => return None,
                };
                cursor = if let Some(job) = registry.job(child.as_str()) {
                    Cursor::Job(job)
                } else if registry.is_folder(child.as_str()) {
                    Cursor::Folder(child)
                } else {
                    walked_off = true;
                    break;
                };
            }
        }
    }

    match cursor {
        Cursor::Job(job) if !walked_off => Some(job),
        Cursor::Folder(_) if !walked_off => None,
        _ => lookup_full_name(registry, name),
    }
}

fn lookup_full_name<'r>(registry: &'r dyn JobRegistry, name: &str) -> Option<&'r Job> {
    let normalized: Vec<&str> = name.split('/').filter(|s| !s.is_empty()).collect();
    if normalized.is_empty() {
        return None;
    }
    registry.job(&normalized.join("/"))
}

/// Select the jobs whose full names match any of the glob `patterns`
///
/// `*` stops at folder separators, so `team/*` selects the direct children of
/// `team` only. Every pattern must match at least one job.
pub fn match_jobs<'r>(
    registry: &'r dyn JobRegistry,
    patterns: &[String],
) -> Result<Vec<&'r Job>, DepgraphError> {
    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };

    let mut matched: Vec<&Job> = Vec::new();
    for raw in patterns {
        let pattern = Pattern::new(raw.trim_matches('/')).map_err(|source| {
            DepgraphError::InvalidPattern {
                pattern: raw.clone(),
                source,
            }
        })?;

        let mut found = false;
        for job in registry.jobs() {
            if pattern.matches_with(job.full_name().as_str(), options) {
                found = true;
                if !matched.iter().any(|m| m.full_name() == job.full_name()) {
                    matched.push(job);
                }
            }
        }

        if !found {
            return Err(DepgraphError::NoMatchingJobs {
                pattern: raw.clone(),
            });
        }
    }

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::core::JobKind;
    use crate::registry::InMemoryRegistry;

    fn registry() -> InMemoryRegistry {
        let job = |name: &str| Job::builder().with_name(name).build().unwrap();
        InMemoryRegistry::builder()
            .with_job(job("top"))
            .with_job(job("team/build"))
            .with_job(job("team/test"))
            .with_job(job("team/libs/core"))
            .with_job(job("ops/deploy"))
            .with_job(
                Job::builder()
                    .with_name("ops/monitor")
                    .with_kind(JobKind::External)
                    .build()
                    .unwrap(),
            )
            .with_folder("empty")
            .build()
            .unwrap()
    }

    fn names(jobs: &[&Job]) -> Vec<String> {
        jobs.iter().map(|j| j.full_name().to_string()).collect()
    }

    #[test]
    fn test_split_name_list_trims_and_skips_empty() {
        let parts: Vec<&str> = split_name_list(" a, b ,,c , ").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sibling_names_resolve_against_scope() {
        let registry = registry();
        let resolved = resolve_name_list(&registry, &FullName::from("team"), "test, build");
        assert_eq!(names(&resolved), vec!["team/test", "team/build"]);
    }

    #[test]
    fn test_nested_parent_and_absolute_names() {
        let registry = registry();
        let scope = FullName::from("team");
        let resolved = resolve_name_list(&registry, &scope, "libs/core, ../ops/deploy, /top");
        assert_eq!(names(&resolved), vec!["team/libs/core", "ops/deploy", "top"]);
    }

    #[test]
    fn test_dot_segments_are_ignored() {
        let registry = registry();
        let resolved = resolve_name(&registry, &FullName::from("team"), "./libs/./core");
        assert_eq!(resolved.map(|j| j.full_name().as_str()), Some("team/libs/core"));
    }

    #[test]
    fn test_falls_back_to_full_name_lookup() {
        let registry = registry();
        // "ops" is not below "team", so the walk fails and the root lookup wins
        let resolved = resolve_name(&registry, &FullName::from("team"), "ops/deploy");
        assert_eq!(resolved.map(|j| j.full_name().as_str()), Some("ops/deploy"));
    }

    #[test]
    fn test_parent_above_root_falls_back() {
        let registry = registry();
        assert!(resolve_name(&registry, &FullName::root(), "../top").is_none());
        assert!(resolve_name(&registry, &FullName::root(), "top").is_some());
    }

    #[test]
    fn test_folders_and_unknown_names_are_dropped() {
        let registry = registry();
        let scope = FullName::from("team");
        let resolved = resolve_name_list(&registry, &scope, "libs, Ghost, test, ../empty");
        assert_eq!(names(&resolved), vec!["team/test"]);
    }

    #[test]
    fn test_job_is_not_a_container() {
        let registry = registry();
        assert!(resolve_name(&registry, &FullName::from("team"), "build/core").is_none());
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let registry = registry();
        let scope = FullName::from("team");
        let resolved = resolve_name_list(&registry, &scope, "test, ./test, /team/test");
        assert_eq!(names(&resolved), vec!["team/test"]);
    }

    #[test]
    fn test_every_job_kind_resolves() {
        let registry = registry();
        let resolved = resolve_name_list(&registry, &FullName::from("ops"), "monitor");
        assert_eq!(resolved[0].kind(), JobKind::External);
    }

    #[test]
    fn test_empty_list_resolves_to_nothing() {
        let registry = registry();
        assert!(resolve_name_list(&registry, &FullName::root(), " , ").is_empty());
    }

    #[test]
    fn test_match_jobs_by_glob() {
        let registry = registry();
        let matched = match_jobs(&registry, &["team/*".to_string(), "top".to_string()]).unwrap();
        assert_eq!(names(&matched), vec!["team/build", "team/test", "top"]);
    }

    #[test]
    fn test_match_jobs_deduplicates_across_patterns() {
        let registry = registry();
        let matched =
            match_jobs(&registry, &["ops/*".to_string(), "/ops/deploy".to_string()]).unwrap();
        assert_eq!(names(&matched), vec!["ops/deploy", "ops/monitor"]);
    }

    #[test]
    fn test_match_jobs_errors() {
        let registry = registry();
        assert!(matches!(
            match_jobs(&registry, &["nobody/*".to_string()]),
            Err(DepgraphError::NoMatchingJobs { .. })
        ));
        assert!(matches!(
            match_jobs(&registry, &["[unclosed".to_string()]),
            Err(DepgraphError::InvalidPattern { .. })
        ));
    }
}
