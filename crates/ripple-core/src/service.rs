//! Collaborator contracts the solution delegates to: remote feed
//! resolution, the local package cache, and publishing. The engine treats
//! each call as a synchronous all-or-nothing unit and propagates failures
//! unchanged; retry and timeout policy belong to the implementations.

use std::path::PathBuf;

use ripple_util::errors::{RippleError, RippleResult};

use crate::dependency::Dependency;
use crate::nuget::{PackageSpec, RemoteNuget};
use crate::solution::Solution;

/// Resolves package descriptors against a solution's configured feeds.
pub trait FeedService {
    /// Resolve a dependency to a concrete remote package.
    fn resolve(&self, solution: &Solution, dependency: &Dependency) -> RippleResult<RemoteNuget>;

    /// Report every package for which any feed carries a newer version than
    /// the solution currently declares.
    fn find_updates(&self, solution: &Solution) -> RippleResult<Vec<RemoteNuget>>;
}

/// Maps a package name to its on-disk folder for a given solution.
pub trait NugetCache {
    fn folder_for(&self, solution: &Solution, name: &str) -> RippleResult<PathBuf>;
}

/// Produces the package specifications a solution publishes, for
/// cross-solution dependency graph construction.
pub trait PublishingService {
    fn specifications_for(&self, solution: &Solution) -> RippleResult<Vec<PackageSpec>>;
}

/// Default feed service installed at construction: knows no feeds, reports
/// no updates. Swapped for a real implementation by callers that go remote.
#[derive(Debug, Default)]
pub struct NullFeedService;

impl FeedService for NullFeedService {
    fn resolve(&self, _solution: &Solution, dependency: &Dependency) -> RippleResult<RemoteNuget> {
        Err(RippleError::Feed {
            message: format!("no feed service configured to resolve {}", dependency.name),
        }
        .into())
    }

    fn find_updates(&self, _solution: &Solution) -> RippleResult<Vec<RemoteNuget>> {
        Ok(Vec::new())
    }
}

/// Default cache: packages live under `<solution>/packages/<name>`.
#[derive(Debug, Default)]
pub struct FolderCache;

impl NugetCache for FolderCache {
    fn folder_for(&self, solution: &Solution, name: &str) -> RippleResult<PathBuf> {
        Ok(solution.packages_dir().join(name))
    }
}

/// Default publisher: a solution with no `.nuspec`-style specifications
/// publishes nothing.
#[derive(Debug, Default)]
pub struct NullPublishingService;

impl PublishingService for NullPublishingService {
    fn specifications_for(&self, _solution: &Solution) -> RippleResult<Vec<PackageSpec>> {
        Ok(Vec::new())
    }
}
