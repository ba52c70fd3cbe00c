//! The solution aggregate: solution-level pins, projects, feeds, the lazily
//! merged dependency view, consistency validation, update propagation, and
//! mode conversion.

use std::path::{Path, PathBuf};

use ripple_util::errors::{Problem, RippleError, RippleResult};
use tracing::{debug, info};

use crate::collection::DependencyCollection;
use crate::dependency::Dependency;
use crate::feed::Feed;
use crate::mode::{CleanMode, SolutionMode};
use crate::nuget::{PackageSpec, RemoteNuget};
use crate::project::Project;
use crate::service::{
    FeedService, FolderCache, NugetCache, NullFeedService, NullPublishingService,
    PublishingService,
};
use crate::storage::{self, LocalDependencySet, NugetStorage};

/// Default source folder name under the solution root.
pub const DEFAULT_SOURCE_FOLDER: &str = "src";

/// The aggregate root for a multi-project solution.
///
/// Holds the solution-level (configured) dependency pins, the projects, the
/// remote feeds, and the pluggable collaborators. The merged dependency
/// view, remote updates, and published specifications are computed on first
/// access and invalidated by declared mutations; project-level edits made
/// after a merge was computed are not observed until the next invalidating
/// mutation or an explicit update through the solution.
pub struct Solution {
    pub name: String,
    pub path: PathBuf,
    pub source_folder: String,
    mode: SolutionMode,
    feeds: Vec<Feed>,
    projects: Vec<Project>,
    configured_dependencies: Vec<Dependency>,
    storage: Box<dyn NugetStorage>,
    feed_service: Box<dyn FeedService>,
    cache: Box<dyn NugetCache>,
    publishing: Box<dyn PublishingService>,
    // Lazy caches: None means not yet computed or invalidated.
    dependencies: Option<DependencyCollection>,
    updates: Option<Vec<RemoteNuget>>,
    specifications: Option<Vec<PackageSpec>>,
}

impl Solution {
    /// Create a solution with the default collaborators for `mode` and the
    /// three well-known default feeds.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, mode: SolutionMode) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            source_folder: DEFAULT_SOURCE_FOLDER.to_string(),
            mode,
            feeds: Feed::defaults(),
            projects: Vec::new(),
            configured_dependencies: Vec::new(),
            storage: storage::for_mode(mode),
            feed_service: Box::new(NullFeedService),
            cache: Box::new(FolderCache),
            publishing: Box::new(NullPublishingService),
            dependencies: None,
            updates: None,
            specifications: None,
        }
    }

    pub fn mode(&self) -> SolutionMode {
        self.mode
    }

    pub fn storage(&self) -> &dyn NugetStorage {
        self.storage.as_ref()
    }

    /// Directory downloaded packages are cached under.
    pub fn packages_dir(&self) -> PathBuf {
        self.path.join("packages")
    }

    /// Directory the projects live under.
    pub fn src_dir(&self) -> PathBuf {
        self.path.join(&self.source_folder)
    }

    // --- feeds -----------------------------------------------------------

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    /// Register a feed; duplicates are suppressed, order is preserved.
    pub fn add_feed(&mut self, feed: Feed) {
        if !self.feeds.contains(&feed) {
            self.feeds.push(feed);
        }
    }

    /// Replace the feed list wholesale (used when reading a persisted
    /// solution); duplicates are still suppressed.
    pub fn set_feeds(&mut self, feeds: impl IntoIterator<Item = Feed>) {
        self.feeds.clear();
        for feed in feeds {
            self.add_feed(feed);
        }
    }

    // --- projects --------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Add a project, setting its solution back-reference. Adding a project
    /// whose name is already present (case-insensitive) is a no-op; the
    /// existing project is returned.
    pub fn add_project(&mut self, mut project: Project) -> &mut Project {
        let pos = match self
            .projects
            .iter()
            .position(|p| p.matches_name(&project.name))
        {
            Some(pos) => pos,
            None => {
                project.set_solution(&self.name);
                self.projects.push(project);
                self.invalidate();
                self.projects.len() - 1
            }
        };
        &mut self.projects[pos]
    }

    pub fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.matches_name(name))
    }

    pub fn find_project_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.matches_name(name))
    }

    // --- solution-level dependencies -------------------------------------

    pub fn configured_dependencies(&self) -> &[Dependency] {
        &self.configured_dependencies
    }

    /// Add a solution-level pin with fill semantics; invalidates the merged
    /// view.
    pub fn add_configured_dependency(&mut self, dependency: Dependency) {
        if self
            .configured_dependencies
            .iter()
            .any(|d| d.name == dependency.name)
        {
            return;
        }
        self.configured_dependencies.push(dependency);
        self.invalidate();
    }

    /// The merged name-keyed view of the configured dependencies layered
    /// with every project's own list. Computed on first access, cached
    /// until an invalidating mutation.
    pub fn dependencies(&mut self) -> &DependencyCollection {
        let merged = match self.dependencies.take() {
            Some(merged) => merged,
            None => self.combine_dependencies(),
        };
        self.dependencies.insert(merged)
    }

    /// Recompute the merge without touching the cache: configured
    /// dependencies are the base, each project's list a child, first-seen
    /// declaration wins.
    pub fn combine_dependencies(&self) -> DependencyCollection {
        let mut merged = DependencyCollection::new(self.configured_dependencies.iter().cloned());
        for project in &self.projects {
            merged.add_child(&project.dependencies);
        }
        merged
    }

    // --- validation ------------------------------------------------------

    /// Check cross-project version agreement: every package referenced by
    /// more than one project must carry the identical constraint, where
    /// floating is a single value equal only to other floating
    /// declarations. Solution-level pins are not part of this pass.
    ///
    /// On-demand only; a solution under incremental construction is allowed
    /// to be transiently inconsistent. Fails with a single
    /// [`RippleError::Validation`] carrying every problem found, in order.
    pub fn assert_is_valid(&self) -> RippleResult<()> {
        let mut groups: Vec<(&str, Vec<(&Project, &Dependency)>)> = Vec::new();
        for project in &self.projects {
            for dep in &project.dependencies {
                match groups.iter().position(|(name, _)| *name == dep.name) {
                    Some(pos) => groups[pos].1.push((project, dep)),
                    None => groups.push((dep.name.as_str(), vec![(project, dep)])),
                }
            }
        }

        let mut problems = Vec::new();
        for (name, members) in &groups {
            if members.len() < 2 {
                continue;
            }
            let first = members[0].1.constraint();
            if members.iter().any(|(_, dep)| dep.constraint() != first) {
                let detail = members
                    .iter()
                    .map(|(project, dep)| format!("{} requires {}", project.name, dep))
                    .collect::<Vec<_>>()
                    .join(", ");
                problems.push(Problem::new(
                    "Validation",
                    format!("conflicting versions of {name}: {detail}"),
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(RippleError::Validation { problems }.into())
        }
    }

    // --- update propagation ----------------------------------------------

    /// Pin a package to the version carried by a resolved descriptor,
    /// writing through to the solution-level list and to every project that
    /// declares the package. Errors with `DependencyNotFound` if nothing
    /// declares it.
    pub fn update(&mut self, nuget: &RemoteNuget) -> RippleResult<()> {
        let mut touched = false;
        if let Some(dep) = self
            .configured_dependencies
            .iter_mut()
            .find(|d| d.name == nuget.name)
        {
            dep.pin_to(nuget.version.as_str());
            touched = true;
        }
        for project in &mut self.projects {
            if let Some(dep) = project
                .dependencies
                .iter_mut()
                .find(|d| d.name == nuget.name)
            {
                dep.pin_to(nuget.version.as_str());
                touched = true;
            }
        }
        if !touched {
            return Err(RippleError::DependencyNotFound {
                name: nuget.name.clone(),
            }
            .into());
        }
        info!(package = %nuget.name, version = %nuget.version, "pinned dependency");
        self.invalidate();
        Ok(())
    }

    /// Float a package everywhere it is declared: the constraint is
    /// forgotten in the solution-level list and in every project. Errors
    /// with `DependencyNotFound` if nothing declares it.
    pub fn float(&mut self, name: &str) -> RippleResult<()> {
        let mut touched = false;
        if let Some(dep) = self
            .configured_dependencies
            .iter_mut()
            .find(|d| d.name == name)
        {
            dep.float();
            touched = true;
        }
        for project in &mut self.projects {
            if let Some(dep) = project.dependencies.iter_mut().find(|d| d.name == name) {
                dep.float();
                touched = true;
            }
        }
        if !touched {
            return Err(RippleError::DependencyNotFound {
                name: name.to_string(),
            }
            .into());
        }
        info!(package = %name, "floated dependency");
        self.invalidate();
        Ok(())
    }

    // --- mode conversion --------------------------------------------------

    /// Switch the active on-disk representation. The outgoing strategy is
    /// told to discard its artifacts before the strategy for the new mode
    /// is installed; in-memory dependency data is untouched.
    pub fn convert_to(&mut self, mode: SolutionMode) -> RippleResult<()> {
        info!(solution = %self.name, from = %self.mode, to = %mode, "converting solution");
        self.mode = mode;
        self.storage.reset(self)?;
        self.storage = storage::for_mode(mode);
        Ok(())
    }

    // --- collaborator delegation -----------------------------------------

    /// Persist the solution, then every project in insertion order. The
    /// first failure propagates; earlier writes are not rolled back.
    pub fn save(&self) -> RippleResult<()> {
        debug!(solution = %self.name, mode = %self.mode, "saving solution");
        self.storage.write_solution(self)?;
        for project in &self.projects {
            self.storage.write_project(project)?;
        }
        Ok(())
    }

    /// Declared dependencies whose package files are absent locally,
    /// exactly as the storage collaborator reports them.
    pub fn missing_nugets(&self) -> RippleResult<Vec<Dependency>> {
        self.storage.missing_files(self)
    }

    /// The dependency declarations currently on disk for this solution.
    pub fn local_dependencies(&self) -> RippleResult<LocalDependencySet> {
        self.storage.dependencies(self)
    }

    /// Remove on-disk artifacts per `mode`.
    pub fn clean(&self, mode: CleanMode) -> RippleResult<()> {
        self.storage.clean(self, mode)
    }

    /// Resolve a dependency to a concrete remote package via the feed
    /// service.
    pub fn resolve(&self, dependency: &Dependency) -> RippleResult<RemoteNuget> {
        self.feed_service.resolve(self, dependency)
    }

    /// Newer remote packages reported by the feed service; computed once
    /// and cached. The solution does not judge applicability, it only
    /// exposes [`Solution::update`] to apply a descriptor.
    pub fn updates(&mut self) -> RippleResult<&[RemoteNuget]> {
        let found = match self.updates.take() {
            Some(found) => found,
            None => self.feed_service.find_updates(self)?,
        };
        Ok(self.updates.insert(found).as_slice())
    }

    /// The package specifications this solution publishes; computed once
    /// and cached. Each spec carries this solution as its publisher.
    pub fn specifications(&mut self) -> RippleResult<&[PackageSpec]> {
        let specs = match self.specifications.take() {
            Some(specs) => specs,
            None => self.publishing.specifications_for(self)?,
        };
        Ok(self.specifications.insert(specs).as_slice())
    }

    /// On-disk folder the cache resolves for a package name.
    pub fn cache_folder_for(&self, name: &str) -> RippleResult<PathBuf> {
        self.cache.folder_for(self, name)
    }

    // --- collaborator injection ------------------------------------------

    pub fn set_storage(&mut self, storage: Box<dyn NugetStorage>) {
        self.storage = storage;
    }

    pub fn set_feed_service(&mut self, feed_service: Box<dyn FeedService>) {
        self.feed_service = feed_service;
        self.updates = None;
    }

    pub fn set_cache(&mut self, cache: Box<dyn NugetCache>) {
        self.cache = cache;
    }

    pub fn set_publishing(&mut self, publishing: Box<dyn PublishingService>) {
        self.publishing = publishing;
        self.specifications = None;
    }

    fn invalidate(&mut self) {
        self.dependencies = None;
        self.updates = None;
        self.specifications = None;
    }
}

impl std::fmt::Debug for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solution")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("feeds", &self.feeds)
            .field("projects", &self.projects)
            .field("configured_dependencies", &self.configured_dependencies)
            .finish_non_exhaustive()
    }
}

/// Locate and read a solution from `start` or any ancestor directory,
/// trying each mode's storage strategy in declaration order.
pub fn find_solution(start: &Path) -> RippleResult<Solution> {
    for mode in [SolutionMode::Ripple, SolutionMode::Classic] {
        let strategy = storage::for_mode(mode);
        let mut current = Some(start);
        while let Some(dir) = current {
            if strategy.is_solution_root(dir) {
                return strategy.read_solution(dir);
            }
            current = dir.parent();
        }
    }
    Err(RippleError::Storage {
        message: format!("no solution found at or above {}", start.display()),
    }
    .into())
}
