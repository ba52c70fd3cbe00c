//! Mode-selected storage strategies for a solution's on-disk dependency
//! declarations, plus the per-project parsing strategies layered over them.
//!
//! Exactly two storage strategies exist, one per [`SolutionMode`]; selection
//! is the closed lookup in [`for_mode`], not open-ended dispatch.

mod classic_store;
mod ripple_store;

pub use classic_store::{ClassicStorage, PackagesFileStrategy};
pub use ripple_store::{RippleFileStrategy, RippleStorage};

use std::path::Path;

use serde::{Deserialize, Serialize};

use ripple_util::errors::{RippleError, RippleResult};

use crate::dependency::Dependency;
use crate::mode::{CleanMode, SolutionMode};
use crate::project::Project;
use crate::solution::Solution;

/// Declaration file used by ripple-mode solutions and projects.
pub const RIPPLE_FILE: &str = "Ripple.toml";

/// Declaration file used by classic-mode solutions and projects.
pub const PACKAGES_FILE: &str = "packages.toml";

/// Reads and writes one on-disk representation of a solution's dependency
/// declarations.
pub trait NugetStorage {
    /// The mode this strategy persists.
    fn mode(&self) -> SolutionMode;

    /// Name of the declaration file at the solution root.
    fn solution_file(&self) -> &'static str;

    /// Whether `dir` is the root of a solution persisted in this mode.
    /// Distinguishes the solution-level declaration file from a
    /// same-named per-project file.
    fn is_solution_root(&self, dir: &Path) -> bool;

    /// Persist the solution-level declarations.
    fn write_solution(&self, solution: &Solution) -> RippleResult<()>;

    /// Persist one project's declarations.
    fn write_project(&self, project: &Project) -> RippleResult<()>;

    /// Discard this strategy's on-disk artifacts for the solution. Called
    /// on the outgoing strategy during mode conversion.
    fn reset(&self, solution: &Solution) -> RippleResult<()>;

    /// Declared dependencies whose package folder is absent locally.
    fn missing_files(&self, solution: &Solution) -> RippleResult<Vec<Dependency>>;

    /// The declarations currently on disk for the solution and its
    /// projects.
    fn dependencies(&self, solution: &Solution) -> RippleResult<LocalDependencySet>;

    /// Remove on-disk artifacts per the clean scope.
    fn clean(&self, solution: &Solution, mode: CleanMode) -> RippleResult<()>;

    /// Reconstruct a solution from the declaration files under `dir`.
    fn read_solution(&self, dir: &Path) -> RippleResult<Solution>;
}

/// The storage strategy for a mode.
pub fn for_mode(mode: SolutionMode) -> Box<dyn NugetStorage> {
    match mode {
        SolutionMode::Ripple => Box::new(RippleStorage),
        SolutionMode::Classic => Box::new(ClassicStorage),
    }
}

/// Parses one project file format. A [`StrategySet`] holds these in a
/// configured order; the first strategy whose `matches` accepts a project
/// directory reads it.
pub trait DependencyStrategy {
    fn matches(&self, project_dir: &Path) -> bool;
    fn read(&self, project_dir: &Path) -> RippleResult<Vec<Dependency>>;
}

/// Ordered list of project-file parsing strategies, first match wins.
pub struct StrategySet {
    strategies: Vec<Box<dyn DependencyStrategy>>,
}

impl StrategySet {
    /// Both built-in strategies: ripple files first, classic files second.
    pub fn defaults() -> Self {
        Self {
            strategies: vec![
                Box::new(RippleFileStrategy),
                Box::new(PackagesFileStrategy),
            ],
        }
    }

    pub fn push(&mut self, strategy: Box<dyn DependencyStrategy>) {
        self.strategies.push(strategy);
    }

    /// Read a project directory with the first matching strategy; `None`
    /// if no strategy recognizes it.
    pub fn read(&self, project_dir: &Path) -> RippleResult<Option<Vec<Dependency>>> {
        for strategy in &self.strategies {
            if strategy.matches(project_dir) {
                return strategy.read(project_dir).map(Some);
            }
        }
        Ok(None)
    }
}

/// The dependency declarations read back from a solution's disk state,
/// de-duplicated by first occurrence.
#[derive(Debug, Clone, Default)]
pub struct LocalDependencySet {
    nugets: Vec<Dependency>,
}

impl LocalDependencySet {
    pub fn fill(&mut self, dependency: Dependency) {
        if !self.has(&dependency.name) {
            self.nugets.push(dependency);
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.nugets.iter().any(|d| d.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Dependency> {
        self.nugets.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.nugets.iter()
    }

    pub fn len(&self) -> usize {
        self.nugets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nugets.is_empty()
    }
}

// --- shared file schemas and helpers -------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SolutionFile {
    pub solution: SolutionMeta,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SolutionMeta {
    pub name: String,
    #[serde(default)]
    pub mode: SolutionMode,
    #[serde(default)]
    pub feeds: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProjectFile {
    pub project: ProjectMeta,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProjectMeta {
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PackagesFile {
    #[serde(default)]
    pub packages: Vec<Dependency>,
}

pub(crate) fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> RippleResult<T> {
    let raw = std::fs::read_to_string(path).map_err(RippleError::Io)?;
    toml::from_str(&raw).map_err(|e| {
        RippleError::Storage {
            message: format!("failed to parse {}: {e}", path.display()),
        }
        .into()
    })
}

pub(crate) fn write_toml<T: Serialize>(path: &Path, value: &T) -> RippleResult<()> {
    let raw = toml::to_string_pretty(value).map_err(|e| RippleError::Storage {
        message: format!("failed to serialize {}: {e}", path.display()),
    })?;
    std::fs::write(path, raw).map_err(RippleError::Io)?;
    Ok(())
}

/// Merged declarations whose package folder is missing under `packages/`.
pub(crate) fn missing_from_packages(solution: &Solution) -> Vec<Dependency> {
    let packages = solution.packages_dir();
    solution
        .combine_dependencies()
        .iter()
        .filter(|dep| !packages.join(&dep.name).is_dir())
        .cloned()
        .collect()
}

/// Remove the downloaded-packages directory if present.
pub(crate) fn clean_packages(solution: &Solution) -> RippleResult<()> {
    let packages = solution.packages_dir();
    if packages.is_dir() {
        std::fs::remove_dir_all(&packages).map_err(RippleError::Io)?;
    }
    Ok(())
}

/// Project directories under the solution's source folder.
pub(crate) fn project_dirs(dir: &Path, source_folder: &str) -> RippleResult<Vec<std::path::PathBuf>> {
    let src = dir.join(source_folder);
    if !src.is_dir() {
        return Ok(Vec::new());
    }
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(&src).map_err(RippleError::Io)? {
        let entry = entry.map_err(RippleError::Io)?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}
