//! Ripple-mode storage: one `Ripple.toml` at the solution root carrying the
//! solution metadata, feeds, and solution-level pins, plus one `Ripple.toml`
//! per project directory carrying that project's own declarations.

use std::path::Path;

use ripple_util::errors::{RippleError, RippleResult};
use ripple_util::fs::{ensure_dir, remove_if_present};
use tracing::debug;

use crate::dependency::Dependency;
use crate::feed::Feed;
use crate::mode::{CleanMode, SolutionMode};
use crate::project::Project;
use crate::solution::Solution;

use super::{
    clean_packages, missing_from_packages, project_dirs, read_toml, write_toml,
    DependencyStrategy, LocalDependencySet, NugetStorage, ProjectFile, ProjectMeta, SolutionFile,
    SolutionMeta, StrategySet, RIPPLE_FILE,
};

/// Storage strategy for [`SolutionMode::Ripple`].
#[derive(Debug, Default)]
pub struct RippleStorage;

impl NugetStorage for RippleStorage {
    fn mode(&self) -> SolutionMode {
        SolutionMode::Ripple
    }

    fn solution_file(&self) -> &'static str {
        RIPPLE_FILE
    }

    fn is_solution_root(&self, dir: &Path) -> bool {
        let path = dir.join(RIPPLE_FILE);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return false;
        };
        // Project files share the Ripple.toml name but carry a [project]
        // table instead of [solution]. A file that is not valid TOML at
        // all still claims the root, so read_solution surfaces its parse
        // diagnostic instead of reporting no solution.
        match raw.parse::<toml::Value>() {
            Ok(value) => value.get("solution").is_some(),
            Err(_) => true,
        }
    }

    fn write_solution(&self, solution: &Solution) -> RippleResult<()> {
        let file = SolutionFile {
            solution: SolutionMeta {
                name: solution.name.clone(),
                mode: SolutionMode::Ripple,
                feeds: solution.feeds().iter().map(|f| f.url.clone()).collect(),
            },
            dependencies: solution.configured_dependencies().to_vec(),
        };
        ensure_dir(&solution.path).map_err(RippleError::Io)?;
        let path = solution.path.join(RIPPLE_FILE);
        debug!(path = %path.display(), "writing solution declarations");
        write_toml(&path, &file)
    }

    fn write_project(&self, project: &Project) -> RippleResult<()> {
        let file = ProjectFile {
            project: ProjectMeta {
                name: project.name.clone(),
            },
            dependencies: project.dependencies.clone(),
        };
        ensure_dir(project.root_dir()).map_err(RippleError::Io)?;
        let path = project.root_dir().join(RIPPLE_FILE);
        debug!(path = %path.display(), "writing project declarations");
        write_toml(&path, &file)
    }

    fn reset(&self, solution: &Solution) -> RippleResult<()> {
        debug!(solution = %solution.name, "resetting ripple-mode artifacts");
        remove_if_present(&solution.path.join(RIPPLE_FILE)).map_err(RippleError::Io)?;
        for project in solution.projects() {
            remove_if_present(&project.root_dir().join(RIPPLE_FILE)).map_err(RippleError::Io)?;
        }
        Ok(())
    }

    fn missing_files(&self, solution: &Solution) -> RippleResult<Vec<Dependency>> {
        Ok(missing_from_packages(solution))
    }

    fn dependencies(&self, solution: &Solution) -> RippleResult<LocalDependencySet> {
        let mut local = LocalDependencySet::default();
        let root = solution.path.join(RIPPLE_FILE);
        if root.is_file() {
            let file: SolutionFile = read_toml(&root)?;
            for dep in file.dependencies {
                local.fill(dep);
            }
        }
        let strategies = StrategySet::defaults();
        for project in solution.projects() {
            if let Some(dependencies) = strategies.read(project.root_dir())? {
                for dep in dependencies {
                    local.fill(dep);
                }
            }
        }
        Ok(local)
    }

    fn clean(&self, solution: &Solution, mode: CleanMode) -> RippleResult<()> {
        if matches!(mode, CleanMode::All | CleanMode::Packages) {
            clean_packages(solution)?;
        }
        if matches!(mode, CleanMode::All | CleanMode::Projects) {
            for project in solution.projects() {
                remove_if_present(&project.root_dir().join(RIPPLE_FILE))
                    .map_err(RippleError::Io)?;
            }
        }
        Ok(())
    }

    fn read_solution(&self, dir: &Path) -> RippleResult<Solution> {
        let file: SolutionFile = read_toml(&dir.join(RIPPLE_FILE))?;
        // Honor the recorded mode; files written by this strategy record
        // Ripple, and the field defaults to Ripple when absent.
        let mut solution = Solution::new(file.solution.name, dir, file.solution.mode);
        if !file.solution.feeds.is_empty() {
            solution.set_feeds(file.solution.feeds.into_iter().map(Feed::new));
        }
        for dep in file.dependencies {
            solution.add_configured_dependency(dep);
        }
        let strategies = StrategySet::defaults();
        for project_dir in project_dirs(dir, &solution.source_folder)? {
            let Some(dependencies) = strategies.read(&project_dir)? else {
                continue;
            };
            let project = solution.add_project(Project::new(&project_dir));
            for dep in dependencies {
                project.add_dependency(dep);
            }
        }
        Ok(solution)
    }
}

/// Parses per-project `Ripple.toml` files.
#[derive(Debug, Default)]
pub struct RippleFileStrategy;

impl DependencyStrategy for RippleFileStrategy {
    fn matches(&self, project_dir: &Path) -> bool {
        project_dir.join(RIPPLE_FILE).is_file()
    }

    fn read(&self, project_dir: &Path) -> RippleResult<Vec<Dependency>> {
        let file: ProjectFile = read_toml(&project_dir.join(RIPPLE_FILE))?;
        Ok(file.dependencies)
    }
}
