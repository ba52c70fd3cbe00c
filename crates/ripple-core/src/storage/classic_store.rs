//! Classic-mode storage: a flat `packages.toml` in each project directory
//! and at the solution root. No solution metadata is persisted; the
//! solution name is the directory name and the feeds are the defaults.

use std::path::Path;

use ripple_util::errors::{RippleError, RippleResult};
use ripple_util::fs::{ensure_dir, remove_if_present};
use tracing::debug;

use crate::dependency::Dependency;
use crate::mode::{CleanMode, SolutionMode};
use crate::project::Project;
use crate::solution::Solution;

use super::{
    clean_packages, missing_from_packages, project_dirs, read_toml, write_toml,
    DependencyStrategy, LocalDependencySet, NugetStorage, PackagesFile, StrategySet,
    PACKAGES_FILE,
};

/// Storage strategy for [`SolutionMode::Classic`].
#[derive(Debug, Default)]
pub struct ClassicStorage;

impl ClassicStorage {
    fn write_packages(&self, dir: &Path, packages: &[Dependency]) -> RippleResult<()> {
        ensure_dir(dir).map_err(RippleError::Io)?;
        let path = dir.join(PACKAGES_FILE);
        debug!(path = %path.display(), "writing package declarations");
        write_toml(
            &path,
            &PackagesFile {
                packages: packages.to_vec(),
            },
        )
    }
}

impl NugetStorage for ClassicStorage {
    fn mode(&self) -> SolutionMode {
        SolutionMode::Classic
    }

    fn solution_file(&self) -> &'static str {
        PACKAGES_FILE
    }

    fn is_solution_root(&self, dir: &Path) -> bool {
        if !dir.join(PACKAGES_FILE).is_file() {
            return false;
        }
        // A project directory sits under the source folder of a root that
        // carries its own packages.toml; anything else is a root.
        if let Some(parent) = dir.parent() {
            if parent
                .file_name()
                .is_some_and(|n| n == crate::solution::DEFAULT_SOURCE_FOLDER)
            {
                if let Some(root) = parent.parent() {
                    if root.join(PACKAGES_FILE).is_file() {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn write_solution(&self, solution: &Solution) -> RippleResult<()> {
        self.write_packages(&solution.path, solution.configured_dependencies())
    }

    fn write_project(&self, project: &Project) -> RippleResult<()> {
        self.write_packages(project.root_dir(), &project.dependencies)
    }

    fn reset(&self, solution: &Solution) -> RippleResult<()> {
        debug!(solution = %solution.name, "resetting classic-mode artifacts");
        remove_if_present(&solution.path.join(PACKAGES_FILE)).map_err(RippleError::Io)?;
        for project in solution.projects() {
            remove_if_present(&project.root_dir().join(PACKAGES_FILE))
                .map_err(RippleError::Io)?;
        }
        Ok(())
    }

    fn missing_files(&self, solution: &Solution) -> RippleResult<Vec<Dependency>> {
        Ok(missing_from_packages(solution))
    }

    fn dependencies(&self, solution: &Solution) -> RippleResult<LocalDependencySet> {
        let mut local = LocalDependencySet::default();
        let root = solution.path.join(PACKAGES_FILE);
        if root.is_file() {
            let file: PackagesFile = read_toml(&root)?;
            for dep in file.packages {
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
                remove_if_present(&project.root_dir().join(PACKAGES_FILE))
                    .map_err(RippleError::Io)?;
            }
        }
        Ok(())
    }

    fn read_solution(&self, dir: &Path) -> RippleResult<Solution> {
        let name = dir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "solution".to_string());
        let mut solution = Solution::new(name, dir, SolutionMode::Classic);
        let root = dir.join(PACKAGES_FILE);
        if root.is_file() {
            let file: PackagesFile = read_toml(&root)?;
            for dep in file.packages {
                solution.add_configured_dependency(dep);
            }
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

/// Parses per-project `packages.toml` files.
#[derive(Debug, Default)]
pub struct PackagesFileStrategy;

impl DependencyStrategy for PackagesFileStrategy {
    fn matches(&self, project_dir: &Path) -> bool {
        project_dir.join(PACKAGES_FILE).is_file()
    }

    fn read(&self, project_dir: &Path) -> RippleResult<Vec<Dependency>> {
        let file: PackagesFile = read_toml(&project_dir.join(PACKAGES_FILE))?;
        Ok(file.packages)
    }
}
