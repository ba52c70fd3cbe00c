use std::path::{Path, PathBuf};

use crate::dependency::Dependency;

/// A single project within a solution, with its own ordered dependency
/// declarations. The per-project list is the durable source of truth for
/// what the project requires; the solution's merged view is derived from it.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub dependencies: Vec<Dependency>,
    solution: Option<String>,
}

impl Project {
    /// Create a project rooted at `path`; the name is the final path
    /// component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path,
            dependencies: Vec::new(),
            solution: None,
        }
    }

    /// Create a project with an explicit name, rooted at `path`.
    pub fn named(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            dependencies: Vec::new(),
            solution: None,
        }
    }

    /// Project names compare case-insensitively when looked up.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Add a dependency with fill semantics: if a dependency with the same
    /// name is already declared, the call is a no-op.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        if self.has_dependency(&dependency.name) {
            return;
        }
        self.dependencies.push(dependency);
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.name == name)
    }

    pub fn find_dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }

    /// The name of the owning solution, if this project has been added to
    /// one.
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// Record the owning solution. Set exactly once, by
    /// [`crate::solution::Solution::add_project`]; a second call is ignored.
    pub(crate) fn set_solution(&mut self, solution: &str) {
        if self.solution.is_none() {
            self.solution = Some(solution.to_string());
        }
    }

    /// Directory holding this project's declaration files.
    pub fn root_dir(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_derived_from_path() {
        let project = Project::new("/solutions/fubumvc/src/FubuMVC.Core");
        assert_eq!(project.name, "FubuMVC.Core");
    }

    #[test]
    fn duplicate_dependency_is_filled_not_replaced() {
        let mut project = Project::new("src/App");
        project.add_dependency(Dependency::pinned("Bottles", "1.0.0.0"));
        project.add_dependency(Dependency::pinned("Bottles", "9.9.9.9"));
        assert_eq!(project.dependencies.len(), 1);
        assert_eq!(
            project.find_dependency("Bottles").unwrap().version.as_deref(),
            Some("1.0.0.0")
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let project = Project::new("src/App");
        assert!(project.matches_name("app"));
        assert!(project.matches_name("APP"));
        assert!(!project.matches_name("other"));
    }
}
