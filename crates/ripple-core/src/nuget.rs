//! Remote package descriptors and publishable package specifications.

use std::path::PathBuf;

use crate::dependency::Dependency;

/// A package resolved from a remote feed or the local cache: a concrete
/// name at a concrete version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteNuget {
    pub name: String,
    pub version: String,
}

impl RemoteNuget {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// A pinned, non-floating dependency on exactly this package version.
    pub fn to_dependency(&self) -> Dependency {
        Dependency::pinned(&self.name, &self.version)
    }
}

impl std::fmt::Display for RemoteNuget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// A package specification published by a solution, used when building
/// cross-solution dependency graphs.
#[derive(Debug, Clone)]
pub struct PackageSpec {
    pub name: String,
    pub path: PathBuf,
    /// The owning solution.
    pub publisher: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_yields_pinned_dependency() {
        let nuget = RemoteNuget::new("Bottles", "1.0.1.1");
        let dep = nuget.to_dependency();
        assert!(!dep.is_floating());
        assert_eq!(dep.version.as_deref(), Some("1.0.1.1"));
    }
}
