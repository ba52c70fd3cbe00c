use serde::{Deserialize, Serialize};

/// A named package requirement with an optional version constraint.
///
/// A dependency with no constraint is floating: it tracks whatever version
/// is currently resolved. Versions are opaque exact-match strings
/// (e.g. `1.0.0.0`); no range or semver semantics apply at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    floating: bool,
}

impl Dependency {
    /// A floating dependency: no pinned version.
    pub fn floated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            floating: true,
        }
    }

    /// A dependency pinned to a concrete version.
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
            floating: false,
        }
    }

    /// Parse `"Name@Version"` shorthand; a bare `"Name"` is floating.
    /// Returns `None` for an empty name.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        match s.split_once('@') {
            Some((name, version)) if !name.is_empty() && !version.is_empty() => {
                Some(Self::pinned(name, version))
            }
            Some(_) => None,
            None => Some(Self::floated(s)),
        }
    }

    /// Forget any version constraint and track the latest resolved version.
    /// Idempotent.
    pub fn float(&mut self) {
        self.version = None;
        self.floating = true;
    }

    /// Pin to a concrete version, clearing the floating flag.
    pub fn pin_to(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
        self.floating = false;
    }

    /// Replace the constraint wholesale; `None` floats the dependency.
    pub(crate) fn set_constraint(&mut self, version: Option<String>) {
        self.floating = version.is_none();
        self.version = version;
    }

    /// Whether this dependency floats: explicitly floated, or never pinned.
    pub fn is_floating(&self) -> bool {
        self.floating || self.version.is_none()
    }

    /// The constraint used for cross-project agreement checks. Floating
    /// dependencies compare as a single "no constraint" value.
    pub fn constraint(&self) -> Option<&str> {
        if self.is_floating() {
            None
        } else {
            self.version.as_deref()
        }
    }
}

/// Equality for list/set membership: name and version constraint match
/// exactly. The explicit floating flag does not participate.
impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.version == other.version
    }
}

impl Eq for Dependency {}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.version {
            Some(ref version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_is_idempotent() {
        let mut dep = Dependency::floated("Bottles");
        dep.float();
        dep.float();
        assert!(dep.is_floating());
        assert_eq!(dep.version, None);
    }

    #[test]
    fn float_forgets_pinned_version() {
        let mut dep = Dependency::pinned("Bottles", "1.0.0.0");
        assert!(!dep.is_floating());
        dep.float();
        assert!(dep.is_floating());
        assert_eq!(dep.constraint(), None);
    }

    #[test]
    fn equality_is_name_and_version() {
        assert_eq!(
            Dependency::pinned("Bottles", "1.0.0.0"),
            Dependency::pinned("Bottles", "1.0.0.0")
        );
        assert_ne!(
            Dependency::pinned("Bottles", "1.0.0.0"),
            Dependency::pinned("Bottles", "0.9.0.0")
        );
        assert_ne!(
            Dependency::pinned("Bottles", "1.0.0.0"),
            Dependency::floated("Bottles")
        );
    }
}
