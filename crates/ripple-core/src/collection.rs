//! The merged, name-keyed dependency view built by layering the
//! solution-level declarations with each project's own list.

use ripple_util::errors::{RippleError, RippleResult};

use crate::dependency::Dependency;

/// A name-keyed merge of one base dependency list with any number of child
/// lists. Within one collection each name appears at most once; the
/// first-seen declaration wins across base-then-children insertion order.
///
/// The merge is a read path for reporting and update targeting, not the
/// source of truth: later same-named declarations are omitted from this
/// view, never modified or removed from their owning list. Cross-project
/// disagreement is surfaced by solution validation instead of being
/// silently resolved here.
#[derive(Debug, Clone, Default)]
pub struct DependencyCollection {
    entries: Vec<Dependency>,
}

impl DependencyCollection {
    /// Start from the base (solution-level) list.
    pub fn new(base: impl IntoIterator<Item = Dependency>) -> Self {
        let mut collection = Self::default();
        for dep in base {
            collection.fill(dep);
        }
        collection
    }

    /// Layer a child (project-level) list onto the merge. Entries whose
    /// name is already present are ignored.
    pub fn add_child<'a>(&mut self, dependencies: impl IntoIterator<Item = &'a Dependency>) {
        for dep in dependencies {
            self.fill(dep.clone());
        }
    }

    fn fill(&mut self, dependency: Dependency) {
        if !self.has(&dependency.name) {
            self.entries.push(dependency);
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|d| d.name == name)
    }

    /// The merged entry for `name`, by exact match.
    pub fn find(&self, name: &str) -> RippleResult<&Dependency> {
        self.entries
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| {
                RippleError::DependencyNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Replace the version constraint of the same-named entry. Targeting a
    /// name absent from the collection is an error, so callers cannot
    /// mistake a typo for success.
    pub fn update(&mut self, dependency: &Dependency) -> RippleResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|d| d.name == dependency.name)
            .ok_or_else(|| RippleError::DependencyNotFound {
                name: dependency.name.clone(),
            })?;
        entry.set_constraint(dependency.version.clone());
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DependencyCollection {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
