use serde::{Deserialize, Serialize};

/// The active on-disk representation for a solution's dependency
/// declarations. Only these two variants ever exist; storage strategy
/// selection is a closed lookup over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionMode {
    /// Solution-level `Ripple.toml` plus one per project directory.
    Ripple,
    /// Flat `packages.toml` files, one per project directory.
    Classic,
}

impl Default for SolutionMode {
    fn default() -> Self {
        Self::Ripple
    }
}

impl std::fmt::Display for SolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ripple => write!(f, "ripple"),
            Self::Classic => write!(f, "classic"),
        }
    }
}

impl std::str::FromStr for SolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ripple" => Ok(Self::Ripple),
            "classic" => Ok(Self::Classic),
            other => Err(format!("unknown mode `{other}` (expected ripple or classic)")),
        }
    }
}

/// Scope selector for [`crate::storage::NugetStorage::clean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Remove downloaded packages and per-project declarations.
    All,
    /// Remove downloaded packages only.
    Packages,
    /// Remove per-project declarations only.
    Projects,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Ripple".parse::<SolutionMode>().unwrap(), SolutionMode::Ripple);
        assert_eq!("CLASSIC".parse::<SolutionMode>().unwrap(), SolutionMode::Classic);
        assert!("nuget".parse::<SolutionMode>().is_err());
    }

    #[test]
    fn mode_display_roundtrip() {
        for mode in [SolutionMode::Ripple, SolutionMode::Classic] {
            assert_eq!(mode.to_string().parse::<SolutionMode>().unwrap(), mode);
        }
    }
}
