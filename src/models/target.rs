use crate::constants::{DEFAULT_TARGET, DEFAULT_TARGET_EXACT};
use crate::error::AppError;
use crate::validation::validate_target;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Substring,
    WholeName,
}

/// Case-insensitive pattern matched against running process names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSignature {
    display: String,
    needle: String,
    kind: MatchKind,
}

impl TargetSignature {
    /// Matches any process whose name contains `target`.
    pub fn new(target: &str) -> Result<Self, AppError> {
        Self::build(target, MatchKind::Substring)
    }

    /// Matches only processes named exactly `target`.
    pub fn exact(target: &str) -> Result<Self, AppError> {
        Self::build(target, MatchKind::WholeName)
    }

    fn build(target: &str, kind: MatchKind) -> Result<Self, AppError> {
        let target = validate_target(target)?;
        Ok(Self::unchecked(target, kind))
    }

    fn unchecked(target: &str, kind: MatchKind) -> Self {
        Self {
            display: target.to_string(),
            needle: target.to_lowercase(),
            kind,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::WholeName
    }

    pub fn matches(&self, process_name: &str) -> bool {
        let name = process_name.to_lowercase();
        match self.kind {
            MatchKind::Substring => name.contains(&self.needle),
            MatchKind::WholeName => name == self.needle,
        }
    }

    /// True if any of the given process names matches.
    pub fn is_present<I, S>(&self, process_names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        process_names
            .into_iter()
            .any(|name| self.matches(name.as_ref()))
    }
}

impl Default for TargetSignature {
    fn default() -> Self {
        let kind = if DEFAULT_TARGET_EXACT {
            MatchKind::WholeName
        } else {
            MatchKind::Substring
        };
        Self::unchecked(DEFAULT_TARGET, kind)
    }
}

impl fmt::Display for TargetSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
