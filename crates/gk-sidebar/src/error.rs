//! Sidebar error types.

use std::path::PathBuf;

/// Structural defect found by [`SidebarTree::validate`](crate::SidebarTree::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedKind {
    /// Category with no children.
    EmptyCategory,
    /// Link with an empty target.
    EmptyTarget,
    /// Link target containing whitespace.
    WhitespaceInTarget(String),
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => f.write_str("category has no items"),
            Self::EmptyTarget => f.write_str("link target is empty"),
            Self::WhitespaceInTarget(target) => {
                write!(f, "link target {target:?} contains whitespace")
            }
        }
    }
}

/// Malformed sidebar entry, with its label and position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Malformed sidebar entry {label:?} at {location}: {kind}")]
pub struct MalformedTreeError {
    location: String,
    label: String,
    kind: MalformedKind,
}

impl MalformedTreeError {
    pub(crate) fn new(location: &str, label: &str, kind: MalformedKind) -> Self {
        Self {
            location: location.to_owned(),
            label: label.to_owned(),
            kind,
        }
    }

    /// Position path, e.g. `tutorialSidebar[4].items[1]`.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Label of the offending entry.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn kind(&self) -> &MalformedKind {
        &self.kind
    }
}

/// Error loading or validating sidebars.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Sidebar file not found.
    #[error("Sidebar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Structural defect.
    #[error(transparent)]
    Malformed(#[from] MalformedTreeError),
}
