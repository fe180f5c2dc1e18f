//! Non-fatal diagnostics.

use std::fmt;

/// How loudly a diagnostic is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A referenced route or document id does not exist.
    BrokenLink {
        /// The unresolved target as written.
        target: String,
    },
    /// Sibling sidebar entries share a label.
    DuplicateLabel,
}

/// Finding reported alongside a successful check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Position of the entry, e.g. `footer.links[1].items[0]`.
    pub location: String,
    /// Label of the entry.
    pub label: String,
}

impl Diagnostic {
    /// True for [`DiagnosticKind::BrokenLink`].
    #[must_use]
    pub fn is_broken_link(&self) -> bool {
        matches!(self.kind, DiagnosticKind::BrokenLink { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::BrokenLink { target } => write!(
                f,
                "{}: broken link {:?} at {} -> {target}",
                self.severity, self.label, self.location
            ),
            DiagnosticKind::DuplicateLabel => write!(
                f,
                "{}: duplicate sibling label {:?} at {}",
                self.severity, self.label, self.location
            ),
        }
    }
}

/// Diagnostics collected by a successful check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics in discovery order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Broken link diagnostics only.
    pub fn broken_links(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_broken_link())
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Broken links found under the `throw` policy.
#[derive(Debug, thiserror::Error)]
#[error("{} broken link(s) found:\n{}", .broken.len(), format_list(.broken))]
pub struct BrokenLinksError {
    broken: Vec<Diagnostic>,
}

impl BrokenLinksError {
    pub(crate) fn new(broken: Vec<Diagnostic>) -> Self {
        Self { broken }
    }

    /// The offending links.
    #[must_use]
    pub fn broken(&self) -> &[Diagnostic] {
        &self.broken
    }
}

fn format_list(items: &[Diagnostic]) -> String {
    items
        .iter()
        .map(|d| format!("  - {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken(label: &str, location: &str, target: &str) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            kind: DiagnosticKind::BrokenLink {
                target: target.to_owned(),
            },
            location: location.to_owned(),
            label: label.to_owned(),
        }
    }

    #[test]
    fn test_diagnostic_display() {
        let d = broken("Web Testing", "navbar.items[2].items[2]", "/web-tests");
        assert_eq!(
            d.to_string(),
            "warning: broken link \"Web Testing\" at navbar.items[2].items[2] -> /web-tests"
        );
    }

    #[test]
    fn test_broken_links_error_lists_every_link() {
        let err = BrokenLinksError::new(vec![
            broken("A", "footer.links[0].items[0]", "/a"),
            broken("B", "footer.links[0].items[1]", "/b"),
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 broken link(s) found:"));
        assert!(msg.contains("\"A\" at footer.links[0].items[0]"));
        assert!(msg.contains("\"B\" at footer.links[0].items[1]"));
    }

    #[test]
    fn test_report_filters_broken_links() {
        let report = Report::new(vec![
            broken("A", "x", "/a"),
            Diagnostic {
                severity: Severity::Warning,
                kind: DiagnosticKind::DuplicateLabel,
                location: "docs[1]".to_owned(),
                label: "Same".to_owned(),
            },
        ]);
        assert_eq!(report.broken_links().count(), 1);
        assert!(!report.is_clean());
    }
}
