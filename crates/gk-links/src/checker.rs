//! Broken link checking over navbar, footer and extra references.

use gk_config::{LinkTarget, NavbarItem, OnBrokenLinks, SiteConfig};
use gk_sidebar::{Located, NavigationEntry, Sidebars, Target, doc_route};

use crate::diagnostic::{BrokenLinksError, Diagnostic, DiagnosticKind, Report, Severity};
use crate::routes::{RouteSet, is_external, normalize_route};

/// Link declared outside the configuration (e.g., landing page buttons).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// Position, e.g. `landing.header.call_to_action`.
    pub location: String,
    pub label: String,
    /// Route or URL as written.
    pub target: String,
}

impl Reference {
    #[must_use]
    pub fn new(location: &str, label: &str, target: &str) -> Self {
        Self {
            location: location.to_owned(),
            label: label.to_owned(),
            target: target.to_owned(),
        }
    }
}

/// Checks every link in a site against the routes its sidebars produce.
pub struct LinkChecker<'a> {
    config: &'a SiteConfig,
    sidebars: &'a Sidebars,
    routes: RouteSet,
    references: Vec<Reference>,
}

impl<'a> LinkChecker<'a> {
    #[must_use]
    pub fn new(config: &'a SiteConfig, sidebars: &'a Sidebars) -> Self {
        let routes = RouteSet::from_sidebars(sidebars, &config.docs().route_base_path);
        Self {
            config,
            sidebars,
            routes,
            references: Vec::new(),
        }
    }

    /// Add routes produced outside the docs (standalone pages).
    #[must_use]
    pub fn with_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.routes = self.routes.with_routes(routes);
        self
    }

    /// Add references that are checked like `to` links.
    #[must_use]
    pub fn with_references(mut self, references: impl IntoIterator<Item = Reference>) -> Self {
        self.references.extend(references);
        self
    }

    /// Known routes.
    #[must_use]
    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Run the check under the configured broken link policy.
    ///
    /// Duplicate sidebar labels are always reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`BrokenLinksError`] when the policy is `throw` and at least one
    /// link is broken.
    pub fn check(&self) -> Result<Report, BrokenLinksError> {
        let policy = self.config.on_broken_links();
        let broken = self.find_broken(policy);
        tracing::debug!(
            routes = self.routes.len(),
            broken = broken.len(),
            ?policy,
            "Checked links"
        );

        let mut diagnostics = match policy {
            OnBrokenLinks::Throw if !broken.is_empty() => {
                return Err(BrokenLinksError::new(broken));
            }
            OnBrokenLinks::Ignore => Vec::new(),
            _ => broken,
        };
        for d in &diagnostics {
            match d.severity {
                Severity::Info => tracing::info!("{d}"),
                Severity::Warning => tracing::warn!("{d}"),
            }
        }

        diagnostics.extend(self.duplicate_labels());
        Ok(Report::new(diagnostics))
    }

    fn find_broken(&self, policy: OnBrokenLinks) -> Vec<Diagnostic> {
        let severity = match policy {
            OnBrokenLinks::Log => Severity::Info,
            _ => Severity::Warning,
        };
        let route_base_path = &self.config.docs().route_base_path;
        let mut broken = Vec::new();
        let mut check = |location: &str, label: &str, target: LinkTarget<'_>| {
            let resolved = match target {
                LinkTarget::Doc(id) => self.routes.contains(&doc_route(route_base_path, id)),
                LinkTarget::Route(to) | LinkTarget::Href(to) => self.resolves(to),
            };
            if !resolved {
                broken.push(Diagnostic {
                    severity,
                    kind: DiagnosticKind::BrokenLink {
                        target: target.as_str().to_owned(),
                    },
                    location: location.to_owned(),
                    label: label.to_owned(),
                });
            }
        };

        for (i, item) in self.config.navbar().items.iter().enumerate() {
            let location = format!("navbar.items[{i}]");
            match item {
                NavbarItem::Dropdown { items, .. } => {
                    for (j, link) in items.iter().enumerate() {
                        if let Some(target) = link.target() {
                            check(&format!("{location}.items[{j}]"), &link.label, target);
                        }
                    }
                }
                _ => {
                    if let Some(target) = item.target() {
                        check(&location, item.label(), target);
                    }
                }
            }
        }

        for (i, group) in self.config.footer().links.iter().enumerate() {
            for (j, link) in group.items.iter().enumerate() {
                if let Some(target) = link.target() {
                    check(&format!("footer.links[{i}].items[{j}]"), &link.label, target);
                }
            }
        }

        for tree in self.sidebars {
            for Located {
                location, entry, ..
            } in tree.located()
            {
                if let NavigationEntry::Link {
                    label,
                    target: Target::Href(href),
                } = entry
                {
                    check(location, label, LinkTarget::Href(href));
                }
            }
        }

        for reference in &self.references {
            let target = if is_external(&reference.target) {
                LinkTarget::Href(&reference.target)
            } else {
                LinkTarget::Route(&reference.target)
            };
            check(&reference.location, &reference.label, target);
        }

        broken
    }

    /// Resolve a route, accepting both plain and base-URL-prefixed forms.
    ///
    /// External URLs always resolve. The base URL is only stripped at a path
    /// segment boundary.
    fn resolves(&self, to: &str) -> bool {
        if is_external(to) {
            return true;
        }
        let route = normalize_route(to);
        if self.routes.contains(&route) {
            return true;
        }
        let base = self.config.base_url().trim_end_matches('/');
        if base.is_empty() {
            return false;
        }
        match route.strip_prefix(base) {
            Some("") => self.routes.contains("/"),
            Some(rest) if rest.starts_with('/') => self.routes.contains(rest),
            _ => false,
        }
    }

    fn duplicate_labels(&self) -> Vec<Diagnostic> {
        self.sidebars
            .iter()
            .flat_map(gk_sidebar::SidebarTree::duplicate_labels)
            .map(|dup| Diagnostic {
                severity: Severity::Warning,
                kind: DiagnosticKind::DuplicateLabel,
                location: dup.location,
                label: dup.label,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use gk_sidebar::{NavigationEntry, SidebarTree};
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(policy: &str) -> SiteConfig {
        SiteConfig::from_toml(&format!(
            r#"
title = "Guide"
url = "https://example.github.io"
base_url = "/guide/"
on_broken_links = "{policy}"

[[navbar.items]]
type = "doc"
doc_id = "intro"
label = "Overview"

[[navbar.items]]
type = "dropdown"
label = "Utilities"
items = [
    {{ label = "All Utilities", to = "/guide/utilities" }},
    {{ label = "CSV Helper", to = "/utilities/csv-helper" }},
]

[[navbar.items]]
type = "link"
label = "GitHub"
href = "https://github.com/example/project"
position = "right"

[[footer.links]]
title = "Docs"
items = [
    {{ label = "Overview", to = "/" }},
    {{ label = "Installation", to = "/installation" }},
]
"#
        ))
        .unwrap()
    }

    fn sidebars() -> Sidebars {
        Sidebars::new(vec![SidebarTree::new(
            "docs",
            vec![
                NavigationEntry::doc("intro", "Overview"),
                NavigationEntry::category(
                    "Utilities",
                    vec![
                        NavigationEntry::doc_id("utilities/index"),
                        NavigationEntry::doc_id("utilities/json-helper"),
                    ],
                ),
            ],
        )])
    }

    fn broken_locations(report: &Report) -> Vec<&str> {
        report
            .broken_links()
            .map(|d| d.location.as_str())
            .collect()
    }

    #[test]
    fn test_warn_policy_reports_broken_links() {
        let config = config("warn");
        let sidebars = sidebars();
        let report = LinkChecker::new(&config, &sidebars).check().unwrap();

        assert_eq!(
            broken_locations(&report),
            vec!["navbar.items[1].items[1]", "footer.links[0].items[1]"]
        );
        let first = &report.diagnostics()[0];
        assert_eq!(first.severity, Severity::Warning);
        assert_eq!(first.label, "CSV Helper");
        assert_eq!(
            first.kind,
            DiagnosticKind::BrokenLink {
                target: "/utilities/csv-helper".to_owned()
            }
        );
    }

    #[test]
    fn test_base_url_prefixed_route_resolves() {
        let config = config("warn");
        let sidebars = sidebars();
        let checker = LinkChecker::new(&config, &sidebars);
        assert!(checker.resolves("/guide/utilities"));
        assert!(checker.resolves("/utilities/json-helper"));
        assert!(!checker.resolves("/guide/utilities/csv-helper"));
        assert!(checker.resolves("/guide/"));
        assert!(checker.resolves("/guide"));
    }

    #[test]
    fn test_base_url_stripped_only_at_segment_boundary() {
        let config = config("warn");
        let sidebars = sidebars();
        let checker = LinkChecker::new(&config, &sidebars);
        assert!(!checker.resolves("/guideintro"));
        assert!(!checker.resolves("/guideutilities"));

        let report = checker
            .with_routes(["/installation", "/utilities/csv-helper"])
            .with_references([Reference::new("footer.extra", "Intro", "/guideintro")])
            .check()
            .unwrap();
        assert_eq!(broken_locations(&report), vec!["footer.extra"]);
    }

    #[test]
    fn test_internal_href_is_resolved() {
        let config = SiteConfig::from_toml(
            r#"
title = "Guide"
url = "https://example.github.io"
base_url = "/"

[[navbar.items]]
type = "link"
label = "Missing"
href = "/missing"

[[navbar.items]]
type = "link"
label = "Intro"
href = "/intro"

[[navbar.items]]
type = "link"
label = "GitHub"
href = "https://github.com/example/project"
"#,
        )
        .unwrap();
        let sidebars = Sidebars::new(vec![SidebarTree::new(
            "docs",
            vec![
                NavigationEntry::doc("intro", "Overview"),
                NavigationEntry::href("/nowhere", "Nowhere"),
                NavigationEntry::href("https://example.com", "Example"),
            ],
        )]);
        let report = LinkChecker::new(&config, &sidebars).check().unwrap();
        assert_eq!(
            broken_locations(&report),
            vec!["navbar.items[0]", "docs[1]"]
        );
    }

    #[test]
    fn test_log_policy_uses_info_severity() {
        let config = config("log");
        let sidebars = sidebars();
        let report = LinkChecker::new(&config, &sidebars).check().unwrap();
        assert!(
            report
                .broken_links()
                .all(|d| d.severity == Severity::Info)
        );
        assert_eq!(report.broken_links().count(), 2);
    }

    #[test]
    fn test_ignore_policy_drops_broken_links() {
        let config = config("ignore");
        let sidebars = sidebars();
        let report = LinkChecker::new(&config, &sidebars).check().unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_throw_policy_fails() {
        let config = config("throw");
        let sidebars = sidebars();
        let err = LinkChecker::new(&config, &sidebars).check().unwrap_err();
        assert_eq!(err.broken().len(), 2);
        assert!(err.to_string().contains("Installation"));
    }

    #[test]
    fn test_throw_policy_passes_when_all_links_resolve() {
        let config = config("throw");
        let sidebars = sidebars();
        let report = LinkChecker::new(&config, &sidebars)
            .with_routes(["/installation", "/utilities/csv-helper"])
            .check()
            .unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_references_are_checked() {
        let config = config("warn");
        let sidebars = sidebars();
        let report = LinkChecker::new(&config, &sidebars)
            .with_routes(["/installation", "/utilities/csv-helper"])
            .with_references([
                Reference::new("landing.header", "Get Started", "/getting-started"),
                Reference::new(
                    "landing.call_to_action.secondary",
                    "GitHub Repository",
                    "https://github.com/example/project",
                ),
            ])
            .check()
            .unwrap();
        assert_eq!(broken_locations(&report), vec!["landing.header"]);
    }

    #[test]
    fn test_missing_navbar_doc_is_broken() {
        let config = config("warn");
        let sidebars = Sidebars::default();
        let report = LinkChecker::new(&config, &sidebars).check().unwrap();
        assert!(broken_locations(&report).contains(&"navbar.items[0]"));
    }

    #[test]
    fn test_duplicate_labels_reported_under_any_policy() {
        let config = config("ignore");
        let sidebars = Sidebars::new(vec![SidebarTree::new(
            "docs",
            vec![
                NavigationEntry::doc("intro", "Overview"),
                NavigationEntry::doc("overview", "Overview"),
            ],
        )]);
        let report = LinkChecker::new(&config, &sidebars).check().unwrap();
        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].kind, DiagnosticKind::DuplicateLabel);
        assert_eq!(report.diagnostics()[0].location, "docs[1]");
    }
}
