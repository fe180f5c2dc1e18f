//! Known site routes.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use gk_sidebar::{Sidebars, doc_route};
use regex::Regex;

/// URL with a scheme (`https:`, `mailto:`, ...) or protocol-relative `//host`.
static EXTERNAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.-]*:|//)").unwrap());

/// True if `target` leaves the site.
#[must_use]
pub fn is_external(target: &str) -> bool {
    EXTERNAL_RE.is_match(target)
}

/// Normalize a route for lookup.
///
/// Drops query and fragment, ensures a leading slash and removes a trailing
/// slash (except for the root route).
#[must_use]
pub fn normalize_route(route: &str) -> String {
    let end = route.find(['#', '?']).unwrap_or(route.len());
    let path = route[..end].trim_end_matches('/');
    if path.is_empty() {
        "/".to_owned()
    } else if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Set of routes the site generator will produce.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteSet {
    routes: BTreeSet<String>,
}

impl RouteSet {
    /// Routes of every document referenced by the sidebars, plus the home route.
    #[must_use]
    pub fn from_sidebars(sidebars: &Sidebars, route_base_path: &str) -> Self {
        let mut routes = BTreeSet::from(["/".to_owned(), normalize_route(route_base_path)]);
        for tree in sidebars {
            routes.extend(tree.doc_ids().map(|id| doc_route(route_base_path, id)));
        }
        Self { routes }
    }

    /// Extend with additional routes (e.g., standalone pages).
    #[must_use]
    pub fn with_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.routes
            .extend(routes.into_iter().map(|r| normalize_route(r.as_ref())));
        self
    }

    /// Check whether a route is known. The route is normalized first.
    #[must_use]
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(&normalize_route(route))
    }

    /// All routes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
