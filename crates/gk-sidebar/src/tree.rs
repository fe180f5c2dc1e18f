//! Sidebar tree: construction, traversal and validation.
//!
//! A [`SidebarTree`] owns an ordered sequence of root [`NavigationEntry`]
//! values and never changes after construction. Every query walks the
//! entries in document order (pre-order, depth first), so a category is
//! always seen before its children.

use std::collections::HashSet;

use serde::Serialize;

use crate::entry::{NavigationEntry, Target};
use crate::error::{MalformedKind, MalformedTreeError};

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path. `None` for categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Initial collapsed state for categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Sibling entries sharing a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateLabel {
    /// Position of the second occurrence.
    pub location: String,
    /// The repeated label.
    pub label: String,
}

/// Entry together with its position in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Located<'a> {
    /// Nesting depth; root entries have depth 0.
    pub depth: usize,
    /// Position path, e.g. `tutorialSidebar[4].items[1]`.
    pub location: &'a str,
    pub entry: &'a NavigationEntry,
}

/// Immutable, named sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarTree {
    name: String,
    entries: Vec<NavigationEntry>,
    /// Position path of every entry, in pre-order.
    locations: Vec<String>,
}

impl SidebarTree {
    /// Build a tree from its root entries.
    #[must_use]
    pub fn new(name: &str, entries: Vec<NavigationEntry>) -> Self {
        let mut locations = Vec::new();
        collect_locations(&entries, name, &mut locations);
        Self {
            name: name.to_owned(),
            entries,
            locations,
        }
    }

    /// Sidebar name (e.g., `tutorialSidebar`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root entries.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// True if the tree has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pre-order traversal yielding `(depth, entry)` pairs.
    ///
    /// The iterator is lazy and finite. Call `iter()` again (or clone the
    /// iterator) to restart.
    #[must_use]
    pub fn iter(&self) -> Traverse<'_> {
        Traverse {
            stack: vec![self.entries.iter()],
        }
    }

    /// Pre-order traversal including each entry's position path.
    pub fn located(&self) -> impl Iterator<Item = Located<'_>> {
        self.iter()
            .zip(&self.locations)
            .map(|((depth, entry), location)| Located {
                depth,
                location: location.as_str(),
                entry,
            })
    }

    /// Total number of entries, categories included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTreeError`] for the first category without children
    /// or link whose target is empty or contains whitespace.
    pub fn validate(&self) -> Result<(), MalformedTreeError> {
        for Located {
            location, entry, ..
        } in self.located()
        {
            let kind = match entry {
                NavigationEntry::Category { items, .. } if items.is_empty() => {
                    Some(MalformedKind::EmptyCategory)
                }
                NavigationEntry::Category { .. } => None,
                NavigationEntry::Link { target, .. } => check_target(target),
            };
            if let Some(kind) = kind {
                return Err(MalformedTreeError::new(location, entry.label(), kind));
            }
        }
        Ok(())
    }

    /// Document ids referenced by the tree, in document order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|(_, entry)| match entry {
            NavigationEntry::Link {
                target: Target::Doc(id),
                ..
            } => Some(id.as_str()),
            _ => None,
        })
    }

    /// Sibling entries whose label repeats an earlier sibling's label.
    #[must_use]
    pub fn duplicate_labels(&self) -> Vec<DuplicateLabel> {
        let mut found = Vec::new();
        find_duplicates(&self.entries, &self.name, &mut found);
        found
    }

    /// Build the navigation tree handed to the site generator.
    ///
    /// Document links become routes under `route_base_path`.
    #[must_use]
    pub fn nav_items(&self, route_base_path: &str) -> Vec<NavItem> {
        self.entries
            .iter()
            .map(|entry| build_nav_item(entry, route_base_path))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SidebarTree {
    type Item = (usize, &'a NavigationEntry);
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`SidebarTree`].
#[derive(Clone, Debug)]
pub struct Traverse<'a> {
    stack: Vec<std::slice::Iter<'a, NavigationEntry>>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (usize, &'a NavigationEntry);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let level = self.stack.last_mut()?;
            if let Some(entry) = level.next() {
                if let NavigationEntry::Category { items, .. } = entry {
                    self.stack.push(items.iter());
                }
                return Some((depth, entry));
            }
            self.stack.pop();
        }
    }
}

/// Route for a document id under `route_base_path`.
///
/// `index` documents are served at their directory:
/// `doc_route("/", "utilities/index")` is `/utilities`.
#[must_use]
pub fn doc_route(route_base_path: &str, id: &str) -> String {
    let id = id.trim_matches('/');
    let id = if id == "index" {
        ""
    } else {
        id.strip_suffix("/index").unwrap_or(id)
    };
    let base = route_base_path.trim_end_matches('/');
    if id.is_empty() {
        if base.is_empty() {
            "/".to_owned()
        } else {
            base.to_owned()
        }
    } else {
        format!("{base}/{id}")
    }
}

fn check_target(target: &Target) -> Option<MalformedKind> {
    let value = target.as_str();
    if value.is_empty() {
        Some(MalformedKind::EmptyTarget)
    } else if value.chars().any(char::is_whitespace) {
        Some(MalformedKind::WhitespaceInTarget(value.to_owned()))
    } else {
        None
    }
}

fn collect_locations(entries: &[NavigationEntry], prefix: &str, out: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        let location = format!("{prefix}[{i}]");
        out.push(location.clone());
        if let NavigationEntry::Category { items, .. } = entry {
            collect_locations(items, &format!("{location}.items"), out);
        }
    }
}

fn find_duplicates(entries: &[NavigationEntry], prefix: &str, out: &mut Vec<DuplicateLabel>) {
    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        let location = format!("{prefix}[{i}]");
        if !seen.insert(entry.label()) {
            out.push(DuplicateLabel {
                location: location.clone(),
                label: entry.label().to_owned(),
            });
        }
        if let NavigationEntry::Category { items, .. } = entry {
            find_duplicates(items, &format!("{location}.items"), out);
        }
    }
}

fn build_nav_item(entry: &NavigationEntry, route_base_path: &str) -> NavItem {
    match entry {
        NavigationEntry::Link { label, target } => NavItem {
            title: label.clone(),
            path: Some(match target {
                Target::Doc(id) => doc_route(route_base_path, id),
                Target::Href(href) => href.clone(),
            }),
            collapsed: None,
            children: Vec::new(),
        },
        NavigationEntry::Category {
            label,
            items,
            collapsed,
        } => NavItem {
            title: label.clone(),
            path: None,
            collapsed: *collapsed,
            children: items
                .iter()
                .map(|child| build_nav_item(child, route_base_path))
                .collect(),
        },
    }
}
