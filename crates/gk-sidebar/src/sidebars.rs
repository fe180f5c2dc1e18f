//! Named sidebar collection loaded from `sidebars.toml`.
//!
//! # File Format
//!
//! Each top-level key is a sidebar name holding an array of entries. An entry
//! is either a bare document id or a table tagged with `type`:
//!
//! ```toml
//! [[tutorialSidebar]]
//! type = "doc"
//! id = "intro"
//! label = "Overview"
//!
//! [[tutorialSidebar]]
//! type = "category"
//! label = "Utilities"
//! items = ["utilities/index", "utilities/json-helper"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::entry::NavigationEntry;
use crate::error::{MalformedTreeError, SidebarError};
use crate::tree::SidebarTree;

/// All sidebars of a site, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    trees: Vec<SidebarTree>,
}

impl Sidebars {
    /// Build from already constructed trees.
    #[must_use]
    pub fn new(trees: Vec<SidebarTree>) -> Self {
        Self { trees }
    }

    /// Parse sidebars from TOML content.
    ///
    /// Parsing does not validate. Call [`Sidebars::validate`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Parse`] for malformed TOML or unknown entry shapes.
    pub fn from_toml(content: &str) -> Result<Self, SidebarError> {
        let raw: BTreeMap<String, Vec<NavigationEntry>> = toml::from_str(content)?;
        let trees = raw
            .into_iter()
            .map(|(name, entries)| SidebarTree::new(&name, entries))
            .collect();
        Ok(Self { trees })
    }

    /// Load sidebars from a file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, unreadable or not valid TOML.
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        if !path.exists() {
            return Err(SidebarError::NotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "Loading sidebars");
        let content = std::fs::read_to_string(path)?;
        let sidebars = Self::from_toml(&content)?;
        tracing::debug!(count = sidebars.len(), "Loaded sidebars");
        Ok(sidebars)
    }

    /// Validate every tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`MalformedTreeError`] found.
    pub fn validate(&self) -> Result<(), MalformedTreeError> {
        self.trees.iter().try_for_each(SidebarTree::validate)
    }

    /// Sidebar by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SidebarTree> {
        self.trees.iter().find(|tree| tree.name() == name)
    }

    /// Sidebar names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.iter().map(SidebarTree::name)
    }

    /// All trees.
    pub fn iter(&self) -> std::slice::Iter<'_, SidebarTree> {
        self.trees.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a SidebarTree;
    type IntoIter = std::slice::Iter<'a, SidebarTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.iter()
    }
}
