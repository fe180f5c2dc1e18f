//! Sidebar entries and their declarative file form.

use serde::Deserialize;

/// Where a sidebar link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Documentation page id (e.g., `interactions/element-actions`).
    Doc(String),
    /// External or absolute URL.
    Href(String),
}

impl Target {
    /// Target string regardless of kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Doc(s) | Self::Href(s) => s,
        }
    }
}

/// Node in a sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub enum NavigationEntry {
    /// Direct link to a document or URL.
    Link { label: String, target: Target },
    /// Named group of further entries.
    Category {
        label: String,
        items: Vec<NavigationEntry>,
        /// Initial collapsed state; `None` leaves it to the generator.
        collapsed: Option<bool>,
    },
}

impl NavigationEntry {
    /// Link to a document with an explicit label.
    #[must_use]
    pub fn doc(id: &str, label: &str) -> Self {
        Self::Link {
            label: label.to_owned(),
            target: Target::Doc(id.to_owned()),
        }
    }

    /// Link to a document, labelled after its id.
    #[must_use]
    pub fn doc_id(id: &str) -> Self {
        Self::doc(id, &label_from_id(id))
    }

    /// Link to a URL.
    #[must_use]
    pub fn href(href: &str, label: &str) -> Self {
        Self::Link {
            label: label.to_owned(),
            target: Target::Href(href.to_owned()),
        }
    }

    /// Category with default collapse behavior.
    #[must_use]
    pub fn category(label: &str, items: Vec<NavigationEntry>) -> Self {
        Self::Category {
            label: label.to_owned(),
            items,
            collapsed: None,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Category { label, .. } => label,
        }
    }

    /// Children of a category; empty for links.
    #[must_use]
    pub fn children(&self) -> &[NavigationEntry] {
        match self {
            Self::Link { .. } => &[],
            Self::Category { items, .. } => items,
        }
    }

    /// True for [`NavigationEntry::Link`].
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}

/// Derive a display label from a document id.
///
/// Uses the last path segment (or the directory for `index` documents) and
/// title-cases its words: `interactions/wait-actions` → `Wait Actions`.
#[must_use]
pub fn label_from_id(id: &str) -> String {
    let mut segments = id.trim_matches('/').rsplit('/');
    let last = segments.next().unwrap_or_default();
    let name = if last == "index" {
        segments.next().unwrap_or(last)
    } else {
        last
    };

    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Entry as written in `sidebars.toml`: a bare doc id or a `type`-tagged table.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Shorthand(String),
    Tagged(TaggedEntry),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedEntry {
    Doc {
        #[serde(default)]
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Link {
        #[serde(default)]
        label: String,
        #[serde(default)]
        href: String,
    },
    Category {
        #[serde(default)]
        label: String,
        #[serde(default)]
        items: Vec<RawEntry>,
        #[serde(default)]
        collapsed: Option<bool>,
    },
}

impl From<RawEntry> for NavigationEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Shorthand(id) => Self::doc_id(&id),
            RawEntry::Tagged(TaggedEntry::Doc { id, label }) => {
                let label = label.unwrap_or_else(|| label_from_id(&id));
                Self::Link {
                    label,
                    target: Target::Doc(id),
                }
            }
            RawEntry::Tagged(TaggedEntry::Link { label, href }) => Self::Link {
                label,
                target: Target::Href(href),
            },
            RawEntry::Tagged(TaggedEntry::Category {
                label,
                items,
                collapsed,
            }) => Self::Category {
                label,
                items: items.into_iter().map(Self::from).collect(),
                collapsed,
            },
        }
    }
}
