//! Navbar and footer link structures.
//!
//! Both the navbar and the footer are ordered sequences of link-like
//! entries. Labels and targets are deserialized leniently (missing values
//! become empty) so that [`SiteConfig::validate`](crate::SiteConfig::validate)
//! can report the offending entry by position instead of failing the parse.

use serde::{Deserialize, Serialize};

use crate::InvalidConfigError;

/// Resolved target of a link entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Site-internal route (`to`).
    Route(&'a str),
    /// External or absolute URL (`href`).
    Href(&'a str),
    /// Documentation page id.
    Doc(&'a str),
}

impl LinkTarget<'_> {
    /// Target string regardless of kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Route(s) | Self::Href(s) | Self::Doc(s) => s,
        }
    }
}

/// Horizontal placement of a navbar item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

/// Plain link with a label and either a `to` route or an `href` URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinkItem {
    /// Display label.
    pub label: String,
    /// Site-internal route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// External URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl LinkItem {
    /// Create a link to a site route.
    #[must_use]
    pub fn to(label: &str, to: &str) -> Self {
        Self {
            label: label.to_owned(),
            to: Some(to.to_owned()),
            href: None,
        }
    }

    /// Create a link to an external URL.
    #[must_use]
    pub fn href(label: &str, href: &str) -> Self {
        Self {
            label: label.to_owned(),
            to: None,
            href: Some(href.to_owned()),
        }
    }

    /// Resolved target. `to` wins over `href`; empty values do not count.
    #[must_use]
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        resolve_target(self.to.as_deref(), self.href.as_deref())
    }

    pub(crate) fn validate(&self, location: &str) -> Result<(), InvalidConfigError> {
        require_label(&self.label, location)?;
        if self.target().is_none() {
            return Err(unresolvable(location, &self.label));
        }
        Ok(())
    }
}

/// Entry in the navbar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavbarItem {
    /// Link to a documentation page by id.
    Doc {
        #[serde(default)]
        doc_id: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        position: Position,
    },
    /// Plain link.
    Link {
        #[serde(default)]
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        #[serde(default)]
        position: Position,
    },
    /// Labelled menu of links.
    Dropdown {
        #[serde(default)]
        label: String,
        #[serde(default)]
        position: Position,
        #[serde(default)]
        items: Vec<LinkItem>,
    },
}

impl NavbarItem {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Doc { label, .. } | Self::Link { label, .. } | Self::Dropdown { label, .. } => {
                label
            }
        }
    }

    /// Horizontal placement.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Doc { position, .. }
            | Self::Link { position, .. }
            | Self::Dropdown { position, .. } => *position,
        }
    }

    /// Target of a single-link item. Dropdowns have none.
    #[must_use]
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        match self {
            Self::Doc { doc_id, .. } => non_empty(Some(doc_id.as_str())).map(LinkTarget::Doc),
            Self::Link { to, href, .. } => resolve_target(to.as_deref(), href.as_deref()),
            Self::Dropdown { .. } => None,
        }
    }

    pub(crate) fn validate(&self, location: &str) -> Result<(), InvalidConfigError> {
        match self {
            Self::Doc { doc_id, label, .. } => {
                require_label(label, location)?;
                if doc_id.trim().is_empty() {
                    return Err(InvalidConfigError::new(
                        location,
                        Some(label),
                        "requires a `doc_id`",
                    ));
                }
                Ok(())
            }
            Self::Link { label, .. } => {
                require_label(label, location)?;
                if self.target().is_none() {
                    return Err(unresolvable(location, label));
                }
                Ok(())
            }
            Self::Dropdown { label, items, .. } => {
                require_label(label, location)?;
                if items.is_empty() {
                    return Err(InvalidConfigError::new(
                        location,
                        Some(label),
                        "dropdown has no items",
                    ));
                }
                for (i, item) in items.iter().enumerate() {
                    item.validate(&format!("{location}.items[{i}]"))?;
                }
                Ok(())
            }
        }
    }
}

/// Titled group of footer links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FooterGroup {
    /// Group heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<LinkItem>,
}

impl FooterGroup {
    pub(crate) fn validate(&self, location: &str) -> Result<(), InvalidConfigError> {
        if self.title.trim().is_empty() {
            return Err(InvalidConfigError::new(
                location,
                None,
                "footer group requires a title",
            ));
        }
        if self.items.is_empty() {
            return Err(InvalidConfigError::new(
                location,
                Some(&self.title),
                "footer group has no items",
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&format!("{location}.items[{i}]"))?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn resolve_target<'a>(to: Option<&'a str>, href: Option<&'a str>) -> Option<LinkTarget<'a>> {
    non_empty(to)
        .map(LinkTarget::Route)
        .or_else(|| non_empty(href).map(LinkTarget::Href))
}

fn unresolvable(location: &str, label: &str) -> InvalidConfigError {
    InvalidConfigError::new(location, Some(label), "requires a `to` or `href` target")
}

fn require_label(label: &str, location: &str) -> Result<(), InvalidConfigError> {
    if label.trim().is_empty() {
        return Err(InvalidConfigError::new(location, None, "requires a label"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Items {
        items: Vec<NavbarItem>,
    }

    #[test]
    fn test_parse_navbar_item_kinds() {
        let toml = r#"
[[items]]
type = "doc"
doc_id = "intro"
label = "Overview"

[[items]]
type = "link"
label = "GitHub"
href = "https://github.com/example/project"
position = "right"

[[items]]
type = "dropdown"
label = "Testing"
items = [{ label = "Web Testing", to = "/web-testing" }]
"#;
        let parsed: Items = toml::from_str(toml).unwrap();
        assert_eq!(parsed.items.len(), 3);
        assert_eq!(parsed.items[0].target(), Some(LinkTarget::Doc("intro")));
        assert_eq!(parsed.items[1].position(), Position::Right);
        assert_eq!(
            parsed.items[1].target(),
            Some(LinkTarget::Href("https://github.com/example/project"))
        );
        assert_eq!(parsed.items[2].label(), "Testing");
        assert_eq!(parsed.items[2].target(), None);
    }

    #[test]
    fn test_link_item_prefers_to_over_href() {
        let link = LinkItem {
            label: "Both".to_owned(),
            to: Some("/page".to_owned()),
            href: Some("https://example.com".to_owned()),
        };
        assert_eq!(link.target(), Some(LinkTarget::Route("/page")));
    }

    #[test]
    fn test_link_item_empty_target_is_unresolvable() {
        let link = LinkItem {
            label: "Nowhere".to_owned(),
            to: Some("  ".to_owned()),
            href: None,
        };
        let err = link.validate("footer.links[0].items[1]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("footer.links[0].items[1]"));
        assert!(msg.contains("Nowhere"));
    }

    #[test]
    fn test_dropdown_without_items_is_invalid() {
        let item = NavbarItem::Dropdown {
            label: "Empty".to_owned(),
            position: Position::Left,
            items: Vec::new(),
        };
        let err = item.validate("navbar.items[3]").unwrap_err();
        assert!(err.to_string().contains("no items"));
    }

    #[test]
    fn test_dropdown_child_location_in_error() {
        let item = NavbarItem::Dropdown {
            label: "Testing".to_owned(),
            position: Position::Left,
            items: vec![LinkItem::to("Ok", "/ok"), LinkItem::default()],
        };
        let err = item.validate("navbar.items[2]").unwrap_err();
        assert_eq!(err.location(), "navbar.items[2].items[1]");
    }
}
