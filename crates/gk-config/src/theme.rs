//! Theme options, navbar and footer chrome.

use serde::{Deserialize, Serialize};

use crate::links::{FooterGroup, NavbarItem};

/// Color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Color mode options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorModeConfig {
    /// Initial color mode.
    pub default_mode: ColorMode,
    /// Hide the light/dark switch.
    pub disable_switch: bool,
    /// Follow the `prefers-color-scheme` media query.
    pub respect_prefers_color_scheme: bool,
}

/// Docs sidebar display options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SidebarDisplayConfig {
    /// Allow collapsing the whole sidebar.
    pub hideable: bool,
    /// Collapse sibling categories when one is expanded.
    pub auto_collapse_categories: bool,
}

/// Code highlighting themes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Theme for light mode.
    pub theme: String,
    /// Theme for dark mode.
    pub dark_theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: "dracula".to_owned(),
        }
    }
}

/// `[theme]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Social card image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub color_mode: ColorModeConfig,
    pub sidebar: SidebarDisplayConfig,
    pub prism: PrismConfig,
}

/// Navbar logo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Logo {
    /// Alternative text.
    pub alt: String,
    /// Image path relative to the static directory.
    pub src: String,
}

/// `[navbar]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Title shown next to the logo.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Items in display order.
    pub items: Vec<NavbarItem>,
}

/// Footer color style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// `[footer]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,
    /// Link groups in display order.
    pub links: Vec<FooterGroup>,
    /// Copyright template. `{year}` is replaced by [`FooterConfig::copyright_text`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl FooterConfig {
    /// Copyright line for the given year.
    ///
    /// The caller supplies the year.
    #[must_use]
    pub fn copyright_text(&self, year: i32) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|template| template.replace("{year}", &year.to_string()))
    }
}
