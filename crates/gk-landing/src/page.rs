//! Landing page structure.

use gk_config::SiteConfig;
use serde::Serialize;

use crate::LandingError;
use crate::feature::FeatureDescriptor;

const GET_STARTED_ROUTE: &str = "/getting-started";
const INSTALLATION_ROUTE: &str = "/installation";
const FEATURES_HEADING: &str = "Key Features";
const CALL_TO_ACTION_HEADING: &str = "Ready to Start Testing?";

/// Site metadata the landing page needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub tagline: String,
    /// Meta description.
    pub description: String,
    /// `<html lang>` value.
    pub lang: String,
    /// External source repository.
    pub repository_url: String,
    /// Optional recognition badge as `(label, url)`.
    pub recognition: Option<(String, String)>,
}

impl SiteMetadata {
    /// Extract landing metadata from the site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::MissingRepositoryUrl`] when `landing.repository_url`
    /// is not set.
    pub fn from_config(config: &SiteConfig) -> Result<Self, LandingError> {
        let landing = config.landing();
        let repository_url = landing
            .repository_url
            .clone()
            .ok_or(LandingError::MissingRepositoryUrl)?;
        let recognition = landing.recognition.as_ref().and_then(|link| {
            link.target()
                .map(|target| (link.label.clone(), target.as_str().to_owned()))
        });
        Ok(Self {
            title: config.title().to_owned(),
            tagline: config.tagline().to_owned(),
            description: landing.description.clone(),
            lang: config.i18n().default_locale.clone(),
            repository_url,
            recognition,
        })
    }
}

/// Visual weight of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    Primary,
    Secondary,
    Plain,
}

/// Link on the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    /// Route or URL.
    pub to: String,
    pub style: LinkStyle,
    /// Opens in a new tab.
    pub external: bool,
}

/// Hero header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub tagline: String,
    pub call_to_action: Link,
}

/// One feature card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

/// Feature grid section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureGrid {
    pub heading: String,
    /// Cards in input order.
    pub cards: Vec<FeatureCard>,
}

/// Closing call-to-action section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub heading: String,
    /// Installation guide.
    pub primary: Link,
    /// External repository.
    pub secondary: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition: Option<Link>,
}

/// Complete landing page: header, feature grid, call to action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageStructure {
    /// Value of `<title>`.
    pub document_title: String,
    pub description: String,
    pub lang: String,
    pub header: Header,
    pub features: FeatureGrid,
    pub call_to_action: CallToAction,
}

impl PageStructure {
    /// Every link on the page with a dotted location, in display order.
    #[must_use]
    pub fn links(&self) -> Vec<(String, &Link)> {
        let mut links = vec![
            (
                "landing.header.call_to_action".to_owned(),
                &self.header.call_to_action,
            ),
            (
                "landing.call_to_action.primary".to_owned(),
                &self.call_to_action.primary,
            ),
            (
                "landing.call_to_action.secondary".to_owned(),
                &self.call_to_action.secondary,
            ),
        ];
        if let Some(recognition) = &self.call_to_action.recognition {
            links.push(("landing.call_to_action.recognition".to_owned(), recognition));
        }
        links
    }
}

/// Build the landing page from site metadata and a feature list.
///
/// Pure and deterministic: the same inputs always give an equal structure.
/// An empty feature list gives an empty grid.
#[must_use]
pub fn render(metadata: &SiteMetadata, features: &[FeatureDescriptor]) -> PageStructure {
    let document_title = if metadata.tagline.is_empty() {
        metadata.title.clone()
    } else {
        format!("{} - {}", metadata.title, metadata.tagline)
    };

    PageStructure {
        document_title,
        description: metadata.description.clone(),
        lang: metadata.lang.clone(),
        header: Header {
            title: metadata.title.clone(),
            tagline: metadata.tagline.clone(),
            call_to_action: internal("Get Started", GET_STARTED_ROUTE, LinkStyle::Primary),
        },
        features: FeatureGrid {
            heading: FEATURES_HEADING.to_owned(),
            cards: features
                .iter()
                .map(|f| FeatureCard {
                    title: f.title.clone(),
                    description: f.description.clone(),
                })
                .collect(),
        },
        call_to_action: CallToAction {
            heading: CALL_TO_ACTION_HEADING.to_owned(),
            primary: internal("Installation Guide", INSTALLATION_ROUTE, LinkStyle::Primary),
            secondary: Link {
                label: "GitHub Repository".to_owned(),
                to: metadata.repository_url.clone(),
                style: LinkStyle::Secondary,
                external: false,
            },
            recognition: metadata.recognition.as_ref().map(|(label, url)| Link {
                label: label.clone(),
                to: url.clone(),
                style: LinkStyle::Plain,
                external: true,
            }),
        },
    }
}

fn internal(label: &str, to: &str, style: LinkStyle) -> Link {
    Link {
        label: label.to_owned(),
        to: to.to_owned(),
        style,
        external: false,
    }
}
