//! Landing page renderer for the home route.
//!
//! [`render`] turns [`SiteMetadata`] and a feature list into a
//! [`PageStructure`]: a hero header, a feature grid and a closing call to
//! action. [`to_html`] serializes that structure as escaped HTML5.
//!
//! # Example
//!
//! ```
//! use gk_landing::{SiteMetadata, default_features, render, to_html};
//!
//! let metadata = SiteMetadata {
//!     title: "Guide".to_owned(),
//!     tagline: "Test automation".to_owned(),
//!     description: String::new(),
//!     lang: "en".to_owned(),
//!     repository_url: "https://github.com/example/project".to_owned(),
//!     recognition: None,
//! };
//! let page = render(&metadata, &default_features());
//! assert_eq!(page.features.cards.len(), 7);
//! assert!(to_html(&page).contains("<h1 class=\"hero__title\">Guide</h1>"));
//! ```

mod feature;
mod html;
mod page;

pub use feature::{FeatureDescriptor, default_features, validate_features};
pub use html::{escape_html, to_html};
pub use page::{
    CallToAction, FeatureCard, FeatureGrid, Header, Link, LinkStyle, PageStructure, SiteMetadata,
    render,
};

/// Landing page input errors.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error("Landing page needs `landing.repository_url` in the site configuration")]
    MissingRepositoryUrl,

    #[error("Feature card {index} has an empty {field}")]
    EmptyFeatureField { index: usize, field: &'static str },
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(PageStructure: Send, Sync);
    assert_impl_all!(SiteMetadata: Send, Sync);

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LandingError::MissingRepositoryUrl.to_string(),
            "Landing page needs `landing.repository_url` in the site configuration"
        );
    }
}
