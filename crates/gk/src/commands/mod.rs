//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use gk_config::{CliSettings, SiteConfig};
use gk_landing::PageStructure;
use gk_links::Reference;
use gk_sidebar::Sidebars;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use render::RenderArgs;

/// Options shared by every command that reads the site files.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to sidebars file (default: `docs.sidebar_path` from config).
    #[arg(short, long)]
    sidebars: Option<PathBuf>,

    /// Base URL (overrides config).
    #[arg(long, env = "GK_BASE_URL")]
    base_url: Option<String>,
}

/// Validated site inputs.
pub(crate) struct Site {
    pub config: SiteConfig,
    pub sidebars: Sidebars,
}

impl SiteArgs {
    /// Load and validate the configuration and its sidebars.
    ///
    /// `settings` is merged with the overrides given on the command line.
    pub(crate) fn load(&self, mut settings: CliSettings) -> Result<Site, CliError> {
        if settings.base_url.is_none() {
            settings.base_url.clone_from(&self.base_url);
        }
        let config = SiteConfig::load(self.config.as_deref(), Some(&settings))?;

        let sidebar_path = self
            .sidebars
            .clone()
            .unwrap_or_else(|| config.sidebar_file());
        let sidebars = Sidebars::load(&sidebar_path)?;
        sidebars.validate()?;

        tracing::info!(
            config = %config.config_path().map(|p| p.display().to_string()).unwrap_or_default(),
            sidebars = sidebars.len(),
            "Loaded site"
        );
        Ok(Site { config, sidebars })
    }
}

/// Landing page links as references for the link checker.
pub(crate) fn landing_references(page: &PageStructure) -> Vec<Reference> {
    page.links()
        .into_iter()
        .map(|(location, link)| Reference::new(&location, &link.label, &link.to))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use gk_config::OnBrokenLinks;
    use gk_landing::{SiteMetadata, default_features, render};
    use gk_links::LinkChecker;
    use pretty_assertions::assert_eq;

    use super::*;

    fn bundled_config() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site/site.toml")
    }

    fn bundled_site() -> Site {
        SiteArgs {
            config: Some(bundled_config()),
            sidebars: None,
            base_url: None,
        }
        .load(CliSettings::default())
        .unwrap()
    }

    #[test]
    fn test_bundled_site_validates() {
        let site = bundled_site();
        assert_eq!(site.config.title(), "Ellithium User Guide");
        assert_eq!(site.config.base_url(), "/ellithium.github.io/");
        assert_eq!(site.config.on_broken_links(), OnBrokenLinks::Warn);
        assert_eq!(
            site.config.footer().copyright_text(2025).as_deref(),
            Some("Copyright © 2025 Ellithium. Built with Docusaurus.")
        );

        let tree = site.sidebars.get("tutorialSidebar").unwrap();
        assert_eq!(tree.entries().len(), 8);
        assert!(tree.duplicate_labels().is_empty());
    }

    #[test]
    fn test_bundled_site_link_check() {
        let site = bundled_site();
        let metadata = SiteMetadata::from_config(&site.config).unwrap();
        let page = render(&metadata, &default_features());

        let report = LinkChecker::new(&site.config, &site.sidebars)
            .with_references(landing_references(&page))
            .check()
            .unwrap();

        let broken: Vec<_> = report
            .broken_links()
            .map(|d| (d.location.as_str(), d.label.as_str()))
            .collect();
        assert_eq!(
            broken,
            vec![
                ("navbar.items[2].items[1]", "Interactions"),
                ("footer.links[1].items[1]", "Interactions"),
            ]
        );
    }

    #[test]
    fn test_strict_policy_fails_bundled_site() {
        let site = SiteArgs {
            config: Some(bundled_config()),
            sidebars: None,
            base_url: None,
        }
        .load(CliSettings {
            on_broken_links: Some(OnBrokenLinks::Throw),
            ..CliSettings::default()
        })
        .unwrap();
        let err = LinkChecker::new(&site.config, &site.sidebars)
            .check()
            .unwrap_err();
        assert_eq!(err.broken().len(), 2);
    }

    #[test]
    fn test_base_url_override() {
        let site = SiteArgs {
            config: Some(bundled_config()),
            sidebars: None,
            base_url: Some("/docs/".to_owned()),
        }
        .load(CliSettings::default())
        .unwrap();
        assert_eq!(site.config.base_url(), "/docs/");
    }

    #[test]
    fn test_malformed_sidebars_abort_load() {
        let dir = tempfile::tempdir().unwrap();
        let sidebars = dir.path().join("sidebars.toml");
        std::fs::write(
            &sidebars,
            "[[docs]]\ntype = \"category\"\nlabel = \"Empty\"\nitems = []\n",
        )
        .unwrap();

        let result = SiteArgs {
            config: Some(bundled_config()),
            sidebars: Some(sidebars),
            base_url: None,
        }
        .load(CliSettings::default());
        let Err(CliError::Malformed(err)) = result else {
            panic!("expected malformed tree error");
        };
        assert_eq!(err.location(), "docs[0]");
    }
}
