//! `gk render` command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use gk_config::CliSettings;
use gk_landing::{
    FeatureDescriptor, PageStructure, SiteMetadata, default_features, render, to_html,
    validate_features,
};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the page structure as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load, the landing section is
    /// incomplete or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load(CliSettings::default())?;

        let metadata = SiteMetadata::from_config(&site.config)?;
        let features = default_features();
        let page = build_page(&metadata, &features)?;
        let content = if self.json {
            let mut json = serde_json::to_string_pretty(&page)?;
            json.push('\n');
            json
        } else {
            to_html(&page)
        };

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                tracing::info!(path = %path.display(), bytes = content.len(), "Wrote landing page");
                output.success(&format!("Landing page written to {}", path.display()));
            }
            None => io::stdout().lock().write_all(content.as_bytes())?,
        }
        Ok(())
    }
}

fn build_page(
    metadata: &SiteMetadata,
    features: &[FeatureDescriptor],
) -> Result<PageStructure, CliError> {
    validate_features(features)?;
    Ok(render(metadata, features))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> SiteMetadata {
        SiteMetadata {
            title: "Guide".to_owned(),
            tagline: "Tagline".to_owned(),
            description: String::new(),
            lang: "en".to_owned(),
            repository_url: "https://github.com/example/project".to_owned(),
            recognition: None,
        }
    }

    #[test]
    fn test_build_page_rejects_empty_feature() {
        let features = [FeatureDescriptor::new("Title", "")];
        let result = build_page(&metadata(), &features);
        assert!(matches!(result, Err(CliError::Landing(_))));
    }

    #[test]
    fn test_build_page_with_default_features() {
        let page = build_page(&metadata(), &default_features()).unwrap();
        assert_eq!(page.features.cards.len(), 7);
    }
}
