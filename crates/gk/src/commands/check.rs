//! `gk check` command implementation.

use clap::Args;
use gk_config::{CliSettings, OnBrokenLinks};
use gk_landing::{SiteMetadata, default_features, render, validate_features};
use gk_links::{LinkChecker, Severity};

use super::{SiteArgs, landing_references};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Fail on broken links regardless of `on_broken_links`.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if either file fails to load or validate, or if broken
    /// links are found under the `throw` policy.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            on_broken_links: self.strict.then_some(OnBrokenLinks::Throw),
            ..CliSettings::default()
        };
        let site = self.site.load(settings)?;
        output.info(&format!(
            "Configuration: {} ({})",
            site.config.title(),
            site.config.site_url()
        ));
        output.info(&format!("Sidebars: {}", site.sidebars.len()));

        let features = default_features();
        validate_features(&features)?;

        let mut checker = LinkChecker::new(&site.config, &site.sidebars);
        match SiteMetadata::from_config(&site.config) {
            Ok(metadata) => {
                let page = render(&metadata, &features);
                checker = checker.with_references(landing_references(&page));
            }
            Err(err) => output.warning(&format!("Skipping landing page links: {err}")),
        }

        let report = checker.check()?;
        for diagnostic in report.diagnostics() {
            match diagnostic.severity {
                Severity::Info => output.info(&diagnostic.to_string()),
                Severity::Warning => output.warning(&diagnostic.to_string()),
            }
        }

        if report.is_clean() {
            output.success(&format!(
                "All links resolve ({} routes)",
                checker.routes().len()
            ));
        } else {
            output.warning(&format!(
                "Check finished with {} diagnostic(s)",
                report.diagnostics().len()
            ));
        }
        Ok(())
    }
}
