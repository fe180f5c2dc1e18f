//! Route resolution and broken link diagnostics for guidekit.
//!
//! Broken links are reported through a diagnostics channel ([`Report`])
//! that is separate from the error channel. Only the `throw` policy turns
//! them into a [`BrokenLinksError`].
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use gk_config::SiteConfig;
//! use gk_links::LinkChecker;
//! use gk_sidebar::Sidebars;
//!
//! let config = SiteConfig::load(Some(Path::new("site/site.toml")), None)?;
//! let sidebars = Sidebars::load(&config.sidebar_file())?;
//! let report = LinkChecker::new(&config, &sidebars).check()?;
//! for diagnostic in report.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod diagnostic;
mod routes;

pub use checker::{LinkChecker, Reference};
pub use diagnostic::{BrokenLinksError, Diagnostic, DiagnosticKind, Report, Severity};
pub use routes::{RouteSet, is_external, normalize_route};
