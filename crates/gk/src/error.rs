//! CLI error types.

use gk_config::ConfigError;
use gk_landing::LandingError;
use gk_links::BrokenLinksError;
use gk_sidebar::{MalformedTreeError, SidebarError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Malformed(#[from] MalformedTreeError),

    #[error("{0}")]
    BrokenLinks(#[from] BrokenLinksError),

    #[error("{0}")]
    Landing(#[from] LandingError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown sidebar \"{name}\" (available: {available})")]
    UnknownSidebar { name: String, available: String },
}
