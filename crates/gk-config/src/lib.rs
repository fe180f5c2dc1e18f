//! Site configuration for guidekit.
//!
//! Parses `site.toml` with serde and provides auto-discovery of the file in
//! parent directories. The loaded [`SiteConfig`] is validated once and is
//! read-only afterwards: every field is exposed through an accessor and there
//! are no setters. Consumers receive it by reference.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `base_url`
//! - `organization_name`

mod expand;
mod links;
mod theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use links::{FooterGroup, LinkItem, LinkTarget, NavbarItem, Position};
pub use theme::{
    ColorMode, ColorModeConfig, FooterConfig, FooterStyle, Logo, NavbarConfig, PrismConfig,
    SidebarDisplayConfig, ThemeConfig,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "site.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override base URL.
    pub base_url: Option<String>,
    /// Override broken link policy.
    pub on_broken_links: Option<OnBrokenLinks>,
}

/// What to do when a link points at an unknown route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnBrokenLinks {
    /// Drop the finding.
    Ignore,
    /// Report at info level.
    Log,
    /// Report as a warning and continue.
    #[default]
    Warn,
    /// Fail the build.
    Throw,
}

/// `[i18n]` section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used for `<html lang>`.
    pub default_locale: String,
    /// All locales built.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

/// `[docs]` section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Route prefix under which docs are served (`/` serves docs at the root).
    pub route_base_path: String,
    /// Sidebar file, relative to the config file.
    pub sidebar_path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            route_base_path: "/".to_owned(),
            sidebar_path: "sidebars.toml".to_owned(),
        }
    }
}

/// `[landing]` section: home page content that is not site metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Meta description of the home page.
    pub description: String,
    /// Source repository linked from the call-to-action section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    /// Optional recognition badge link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition: Option<LinkItem>,
}

/// Site configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    title: String,
    #[serde(default)]
    tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    favicon: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    base_url: String,
    #[serde(default)]
    organization_name: String,
    #[serde(default)]
    project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trailing_slash: Option<bool>,
    #[serde(default)]
    on_broken_links: OnBrokenLinks,
    #[serde(default)]
    on_broken_markdown_links: OnBrokenLinks,
    #[serde(default)]
    i18n: I18nConfig,
    #[serde(default)]
    docs: DocsConfig,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    navbar: NavbarConfig,
    #[serde(default)]
    footer: FooterConfig,
    #[serde(default)]
    landing: LandingConfig,

    #[serde(skip)]
    config_path: Option<PathBuf>,
}

/// A configuration field or entry that failed validation.
///
/// `location` is a dotted path into the configuration, for example
/// `navbar.items[2].items[0]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid configuration at {location}{}: {reason}", describe_label(.label.as_deref()))]
pub struct InvalidConfigError {
    location: String,
    label: Option<String>,
    reason: String,
}

impl InvalidConfigError {
    pub(crate) fn new(location: &str, label: Option<&str>, reason: &str) -> Self {
        Self {
            location: location.to_owned(),
            label: label.filter(|l| !l.is_empty()).map(str::to_owned),
            reason: reason.to_owned(),
        }
    }

    /// Dotted path of the offending field.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Label of the offending entry, when it has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

fn describe_label(label: Option<&str>) -> String {
    label.map(|l| format!(" (\"{l}\")")).unwrap_or_default()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No `site.toml` in the current directory or any parent.
    #[error("No site.toml found in current directory or its parents")]
    NotDiscovered,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error(transparent)]
    Invalid(#[from] InvalidConfigError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`base_url`").
        field: String,
        /// Error message (e.g., "${`BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), InvalidConfigError> {
    if value.trim().is_empty() {
        return Err(InvalidConfigError::new(field, None, "cannot be empty"));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), InvalidConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(InvalidConfigError::new(
            field,
            None,
            "must start with http:// or https://",
        ));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `site.toml` in current directory and parents.
    ///
    /// CLI settings are applied before validation, so an override can both
    /// fix and break a configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, parsing fails or the result
    /// does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_config(&cwd))
                .ok_or(ConfigError::NotDiscovered)?,
        };

        tracing::debug!(path = %path.display(), "Loading site configuration");
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path);

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and expand without validating.
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(policy) = settings.on_broken_links {
            self.on_broken_links = policy;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.url = expand::expand_env(&self.url, "url")?;
        self.base_url = expand::expand_env(&self.base_url, "base_url")?;
        self.organization_name =
            expand::expand_env(&self.organization_name, "organization_name")?;
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`SiteConfig::load`] and [`SiteConfig::from_toml`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigError`] naming the first offending field or entry.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        require_non_empty(&self.title, "title")?;
        require_http_url(&self.url, "url")?;
        self.validate_base_url()?;
        self.validate_docs()?;
        self.validate_i18n()?;
        self.validate_navbar()?;
        self.validate_footer()?;
        self.validate_landing()?;
        Ok(())
    }

    fn validate_base_url(&self) -> Result<(), InvalidConfigError> {
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(InvalidConfigError::new(
                "base_url",
                None,
                &format!("must start and end with '/', got {:?}", self.base_url),
            ));
        }
        if self.base_url.chars().any(char::is_whitespace) {
            return Err(InvalidConfigError::new(
                "base_url",
                None,
                "cannot contain whitespace",
            ));
        }
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), InvalidConfigError> {
        if !self.docs.route_base_path.starts_with('/') {
            return Err(InvalidConfigError::new(
                "docs.route_base_path",
                None,
                "must start with '/'",
            ));
        }
        require_non_empty(&self.docs.sidebar_path, "docs.sidebar_path")
    }

    fn validate_i18n(&self) -> Result<(), InvalidConfigError> {
        require_non_empty(&self.i18n.default_locale, "i18n.default_locale")?;
        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(InvalidConfigError::new(
                "i18n.default_locale",
                Some(&self.i18n.default_locale),
                "must be listed in i18n.locales",
            ));
        }
        Ok(())
    }

    fn validate_navbar(&self) -> Result<(), InvalidConfigError> {
        for (i, item) in self.navbar.items.iter().enumerate() {
            item.validate(&format!("navbar.items[{i}]"))?;
        }
        Ok(())
    }

    fn validate_footer(&self) -> Result<(), InvalidConfigError> {
        for (i, group) in self.footer.links.iter().enumerate() {
            group.validate(&format!("footer.links[{i}]"))?;
        }
        Ok(())
    }

    fn validate_landing(&self) -> Result<(), InvalidConfigError> {
        if let Some(url) = &self.landing.repository_url {
            require_http_url(url, "landing.repository_url")?;
        }
        if let Some(recognition) = &self.landing.recognition {
            recognition.validate("landing.recognition")?;
        }
        Ok(())
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// One-line site tagline.
    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Favicon path.
    #[must_use]
    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    /// Production origin (scheme and host).
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path prefix the site is served under. Starts and ends with `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full address of the site root: origin plus base URL.
    #[must_use]
    pub fn site_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.base_url)
    }

    /// Organization (owner) identifier.
    #[must_use]
    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    /// Project (repository) identifier.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Trailing slash policy for generated URLs; `None` keeps them as authored.
    #[must_use]
    pub fn trailing_slash(&self) -> Option<bool> {
        self.trailing_slash
    }

    /// Policy for links to unknown routes.
    #[must_use]
    pub fn on_broken_links(&self) -> OnBrokenLinks {
        self.on_broken_links
    }

    /// Policy for markdown links to unknown documents.
    #[must_use]
    pub fn on_broken_markdown_links(&self) -> OnBrokenLinks {
        self.on_broken_markdown_links
    }

    #[must_use]
    pub fn i18n(&self) -> &I18nConfig {
        &self.i18n
    }

    #[must_use]
    pub fn docs(&self) -> &DocsConfig {
        &self.docs
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    #[must_use]
    pub fn navbar(&self) -> &NavbarConfig {
        &self.navbar
    }

    #[must_use]
    pub fn footer(&self) -> &FooterConfig {
        &self.footer
    }

    #[must_use]
    pub fn landing(&self) -> &LandingConfig {
        &self.landing
    }

    /// Path to the config file, when loaded from disk.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Sidebar file location, resolved against the config file directory.
    #[must_use]
    pub fn sidebar_file(&self) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new("."));
        base.join(&self.docs.sidebar_path)
    }
}
