//! Feature cards shown on the landing page.

use serde::Serialize;

use crate::LandingError;

/// Title and description rendered as one feature card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub title: String,
    pub description: String,
}

impl FeatureDescriptor {
    #[must_use]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }

    /// Require both strings to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::EmptyFeatureField`] naming the card index and field.
    pub fn validate(&self, index: usize) -> Result<(), LandingError> {
        for (field, value) in [("title", &self.title), ("description", &self.description)] {
            if value.trim().is_empty() {
                return Err(LandingError::EmptyFeatureField { index, field });
            }
        }
        Ok(())
    }
}

/// Validate every descriptor in order.
///
/// # Errors
///
/// Returns the first [`LandingError::EmptyFeatureField`].
pub fn validate_features(features: &[FeatureDescriptor]) -> Result<(), LandingError> {
    features
        .iter()
        .enumerate()
        .try_for_each(|(i, feature)| feature.validate(i))
}

/// Feature list of the user guide home page.
#[must_use]
pub fn default_features() -> Vec<FeatureDescriptor> {
    [
        (
            "Web & Mobile Testing",
            "Automate testing for web applications, mobile apps, and responsive websites with unified API and cross-platform capabilities.",
        ),
        (
            "API Testing",
            "Simplify API testing with built-in support for RESTful services, JSON validation, and response verification.",
        ),
        (
            "Database Testing",
            "Test SQL and NoSQL databases including MySQL, MongoDB, SQL Server, Oracle, PostgreSQL, Redis, and more.",
        ),
        (
            "Notification System",
            "Automated email and Slack notifications for test results with rich reporting, failure alerts, and team collaboration.",
        ),
        (
            "Utility Libraries",
            "Leverage comprehensive utilities for data generation, file handling, assertions, and system integrations.",
        ),
        (
            "BDD & Reporting",
            "Choose between BDD testing with Cucumber or traditional TestNG with detailed Allure reporting.",
        ),
        (
            "CI/CD Integration",
            "Seamlessly integrate with popular CI/CD tools including Jenkins, GitHub Actions, and GitLab.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| FeatureDescriptor::new(title, description))
    .collect()
}
