//! Environment variable expansion for `site.toml` string values.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_no_pattern_is_unchanged() {
        let result = expand_env("/docs/", "base_url").unwrap();
        assert_eq!(result, "/docs/");
    }

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("GK_TEST_BASE_URL", "/guide/");
        }
        let result = expand_env("${GK_TEST_BASE_URL}", "base_url").unwrap();
        assert_eq!(result, "/guide/");
        unsafe {
            std::env::remove_var("GK_TEST_BASE_URL");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("GK_TEST_UNSET_ORG");
        }
        let result = expand_env("${GK_TEST_UNSET_ORG:-acme}", "organization_name").unwrap();
        assert_eq!(result, "acme");
    }

    #[test]
    fn test_expand_unset_var_names_field() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("GK_TEST_MISSING_URL");
        }
        let err = expand_env("${GK_TEST_MISSING_URL}", "url").unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "url");
                assert!(message.contains("GK_TEST_MISSING_URL"));
            }
            other => panic!("Expected EnvVar error, got {other:?}"),
        }
    }
}
