use std::fmt;

use crate::error::{DemoError, Result};

/// Bearer token read from the environment at runtime
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Read the token from `var`. An unset or blank variable is an error.
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(Credential(value.trim().to_string())),
            _ => Err(DemoError::CredentialMissing(var.to_string())),
        }
    }

    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable() {
        let result = Credential::from_env("COMPLETION_DEMOS_TEST_UNSET_KEY");
        match result {
            Err(DemoError::CredentialMissing(var)) => {
                assert_eq!(var, "COMPLETION_DEMOS_TEST_UNSET_KEY")
            }
            other => panic!("expected CredentialMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_variable_is_missing() {
        std::env::set_var("COMPLETION_DEMOS_TEST_BLANK_KEY", "   ");
        let result = Credential::from_env("COMPLETION_DEMOS_TEST_BLANK_KEY");
        assert!(matches!(result, Err(DemoError::CredentialMissing(_))));
    }

    #[test]
    fn test_reads_and_redacts() {
        std::env::set_var("COMPLETION_DEMOS_TEST_SET_KEY", "sk-test-123");
        let credential = Credential::from_env("COMPLETION_DEMOS_TEST_SET_KEY").unwrap();
        assert_eq!(credential.expose(), "sk-test-123");
        assert!(!format!("{credential:?}").contains("sk-test-123"));
    }
}
