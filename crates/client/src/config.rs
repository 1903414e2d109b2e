//! Client configuration and credential selection

use crate::ClientError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable consulted when no token is configured explicitly
pub const OP_SERVICE_ACCOUNT_TOKEN_VAR: &str = "OP_SERVICE_ACCOUNT_TOKEN";

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Configuration for constructing an authenticated 1Password client.
///
/// The service account token can be set explicitly or sourced from the
/// `OP_SERVICE_ACCOUNT_TOKEN` environment variable, preferring the explicit
/// value when it is non-empty. The environment lookup is injectable so tests
/// can supply a fake environment without touching process-wide state.
pub struct ClientConfig {
    service_account_token: Option<SecretString>,
    env_lookup: EnvLookup,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Create a configuration with no explicit token and the process
    /// environment as the fallback source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service_account_token: None,
            env_lookup: Box::new(|var| std::env::var(var).ok()),
        }
    }

    /// Set the service account token explicitly.
    #[must_use]
    pub fn with_service_account_token(mut self, token: impl Into<String>) -> Self {
        self.service_account_token = Some(SecretString::from(token.into()));
        self
    }

    /// Replace the environment lookup used for the token fallback.
    #[must_use]
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Select the effective service account token.
    ///
    /// An explicitly configured token wins when it is non-empty; otherwise
    /// the environment fallback is consulted. A token that is empty after
    /// trimming counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] when neither source yields
    /// a non-empty token.
    pub fn service_account_token(&self) -> Result<SecretString, ClientError> {
        if let Some(token) = &self.service_account_token
            && !token.expose_secret().trim().is_empty()
        {
            return Ok(token.clone());
        }

        match (self.env_lookup)(OP_SERVICE_ACCOUNT_TOKEN_VAR) {
            Some(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
            _ => Err(ClientError::MissingCredential),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field(
                "service_account_token",
                &self.service_account_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_explicit_token_preferred_over_environment() {
        let config = ClientConfig::new()
            .with_service_account_token("ops_from_config")
            .with_env_lookup(|_| Some("ops_from_env".to_string()));

        let token = config.service_account_token().unwrap();
        assert_eq!(token.expose_secret(), "ops_from_config");
    }

    #[test]
    fn test_environment_fallback_when_no_explicit_token() {
        let config = ClientConfig::new().with_env_lookup(|var| {
            assert_eq!(var, OP_SERVICE_ACCOUNT_TOKEN_VAR);
            Some("ops_from_env".to_string())
        });

        let token = config.service_account_token().unwrap();
        assert_eq!(token.expose_secret(), "ops_from_env");
    }

    #[test]
    fn test_empty_explicit_token_falls_back_to_environment() {
        let config = ClientConfig::new()
            .with_service_account_token("")
            .with_env_lookup(|_| Some("ops_from_env".to_string()));

        let token = config.service_account_token().unwrap();
        assert_eq!(token.expose_secret(), "ops_from_env");
    }

    #[test]
    fn test_whitespace_token_counts_as_absent() {
        let config = ClientConfig::new()
            .with_service_account_token("   ")
            .with_env_lookup(empty_env);

        assert!(matches!(
            config.service_account_token(),
            Err(ClientError::MissingCredential)
        ));
    }

    #[test]
    fn test_missing_credential_when_both_sources_empty() {
        let config = ClientConfig::new().with_env_lookup(empty_env);

        assert!(matches!(
            config.service_account_token(),
            Err(ClientError::MissingCredential)
        ));
    }

    #[test]
    fn test_empty_environment_value_counts_as_absent() {
        let config = ClientConfig::new().with_env_lookup(|_| Some(String::new()));

        assert!(matches!(
            config.service_account_token(),
            Err(ClientError::MissingCredential)
        ));
    }

    #[test]
    fn test_default_lookup_reads_process_environment() {
        temp_env::with_var(OP_SERVICE_ACCOUNT_TOKEN_VAR, Some("ops_process_env"), || {
            let config = ClientConfig::new();
            let token = config.service_account_token().unwrap();
            assert_eq!(token.expose_secret(), "ops_process_env");
        });
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new().with_service_account_token("ops_super_secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("ops_super_secret"));
    }
}
