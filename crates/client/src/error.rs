//! Error types for the 1Password client

use thiserror::Error;

/// Error types for client construction and SDK invocations
#[derive(Debug, Error)]
pub enum ClientError {
    /// No service account token from configuration or environment
    #[error(
        "service account token is missing: set it in the client configuration \
         or via the OP_SERVICE_ACCOUNT_TOKEN environment variable"
    )]
    MissingCredential,

    /// Error reported by the 1Password SDK core for an invocation.
    ///
    /// The display form is the upstream message, verbatim. Callers match on
    /// it to discriminate SDK error conditions.
    #[error("{message}")]
    Api {
        /// Message as reported by the SDK core
        message: String,
    },

    /// WASM runtime or plugin-level failure
    #[error("1Password SDK core failure: {message}")]
    Runtime {
        /// Description of the underlying failure
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_both_sources() {
        let msg = ClientError::MissingCredential.to_string();
        assert!(msg.contains("configuration"));
        assert!(msg.contains("OP_SERVICE_ACCOUNT_TOKEN"));
    }

    #[test]
    fn test_api_error_displays_upstream_message_verbatim() {
        let err = ClientError::Api {
            message: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    fn test_runtime_error_is_prefixed() {
        let err = ClientError::Runtime {
            message: "failed to acquire shared core lock".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SDK core failure"));
        assert!(msg.contains("failed to acquire shared core lock"));
    }

    #[test]
    fn test_error_debug() {
        let err = ClientError::MissingCredential;
        let debug = format!("{err:?}");
        assert!(debug.contains("MissingCredential"));
    }
}
