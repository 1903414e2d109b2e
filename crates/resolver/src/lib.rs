//! Secret reference resolution for opref
//!
//! Resolves 1Password secret references (`op://vault/item/field`) to their
//! values for consumption by infrastructure-as-code tooling. Text references
//! resolve in a single call against the SDK; references naming a file
//! attachment fall back to a manual vault → item → attachment walk, because
//! the direct resolve call does not support binary content, and return the
//! bytes base64-encoded.
//!
//! ```ignore
//! use opref_client::{Client, ClientConfig};
//! use opref_resolver::ReferenceResolver;
//!
//! let client = Client::connect(&ClientConfig::new())?;
//! let resolver = ReferenceResolver::new(&client);
//! let value = resolver.resolve("op://Engineering/db-creds/password").await?;
//! ```

mod reference;
mod resolver;
mod value;

pub use resolver::ReferenceResolver;
pub use value::ResolvedValue;

use opref_client::ClientError;
use thiserror::Error;

/// Error types for reference resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Direct resolution failed with an error other than the file-content
    /// condition.
    ///
    /// The display form is the upstream message, preserved verbatim. No
    /// fallback is attempted for these failures.
    #[error("{message}")]
    Resolution {
        /// Message as reported by the secret service
        message: String,
    },

    /// A file reference did not decompose into vault, item, and file names
    #[error("malformed secret reference '{reference}': expected op://<vault>/<item>/<file>")]
    MalformedReference {
        /// The offending reference string
        reference: String,
    },

    /// Vault, item, or file lookup found no match
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// Entity kind that was searched: "vault", "item", or "file"
        kind: &'static str,
        /// Name that had no exact match in listing order
        name: String,
    },

    /// Client failure during the fallback walk
    #[error(transparent)]
    Client(#[from] ClientError),
}
