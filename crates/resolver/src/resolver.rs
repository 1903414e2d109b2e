//! Reference resolution over an authenticated client

use crate::reference::FileReference;
use crate::{ResolveError, ResolvedValue};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use opref_client::{ClientError, OnePasswordApi};

/// Exact message the SDK core reports when a reference points at a file
/// attachment, whose content the direct resolve call cannot return.
const FILE_CONTENT_MESSAGE: &str = "error resolving secret reference: unable to retrieve \
                                    file content, currently only text files are supported";

/// Whether a direct-resolution failure means the reference points at a file.
///
/// The SDK reports this condition only through its message text today; if a
/// structured error code becomes available, this predicate is the single
/// place to switch over.
fn is_file_content_error(err: &ClientError) -> bool {
    matches!(err, ClientError::Api { message } if message == FILE_CONTENT_MESSAGE)
}

/// Resolves secret references against an authenticated client.
///
/// The resolver borrows the client for its lifetime and keeps no state
/// between calls; every resolution fetches fresh data from the service.
pub struct ReferenceResolver<'a, C: OnePasswordApi + ?Sized> {
    client: &'a C,
}

impl<'a, C: OnePasswordApi + ?Sized> ReferenceResolver<'a, C> {
    /// Create a resolver over the given client.
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Resolve a secret reference to its value.
    ///
    /// Text references resolve in a single direct call. References pointing
    /// at file attachments cannot be resolved directly; those fall back to a
    /// vault → item → attachment walk and return the content base64-encoded.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Resolution`] when the direct call fails for any
    ///   reason other than the file-content condition; the upstream message
    ///   is preserved verbatim and no fallback is attempted.
    /// - [`ResolveError::MalformedReference`] when the fallback is entered
    ///   with a reference that does not name exactly a vault, an item, and a
    ///   file.
    /// - [`ResolveError::NotFound`] when the vault, item, or file lookup
    ///   scan finds no match.
    /// - [`ResolveError::Client`] when a service call inside the fallback
    ///   walk fails.
    pub async fn resolve(&self, reference: &str) -> Result<ResolvedValue, ResolveError> {
        match self.client.resolve_secret(reference).await {
            Ok(value) => Ok(ResolvedValue::Secret(value)),
            Err(err) if is_file_content_error(&err) => {
                tracing::debug!(reference, "reference points at a file, walking vault hierarchy");
                self.resolve_file_content(reference).await
            }
            Err(err) => Err(ResolveError::Resolution {
                message: err.to_string(),
            }),
        }
    }

    /// Resolve a file reference part by part: vault name to vault id, item
    /// name to item id, then file name to content bytes.
    async fn resolve_file_content(&self, reference: &str) -> Result<ResolvedValue, ResolveError> {
        let parts = FileReference::parse(reference)?;

        let vault_id = self.find_vault_id(parts.vault).await?;
        let item_id = self.find_item_id(&vault_id, parts.item).await?;
        let bytes = self.read_file_bytes(&vault_id, &item_id, parts.file).await?;

        Ok(ResolvedValue::FileContent(
            STANDARD.encode(bytes).trim().to_string(),
        ))
    }

    /// Resolve a vault name to its id.
    ///
    /// Titles are not unique upstream; the first vault in listing order with
    /// an exactly matching title wins.
    async fn find_vault_id(&self, vault_name: &str) -> Result<String, ResolveError> {
        let vaults = self.client.list_vaults().await?;
        vaults
            .into_iter()
            .find(|vault| vault.title == vault_name)
            .map(|vault| vault.id)
            .ok_or_else(|| ResolveError::NotFound {
                kind: "vault",
                name: vault_name.to_string(),
            })
    }

    /// Resolve an item name to its id within the given vault, first exact
    /// title match in listing order winning.
    async fn find_item_id(&self, vault_id: &str, item_name: &str) -> Result<String, ResolveError> {
        let items = self.client.list_items(vault_id).await?;
        items
            .into_iter()
            .find(|item| item.title == item_name)
            .map(|item| item.id)
            .ok_or_else(|| ResolveError::NotFound {
                kind: "item",
                name: item_name.to_string(),
            })
    }

    /// Fetch the content bytes of the first attachment matching the file
    /// name on the given item.
    async fn read_file_bytes(
        &self,
        vault_id: &str,
        item_id: &str,
        file_name: &str,
    ) -> Result<Vec<u8>, ResolveError> {
        let item = self.client.get_item(vault_id, item_id).await?;
        let file = item
            .files
            .iter()
            .find(|file| file.name == file_name)
            .ok_or_else(|| ResolveError::NotFound {
                kind: "file",
                name: file_name.to_string(),
            })?;

        Ok(self.client.read_file(vault_id, item_id, file).await?)
    }
}
