//! Capability surface consumed by the reference resolver

use crate::{ClientError, FileAttachment, Item, ItemOverview, Vault};
use async_trait::async_trait;

/// Read-only surface of an authenticated 1Password client.
///
/// Groups the three capability families a reference resolver consumes:
/// secret resolution, vault listing, and item access (list, get, file read).
/// All operations are read-only and fetch fresh data per call, so
/// implementations are safe to share across concurrent resolutions.
#[async_trait]
pub trait OnePasswordApi: Send + Sync {
    /// Resolve a secret reference directly to its text value.
    ///
    /// The service trims the returned value; callers must not trim again.
    async fn resolve_secret(&self, reference: &str) -> Result<String, ClientError>;

    /// List all vaults visible to the credential, in service listing order.
    async fn list_vaults(&self) -> Result<Vec<Vault>, ClientError>;

    /// List the items of a vault, in service listing order.
    async fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>, ClientError>;

    /// Fetch full item details, including the file attachment list.
    async fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item, ClientError>;

    /// Read the content bytes of a file attachment.
    async fn read_file(
        &self,
        vault_id: &str,
        item_id: &str,
        file: &FileAttachment,
    ) -> Result<Vec<u8>, ClientError>;
}
