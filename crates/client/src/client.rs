//! Authenticated 1Password client backed by the SDK core

use crate::core::SharedCore;
use crate::{
    ClientConfig, ClientError, FileAttachment, Item, ItemOverview, OnePasswordApi, Vault,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

/// Authenticated handle to the 1Password service.
///
/// Construct with [`Client::connect`]. The handle is read-only and safe to
/// share across concurrent resolutions; SDK calls are serialized by the
/// shared WASM core internally. The underlying SDK client is released when
/// the handle is dropped.
pub struct Client {
    client_id: u64,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl Client {
    /// Connect to 1Password using the given configuration.
    ///
    /// Selects the service account token (explicit configuration first, then
    /// the `OP_SERVICE_ACCOUNT_TOKEN` environment fallback) and initializes
    /// an SDK client bound to it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] before any SDK activity
    /// when no token is available, or [`ClientError::Runtime`] when the SDK
    /// core cannot be loaded or the client cannot be initialized.
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let token = config.service_account_token()?;

        let core_mutex = SharedCore::get_or_init()?;
        let mut guard = core_mutex.lock().map_err(|_| ClientError::Runtime {
            message: "failed to acquire shared core lock".to_string(),
        })?;
        let core = guard.as_mut().ok_or_else(|| ClientError::Runtime {
            message: "shared core not initialized".to_string(),
        })?;

        let client_id = core.init_client(token.expose_secret())?;
        tracing::debug!(client_id, "1Password SDK client initialized");

        Ok(Self { client_id })
    }

    fn invoke(&self, method: &str, params: serde_json::Value) -> Result<String, ClientError> {
        let core_mutex = SharedCore::get_or_init()?;
        let mut guard = core_mutex.lock().map_err(|_| ClientError::Runtime {
            message: "failed to acquire shared core lock".to_string(),
        })?;
        let core = guard.as_mut().ok_or_else(|| ClientError::Runtime {
            message: "shared core not initialized".to_string(),
        })?;

        core.invoke(self.client_id, method, params)
    }

    fn invoke_json<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, ClientError> {
        let raw = self.invoke(method, params)?;
        serde_json::from_str(&raw).map_err(|e| ClientError::Runtime {
            message: format!("failed to parse {method} response: {e}"),
        })
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        if let Ok(core_mutex) = SharedCore::get_or_init()
            && let Ok(mut guard) = core_mutex.lock()
            && let Some(core) = guard.as_mut()
        {
            core.release_client(self.client_id);
        }
    }
}

#[async_trait]
impl OnePasswordApi for Client {
    async fn resolve_secret(&self, reference: &str) -> Result<String, ClientError> {
        tracing::trace!(reference, "resolving secret reference directly");
        self.invoke_json(
            "SecretsResolve",
            serde_json::json!({ "secret_reference": reference }),
        )
    }

    async fn list_vaults(&self) -> Result<Vec<Vault>, ClientError> {
        self.invoke_json("VaultsList", serde_json::json!({}))
    }

    async fn list_items(&self, vault_id: &str) -> Result<Vec<ItemOverview>, ClientError> {
        self.invoke_json("ItemsList", serde_json::json!({ "vault_id": vault_id }))
    }

    async fn get_item(&self, vault_id: &str, item_id: &str) -> Result<Item, ClientError> {
        self.invoke_json(
            "ItemsGet",
            serde_json::json!({ "vault_id": vault_id, "item_id": item_id }),
        )
    }

    async fn read_file(
        &self,
        vault_id: &str,
        item_id: &str,
        file: &FileAttachment,
    ) -> Result<Vec<u8>, ClientError> {
        tracing::trace!(file = %file.name, "reading file attachment content");
        self.invoke_json(
            "ItemsFilesRead",
            serde_json::json!({
                "vault_id": vault_id,
                "item_id": item_id,
                "attributes": file,
            }),
        )
    }
}
