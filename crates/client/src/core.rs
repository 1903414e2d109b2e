//! 1Password SDK core wrapper
//!
//! Thread-safe wrapper around the SDK core WASM module. The WASM runtime is
//! single-threaded, so access is serialized behind a mutex, following the
//! same pattern as the official 1Password SDKs.

use crate::{ClientError, wasm};
use extism::{Manifest, Plugin, Wasm};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global shared core instance, lazily initialized
static SHARED_CORE: Lazy<Mutex<Option<SharedCore>>> = Lazy::new(|| Mutex::new(None));

/// Integration identity reported to the SDK core at client initialization
const INTEGRATION_NAME: &str = "opref";

pub(crate) struct SharedCore {
    plugin: Plugin,
}

impl SharedCore {
    /// Get or initialize the shared core.
    ///
    /// On first call, loads the WASM from disk and initializes the plugin.
    /// Subsequent calls return the cached instance.
    pub(crate) fn get_or_init() -> Result<&'static Mutex<Option<SharedCore>>, ClientError> {
        let mut guard = SHARED_CORE.lock().map_err(|_| ClientError::Runtime {
            message: "failed to acquire shared core lock".to_string(),
        })?;

        if guard.is_none() {
            let wasm_bytes = wasm::load_sdk_core()?;

            let manifest = Manifest::new([Wasm::data(wasm_bytes)]).with_allowed_hosts(
                ["*.1password.com", "*.1password.ca", "*.1password.eu"]
                    .into_iter()
                    .map(String::from),
            );

            let plugin =
                Plugin::new(&manifest, [], true).map_err(|e| ClientError::Runtime {
                    message: format!("failed to initialize WASM plugin: {e}"),
                })?;

            *guard = Some(SharedCore { plugin });
        }

        // Drop guard before returning static reference
        drop(guard);
        Ok(&SHARED_CORE)
    }

    /// Initialize a new SDK client bound to the given service account token.
    ///
    /// Returns the numeric client id used for subsequent `invoke` calls.
    pub(crate) fn init_client(&mut self, token: &str) -> Result<u64, ClientError> {
        let config = serde_json::json!({
            "serviceAccountToken": token,
            "programmingLanguage": "Rust",
            "sdkVersion": env!("CARGO_PKG_VERSION"),
            "integrationName": INTEGRATION_NAME,
            "integrationVersion": env!("CARGO_PKG_VERSION"),
        });

        let result = self
            .plugin
            .call::<_, String>("init_client", config.to_string())
            .map_err(|e| ClientError::Runtime {
                message: format!("init_client call failed: {e}"),
            })?;

        let response: serde_json::Value =
            serde_json::from_str(&result).map_err(|e| ClientError::Runtime {
                message: format!("failed to parse init_client response: {e}"),
            })?;

        if let Some(message) = error_message(&response) {
            return Err(ClientError::Api { message });
        }

        // The core returns either a bare id or an object carrying it
        response
            .as_u64()
            .or_else(|| response.get("clientId").and_then(serde_json::Value::as_u64))
            .ok_or_else(|| ClientError::Runtime {
                message: "no client id in init_client response".to_string(),
            })
    }

    /// Invoke a method on an initialized SDK client.
    ///
    /// Returns the raw response payload; callers deserialize it according to
    /// the invoked method. Error payloads are surfaced as
    /// [`ClientError::Api`] with the upstream message preserved verbatim.
    pub(crate) fn invoke(
        &mut self,
        client_id: u64,
        method: &str,
        params: serde_json::Value,
    ) -> Result<String, ClientError> {
        let request = serde_json::json!({
            "clientId": client_id,
            "invocation": {
                "methodName": method,
                "parameters": params,
            }
        });

        let result = self
            .plugin
            .call::<_, String>("invoke", request.to_string())
            .map_err(|e| ClientError::Runtime {
                message: format!("{method} invocation failed: {e}"),
            })?;

        let response: serde_json::Value =
            serde_json::from_str(&result).map_err(|e| ClientError::Runtime {
                message: format!("failed to parse {method} response: {e}"),
            })?;

        if let Some(message) = error_message(&response) {
            return Err(ClientError::Api { message });
        }

        Ok(result)
    }

    /// Release an SDK client when it is no longer needed.
    pub(crate) fn release_client(&mut self, client_id: u64) {
        let _ = self
            .plugin
            .call::<_, String>("release_client", client_id.to_string());
    }
}

/// Extract the upstream error message from an SDK core response, if any.
///
/// The core reports errors as an `error` member that is either an object
/// with a `message` field or a bare string. The message is returned exactly
/// as the core produced it.
fn error_message(response: &serde_json::Value) -> Option<String> {
    let error = response.get("error")?;
    if error.is_null() {
        return None;
    }

    if let Some(message) = error.get("message").and_then(serde_json::Value::as_str) {
        return Some(message.to_string());
    }
    if let Some(message) = error.as_str() {
        return Some(message.to_string());
    }
    Some(error.to_string())
}
