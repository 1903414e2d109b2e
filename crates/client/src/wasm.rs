//! WASM loading utilities for the 1Password SDK core
//!
//! The SDK core is the WASM module the official 1Password SDKs embed. It is
//! looked up in the cache directory, with an environment override for
//! packaged builds.

use crate::ClientError;
use std::path::PathBuf;

/// Environment override for the SDK core WASM location (used in packaged
/// builds where the cache directory is not writable).
pub const WASM_PATH_VAR: &str = "OPREF_WASM_PATH";

/// Get the path to the 1Password SDK core WASM.
///
/// Checks the `OPREF_WASM_PATH` environment variable first, then falls back
/// to the cache directory for local development.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be determined and no env
/// var is set.
pub fn sdk_core_path() -> Result<PathBuf, ClientError> {
    if let Ok(path) = std::env::var(WASM_PATH_VAR) {
        return Ok(PathBuf::from(path));
    }

    let cache_dir = dirs::cache_dir().ok_or_else(|| ClientError::Runtime {
        message: "could not determine cache directory".to_string(),
    })?;

    Ok(cache_dir
        .join("opref")
        .join("wasm")
        .join("onepassword-core.wasm"))
}

/// Check if the 1Password SDK core WASM is available
#[must_use]
pub fn sdk_core_available() -> bool {
    sdk_core_path().map(|p| p.exists()).unwrap_or(false)
}

/// Load the 1Password SDK core WASM from disk.
///
/// # Errors
///
/// Returns an error if:
/// - The cache directory cannot be determined
/// - The WASM file does not exist at the resolved path
/// - The file cannot be read
pub fn load_sdk_core() -> Result<Vec<u8>, ClientError> {
    let path = sdk_core_path()?;

    if !path.exists() {
        return Err(ClientError::Runtime {
            message: format!(
                "1Password SDK core WASM not found. Place the SDK's core.wasm at the \
                 path below or point {WASM_PATH_VAR} at it.\nExpected at: {}",
                path.display()
            ),
        });
    }

    std::fs::read(&path).map_err(|e| ClientError::Runtime {
        message: format!("failed to read SDK core WASM: {e}"),
    })
}
