//! 1Password client for opref
//!
//! Builds an authenticated client against the 1Password SDK core (the WASM
//! module the official SDKs embed) and exposes the read-only capability
//! surface the reference resolver consumes: secret resolution, vault
//! listing, and item access including file attachments.
//!
//! Credentials come from an explicit [`ClientConfig`] token or from the
//! `OP_SERVICE_ACCOUNT_TOKEN` environment variable.

mod api;
mod client;
mod config;
mod core;
mod error;
mod models;
pub mod wasm;

pub use api::OnePasswordApi;
pub use client::Client;
pub use config::{ClientConfig, OP_SERVICE_ACCOUNT_TOKEN_VAR};
pub use error::ClientError;
pub use models::{FileAttachment, Item, ItemOverview, Vault};
