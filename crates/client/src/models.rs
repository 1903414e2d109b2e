//! Wire models for 1Password SDK core responses

use serde::{Deserialize, Serialize};

/// A vault visible to the authenticated service account.
///
/// Vault titles are not unique upstream; callers that look vaults up by
/// title must define their own tie-break.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    /// Unique vault identifier
    pub id: String,
    /// Human-readable vault title
    pub title: String,
}

/// Summary of an item as returned by the item list call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemOverview {
    /// Unique item identifier within its vault
    pub id: String,
    /// Human-readable item title
    pub title: String,
    /// Identifier of the vault the item belongs to
    #[serde(default)]
    pub vault_id: String,
}

/// Full item details, including the file attachment list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier within its vault
    pub id: String,
    /// Human-readable item title
    pub title: String,
    /// Identifier of the vault the item belongs to
    #[serde(default)]
    pub vault_id: String,
    /// Files attached to the item, in service listing order
    #[serde(default)]
    pub files: Vec<FileAttachment>,
}

/// A file attached to an item.
///
/// Content bytes are not carried here; they are fetched on demand through
/// the dedicated file read call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    /// Attachment name as shown in 1Password; not unique within an item
    pub name: String,
    /// Size in bytes as reported by the service
    #[serde(default)]
    pub size: u64,
    /// Location of the content within the item, used by the read call
    #[serde(default)]
    pub content_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_deserializes_camel_case() {
        let json = r#"{"id": "vault-id-1", "title": "Engineering"}"#;
        let vault: Vault = serde_json::from_str(json).unwrap();
        assert_eq!(vault.id, "vault-id-1");
        assert_eq!(vault.title, "Engineering");
    }

    #[test]
    fn test_item_overview_vault_id_is_camel_case() {
        let json = r#"{"id": "item-1", "title": "db-creds", "vaultId": "vault-1"}"#;
        let item: ItemOverview = serde_json::from_str(json).unwrap();
        assert_eq!(item.vault_id, "vault-1");
    }

    #[test]
    fn test_item_without_files_defaults_to_empty_list() {
        let json = r#"{"id": "item-1", "title": "db-creds"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.files.is_empty());
        assert!(item.vault_id.is_empty());
    }

    #[test]
    fn test_item_with_files() {
        let json = r#"{
            "id": "item-1",
            "title": "tls-cert",
            "vaultId": "vault-1",
            "files": [
                {"name": "cert.pem", "size": 1234, "contentPath": "files/cert.pem"}
            ]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.files.len(), 1);
        assert_eq!(item.files[0].name, "cert.pem");
        assert_eq!(item.files[0].size, 1234);
        assert_eq!(item.files[0].content_path, "files/cert.pem");
    }

    #[test]
    fn test_file_attachment_serializes_content_path_camel_case() {
        let file = FileAttachment {
            name: "cert.pem".to_string(),
            size: 42,
            content_path: "files/cert.pem".to_string(),
        };
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"contentPath\""));
        assert!(!json.contains("content_path"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"id": "v", "title": "t", "createdAt": "2024-01-01T00:00:00Z"}"#;
        let vault: Vault = serde_json::from_str(json).unwrap();
        assert_eq!(vault.id, "v");
    }
}
